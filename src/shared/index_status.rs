/// Colour and label shown for an Atmo index level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStatus {
    pub color: &'static str,
    pub label: &'static str,
}

/// Index levels 0 to 6, in order. Level 0 means the index is unavailable.
pub const INDEX_STATUSES: [IndexStatus; 7] = [
    IndexStatus { color: "#9CA3AF", label: "Indisponible" },
    IndexStatus { color: "#06D6A0", label: "Bon" },
    IndexStatus { color: "#1DD1A1", label: "Moyen" },
    IndexStatus { color: "#FFC048", label: "Dégradé" },
    IndexStatus { color: "#FF6B6B", label: "Mauvais" },
    IndexStatus { color: "#8B5CF6", label: "Très mauvais" },
    IndexStatus { color: "#6F46C5", label: "Extrêmement mauvais" },
];

/// Legend-only entry, it has no index of its own.
pub const EVENT_STATUS: IndexStatus = IndexStatus {
    color: INDEX_STATUSES[0].color,
    label: "Événement",
};

/// Looks up the status for `index`. Anything outside 0..=6, or no index at all,
/// maps to level 0.
pub fn status_for_index(index: Option<i32>) -> &'static IndexStatus {
    index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| INDEX_STATUSES.get(i))
        .unwrap_or(&INDEX_STATUSES[0])
}

/// Every legend row: the seven levels followed by the event entry.
pub fn legend_entries() -> impl Iterator<Item = &'static IndexStatus> {
    INDEX_STATUSES.iter().chain(std::iter::once(&EVENT_STATUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels() {
        let expected = [
            (0, "#9CA3AF", "Indisponible"),
            (1, "#06D6A0", "Bon"),
            (2, "#1DD1A1", "Moyen"),
            (3, "#FFC048", "Dégradé"),
            (4, "#FF6B6B", "Mauvais"),
            (5, "#8B5CF6", "Très mauvais"),
            (6, "#6F46C5", "Extrêmement mauvais"),
        ];
        for (i, color, label) in expected {
            let s = status_for_index(Some(i));
            assert_eq!(s.color, color, "color for {i}");
            assert_eq!(s.label, label, "label for {i}");
        }
    }

    #[test]
    fn unknown_levels_fall_back_to_unavailable() {
        for i in [None, Some(-1), Some(7), Some(42), Some(i32::MIN), Some(i32::MAX)] {
            assert_eq!(status_for_index(i), &INDEX_STATUSES[0], "index {i:?}");
        }
    }

    #[test]
    fn legend_has_event_entry_last() {
        let entries: Vec<_> = legend_entries().collect();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[7].label, "Événement");
        assert_eq!(entries[7].color, entries[0].color);
    }
}
