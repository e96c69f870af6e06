use chrono::{DateTime, NaiveDate};

#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Formats the upstream `date_echeance` for display.
/// `2024-05-10` -> `10/05/2024`, RFC 3339 -> `10/05/2024 14:00`, anything else unchanged.
pub fn format_valid_at(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}

// Browser local time; chrono's clock is not wired to JS here.
#[cfg(feature = "web")]
pub fn clock_now() -> String {
    let d = js_sys::Date::new_0();
    format!(
        "{}:{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32)
    )
}

#[cfg(not(feature = "web"))]
pub fn clock_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

pub fn format_concentration(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
