pub mod dashboard;
pub mod legend;
pub mod reading_view;

pub use dashboard::Dashboard;
pub use legend::Legend;
pub use reading_view::ReadingView;
