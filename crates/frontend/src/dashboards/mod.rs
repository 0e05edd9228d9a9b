pub mod d400_overview;
pub mod d401_analysis;
pub mod recent;

pub use d400_overview::OverviewDashboard;
pub use d401_analysis::AnalysisDashboard;
