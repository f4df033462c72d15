pub mod summary;
pub mod upcoming_sessions;

pub use summary::SummarySection;
pub use upcoming_sessions::UpcomingSessionsSection;
