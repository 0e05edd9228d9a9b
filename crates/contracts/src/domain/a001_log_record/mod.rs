pub mod dto;
pub mod level;
pub mod query;

pub use dto::{LogPage, LogRecord, LogRecordInput};
pub use level::LogLevel;
pub use query::LogQuery;
