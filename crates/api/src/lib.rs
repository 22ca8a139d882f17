pub mod error;
pub mod explain;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use explain::ExplanationTable;
pub use models::*;
pub use source::{BoxError, DumpSource};
