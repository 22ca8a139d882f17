pub mod analysis;
pub mod classify;
pub mod config;
pub mod dump;
pub mod error;
pub mod explain;
pub mod filter;
pub mod label;
pub mod logging;
pub mod render;
pub mod resolver;
pub mod walker;

pub use analysis::Analyzer;
pub use config::AnalysisConfig;
pub use error::{AstlensError, Result};
pub use render::{OutputFormat, RenderContext};
