pub mod card;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod logging;
pub mod model;

pub use error::{Result, ToolError};
