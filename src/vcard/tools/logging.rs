use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::vcard::tools::error::{Result, ToolError};

/// Installs a compact console subscriber. `RUST_LOG` overrides the default
/// `info` level; `RUST_LOG=debug` also reports every skipped row.
///
/// Pipeline spans are recorded at `debug`, so the default output is one plain
/// status line per event. Colours are only used on a terminal.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}
