use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failure cases of a spreadsheet to vCard run.
///
/// Input-stage variants ([`ToolError::MissingInput`], [`ToolError::ExcelRead`],
/// [`ToolError::InvalidWorkbook`]) are raised before the output file is
/// touched. Rows that cannot become a card are never errors; they are counted
/// in the [`ExportReport`](crate::model::ExportReport) instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as creating or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("An error occurred while reading the Excel file: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when the workbook opens but holds nothing readable.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the configured input path does not exist.
    #[error("The input file '{}' was not found.", .0.display())]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    /// Returns `true` for failures that happen while loading the spreadsheet.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ToolError::MissingInput(_) | ToolError::ExcelRead(_) | ToolError::InvalidWorkbook(_)
        )
    }
}
