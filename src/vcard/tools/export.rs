use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info, instrument};

use crate::vcard::tools::config::ExportConfig;
use crate::vcard::tools::error::Result;
use crate::vcard::tools::io::{excel_read, vcf_write};
use crate::vcard::tools::model::{ExportReport, Sheet};

/// Loads the configured spreadsheet and writes its unique contacts as vCards.
///
/// Loading happens before the output file is opened, so a missing or broken
/// spreadsheet leaves any existing output untouched.
#[instrument(
    level = "debug",
    skip_all,
    fields(input = %config.input_path.display(), output = %config.output_path.display())
)]
pub fn run(config: &ExportConfig) -> Result<ExportReport> {
    let sheet = excel_read::read_sheet(&config.input_path)?;
    export_cards(&sheet, config)
}

/// Creates or overwrites the configured output file with the cards of `sheet`.
#[instrument(level = "debug", skip_all, fields(output = %config.output_path.display()))]
pub fn export_cards(sheet: &Sheet, config: &ExportConfig) -> Result<ExportReport> {
    info!("Writing contacts to '{}'...", config.output_path.display());
    let mut writer = BufWriter::new(File::create(&config.output_path)?);
    let report = vcf_write::write_cards(sheet, config, &mut writer)?;
    writer.flush()?;

    debug!(
        rows = report.rows,
        blank = report.skipped_blank,
        no_digits = report.skipped_no_digits,
        duplicate = report.skipped_duplicate,
        "rows skipped"
    );
    info!(
        "A total of {} unique contacts have been written to '{}'.",
        report.written,
        config.output_path.display()
    );
    Ok(report)
}
