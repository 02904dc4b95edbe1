use std::collections::HashSet;
use std::io::Write;

use tracing::{debug, warn};

use crate::vcard::tools::card::ContactCard;
use crate::vcard::tools::config::ExportConfig;
use crate::vcard::tools::error::Result;
use crate::vcard::tools::model::{CleanedPhone, ContactRow, ExportReport, Sheet, SkipReason, cell};

/// Column positions of the three contact fields inside a [`Sheet`].
#[derive(Debug, Clone, Copy)]
struct ContactColumns {
    name: Option<usize>,
    company: Option<usize>,
    phone: Option<usize>,
}

impl ContactColumns {
    fn locate(sheet: &Sheet, config: &ExportConfig) -> Self {
        let lookup = |column: &str| {
            let index = sheet.column_index(column);
            if index.is_none() {
                warn!(column, "column not found in header, its values read as empty");
            }
            index
        };
        Self {
            name: lookup(&config.name_column),
            company: lookup(&config.company_column),
            phone: lookup(&config.phone_column),
        }
    }

    fn extract(&self, row: &[String]) -> ContactRow {
        ContactRow::new(
            cell(row, self.name),
            cell(row, self.company),
            cell(row, self.phone),
        )
    }
}

/// Writes one vCard per unique cleaned phone of `sheet` into `writer`.
///
/// Rows are visited in sheet order and the first row with a given phone wins.
/// Rows without a name and phone, rows whose phone has no digits, and repeats
/// of an earlier phone are skipped and only counted in the returned report.
pub fn write_cards<W: Write>(
    sheet: &Sheet,
    config: &ExportConfig,
    writer: &mut W,
) -> Result<ExportReport> {
    let columns = ContactColumns::locate(sheet, config);
    let mut seen: HashSet<CleanedPhone> = HashSet::new();
    let mut report = ExportReport {
        rows: sheet.len(),
        ..ExportReport::default()
    };

    for (index, row) in sheet.rows.iter().enumerate() {
        let contact = columns.extract(row);
        match accept(&contact, &seen) {
            Ok(phone) => {
                let card = ContactCard::new(&contact.full_name, &contact.company, &phone);
                write!(writer, "{card}")?;
                seen.insert(phone);
                report.written += 1;
            }
            Err(reason) => {
                debug!(row = sheet.row_number(index), %reason, "skipping row");
                report.record_skip(reason);
            }
        }
    }

    Ok(report)
}

fn accept(
    contact: &ContactRow,
    seen: &HashSet<CleanedPhone>,
) -> std::result::Result<CleanedPhone, SkipReason> {
    if contact.is_blank() {
        return Err(SkipReason::Blank);
    }
    let phone = CleanedPhone::parse(&contact.raw_phone).ok_or(SkipReason::NoDigits)?;
    if seen.contains(&phone) {
        return Err(SkipReason::Duplicate);
    }
    Ok(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[[&str; 3]]) -> Sheet {
        Sheet {
            headers: vec!["Name".into(), "Company".into(), "Phone".into()],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
            ..Sheet::default()
        }
    }

    fn config() -> ExportConfig {
        ExportConfig::default().with_columns("Name", "Company", "Phone")
    }

    fn render(sheet: &Sheet) -> (String, ExportReport) {
        let mut out = Vec::new();
        let report = write_cards(sheet, &config(), &mut out).expect("cards written");
        (String::from_utf8(out).expect("utf-8 output"), report)
    }

    #[test]
    fn first_occurrence_of_a_phone_wins() {
        let (text, report) = render(&sheet(&[
            ["Alice", "", "555-1234"],
            ["Bob", "", "5551234"],
        ]));
        assert!(text.contains("FN:Alice\n"));
        assert!(!text.contains("Bob"));
        assert_eq!(report.written, 1);
        assert_eq!(report.skipped_duplicate, 1);
    }

    #[test]
    fn rows_without_usable_phone_are_skipped() {
        let (text, report) = render(&sheet(&[
            ["  ", "Acme", "   "],
            ["Carol", "", "N/A"],
            ["Dave", "", "---"],
            ["Erin", "", ""],
        ]));
        assert!(text.is_empty());
        assert_eq!(report.rows, 4);
        assert_eq!(report.written, 0);
        assert_eq!(report.skipped_blank, 1);
        assert_eq!(report.skipped_no_digits, 3);
    }

    #[test]
    fn phone_without_name_still_produces_a_card() {
        let (text, report) = render(&sheet(&[["", "Acme", "+90 532 000 00 00"]]));
        assert_eq!(report.written, 1);
        assert!(text.contains("FN: (Acme)\n"));
        assert!(text.contains("TEL;TYPE=CELL:905320000000\n"));
    }

    #[test]
    fn missing_columns_read_as_empty() {
        let sheet = Sheet {
            headers: vec!["Name".into(), "Phone".into()],
            rows: vec![vec!["Frank".into(), "123".into()], vec!["Grace".into()]],
            ..Sheet::default()
        };
        let (text, report) = render(&sheet);
        assert_eq!(text.matches("BEGIN:VCARD").count(), 1);
        assert!(text.contains("FN:Frank\n"));
        assert_eq!(report.skipped_no_digits, 1);
    }
}
