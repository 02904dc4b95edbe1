use std::fmt;

/// A worksheet reduced to text: one header row followed by data rows.
///
/// Every cell has already been coerced to a string. Cells the workbook does
/// not store read as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// 1-based spreadsheet row holding the headers.
    pub header_row: u32,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self {
            header_row: 1,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl Sheet {
    /// Position of the column whose header equals `name` exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Spreadsheet row number of the data row at `index` in [`Sheet::rows`].
    pub fn row_number(&self, index: usize) -> usize {
        self.header_row as usize + 1 + index
    }

    /// Number of data rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cell at `column` in `row`, or `""` when the column is absent or the row is
/// shorter than the header.
pub fn cell(row: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

/// Trimmed view of the three contact fields of one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub full_name: String,
    pub company: String,
    pub raw_phone: String,
}

impl ContactRow {
    pub fn new(full_name: &str, company: &str, raw_phone: &str) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            company: company.trim().to_string(),
            raw_phone: raw_phone.trim().to_string(),
        }
    }

    /// A row with neither a name nor a phone carries nothing worth exporting.
    pub fn is_blank(&self) -> bool {
        self.full_name.is_empty() && self.raw_phone.is_empty()
    }
}

/// A phone number reduced to its ASCII digits, in their original order.
///
/// This is the deduplication key of an export: no two cards share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleanedPhone(String);

impl CleanedPhone {
    /// Strips every character that is not a decimal digit. Returns `None` when
    /// nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CleanedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a row did not produce a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Both the name and the phone are empty.
    Blank,
    /// The phone contains no digits.
    NoDigits,
    /// An earlier row already produced a card for the same cleaned phone.
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "missing name and phone"),
            SkipReason::NoDigits => write!(f, "phone has no digits"),
            SkipReason::Duplicate => write!(f, "duplicate phone"),
        }
    }
}

/// Outcome of writing one sheet as vCards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Data rows examined.
    pub rows: usize,
    /// Cards written, one per unique cleaned phone.
    pub written: usize,
    pub skipped_blank: usize,
    pub skipped_no_digits: usize,
    pub skipped_duplicate: usize,
}

impl ExportReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Blank => self.skipped_blank += 1,
            SkipReason::NoDigits => self.skipped_no_digits += 1,
            SkipReason::Duplicate => self.skipped_duplicate += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_no_digits + self.skipped_duplicate
    }
}
