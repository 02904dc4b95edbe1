use std::path::PathBuf;

/// Spreadsheet read when no other input is configured.
pub const DEFAULT_INPUT_FILE: &str = "phone_list.xlsx";
/// vCard file written when no other output is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "contacts.vcf";

/// Header of the column holding the contact's full name.
pub const DEFAULT_NAME_COLUMN: &str = "ADI SOYADI";
/// Header of the column holding the company name.
pub const DEFAULT_COMPANY_COLUMN: &str = "ŞİRKET ADI";
/// Header of the column holding the phone number.
pub const DEFAULT_PHONE_COLUMN: &str = "TELEFON NO";

/// Everything a run needs to know about its input and output.
///
/// The binary always runs with [`ExportConfig::default`]; the builder helpers
/// exist for library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Spreadsheet to read contacts from.
    pub input_path: PathBuf,
    /// vCard file to create or overwrite.
    pub output_path: PathBuf,
    /// Header naming the full-name column.
    pub name_column: String,
    /// Header naming the company column.
    pub company_column: String,
    /// Header naming the phone column.
    pub phone_column: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            company_column: DEFAULT_COMPANY_COLUMN.to_string(),
            phone_column: DEFAULT_PHONE_COLUMN.to_string(),
        }
    }
}

impl ExportConfig {
    /// Replaces the input spreadsheet path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Replaces the output vCard path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Replaces the name, company, and phone column headers.
    pub fn with_columns(
        mut self,
        name: impl Into<String>,
        company: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.name_column = name.into();
        self.company_column = company.into();
        self.phone_column = phone.into();
        self
    }
}
