use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{info, instrument};

use crate::vcard::tools::error::{Result, ToolError};
use crate::vcard::tools::model::Sheet;

/// Reads the first worksheet of an `.xlsx` workbook as text.
///
/// The first row of the used range is taken as the header. Every other row
/// becomes a data row with each cell coerced through [`cell_to_string`], so
/// empty cells read as `""`.
#[instrument(level = "debug", skip_all, fields(input = %path.display()))]
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    info!("Reading data from '{}'...", path.display());
    if !path.is_file() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_first_sheet(&mut workbook)?;
    let sheet = range_to_sheet(&range);

    info!("Successfully found {} rows to process.", sheet.len());
    Ok(sheet)
}

fn read_first_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no worksheets".into()))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn range_to_sheet(range: &Range<DataType>) -> Sheet {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(first_row) => first_row
            .iter()
            .map(|cell| cell_to_string(Some(cell)))
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .collect();

    let header_row = range.start().map(|(row, _)| row + 1).unwrap_or(1);
    Sheet {
        header_row,
        headers,
        rows,
    }
}

/// Coerces a spreadsheet cell to text.
///
/// Numbers stored as floats without a fractional part print as integers, so a
/// phone typed into a numeric cell keeps its digits.
pub fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_render_without_fraction() {
        assert_eq!(cell_to_string(Some(&DataType::Float(5551234567.0))), "5551234567");
        assert_eq!(cell_to_string(Some(&DataType::Int(42))), "42");
    }

    #[test]
    fn empty_cells_render_as_empty_string() {
        assert_eq!(cell_to_string(Some(&DataType::Empty)), "");
        assert_eq!(cell_to_string(None), "");
    }

    #[test]
    fn first_row_becomes_header() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), DataType::String("Name".into()));
        range.set_value((0, 1), DataType::String("Phone".into()));
        range.set_value((1, 0), DataType::String("Jane".into()));
        range.set_value((1, 1), DataType::Float(5551234.0));
        range.set_value((2, 0), DataType::String("John".into()));

        let sheet = range_to_sheet(&range);
        assert_eq!(sheet.headers, vec!["Name", "Phone"]);
        assert_eq!(sheet.header_row, 1);
        assert_eq!(
            sheet.rows,
            vec![
                vec!["Jane".to_string(), "5551234".to_string()],
                vec!["John".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn header_row_tracks_used_range_start() {
        let mut range = Range::new((2, 1), (4, 2));
        range.set_value((2, 1), DataType::String("Name".into()));
        range.set_value((2, 2), DataType::String("Phone".into()));
        range.set_value((3, 1), DataType::String("Jane".into()));
        range.set_value((4, 1), DataType::String("John".into()));

        let sheet = range_to_sheet(&range);
        assert_eq!(sheet.header_row, 3);
        assert_eq!(sheet.headers, vec!["Name", "Phone"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.row_number(1), 5);
    }
}
