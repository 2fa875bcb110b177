//! XLSX text extraction via calamine
//!
//! Non-empty cells are joined with spaces, one line per row, across all
//! worksheets.

use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::application::ports::ExtractionError;

/// Extract cell text from XLSX bytes
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(data.to_vec())).map_err(|e| ExtractionError::Xlsx(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut out = String::new();

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| ExtractionError::Xlsx(e.to_string()))?;

        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.to_string())
                .filter(|s| !s.is_empty())
                .collect();

            if !cells.is_empty() {
                out.push_str(&cells.join(" "));
                out.push('\n');
            }
        }
    }

    Ok(out)
}
