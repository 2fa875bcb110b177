//! DOCX plan renderer via docx-rs

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::application::ports::{DocumentRenderer, RenderError};
use crate::domain::plan::{HeadingLevel, PlanBlock, PlanOutline, PlanTable};

/// DOCX content type
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Run sizes in half-points per heading level
const H1_SIZE: usize = 36;
const H2_SIZE: usize = 30;
const H3_SIZE: usize = 26;

/// Left indent for list items, in twentieths of a point
const LIST_INDENT: i32 = 360;

/// Renders a plan outline into a Word document
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }

    fn heading_paragraph(level: HeadingLevel, text: &str) -> Paragraph {
        let size = match level {
            HeadingLevel::H1 => H1_SIZE,
            HeadingLevel::H2 => H2_SIZE,
            HeadingLevel::H3 => H3_SIZE,
        };
        Paragraph::new().add_run(Run::new().add_text(text).bold().size(size))
    }

    fn label_paragraph(label: &str, value: &str) -> Paragraph {
        let mut paragraph =
            Paragraph::new().add_run(Run::new().add_text(format!("{}: ", label)).bold());
        if !value.is_empty() {
            paragraph = paragraph.add_run(Run::new().add_text(value));
        }
        paragraph
    }

    fn list_paragraph(marker: &str, text: &str) -> Paragraph {
        Paragraph::new()
            .add_run(Run::new().add_text(format!("{} {}", marker, text)))
            .indent(Some(LIST_INDENT), None, None, None)
    }

    fn table(table: &PlanTable) -> Table {
        let mut rows = Vec::with_capacity(table.rows.len() + 1);
        rows.push(Self::table_row(&table.header, true));
        for row in &table.rows {
            rows.push(Self::table_row(row, false));
        }
        Table::new(rows)
    }

    fn table_row(cells: &[String], bold: bool) -> TableRow {
        let cells = cells
            .iter()
            .map(|text| {
                let run = if bold {
                    Run::new().add_text(text.as_str()).bold()
                } else {
                    Run::new().add_text(text.as_str())
                };
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect();
        TableRow::new(cells)
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for DocxRenderer {
    fn render(&self, outline: &PlanOutline) -> Result<Vec<u8>, RenderError> {
        if outline.is_empty() {
            return Err(RenderError::EmptyOutline);
        }

        let mut docx = Docx::new();
        for block in outline.blocks() {
            docx = match block {
                PlanBlock::Heading { level, text } => {
                    docx.add_paragraph(Self::heading_paragraph(*level, text))
                }
                PlanBlock::Table(table) => docx.add_table(Self::table(table)),
                PlanBlock::Bullet(text) => docx.add_paragraph(Self::list_paragraph("\u{2022}", text)),
                PlanBlock::Numbered { number, text } => {
                    docx.add_paragraph(Self::list_paragraph(&format!("{}.", number), text))
                }
                PlanBlock::Label { label, value } => {
                    docx.add_paragraph(Self::label_paragraph(label, value))
                }
                PlanBlock::Paragraph(text) => {
                    docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())))
                }
            };
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| RenderError::BuildFailed(e.to_string()))?;

        Ok(cursor.into_inner())
    }

    fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "docx"
    }
}
