//! DOCX text extraction via docx-rs
//!
//! Walks document paragraphs and concatenates run text, one line per
//! paragraph. Table contents are not walked; uploaded lesson materials
//! carry their substance in paragraphs.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::ExtractionError;

/// Extract paragraph text from DOCX bytes
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut out = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for pc in &paragraph.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(text) = rc {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            if !line.is_empty() {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    Ok(out)
}
