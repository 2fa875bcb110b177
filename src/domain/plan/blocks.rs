//! Plan block model

/// Heading depth in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a markdown marker count to a heading level.
    /// The model emits `##` for sections and `###`/`####` for subsections.
    pub fn from_marker_count(count: usize) -> Self {
        match count {
            0..=2 => Self::H1,
            3 => Self::H2,
            _ => Self::H3,
        }
    }
}

/// A table assembled from consecutive pipe-delimited lines.
/// The first row is treated as the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PlanTable {
    /// Number of columns, taken from the header row
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// One structural unit of the generated plan text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanBlock {
    Heading { level: HeadingLevel, text: String },
    Table(PlanTable),
    Bullet(String),
    Numbered { number: u32, text: String },
    Label { label: String, value: String },
    Paragraph(String),
}
