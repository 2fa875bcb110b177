//! Heuristic plan-text outline parser
//!
//! The completion endpoint returns plain text shaped by the system prompt's
//! style rules (markdown-ish headings, pipe tables, dashed bullets). This
//! scanner maps lines to document blocks by string pattern. It is deliberate
//! glue for the absence of structured model output, not a markdown parser;
//! anything it does not recognize becomes a paragraph.

use super::blocks::{HeadingLevel, PlanBlock, PlanTable};

/// Parsed, render-ready structure of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanOutline {
    blocks: Vec<PlanBlock>,
}

impl PlanOutline {
    /// Scan plan text line-by-line into blocks
    pub fn parse(text: &str) -> Self {
        let mut builder = OutlineBuilder::default();

        for line in text.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                builder.flush_all();
                continue;
            }

            if is_table_row(trimmed) {
                builder.flush_paragraph();
                if let Some(cells) = parse_table_cells(trimmed) {
                    builder.push_table_row(cells);
                }
                continue;
            }
            builder.flush_table();

            if is_divider(trimmed) {
                builder.flush_paragraph();
                continue;
            }

            if let Some((level, text)) = parse_heading(trimmed) {
                builder.flush_paragraph();
                builder.push(PlanBlock::Heading { level, text });
                continue;
            }

            if let Some(text) = parse_bullet(trimmed) {
                builder.flush_paragraph();
                builder.push(PlanBlock::Bullet(text));
                continue;
            }

            if let Some((number, text)) = parse_numbered(trimmed) {
                builder.flush_paragraph();
                builder.push(PlanBlock::Numbered { number, text });
                continue;
            }

            if let Some((label, value)) = parse_label(trimmed) {
                builder.flush_paragraph();
                builder.push(PlanBlock::Label { label, value });
                continue;
            }

            builder.push_paragraph_line(strip_inline_markup(trimmed));
        }

        builder.flush_all();
        Self {
            blocks: builder.blocks,
        }
    }

    pub fn blocks(&self) -> &[PlanBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Default)]
struct OutlineBuilder {
    blocks: Vec<PlanBlock>,
    paragraph: Vec<String>,
    table_rows: Vec<Vec<String>>,
}

impl OutlineBuilder {
    fn push(&mut self, block: PlanBlock) {
        self.blocks.push(block);
    }

    fn push_paragraph_line(&mut self, line: String) {
        if !line.is_empty() {
            self.paragraph.push(line);
        }
    }

    fn push_table_row(&mut self, cells: Vec<String>) {
        self.table_rows.push(cells);
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let text = self.paragraph.join(" ");
            self.paragraph.clear();
            self.blocks.push(PlanBlock::Paragraph(text));
        }
    }

    fn flush_table(&mut self) {
        if self.table_rows.is_empty() {
            return;
        }
        let mut rows = std::mem::take(&mut self.table_rows);
        let header = rows.remove(0);
        self.blocks.push(PlanBlock::Table(PlanTable { header, rows }));
    }

    fn flush_all(&mut self) {
        self.flush_table();
        self.flush_paragraph();
    }
}

/// Runs of `=`, `-`, or `_` act as visual separators and are dropped.
/// Three characters suffice: `---` is the standard horizontal rule, and a
/// bullet needs a trailing space so no shorter pattern collides.
fn is_divider(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| matches!(c, '=' | '-' | '_'))
}

/// Pipe-delimited lines are table rows
fn is_table_row(line: &str) -> bool {
    line.len() > 1 && line.starts_with('|')
}

/// Split a pipe row into trimmed cells; returns None for `|---|` separator rows
fn parse_table_cells(line: &str) -> Option<Vec<String>> {
    let inner = line.trim_matches('|');
    let cells: Vec<String> = inner
        .split('|')
        .map(|c| strip_inline_markup(c.trim()))
        .collect();

    let is_separator = cells
        .iter()
        .all(|c| c.chars().all(|ch| matches!(ch, '-' | ':' | ' ')))
        && cells.iter().any(|c| c.contains('-'));

    if is_separator {
        None
    } else {
        Some(cells)
    }
}

/// `#`-prefixed lines map to headings; `##` is the deepest top level the
/// prompt asks for, so it maps to H1
fn parse_heading(line: &str) -> Option<(HeadingLevel, String)> {
    if !line.starts_with('#') {
        return None;
    }
    let count = line.chars().take_while(|&c| c == '#').count();
    let rest = line[count..].trim();
    if rest.is_empty() {
        return None;
    }
    Some((
        HeadingLevel::from_marker_count(count),
        strip_inline_markup(rest),
    ))
}

fn parse_bullet(line: &str) -> Option<String> {
    let rest = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))?;
    let text = strip_inline_markup(rest.trim());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Lines like `1. Lesson Plan Quality` or `2) ...`
fn parse_numbered(line: &str) -> Option<(u32, String)> {
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = &line[digits.len()..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    if !rest.starts_with(' ') {
        return None;
    }
    let number = digits.parse().ok()?;
    let text = strip_inline_markup(rest.trim());
    if text.is_empty() {
        None
    } else {
        Some((number, text))
    }
}

/// Longest label the `Label: value` heuristic will accept
const MAX_LABEL_LEN: usize = 40;

/// Short `Label: value` lines (e.g. `Teacher: Sara`, `Generated on: ...`).
/// The label must look like a field name: short, no sentence punctuation.
fn parse_label(line: &str) -> Option<(String, String)> {
    let stripped = strip_inline_markup(line);
    let (label, value) = stripped.split_once(':')?;
    let label = label.trim();
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return None;
    }
    if !label.chars().all(|c| {
        c.is_alphanumeric() || matches!(c, ' ' | '&' | '/' | '\'' | '\u{2019}' | '-' | '(' | ')')
    }) {
        return None;
    }
    Some((label.to_string(), value.trim().to_string()))
}

/// Drop inline emphasis markers the model tends to emit despite the style rules
fn strip_inline_markup(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .replace('`', "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_blocks() {
        let outline = PlanOutline::parse("");
        assert!(outline.is_empty());
    }

    #[test]
    fn headings_map_levels() {
        let outline = PlanOutline::parse("## SECTION 1\n### Lesson Information\n#### Detail");
        assert_eq!(
            outline.blocks(),
            &[
                PlanBlock::Heading {
                    level: HeadingLevel::H1,
                    text: "SECTION 1".to_string()
                },
                PlanBlock::Heading {
                    level: HeadingLevel::H2,
                    text: "Lesson Information".to_string()
                },
                PlanBlock::Heading {
                    level: HeadingLevel::H3,
                    text: "Detail".to_string()
                },
            ]
        );
    }

    #[test]
    fn divider_lines_are_dropped() {
        let outline = PlanOutline::parse("====================\n## Title\n--------------------");
        assert_eq!(outline.blocks().len(), 1);
        assert!(matches!(outline.blocks()[0], PlanBlock::Heading { .. }));
    }

    #[test]
    fn three_dash_horizontal_rule_is_dropped() {
        let outline = PlanOutline::parse("## Title\n---\nBody text.");
        assert_eq!(
            outline.blocks(),
            &[
                PlanBlock::Heading {
                    level: HeadingLevel::H1,
                    text: "Title".to_string(),
                },
                PlanBlock::Paragraph("Body text.".to_string()),
            ]
        );
    }

    #[test]
    fn consecutive_pipe_lines_group_into_one_table() {
        let text = "\
| Component | Content |
|-----------|---------|
| Grammar | Past simple |
| Vocabulary | Travel verbs |";

        let outline = PlanOutline::parse(text);
        assert_eq!(outline.blocks().len(), 1);
        let PlanBlock::Table(table) = &outline.blocks()[0] else {
            panic!("expected table, got {:?}", outline.blocks()[0]);
        };
        assert_eq!(table.header, vec!["Component", "Content"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Grammar", "Past simple"]);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn separator_rows_are_skipped() {
        let text = "| A | B |\n|---|:--|\n| 1 | 2 |";
        let outline = PlanOutline::parse(text);
        let PlanBlock::Table(table) = &outline.blocks()[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn blank_line_splits_tables() {
        let text = "| A | B |\n| 1 | 2 |\n\n| C | D |\n| 3 | 4 |";
        let outline = PlanOutline::parse(text);
        assert_eq!(outline.blocks().len(), 2);
        assert!(matches!(outline.blocks()[0], PlanBlock::Table(_)));
        assert!(matches!(outline.blocks()[1], PlanBlock::Table(_)));
    }

    #[test]
    fn bullets_in_all_marker_styles() {
        let outline = PlanOutline::parse("- first\n* second\n• third");
        assert_eq!(
            outline.blocks(),
            &[
                PlanBlock::Bullet("first".to_string()),
                PlanBlock::Bullet("second".to_string()),
                PlanBlock::Bullet("third".to_string()),
            ]
        );
    }

    #[test]
    fn numbered_items() {
        let outline = PlanOutline::parse("1. Lesson Plan Quality\n2) Aims & Objectives");
        assert_eq!(
            outline.blocks(),
            &[
                PlanBlock::Numbered {
                    number: 1,
                    text: "Lesson Plan Quality".to_string()
                },
                PlanBlock::Numbered {
                    number: 2,
                    text: "Aims & Objectives".to_string()
                },
            ]
        );
    }

    #[test]
    fn label_lines() {
        let outline = PlanOutline::parse("Teacher: Sara\nGenerated on: 2026-08-31 10:00");
        assert_eq!(
            outline.blocks()[0],
            PlanBlock::Label {
                label: "Teacher".to_string(),
                value: "Sara".to_string()
            }
        );
        assert_eq!(
            outline.blocks()[1],
            PlanBlock::Label {
                label: "Generated on".to_string(),
                value: "2026-08-31 10:00".to_string()
            }
        );
    }

    #[test]
    fn sentence_with_colon_is_a_paragraph() {
        // The comma disqualifies the would-be label
        let outline = PlanOutline::parse("To achieve this level, consider: rehearsing timing.");
        assert!(matches!(outline.blocks()[0], PlanBlock::Paragraph(_)));
    }

    #[test]
    fn consecutive_text_lines_merge_into_one_paragraph() {
        let outline = PlanOutline::parse("A strong performance would include\nclear staging.");
        assert_eq!(
            outline.blocks(),
            &[PlanBlock::Paragraph(
                "A strong performance would include clear staging.".to_string()
            )]
        );
    }

    #[test]
    fn inline_markup_is_stripped() {
        let outline = PlanOutline::parse("- **Teacher:** Sara\n## `SECTION` __1__");
        assert_eq!(
            outline.blocks()[0],
            PlanBlock::Bullet("Teacher: Sara".to_string())
        );
        assert_eq!(
            outline.blocks()[1],
            PlanBlock::Heading {
                level: HeadingLevel::H1,
                text: "SECTION 1".to_string()
            }
        );
    }

    #[test]
    fn realistic_plan_fragment() {
        let text = "\
==================================================
## SECTION 1 - Complete Lesson Plan
==================================================

### Lesson Information
Teacher: Sara
Lesson Number: 12
Duration: 50 minutes

### Learning Objectives
- Students will be able to use the past simple in short narratives.
- Students will be able to ask follow-up questions.

### Lesson Stages
| Stage | Timing | Purpose / Description |
|-------|--------|-----------------------|
| Warm-up / Lead-in | 5 min | Activate prior knowledge |
| Presentation | 10 min | Introduce target forms |

1. Lesson Plan Quality
Before observation, you could refine the staging notes
and timing cues.";

        let outline = PlanOutline::parse(text);
        let blocks = outline.blocks();

        assert!(matches!(
            blocks[0],
            PlanBlock::Heading {
                level: HeadingLevel::H1,
                ..
            }
        ));
        assert!(matches!(
            blocks[1],
            PlanBlock::Heading {
                level: HeadingLevel::H2,
                ..
            }
        ));
        assert_eq!(
            blocks[2],
            PlanBlock::Label {
                label: "Teacher".to_string(),
                value: "Sara".to_string()
            }
        );
        let bullet_count = blocks
            .iter()
            .filter(|b| matches!(b, PlanBlock::Bullet(_)))
            .count();
        assert_eq!(bullet_count, 2);
        let tables: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                PlanBlock::Table(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
        assert!(blocks
            .iter()
            .any(|b| matches!(b, PlanBlock::Numbered { number: 1, .. })));
        assert!(blocks.iter().any(
            |b| matches!(b, PlanBlock::Paragraph(p) if p.contains("staging notes and timing cues"))
        ));
    }
}
