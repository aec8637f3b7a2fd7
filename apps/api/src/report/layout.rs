//! Report layout — turns a session into blocks, then blocks into pages.
//!
//! Both steps are pure so that pagination can be checked without writing a PDF.
//! Coordinates are in points, measured from the top-left of the page.

use crate::report::font_metrics::{get_metrics, FontFace};
use crate::session::Session;

pub const REPORT_TITLE: &str = "Interview Preparation Report";

/// Prefixes of the four feedback sections requested by the analysis prompt.
const SECTION_PREFIXES: [&str; 4] = ["1.", "2.", "3.", "4."];

// ────────────────────────────────────────────────────────────────────────────
// Page geometry and text styles
// ────────────────────────────────────────────────────────────────────────────

/// US letter with 1" margins on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_pt: 612.0,
            height_pt: 792.0,
            margin_pt: 72.0,
        }
    }
}

impl PageConfig {
    pub fn text_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    pub fn text_height(&self) -> f32 {
        self.height_pt - 2.0 * self.margin_pt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Subheading,
    Label,
    Body,
}

impl TextStyle {
    pub fn font_size(self) -> f32 {
        match self {
            TextStyle::Title => 16.0,
            TextStyle::Heading => 14.0,
            TextStyle::Subheading => 12.0,
            TextStyle::Label | TextStyle::Body => 10.0,
        }
    }

    pub fn face(self) -> FontFace {
        match self {
            TextStyle::Body => FontFace::Helvetica,
            _ => FontFace::HelveticaBold,
        }
    }

    pub fn leading(self) -> f32 {
        self.font_size() * 1.2
    }

    fn space_after(self) -> f32 {
        match self {
            TextStyle::Title => 30.0,
            TextStyle::Heading | TextStyle::Subheading | TextStyle::Label => 6.0,
            TextStyle::Body => 0.0,
        }
    }

    fn centered(self) -> bool {
        self == TextStyle::Title
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { style: TextStyle, text: String },
    Spacer(f32),
    PageBreak,
}

impl Block {
    fn text(style: TextStyle, text: impl AsRef<str>) -> Self {
        Block::Text {
            style,
            text: to_winansi(text.as_ref()),
        }
    }
}

/// Builds the report blocks for a session.
///
/// One question block per answered entry; unanswered trailing questions are
/// left out. A page break separates consecutive question blocks.
pub fn build_blocks(session: &Session) -> Vec<Block> {
    let job = session.job();
    let mut blocks = vec![
        Block::text(TextStyle::Title, REPORT_TITLE),
        Block::Spacer(20.0),
        Block::text(TextStyle::Heading, "Job Details"),
        Block::text(TextStyle::Body, format!("Company: {}", job.company)),
        Block::text(TextStyle::Body, format!("Position: {}", job.title)),
        Block::Spacer(20.0),
        Block::text(TextStyle::Heading, "Interview Questions & Answers"),
        Block::Spacer(20.0),
    ];

    let entries: Vec<_> = session.answered_entries().collect();
    let last = entries.len().saturating_sub(1);

    for (position, entry) in entries.iter().enumerate() {
        blocks.push(Block::text(
            TextStyle::Subheading,
            format!("Question {}:", entry.index + 1),
        ));
        blocks.push(Block::text(TextStyle::Body, entry.question));
        blocks.push(Block::Spacer(10.0));

        blocks.push(Block::text(TextStyle::Label, "Your Answer:"));
        blocks.push(Block::text(TextStyle::Body, entry.answer));
        blocks.push(Block::Spacer(10.0));

        blocks.push(Block::text(TextStyle::Label, "Feedback:"));
        blocks.push(Block::Spacer(10.0));
        for line in format_feedback(entry.feedback) {
            if line.is_empty() {
                blocks.push(Block::Spacer(10.0));
            } else {
                blocks.push(Block::text(TextStyle::Body, line));
                blocks.push(Block::Spacer(5.0));
            }
        }
        blocks.push(Block::Spacer(20.0));

        if position < last {
            blocks.push(Block::PageBreak);
        }
    }

    blocks
}

/// Splits feedback into trimmed, non-blank lines and inserts an empty
/// separator before each line opening one of the four numbered sections.
pub fn format_feedback(feedback: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for line in feedback.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if SECTION_PREFIXES.iter().any(|p| line.starts_with(p)) {
            lines.push(String::new());
        }
        lines.push(line.to_string());
    }
    lines
}

/// Characters of the Windows-1252 range 0x80..=0x9F that the builtin fonts
/// WinAnsi encoding can draw.
const WINANSI_EXTRAS: &[char] = &[
    '\u{20AC}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{017D}', '\u{2018}',
    '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}', '\u{02DC}',
    '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{017E}', '\u{0178}',
];

/// Keeps every character the WinAnsi-encoded builtin fonts can draw
/// (printable ASCII, Latin-1, and the Windows-1252 extras). Other dashes,
/// quotes and spaces fold to a look-alike; anything else becomes `?`.
/// Line breaks and tabs become spaces.
pub fn to_winansi(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            ' '..='~' | '\u{00A0}'..='\u{00FF}' => Some(c),
            c if WINANSI_EXTRAS.contains(&c) => Some(c),
            '\n' | '\r' | '\t' => Some(' '),
            '\u{2032}' => Some('\''),
            '\u{2033}' => Some('"'),
            '\u{2010}'..='\u{2012}' | '\u{2015}' | '\u{2212}' => Some('-'),
            '\u{25CF}' => Some('\u{2022}'),
            '\u{2002}'..='\u{200A}' => Some(' '),
            c if c.is_control() => None,
            _ => Some('?'),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// A single line of text fixed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: TextStyle,
    pub x_pt: f32,
    /// Baseline, measured down from the top edge of the page.
    pub baseline_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Flows blocks onto pages. A new page starts at every `PageBreak` and
/// whenever the next line would cross the bottom margin. Never returns an
/// empty page list.
pub fn paginate(blocks: &[Block], config: &PageConfig) -> Vec<Page> {
    let mut pages = vec![Page::default()];
    // Vertical offset inside the text area of the current page.
    let mut cursor = 0.0_f32;

    for block in blocks {
        match block {
            Block::PageBreak => {
                if pages.last().is_some_and(|p| !p.is_empty()) {
                    pages.push(Page::default());
                    cursor = 0.0;
                }
            }
            Block::Spacer(height) => {
                // Spacers never carry over to the next page.
                cursor = (cursor + height).min(config.text_height());
            }
            Block::Text { style, text } => {
                let metrics = get_metrics(style.face());
                let size = style.font_size();
                let leading = style.leading();

                for line in metrics.wrap(text, size, config.text_width()) {
                    if cursor + leading > config.text_height() {
                        pages.push(Page::default());
                        cursor = 0.0;
                    }
                    let x_pt = if style.centered() {
                        let width = metrics.measure_pt(&line, size);
                        config.margin_pt + ((config.text_width() - width) / 2.0).max(0.0)
                    } else {
                        config.margin_pt
                    };
                    cursor += leading;
                    if let Some(page) = pages.last_mut() {
                        page.lines.push(PlacedLine {
                            text: line,
                            style: *style,
                            x_pt,
                            baseline_pt: config.margin_pt + cursor - (leading - size),
                        });
                    }
                }
                cursor += style.space_after();
            }
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::JobDetails;

    fn make_session(questions: usize, answered: usize) -> Session {
        let mut session = Session::new();
        session.replace_questions(
            JobDetails {
                company: "Acme".to_string(),
                title: "Backend Engineer".to_string(),
                description: "Build APIs...".to_string(),
            },
            (0..questions).map(|i| format!("Question body {i}?")).collect(),
        );
        for i in 0..answered {
            session.record_answer(
                format!("Answer {i}"),
                "Solid answer.\n1. Strengths: clear\n2. Areas: depth\n3. Suggestions: STAR\n4. Rating: 7/10",
            );
        }
        session
    }

    fn count_subheadings(blocks: &[Block]) -> usize {
        blocks
            .iter()
            .filter(|b| matches!(b, Block::Text { style: TextStyle::Subheading, .. }))
            .count()
    }

    fn all_text(pages: &[Page]) -> Vec<&str> {
        pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.as_str()))
            .collect()
    }

    #[test]
    fn test_format_feedback_separates_numbered_sections() {
        let feedback = "Overall good.\n\n1. Strengths\n - clear\n2. Improvements\n3. Suggestions\n4. Rating: 8/10\n5. Extra";
        let lines = format_feedback(feedback);
        assert_eq!(
            lines,
            vec![
                "Overall good.",
                "",
                "1. Strengths",
                "- clear",
                "",
                "2. Improvements",
                "",
                "3. Suggestions",
                "",
                "4. Rating: 8/10",
                "5. Extra",
            ]
        );
    }

    #[test]
    fn test_format_feedback_trims_and_drops_blank_lines() {
        assert_eq!(format_feedback("  a  \n\n\n  b"), vec!["a", "b"]);
        assert!(format_feedback("\n   \n").is_empty());
    }

    #[test]
    fn test_build_blocks_only_answered_entries() {
        let session = make_session(7, 3);
        let blocks = build_blocks(&session);
        assert_eq!(count_subheadings(&blocks), 3);
    }

    #[test]
    fn test_build_blocks_page_break_between_entries_not_after_last() {
        let session = make_session(5, 3);
        let blocks = build_blocks(&session);
        let breaks = blocks.iter().filter(|b| **b == Block::PageBreak).count();
        assert_eq!(breaks, 2);
        assert_ne!(blocks.last(), Some(&Block::PageBreak));
    }

    #[test]
    fn test_build_blocks_with_no_answers_has_header_only() {
        let session = make_session(4, 0);
        let blocks = build_blocks(&session);
        assert_eq!(count_subheadings(&blocks), 0);
        assert!(blocks.contains(&Block::Text {
            style: TextStyle::Body,
            text: "Company: Acme".to_string()
        }));
        assert!(blocks.contains(&Block::Text {
            style: TextStyle::Body,
            text: "Position: Backend Engineer".to_string()
        }));
    }

    #[test]
    fn test_build_blocks_numbers_questions_from_one() {
        let session = make_session(2, 2);
        let blocks = build_blocks(&session);
        assert!(blocks.contains(&Block::Text {
            style: TextStyle::Subheading,
            text: "Question 2:".to_string()
        }));
    }

    #[test]
    fn test_paginate_one_page_per_entry() {
        let session = make_session(6, 3);
        let pages = paginate(&build_blocks(&session), &PageConfig::default());
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines[0].text, REPORT_TITLE);
        assert!(pages.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_paginate_overflows_long_answer_onto_new_page() {
        let mut session = make_session(1, 0);
        session.record_answer("lorem ipsum ".repeat(2000), "4. Rating: 5/10");
        let config = PageConfig::default();
        let pages = paginate(&build_blocks(&session), &config);

        assert!(pages.len() > 1);
        for line in pages.iter().flat_map(|p| &p.lines) {
            assert!(line.baseline_pt <= config.height_pt - config.margin_pt);
            assert!(line.baseline_pt > config.margin_pt);
        }
    }

    #[test]
    fn test_paginate_keeps_text_order() {
        let session = make_session(2, 2);
        let pages = paginate(&build_blocks(&session), &PageConfig::default());
        let text = all_text(&pages);
        let q1 = text.iter().position(|t| *t == "Question 1:").unwrap();
        let q2 = text.iter().position(|t| *t == "Question 2:").unwrap();
        assert!(q1 < q2);
        assert!(text.contains(&"4. Rating: 7/10"));
    }

    #[test]
    fn test_paginate_centers_title() {
        let pages = paginate(
            &[Block::text(TextStyle::Title, REPORT_TITLE)],
            &PageConfig::default(),
        );
        let title = &pages[0].lines[0];
        assert!(title.x_pt > 72.0);
    }

    #[test]
    fn test_paginate_empty_blocks_gives_one_blank_page() {
        let pages = paginate(&[], &PageConfig::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_to_winansi_keeps_encodable_typography() {
        assert_eq!(
            to_winansi("\u{201C}Done\u{201D} \u{2014} it\u{2019}s \u{2022} ok\u{2026} \u{20AC}5"),
            "\u{201C}Done\u{201D} \u{2014} it\u{2019}s \u{2022} ok\u{2026} \u{20AC}5"
        );
        assert_eq!(to_winansi("caf\u{00E9}\nbar"), "caf\u{00E9} bar");
    }

    #[test]
    fn test_to_winansi_replaces_characters_outside_encoding() {
        assert_eq!(to_winansi("a\u{2212}b \u{2032}x\u{2033}"), "a-b 'x\"");
        assert_eq!(to_winansi("\u{6771}\u{4EAC} \u{1F680}"), "?? ?");
    }

    #[test]
    fn test_build_blocks_keeps_accented_job_details() {
        let mut session = Session::new();
        session.replace_questions(
            JobDetails {
                company: "Soci\u{00E9}t\u{00E9} G\u{00E9}n\u{00E9}rale".to_string(),
                title: "Ingeni\u{00E9}ro de Se\u{00F1}ales".to_string(),
                description: String::new(),
            },
            vec!["\u{00BF}Por qu\u{00E9} nosotros?".to_string()],
        );
        session.record_answer("M\u{00FC}nchen \u{2013} 2019", "1. Strengths: \u{201C}clear\u{201D}");

        let blocks = build_blocks(&session);
        let texts: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert!(texts.contains(&"Company: Soci\u{00E9}t\u{00E9} G\u{00E9}n\u{00E9}rale"));
        assert!(texts.contains(&"Position: Ingeni\u{00E9}ro de Se\u{00F1}ales"));
        assert!(texts.contains(&"\u{00BF}Por qu\u{00E9} nosotros?"));
        assert!(texts.contains(&"M\u{00FC}nchen \u{2013} 2019"));
        assert!(texts.contains(&"1. Strengths: \u{201C}clear\u{201D}"));
    }
}
