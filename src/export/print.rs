//! Print-ready export.
//!
//! [`PrintDocument`] carries the same sections in the same order as the text
//! report, already reduced to headings, paragraphs and lists. [`PrintDocument::to_html`]
//! turns it into a standalone page suitable for a browser's print dialog.

use super::report::{Report, Section};
use crate::domain::Initiative;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Body content of one print section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintBlock {
    Paragraphs(Vec<String>),
    OrderedList(Vec<String>),
    BulletList(Vec<String>),
    Links(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSection {
    pub heading: &'static str,
    pub block: PrintBlock,
}

/// A record laid out for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PrintSection>,
    pub metadata: Vec<(&'static str, String)>,
    pub exported_on: String,
}

impl PrintDocument {
    #[must_use]
    pub fn from_record(record: &Initiative, exported_at: &DateTime<Utc>) -> Self {
        Self::from_report(&Report::from_record(record), exported_at)
    }

    #[must_use]
    pub fn from_report(report: &Report<'_>, exported_at: &DateTime<Utc>) -> Self {
        Self {
            title: report.title.to_string(),
            subtitle: format!("{}  ·  {}", report.id, report.status),
            sections: report
                .sections
                .iter()
                .map(|section| PrintSection {
                    heading: section.heading(),
                    block: block_for(section),
                })
                .collect(),
            metadata: report
                .metadata
                .iter()
                .map(|(label, value)| (*label, (*value).to_string()))
                .collect(),
            exported_on: format!(
                "Exported on {} at {}",
                exported_at.format("%Y-%m-%d"),
                exported_at.format("%H:%M:%S")
            ),
        }
    }

    /// Headings in document order.
    #[must_use]
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.heading).collect()
    }

    /// Renders the document as a standalone HTML page. All record text is
    /// escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let title = escape_html(&self.title);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        html.push_str(PRINT_STYLE);
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<h1>{title}</h1>");
        let _ = writeln!(html, "<p class=\"subtitle\">{}</p>", escape_html(&self.subtitle));

        for section in &self.sections {
            html.push_str("<section>\n");
            let _ = writeln!(html, "<h2>{}</h2>", section.heading);
            write_block(&mut html, &section.block);
            html.push_str("</section>\n");
        }

        html.push_str("<hr>\n<dl>\n");
        for (label, value) in &self.metadata {
            let _ = writeln!(html, "<dt>{label}</dt><dd>{}</dd>", escape_html(value));
        }
        html.push_str("</dl>\n");
        let _ = writeln!(html, "<footer>{}</footer>", escape_html(&self.exported_on));
        html.push_str("</body>\n</html>\n");
        html
    }
}

const PRINT_STYLE: &str = "<style>
body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; color: #111; }
h2 { font-size: 0.85rem; letter-spacing: 0.05em; text-transform: uppercase; }
.subtitle, footer { color: #555; }
dt { font-weight: bold; float: left; clear: left; width: 9rem; }
@media print { body { margin: 0; } }
</style>
";

fn block_for(section: &Section<'_>) -> PrintBlock {
    match section {
        Section::Vision(text) | Section::StartingPoint(text) => {
            PrintBlock::Paragraphs(vec![(*text).to_string()])
        }
        Section::Goals(goals) => PrintBlock::OrderedList(goals.to_vec()),
        Section::ActionPlan(items) => PrintBlock::BulletList(
            items
                .iter()
                .map(|item| format!("{}: {} [{}]", item.quarter, item.action, item.status))
                .collect(),
        ),
        Section::CurrentStatus { notes, progress } => {
            PrintBlock::Paragraphs(vec![(*notes).to_string(), format!("Progress: {progress}%")])
        }
        Section::Tags(tags) => PrintBlock::Paragraphs(vec![tags.join(" · ")]),
        Section::ReferenceLinks(links) => PrintBlock::Links(
            links
                .iter()
                .map(|link| (link.title.clone(), link.url.clone()))
                .collect(),
        ),
    }
}

fn write_block(html: &mut String, block: &PrintBlock) {
    match block {
        PrintBlock::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                let _ = writeln!(html, "<p>{}</p>", escape_html(paragraph));
            }
        }
        PrintBlock::OrderedList(items) => write_list(html, "ol", items),
        PrintBlock::BulletList(items) => write_list(html, "ul", items),
        PrintBlock::Links(links) => {
            html.push_str("<ul>\n");
            for (title, url) in links {
                let url = escape_html(url);
                let _ = writeln!(html, "<li>{} <a href=\"{url}\">{url}</a></li>", escape_html(title));
            }
            html.push_str("</ul>\n");
        }
    }
}

fn write_list(html: &mut String, tag: &str, items: &[String]) {
    let _ = writeln!(html, "<{tag}>");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape_html(item));
    }
    let _ = writeln!(html, "</{tag}>");
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::initiative::fixtures::bare;
    use crate::storage::{JsonSource, RecordSource};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn section_order_matches_text_report() {
        for record in JsonSource::sample().load_records().unwrap() {
            let report = Report::from_record(&record);
            let document = PrintDocument::from_report(&report, &at());
            assert_eq!(document.headings(), report.headings());
        }
    }

    #[test]
    fn html_escapes_record_text() {
        let mut record = bare("A", "Roads & <Bridges>");
        record.status_notes = Some("\"quoted\"".into());
        let html = PrintDocument::from_record(&record, &at()).to_html();

        assert!(html.contains("<h1>Roads &amp; &lt;Bridges&gt;</h1>"));
        assert!(html.contains("<p>&quot;quoted&quot;</p>"));
        assert!(!html.contains("<Bridges>"));
    }

    #[test]
    fn html_lists_goals_and_metadata() {
        let records = JsonSource::sample().load_records().unwrap();
        let html = PrintDocument::from_record(&records[0], &at()).to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<ol>\n<li>Draft legislation</li>"));
        assert!(html.contains("<dt>Budget</dt><dd>$2.5M</dd>"));
        assert!(html.contains("<a href=\"https://example.gov/eo-dei\">"));
        assert!(html.contains("<footer>Exported on 2025-01-15 at 09:30:00</footer>"));
    }
}
