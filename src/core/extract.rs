use crate::domain::model::{RawDay, RawPage};
use crate::domain::ports::FragmentExtractor;
use crate::utils::error::Result;
use regex::Regex;

const TOTAL_PATTERN: &str = r"(\d+) contributions in the last year";
// The site emits data-date before data-level; anything else may sit around them.
const CELL_PATTERN: &str = r#"data-date="([^"]+)"[^>]+data-level="([^"]+)"[^>]*>([^<]*)</td>"#;

/// Text-level extractor: treats the page as opaque text, not a DOM.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    total: Regex,
    cell: Regex,
}

impl RegexExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            total: Regex::new(TOTAL_PATTERN)?,
            cell: Regex::new(CELL_PATTERN)?,
        })
    }
}

impl FragmentExtractor for RegexExtractor {
    fn extract(&self, html: &str) -> RawPage {
        let total = self
            .total
            .captures(html)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok());

        let cells: Vec<RawDay> = self
            .cell
            .captures_iter(html)
            .map(|caps| RawDay {
                date: caps[1].to_string(),
                level: caps[2].to_string(),
                text: caps[3].to_string(),
            })
            .collect();

        tracing::debug!(
            "Matched {} day cells, total phrase {}",
            cells.len(),
            if total.is_some() { "found" } else { "missing" }
        );

        RawPage { total, cells }
    }
}
