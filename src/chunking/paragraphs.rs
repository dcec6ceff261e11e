use super::normalize::repair_broken_urls;
use super::{CODE_FENCE, FAQ_MARKER, HEADING_RE};

const LIST_MARKERS: [&str; 5] = ["*", "-", "1.", "2.", "3."];

/// Splits a block's content into paragraphs.
///
/// A fenced code block is returned whole. Otherwise the content is cut into
/// its non-empty trimmed lines; if there are several lines and none of them
/// carries a structural marker (list bullet, FAQ marker, nested heading),
/// the content is ordinary prose and is returned as one paragraph instead
/// of being shattered line by line. The marker checks run in this order on
/// purpose; reordering them changes edge-case results.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    let text = repair_broken_urls(content);

    if text.trim().starts_with(CODE_FENCE) {
        return vec![text];
    }

    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(repair_broken_urls)
        .collect();

    if lines.len() > 1 {
        let has_list = lines
            .iter()
            .any(|line| LIST_MARKERS.iter().any(|marker| line.starts_with(marker)));
        let has_faq = lines.iter().any(|line| line.starts_with(FAQ_MARKER));
        let has_heading = lines.iter().any(|line| HEADING_RE.is_match(line));

        if !has_list && !has_faq && !has_heading {
            return vec![text];
        }
    }

    lines
}
