use regex::Regex;
use std::sync::LazyLock;

// "github. com" -> "github.com"; the continuation must look like the tail
// of a domain, filename, or decimal ("com", "html", "5"), so a capitalized
// word starting the next sentence is left alone.
static SPLIT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\.\s+([0-9a-z])").expect("valid token repair pattern"));

// "/path. html" -> "/path.html"
static SPLIT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(/[\w/-]+)\.\s+(\w)").expect("valid path repair pattern"));

/// Repairs URLs, domains, and file paths that were broken across a line
/// wrap, e.g. `github. com` becomes `github.com` and `/guide. html`
/// becomes `/guide.html`.
///
/// Safe to apply repeatedly: text without a broken-token seam is returned
/// unchanged.
pub fn repair_broken_urls(text: &str) -> String {
    let repaired = SPLIT_TOKEN_RE.replace_all(text, "$1.$2");
    let repaired = SPLIT_PATH_RE.replace_all(&repaired, "$1.$2");
    repaired.into_owned()
}
