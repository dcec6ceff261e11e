use super::CODE_FENCE;
use super::normalize::repair_broken_urls;

/// Sentence-final punctuation that always ends a sentence when followed by
/// whitespace or end of text.
const TERMINATORS: [char; 5] = ['。', '！', '？', '!', '?'];

/// Splits a paragraph into sentence-like fragments.
///
/// Fenced code is returned whole. A cut happens immediately after
/// sentence-final punctuation, or after an ASCII period that ends a word,
/// so periods inside URLs, file paths, and domains (`bettergi.com`,
/// `/guide.html`) never end a sentence. Fragments keep their terminator,
/// are trimmed, and empty ones are dropped.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let text = repair_broken_urls(paragraph);

    if text.trim().starts_with(CODE_FENCE) {
        return vec![text];
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut previous: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        if is_sentence_boundary(ch, previous, next) {
            let end = index + ch.len_utf8();
            push_fragment(&mut sentences, &text[start..end]);
            start = end;
        }
        previous = Some(ch);
    }

    push_fragment(&mut sentences, &text[start..]);
    sentences
}

fn is_sentence_boundary(ch: char, previous: Option<char>, next: Option<char>) -> bool {
    let followed_by_text = next.is_some_and(|c| !c.is_whitespace());
    if TERMINATORS.contains(&ch) {
        return !followed_by_text;
    }
    if ch == '.' {
        // An ellipsis dot never ends a sentence, and neither does a period
        // leading into a URL/path/domain continuation.
        return previous.is_some_and(|p| p != '.')
            && !followed_by_text
            && !next.is_some_and(is_link_char);
    }
    false
}

fn is_link_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-')
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(repair_broken_urls(trimmed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_ascii_sentences() {
        let sentences = split_sentences("Hello world. This is a test.");
        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_cjk_terminators() {
        let sentences = split_sentences("第一句。 第二句！ 第三句？");
        assert_eq!(sentences, vec!["第一句。", "第二句！", "第三句？"]);
    }

    #[test]
    fn test_cjk_without_spacing_stays_whole() {
        // A terminator glued to the next character is not treated as a
        // boundary; tightly-set CJK prose passes through unsplit.
        let sentences = split_sentences("第一句。第二句。");
        assert_eq!(sentences, vec!["第一句。第二句。"]);
    }

    #[test]
    fn test_exclamation_and_question() {
        let sentences = split_sentences("Really? Yes! Done.");
        assert_eq!(sentences, vec!["Really?", "Yes!", "Done."]);
    }

    #[test]
    fn test_url_is_not_split() {
        let sentences = split_sentences("See https://bettergi.com/feats/task.html for details.");
        assert_eq!(
            sentences,
            vec!["See https://bettergi.com/feats/task.html for details."]
        );
    }

    #[test]
    fn test_domain_followed_by_path_survives() {
        let sentences = split_sentences("clone github.com/babalae/bettergi-scripts-list first.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_code_block_is_single_sentence() {
        let code = "```\nlet x = 1.0;\nprintln!(\"{x}\");\n```";
        assert_eq!(split_sentences(code), vec![code.to_string()]);
    }

    #[test]
    fn test_abbreviation_before_capital_still_splits() {
        // Known heuristic: the period after "U.S." looks sentence-final.
        let sentences = split_sentences("the U.S. Government said so");
        assert_eq!(sentences, vec!["the U.S.", "Government said so"]);
    }

    #[test]
    fn test_ellipsis_is_not_a_boundary() {
        let sentences = split_sentences("wait... then go");
        assert_eq!(sentences, vec!["wait... then go"]);
    }

    #[test]
    fn test_trailing_terminator_produces_no_empty_fragment() {
        let sentences = split_sentences("完成了。");
        assert_eq!(sentences, vec!["完成了。"]);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_terminator_followed_by_text_does_not_split() {
        // "1.5" and "v2!beta" style tokens stay together.
        let sentences = split_sentences("use version 1.5 now");
        assert_eq!(sentences, vec!["use version 1.5 now"]);
    }
}
