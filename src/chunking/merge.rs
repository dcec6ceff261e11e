use super::CODE_FENCE;
use super::normalize::repair_broken_urls;

/// Greedily packs sentences into `"{title}\n{body}"` chunks whose body
/// stays within `max_chunk_size` characters, counting one separator per
/// buffered sentence. When a chunk is emitted, a trailing window of its
/// sentences totalling less than `overlap_size` characters seeds the next
/// chunk so neighbouring chunks share context.
///
/// A lone code-block sentence is emitted as one chunk, and a single
/// sentence longer than `max_chunk_size` is emitted oversized rather than
/// cut mid-sentence. Sizes are in characters, not bytes. Callers must keep
/// `overlap_size` below `max_chunk_size`; the degenerate configuration is
/// rejected by configuration validation upstream.
pub fn merge_sentences_into_chunks(
    title: &str,
    sentences: &[String],
    max_chunk_size: usize,
    overlap_size: usize,
) -> Vec<String> {
    if let [only] = sentences
        && only.trim().starts_with(CODE_FENCE)
    {
        return vec![format!("{title}\n{only}")];
    }

    let mut chunks = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for sentence in sentences {
        let sentence = repair_broken_urls(sentence);
        let prospective = buffer.iter().map(|s| char_len(s)).sum::<usize>()
            + buffer.len()
            + char_len(&sentence);

        if prospective > max_chunk_size && !buffer.is_empty() {
            chunks.push(format!("{title}\n{}", buffer.join(" ")));
            buffer = overlap_window(&buffer, overlap_size);
        }

        buffer.push(sentence);
    }

    if !buffer.is_empty() {
        chunks.push(format!("{title}\n{}", buffer.join(" ")));
    }

    chunks
}

/// Walks the just-emitted buffer backwards, carrying whole sentences until
/// adding the next one would reach `overlap_size`. Original order is kept.
fn overlap_window(emitted: &[String], overlap_size: usize) -> Vec<String> {
    let mut carried: Vec<String> = Vec::new();
    let mut carried_len = 0;

    for sentence in emitted.iter().rev() {
        if carried_len + char_len(sentence) < overlap_size {
            carried.insert(0, sentence.clone());
            carried_len += char_len(sentence) + 1;
        } else {
            break;
        }
    }

    carried
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
