use super::{CODE_FENCE, FRONT_MATTER_DELIMITER, HEADING_RE, NO_TITLE};

/// A heading-delimited region of a document: the most recent heading line
/// (verbatim, `#` markers included) and the joined, trimmed text between it
/// and the next heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub title: String,
    pub content: String,
}

/// Scanner position while walking document lines. Front-matter and fenced
/// code are mutually exclusive regions, so a single enum tracks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InFrontMatter,
    InCodeBlock,
}

/// Partitions document lines into title/content blocks.
///
/// YAML front-matter (between `---` delimiter lines) is dropped entirely,
/// delimiters included. Fenced code is carried verbatim into the enclosing
/// block's content, so a `# comment` line inside a fence never starts a new
/// block. Blocks whose trimmed content is empty are discarded.
pub fn split_into_blocks<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut title: Option<&str> = None;
    let mut buffer: Vec<&str> = Vec::new();
    let mut state = ScanState::Normal;

    for line in lines {
        match state {
            ScanState::Normal => {
                if line.trim() == FRONT_MATTER_DELIMITER {
                    state = ScanState::InFrontMatter;
                    continue;
                }
                if line.starts_with(CODE_FENCE) {
                    state = ScanState::InCodeBlock;
                    buffer.push(line);
                    continue;
                }
                if HEADING_RE.is_match(line) {
                    // Content seen before any heading belongs to the heading
                    // that closes it off.
                    flush(&mut blocks, title.unwrap_or(line), &buffer);
                    title = Some(line);
                    buffer.clear();
                } else {
                    buffer.push(line);
                }
            }
            ScanState::InFrontMatter => {
                if line.trim() == FRONT_MATTER_DELIMITER {
                    state = ScanState::Normal;
                }
            }
            ScanState::InCodeBlock => {
                buffer.push(line);
                if line.starts_with(CODE_FENCE) {
                    state = ScanState::Normal;
                }
            }
        }
    }

    flush(&mut blocks, title.unwrap_or(NO_TITLE), &buffer);
    blocks
}

fn flush(blocks: &mut Vec<Block>, title: &str, buffer: &[&str]) {
    let content = buffer.join("\n");
    let content = content.trim();
    if !content.is_empty() {
        blocks.push(Block {
            title: title.to_string(),
            content: content.to_string(),
        });
    }
}
