//! Line-oriented block scanning over an indexed line buffer.
//!
//! A block starts at a `label:` line. The first content line after it fixes
//! the block's base indent; lines at that indent are entries, deeper lines
//! belong to nested blocks, and the first shallower line ends the block.
//! Nested blocks are parsed by explicit recursion that returns the index of
//! the first line it did not consume.

use super::scalar::{indent_of, is_inline_value, normalize_key, strip_value};
use crate::ordered_map::OrderedMap;

/// A value inside a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Scalar(String),
    Map(NodeMap),
}

/// A value plus the 0-based index of the line that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Located<T> {
    pub value: T,
    pub line: usize,
}

pub(crate) type NodeMap = OrderedMap<Located<Node>>;

/// A `key: value` line at a block's base indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockEntry {
    pub key: String,
    /// `None` when the entry opens a nested block.
    pub value: Option<String>,
    pub line: usize,
    pub indent: usize,
}

fn is_skippable(stripped: &str) -> bool {
    stripped.is_empty() || stripped.starts_with('#')
}

/// Split a stripped `key: value` line.
///
/// Returns `None` (skip) for lines without a colon or with an empty key.
pub(crate) fn split_entry(stripped: &str) -> Option<(String, Option<String>)> {
    let (key_part, rest) = stripped.split_once(':')?;
    let key = normalize_key(key_part);
    if key.is_empty() {
        return None;
    }
    let rest = rest.trim();
    let value = is_inline_value(rest).then(|| strip_value(rest));
    Some((key, value))
}

fn is_block_start(stripped: &str, label: &str) -> bool {
    stripped
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|tail| tail.is_empty() || tail.starts_with(' '))
}

/// Collect the top-level entries of the first block labelled `label`.
pub(crate) fn block_entries(lines: &[&str], label: &str) -> Vec<BlockEntry> {
    let Some(start) = lines
        .iter()
        .position(|raw| is_block_start(raw.trim(), label))
    else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut base_indent: Option<usize> = None;

    for (idx, raw) in lines.iter().enumerate().skip(start + 1) {
        let stripped = raw.trim();
        if is_skippable(stripped) {
            continue;
        }

        let indent = indent_of(raw);
        let base = *base_indent.get_or_insert(indent);

        if indent < base {
            break;
        }
        if indent != base {
            continue;
        }

        match split_entry(stripped) {
            Some((key, value)) => entries.push(BlockEntry {
                key,
                value,
                line: idx,
                indent,
            }),
            None => log::warn!(
                "Skipping malformed line {} in '{}' block: {:?}",
                idx + 1,
                label,
                stripped
            ),
        }
    }

    entries
}

/// Parse the block nested under a key whose line has `parent_indent`.
///
/// Returns the parsed map and the index of the first unconsumed line.
/// Keys whose own nested block is empty are dropped.
pub(crate) fn parse_nested(lines: &[&str], start: usize, parent_indent: usize) -> (NodeMap, usize) {
    let mut map = NodeMap::new();
    let mut idx = start;
    let mut base_indent: Option<usize> = None;

    while idx < lines.len() {
        let raw = lines[idx];
        let stripped = raw.trim();
        if is_skippable(stripped) {
            idx += 1;
            continue;
        }

        let indent = indent_of(raw);
        if indent <= parent_indent {
            break;
        }

        let base = *base_indent.get_or_insert(indent);
        if indent > base {
            // Orphaned deeper line under an inline value
            idx += 1;
            continue;
        }

        let Some((key, value)) = split_entry(stripped) else {
            log::warn!("Skipping malformed nested line {}: {:?}", idx + 1, stripped);
            idx += 1;
            continue;
        };

        match value {
            Some(value) => {
                map.insert(
                    key,
                    Located {
                        value: Node::Scalar(value),
                        line: idx,
                    },
                );
                idx += 1;
            }
            None => {
                let line = idx;
                let (nested, next) = parse_nested(lines, idx + 1, indent);
                if !nested.is_empty() {
                    map.insert(
                        key,
                        Located {
                            value: Node::Map(nested),
                            line,
                        },
                    );
                }
                idx = next;
            }
        }
    }

    (map, idx)
}
