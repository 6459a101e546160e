//! Restricted config parser.
//!
//! Supports exactly what the nerd-icons config format needs:
//!
//! - `key: value` pairs grouped under top-level `label:` blocks
//! - Indentation-based nesting, to any depth
//! - Inline ` #` comments and single/double quoted strings
//! - Boolean literals (`true/false`, `yes/no`, `on/off`, `1/0`)
//!
//! Anchors, multi-document streams, flow collections and tags are not
//! supported. Malformed lines are skipped; the only hard failure is a regex or
//! host pattern longer than [`MAX_PATTERN_LENGTH`].

mod block;
mod scalar;

pub use scalar::parse_bool;

use crate::error::{ConfigError, Result};
use crate::ordered_map::OrderedMap;
use crate::types::{
    DetailedEntry, GlobalSettings, IconEntry, MAX_PATTERN_LENGTH,
    ParsedConfiguration,
};
use block::{Located, Node, NodeMap, block_entries, parse_nested};

/// Both spellings are accepted; `layout-glyps` predates the fix and is still in the wild.
const LAYOUT_GLYPH_LABELS: [&str; 2] = ["layout-glyps", "layout-glyphs"];

/// Which section an entry comes from; only process entries carry title patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntrySection {
    Icons,
    Hosts,
}

impl EntrySection {
    fn label(self) -> &'static str {
        match self {
            EntrySection::Icons => "icons",
            EntrySection::Hosts => "hosts",
        }
    }
}

/// Parse configuration text.
///
/// # Errors
/// Returns [`ConfigError::Parse`] when a title regex or host pattern exceeds
/// [`MAX_PATTERN_LENGTH`] characters.
pub fn parse(text: &str) -> Result<ParsedConfiguration> {
    let lines = split_lines(text);

    let mut settings = parse_settings(&lines);
    let icons = parse_entry_section(&lines, EntrySection::Icons)?;
    let title_icons = parse_scalar_section(&lines, "title_icons");
    let sessions = parse_scalar_section(&lines, "sessions");
    let hosts = parse_entry_section(&lines, EntrySection::Hosts)?;

    for label in LAYOUT_GLYPH_LABELS {
        settings
            .layout_glyphs
            .extend(parse_scalar_section(&lines, label));
    }

    log::debug!(
        "Parsed config: {} icons, {} title icons, {} sessions, {} hosts, {} layout glyphs",
        icons.len(),
        title_icons.len(),
        sessions.len(),
        hosts.len(),
        settings.layout_glyphs.len()
    );

    Ok(ParsedConfiguration {
        settings,
        icons,
        title_icons,
        sessions,
        hosts,
    })
}

/// Split on `\r\n`, `\n` or a lone `\r`; a trailing terminator adds no empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(pos) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..pos]);
        let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + width..];
    }
    lines
}

fn parse_settings(lines: &[&str]) -> GlobalSettings {
    let mut settings = GlobalSettings::default();

    for entry in block_entries(lines, "config") {
        let Some(value) = entry.value else {
            continue;
        };
        let key = entry.key.to_lowercase().replace('-', "_");
        let has_value = !value.is_empty();

        match key.as_str() {
            "fallback_icon" if has_value => settings.fallback_icon = value,
            "show_name" => settings.show_name = parse_bool(&value),
            "use_process_name" => settings.use_process_name = parse_bool(&value),
            "prefer_host_icon" => settings.prefer_host_icon = parse_bool(&value),
            "ring_color_active" | "index_color_active" if has_value => {
                settings.ring_color_active = value
            }
            "ring_color_inactive" | "index_color_inactive" if has_value => {
                settings.ring_color_inactive = value
            }
            "icon_color" if has_value => settings.icon_color = value,
            "alert_color" if has_value => settings.alert_color = value,
            "multi_pane_icon" if has_value => settings.multi_pane_icon = Some(value),
            _ => log::trace!("Ignoring config key '{}'", entry.key),
        }
    }

    settings
}

/// Parse a section whose entries are icons or detailed blocks (`icons`, `hosts`).
fn parse_entry_section(lines: &[&str], section: EntrySection) -> Result<OrderedMap<IconEntry>> {
    let mut entries = OrderedMap::new();

    for entry in block_entries(lines, section.label()) {
        if section == EntrySection::Hosts {
            check_pattern_length(&entry.key, entry.line)?;
        }

        match entry.value {
            Some(icon) if icon.is_empty() => {
                log::warn!(
                    "Skipping '{}' in '{}': empty icon (line {})",
                    entry.key,
                    section.label(),
                    entry.line + 1
                );
            }
            Some(icon) => {
                entries.insert(entry.key, IconEntry::Scalar(icon));
            }
            None => {
                let (nested, _) = parse_nested(lines, entry.line + 1, entry.indent);
                if !nested.is_empty() {
                    let detailed = detailed_entry(&nested, section)?;
                    entries.insert(entry.key, IconEntry::Detailed(detailed));
                }
            }
        }
    }

    Ok(entries)
}

/// Normalise a detailed-entry field name: lowercase, `_` → `-`.
fn field_name(key: &str) -> String {
    key.to_lowercase().replace('_', "-")
}

fn detailed_entry(nested: &NodeMap, section: EntrySection) -> Result<DetailedEntry> {
    let mut entry = DetailedEntry::default();
    let mut index_color: Option<String> = None;

    for (key, located) in nested.iter() {
        let field = field_name(key);
        match (&located.value, field.as_str()) {
            (Node::Map(patterns), "title") if section == EntrySection::Icons => {
                entry.title_patterns = title_patterns(patterns)?;
            }
            (Node::Scalar(value), _) if value.is_empty() => {}
            (Node::Scalar(value), "icon") => entry.icon = Some(value.clone()),
            (Node::Scalar(value), "ring-color") => entry.colors.ring = Some(value.clone()),
            (Node::Scalar(value), "index-color") => index_color = Some(value.clone()),
            (Node::Scalar(value), "icon-color") => entry.colors.icon = Some(value.clone()),
            (Node::Scalar(value), "alert-color") => entry.colors.alert = Some(value.clone()),
            _ => log::trace!("Ignoring entry field '{key}'"),
        }
    }

    if entry.colors.ring.is_none() {
        entry.colors.ring = index_color;
    }

    Ok(entry)
}

fn title_patterns(patterns: &NodeMap) -> Result<OrderedMap<String>> {
    let mut result = OrderedMap::new();

    for (pattern, Located { value, line }) in patterns.iter() {
        check_pattern_length(pattern, *line)?;
        match value {
            Node::Scalar(icon) if !icon.is_empty() => {
                result.insert(pattern, icon.clone());
            }
            _ => log::warn!(
                "Skipping title pattern '{}' on line {}: expected an icon",
                pattern,
                line + 1
            ),
        }
    }

    Ok(result)
}

fn check_pattern_length(pattern: &str, line: usize) -> Result<()> {
    let len = pattern.chars().count();
    if len > MAX_PATTERN_LENGTH {
        return Err(ConfigError::parse_at(
            format!("Regex pattern too long ({len} chars, max {MAX_PATTERN_LENGTH})"),
            line + 1,
        ));
    }
    Ok(())
}

/// Parse a section of plain `keyword: icon` pairs; nested content is ignored.
fn parse_scalar_section(lines: &[&str], label: &str) -> OrderedMap<String> {
    block_entries(lines, label)
        .into_iter()
        .filter_map(|entry| {
            let value = entry.value?;
            (!value.is_empty()).then_some((entry.key, value))
        })
        .collect()
}
