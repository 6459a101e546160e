//! Title tiers: per-process title regexes and the `title_icons:` keywords.

use super::result::{ResolutionResult, ResolutionSource};
use nerd_icons_config::{IconEntry, MAX_PATTERN_LENGTH, OrderedMap};
use regex::RegexBuilder;

/// Whether `c` can be part of a title token.
fn is_title_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

/// Tier 2: `title:` patterns of every `icons:` entry, in declaration order.
///
/// Patterns are case-insensitive and searched anywhere in the title. An
/// overlong or invalid pattern is skipped. The result inherits only the
/// owning entry's `icon-color`.
pub(crate) fn match_title_pattern(
    title: &str,
    icons: &OrderedMap<IconEntry>,
) -> Option<ResolutionResult> {
    if title.is_empty() {
        return None;
    }

    for (name, entry) in icons.iter() {
        let Some(patterns) = entry.title_patterns() else {
            continue;
        };
        for (pattern, icon) in patterns.iter() {
            if pattern.chars().count() > MAX_PATTERN_LENGTH {
                log::warn!("Skipping title pattern longer than {MAX_PATTERN_LENGTH} characters");
                continue;
            }
            let re = match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => re,
                Err(e) => {
                    log::warn!("Skipping invalid title pattern {:?}: {}", pattern, e);
                    continue;
                }
            };
            if re.is_match(title) {
                log::debug!("Title {:?} matched {} pattern {:?}", title, name, pattern);
                let color = entry.colors().and_then(|c| c.icon.as_deref());
                return Some(
                    ResolutionResult::new(icon.as_str(), ResolutionSource::TitlePattern)
                        .with_icon_color(color),
                );
            }
        }
    }
    None
}

/// Tier 3: keywords from `title_icons:` found in the title.
///
/// First each token of the lowercased title is looked up exactly, then every
/// keyword is checked as a case-insensitive substring.
pub(crate) fn match_title_icon(
    title: &str,
    title_icons: &OrderedMap<String>,
) -> Option<ResolutionResult> {
    if title.is_empty() || title_icons.is_empty() {
        return None;
    }
    let lower = title.to_lowercase();

    let by_token = lower
        .split(|c: char| !is_title_token_char(c))
        .filter(|token| !token.is_empty())
        .find_map(|token| title_icons.get(token));

    let icon = by_token.or_else(|| {
        title_icons
            .iter()
            .find(|(keyword, _)| lower.contains(&keyword.to_lowercase()))
            .map(|(_, icon)| icon)
    })?;

    Some(ResolutionResult::new(icon.as_str(), ResolutionSource::TitleIcon))
}
