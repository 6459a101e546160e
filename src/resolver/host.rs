//! Host tier: a detected remote host matched against `hosts:` entries.

use super::result::{ResolutionResult, ResolutionSource};
use crate::glob::glob_match;
use nerd_icons_config::{GlobalSettings, IconEntry, OrderedMap};

/// Match `host` against each entry in declaration order.
///
/// An entry matches when its lowercased key equals the host or, as a glob,
/// matches it. Detailed entries carry their colors; `ring-color` was already
/// merged with the `index-color` alias at parse time.
pub(crate) fn match_host(
    host: &str,
    hosts: &OrderedMap<IconEntry>,
    settings: &GlobalSettings,
) -> Option<ResolutionResult> {
    if host.is_empty() {
        return None;
    }
    let host = host.to_lowercase();

    let (pattern, entry) = hosts.iter().find(|(pattern, _)| {
        let pattern = pattern.to_lowercase();
        pattern == host || glob_match(&pattern, &host)
    })?;
    log::debug!("Host {:?} matched entry {:?}", host, pattern);

    let mut result = ResolutionResult::new(
        entry.icon_or(&settings.fallback_icon),
        ResolutionSource::Host,
    );
    if let Some(colors) = entry.colors() {
        result.ring_color = colors.ring.clone();
        result.icon_color = colors.icon.clone();
        result.alert_color = colors.alert.clone();
    }
    Some(result)
}
