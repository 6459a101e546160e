//! Session tier: keywords in the tmux session name.

use super::result::{ResolutionResult, ResolutionSource};
use nerd_icons_config::OrderedMap;

/// Split the lowercased session name on anything non-alphanumeric and look
/// each token up, exactly first and then ignoring key case.
pub(crate) fn match_session(
    session: &str,
    sessions: &OrderedMap<String>,
) -> Option<ResolutionResult> {
    if session.is_empty() || sessions.is_empty() {
        return None;
    }
    let lower = session.to_lowercase();

    let icon = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .find_map(|token| {
            sessions
                .get(token)
                .or_else(|| sessions.find_ignore_case(token).map(|(_, icon)| icon))
        })?;

    Some(ResolutionResult::new(icon.as_str(), ResolutionSource::Session))
}
