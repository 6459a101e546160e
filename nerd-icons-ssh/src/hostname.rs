//! Hostname normalization for remote targets.

/// Normalize an ssh target spec to a bare lowercase hostname.
///
/// Strips a `user@` prefix, unwraps a bracketed IPv6 literal and drops a
/// trailing `:port`. An unbracketed IPv6 literal cannot be told apart from
/// `host:port` and is cut at its first colon.
pub fn normalize_hostname(target: &str) -> String {
    let host = target
        .split_once('@')
        .map_or(target, |(_, rest)| rest)
        .trim();

    let host = if let Some(inner) = host.strip_prefix('[') {
        // Malformed `[host` keeps everything after the bracket
        inner.split_once(']').map_or(inner, |(addr, _)| addr)
    } else {
        host.split_once(':').map_or(host, |(name, _)| name)
    };

    host.to_lowercase()
}
