//! Six-tier icon resolution.
//!
//! Tiers are tried strictly in order and the first match wins:
//!
//! 1. Host: a remote host detected from the pane's command line, matched
//!    against `hosts:` (only when `prefer-host-icon` is on)
//! 2. Title pattern: regexes under an `icons:` entry's `title:` block
//! 3. Title icon: keywords from `title_icons:`
//! 4. Process: the foreground process name against `icons:`
//! 5. Session: keywords in the session name
//! 6. Fallback: `fallback-icon`
//!
//! Matching itself is a pure function of the configuration and the request
//! ([`resolve_with_host`]). [`IconResolver`] adds host detection through a
//! [`ForegroundLookup`] and config loading through a [`ConfigCache`].

mod host;
mod process;
mod result;
mod session;
mod title;

pub use result::{ResolutionResult, ResolutionSource, ResolveRequest};

use nerd_icons_config::{ConfigCache, ConfigError, ParsedConfiguration};
use nerd_icons_ssh::{ForegroundLookup, ProcFsLookup, extract_host_from_str};
use std::path::Path;

/// Resolve an icon given an already detected host (or none).
///
/// Never fails: when no tier matches the fallback icon is returned.
pub fn resolve_with_host(
    config: &ParsedConfiguration,
    host: Option<&str>,
    request: &ResolveRequest,
) -> ResolutionResult {
    let settings = &config.settings;

    let result = host
        .filter(|_| settings.prefer_host_icon)
        .and_then(|h| host::match_host(h, &config.hosts, settings))
        .or_else(|| title::match_title_pattern(&request.title, &config.icons))
        .or_else(|| title::match_title_icon(&request.title, &config.title_icons))
        .or_else(|| process::match_process(&request.process, &config.icons, settings))
        .or_else(|| session::match_session(&request.session, &config.sessions))
        .unwrap_or_else(|| {
            ResolutionResult::new(settings.fallback_icon.as_str(), ResolutionSource::Fallback)
        });

    log::debug!(
        "Resolved process={:?} title={:?} session={:?} host={:?} via {}",
        request.process,
        request.title,
        request.session,
        host,
        result.source
    );
    result
}

/// Resolver facade owning the foreground command-line lookup.
#[derive(Debug, Clone, Default)]
pub struct IconResolver<L = ProcFsLookup> {
    lookup: L,
}

impl IconResolver<ProcFsLookup> {
    /// Resolver reading foreground command lines from `/proc`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: ForegroundLookup> IconResolver<L> {
    /// Resolver using a custom lookup (a closure works).
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Detect the remote host for a request.
    ///
    /// An explicit `cmdline` wins, even when empty; the pane pid is only
    /// used when no command line was given. The foreground argv is joined
    /// with single spaces and re-split like an explicit command line.
    pub fn detect_host(&self, request: &ResolveRequest) -> Option<String> {
        match (&request.cmdline, request.pane_pid) {
            (Some(line), _) => extract_host_from_str(line),
            (None, Some(pid)) => {
                let argv = self.lookup.foreground_command_line(pid);
                log::trace!("Foreground argv for pane {pid}: {:?}", argv);
                extract_host_from_str(&argv.join(" "))
            }
            (None, None) => None,
        }
    }

    /// Resolve against an already loaded configuration.
    ///
    /// Host detection is skipped entirely when `prefer-host-icon` is off.
    pub fn resolve(&self, config: &ParsedConfiguration, request: &ResolveRequest) -> ResolutionResult {
        let host = if config.settings.prefer_host_icon {
            self.detect_host(request)
        } else {
            None
        };
        resolve_with_host(config, host.as_deref(), request)
    }

    /// Load (or reuse) the configuration at `path` through `cache`, then resolve.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from loading when nothing usable is cached.
    pub fn resolve_from_path(
        &self,
        cache: &ConfigCache,
        path: impl AsRef<Path>,
        request: &ResolveRequest,
    ) -> Result<ResolutionResult, ConfigError> {
        let config = cache.get(path)?;
        Ok(self.resolve(&config, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerd_icons_config::parse;

    const CONFIG: &str = "\
config:
  fallback-icon: F
icons:
  zsh: Z
  nvim:
    icon: N
    icon-color: \"#57a143\"
    title:
      \"^git\": G
title_icons:
  htop: H
sessions:
  work: W
hosts:
  \"*.local\": L
";

    fn config() -> ParsedConfiguration {
        parse(CONFIG).unwrap()
    }

    fn no_lookup() -> IconResolver<fn(u32) -> Vec<String>> {
        IconResolver::with_lookup(|_: u32| Vec::new())
    }

    #[test]
    fn test_tier_order() {
        let config = config();
        let resolver = no_lookup();

        let req = ResolveRequest::new("zsh")
            .with_title("htop")
            .with_session("work")
            .with_cmdline("ssh box.local");
        assert_eq!(resolver.resolve(&config, &req).source, ResolutionSource::Host);

        let req = ResolveRequest::new("zsh").with_title("git log").with_session("work");
        assert_eq!(
            resolver.resolve(&config, &req).source,
            ResolutionSource::TitlePattern
        );

        let req = ResolveRequest::new("zsh").with_title("htop").with_session("work");
        assert_eq!(resolver.resolve(&config, &req).source, ResolutionSource::TitleIcon);

        let req = ResolveRequest::new("zsh").with_session("work");
        assert_eq!(resolver.resolve(&config, &req).source, ResolutionSource::Process);

        let req = ResolveRequest::new("bash").with_session("work");
        assert_eq!(resolver.resolve(&config, &req).source, ResolutionSource::Session);

        let req = ResolveRequest::new("bash");
        let result = resolver.resolve(&config, &req);
        assert_eq!(result.source, ResolutionSource::Fallback);
        assert_eq!(result.icon, "F");
    }

    #[test]
    fn test_explicit_cmdline_beats_pid() {
        let resolver = IconResolver::with_lookup(|_: u32| vec!["ssh".to_string(), "x.local".to_string()]);
        let req = ResolveRequest::new("zsh").with_cmdline("").with_pane_pid(1);
        assert_eq!(resolver.detect_host(&req), None);

        let req = ResolveRequest::new("zsh").with_pane_pid(1);
        assert_eq!(resolver.detect_host(&req).as_deref(), Some("x.local"));
    }

    #[test]
    fn test_pid_argv_is_joined_then_split() {
        let resolver = IconResolver::with_lookup(|_: u32| {
            ["ssh", "-o", "ProxyCommand nc %h %p", "target"]
                .map(String::from)
                .to_vec()
        });
        let req = ResolveRequest::new("ssh").with_pane_pid(3);
        assert_eq!(resolver.detect_host(&req).as_deref(), Some("nc"));
    }

    #[test]
    fn test_host_unmatched_falls_through() {
        let config = config();
        let req = ResolveRequest::new("zsh").with_cmdline("ssh remote.example");
        let result = no_lookup().resolve(&config, &req);
        assert_eq!(result.source, ResolutionSource::Process);
        assert_eq!(result.icon, "Z");
    }

    #[test]
    fn test_prefer_host_icon_off_skips_lookup() {
        let mut config = config();
        config.settings.prefer_host_icon = false;
        let resolver = IconResolver::with_lookup(|_: u32| -> Vec<String> {
            panic!("lookup must not run when host icons are disabled")
        });
        let req = ResolveRequest::new("zsh").with_pane_pid(7);
        assert_eq!(resolver.resolve(&config, &req).source, ResolutionSource::Process);
    }
}
