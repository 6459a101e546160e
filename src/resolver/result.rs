//! Resolution request and result types.

use serde::Serialize;
use std::fmt;

/// Which tier produced a [`ResolutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Host,
    TitlePattern,
    TitleIcon,
    Process,
    Session,
    Fallback,
}

impl ResolutionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionSource::Host => "host",
            ResolutionSource::TitlePattern => "title_pattern",
            ResolutionSource::TitleIcon => "title_icon",
            ResolutionSource::Process => "process",
            ResolutionSource::Session => "session",
            ResolutionSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The icon chosen for a window plus any color overrides.
///
/// Absent colors mean "use the global default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub icon: String,
    pub ring_color: Option<String>,
    pub icon_color: Option<String>,
    pub alert_color: Option<String>,
    pub source: ResolutionSource,
}

impl ResolutionResult {
    /// A bare icon with no color overrides.
    pub fn new(icon: impl Into<String>, source: ResolutionSource) -> Self {
        Self {
            icon: icon.into(),
            ring_color: None,
            icon_color: None,
            alert_color: None,
            source,
        }
    }

    pub fn with_icon_color(mut self, color: Option<&str>) -> Self {
        self.icon_color = color.map(String::from);
        self
    }
}

/// What tmux knows about a window at render time.
///
/// Empty strings mean "unknown". `cmdline` takes precedence over `pane_pid`
/// for host detection; the pid is only consulted when no command line is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub process: String,
    pub title: String,
    pub session: String,
    pub cmdline: Option<String>,
    pub pane_pid: Option<u32>,
}

impl ResolveRequest {
    pub fn new(process: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    pub fn with_cmdline(mut self, cmdline: impl Into<String>) -> Self {
        self.cmdline = Some(cmdline.into());
        self
    }

    pub fn with_pane_pid(mut self, pid: u32) -> Self {
        self.pane_pid = Some(pid);
        self
    }
}
