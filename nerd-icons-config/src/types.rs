//! Typed configuration model produced by the parser.
//!
//! Values are built once per load and never mutated afterwards; the reload
//! cache hands them out behind an `Arc`.

use crate::defaults;
use crate::ordered_map::OrderedMap;
use serde::Serialize;

/// Maximum accepted config file size in bytes (1 MiB).
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Maximum length, in characters, of a title regex or host pattern.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Global settings from the `config:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalSettings {
    /// Icon used when no tier matches
    pub fallback_icon: String,
    /// Show the window name next to the icon
    pub show_name: bool,
    /// Display the process name instead of the window name
    pub use_process_name: bool,
    /// Let a detected remote host override every other tier
    pub prefer_host_icon: bool,
    /// Ring color of the active window
    pub ring_color_active: String,
    /// Ring color of inactive windows
    pub ring_color_inactive: String,
    pub icon_color: String,
    pub alert_color: String,
    /// Glyph appended when a window holds more than one pane
    pub multi_pane_icon: Option<String>,
    /// Layout name → glyph, from `layout-glyphs:` (or the legacy `layout-glyps:`)
    pub layout_glyphs: OrderedMap<String>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            fallback_icon: defaults::fallback_icon(),
            show_name: false,
            use_process_name: false,
            prefer_host_icon: defaults::prefer_host_icon(),
            ring_color_active: defaults::ring_color_active(),
            ring_color_inactive: defaults::ring_color_inactive(),
            icon_color: defaults::icon_color(),
            alert_color: defaults::alert_color(),
            multi_pane_icon: None,
            layout_glyphs: OrderedMap::new(),
        }
    }
}

impl GlobalSettings {
    /// Glyph for a multiplexer layout name such as `main-vertical`.
    ///
    /// Exact key first, then a case-insensitive scan.
    pub fn layout_glyph(&self, layout: &str) -> Option<&str> {
        self.layout_glyphs
            .get(layout)
            .or_else(|| self.layout_glyphs.find_ignore_case(layout).map(|(_, v)| v))
            .map(String::as_str)
    }
}

/// Per-entry color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryColors {
    #[serde(rename = "ring-color", skip_serializing_if = "Option::is_none")]
    pub ring: Option<String>,
    #[serde(rename = "icon-color", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "alert-color", skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

/// An entry written as a nested block rather than a bare icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailedEntry {
    /// `None` when the block has no `icon:` key; resolves to the fallback icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub colors: EntryColors,
    /// Regex → icon, from a `title:` sub-block. Only populated for `icons:` entries.
    #[serde(rename = "title", skip_serializing_if = "OrderedMap::is_empty")]
    pub title_patterns: OrderedMap<String>,
}

/// Value of an `icons:` or `hosts:` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IconEntry {
    /// `nvim: ""`
    Scalar(String),
    /// A nested block with `icon`, colors and (for processes) title patterns
    Detailed(DetailedEntry),
}

impl IconEntry {
    /// The configured icon, if any.
    pub fn icon(&self) -> Option<&str> {
        match self {
            IconEntry::Scalar(icon) => Some(icon),
            IconEntry::Detailed(entry) => entry.icon.as_deref(),
        }
    }

    /// The configured icon, or `fallback` for a detailed entry without one.
    pub fn icon_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.icon().unwrap_or(fallback)
    }

    /// Color overrides; `None` for scalar entries.
    pub fn colors(&self) -> Option<&EntryColors> {
        match self {
            IconEntry::Scalar(_) => None,
            IconEntry::Detailed(entry) => Some(&entry.colors),
        }
    }

    /// Title sub-patterns, when the entry declares any.
    pub fn title_patterns(&self) -> Option<&OrderedMap<String>> {
        match self {
            IconEntry::Detailed(entry) if !entry.title_patterns.is_empty() => {
                Some(&entry.title_patterns)
            }
            _ => None,
        }
    }
}

/// Complete parsed configuration from all sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedConfiguration {
    #[serde(rename = "config")]
    pub settings: GlobalSettings,
    /// Process name → entry. Keys keep source case; matching ignores case.
    pub icons: OrderedMap<IconEntry>,
    /// TUI title keyword → icon
    pub title_icons: OrderedMap<String>,
    /// Session keyword → icon
    pub sessions: OrderedMap<String>,
    /// Host name or glob → entry
    pub hosts: OrderedMap<IconEntry>,
}
