//! Process tier: the pane's foreground process name against `icons:`.

use super::result::{ResolutionResult, ResolutionSource};
use nerd_icons_config::{GlobalSettings, IconEntry, OrderedMap};

pub(crate) fn match_process(
    process: &str,
    icons: &OrderedMap<IconEntry>,
    settings: &GlobalSettings,
) -> Option<ResolutionResult> {
    if process.is_empty() {
        return None;
    }
    let (_, entry) = icons.find_ignore_case(process)?;
    let color = entry.colors().and_then(|c| c.icon.as_deref());
    Some(
        ResolutionResult::new(
            entry.icon_or(&settings.fallback_icon),
            ResolutionSource::Process,
        )
        .with_icon_color(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerd_icons_config::{DetailedEntry, EntryColors};

    #[test]
    fn test_case_insensitive_lookup() {
        let settings = GlobalSettings::default();
        let mut icons = OrderedMap::new();
        icons.insert("Docker", IconEntry::Scalar("D".to_string()));
        let result = match_process("docker", &icons, &settings).unwrap();
        assert_eq!(result.icon, "D");
        assert_eq!(result.icon_color, None);
        assert_eq!(result.source, ResolutionSource::Process);
    }

    #[test]
    fn test_detailed_entry_colors_and_fallback_icon() {
        let settings = GlobalSettings::default();
        let mut icons = OrderedMap::new();
        icons.insert(
            "python",
            IconEntry::Detailed(DetailedEntry {
                icon: None,
                colors: EntryColors {
                    icon: Some("#3776ab".to_string()),
                    ..EntryColors::default()
                },
                ..DetailedEntry::default()
            }),
        );
        let result = match_process("python", &icons, &settings).unwrap();
        assert_eq!(result.icon, settings.fallback_icon);
        assert_eq!(result.icon_color.as_deref(), Some("#3776ab"));
        assert_eq!(result.source, ResolutionSource::Process);
    }

    #[test]
    fn test_unknown_or_empty_process() {
        let settings = GlobalSettings::default();
        let icons = OrderedMap::new();
        assert!(match_process("zsh", &icons, &settings).is_none());
        assert!(match_process("", &icons, &settings).is_none());
    }
}
