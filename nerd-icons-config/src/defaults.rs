//! Default values for the `config:` block.

// Glyphs
pub fn fallback_icon() -> String {
    "\u{f0d59}".to_string() // nf-md-ghost_outline
}

// Ring (index) colors
pub fn ring_color_active() -> String {
    "#875fff".to_string()
}

pub fn ring_color_inactive() -> String {
    "#45475a".to_string()
}

// Icon and alert colors
pub fn icon_color() -> String {
    "#cdd6f4".to_string()
}

pub fn alert_color() -> String {
    "#f38ba8".to_string()
}

pub fn prefer_host_icon() -> bool {
    true
}

// Default config file location, relative to the home directory.
pub const CONFIG_DIR_NAME: &str = "nerd-icons";
pub const CONFIG_FILE_NAME: &str = "config.yml";
