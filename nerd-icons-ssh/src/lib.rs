//! Remote-login detection for nerd-icons.
//!
//! Given the command line running in a pane, works out whether it is an
//! `ssh`/`slogin`/`mosh` session and which host it targets, so the resolver
//! can show a per-host icon.
//!
//! - [`extract_host`] / [`extract_host_from_str`]: option-aware target detection
//! - [`normalize_hostname`]: strips `user@`, IPv6 brackets and ports
//! - [`ForegroundLookup`]: platform seam returning the pane's foreground argv

pub mod command;
pub mod foreground;
pub mod hostname;

pub use command::{REMOTE_COMMANDS, extract_host, extract_host_from_str, split_command_line};
pub use foreground::{ForegroundLookup, ProcFsLookup};
pub use hostname::normalize_hostname;
