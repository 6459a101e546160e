//! Foreground process command-line lookup.
//!
//! tmux reports the pane's shell pid, but the interesting process is whatever
//! owns the terminal's foreground process group (an `ssh` started from that
//! shell, for instance). On Linux this is read from `/proc`; other platforms
//! report nothing.

/// Returns the argv of the process in the foreground of a pane.
///
/// Implementations never fail: any error yields an empty vector.
pub trait ForegroundLookup {
    fn foreground_command_line(&self, pane_pid: u32) -> Vec<String>;
}

impl<F> ForegroundLookup for F
where
    F: Fn(u32) -> Vec<String>,
{
    fn foreground_command_line(&self, pane_pid: u32) -> Vec<String> {
        self(pane_pid)
    }
}

/// `/proc` based lookup (Linux only).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcFsLookup;

impl ForegroundLookup for ProcFsLookup {
    #[cfg(target_os = "linux")]
    fn foreground_command_line(&self, pane_pid: u32) -> Vec<String> {
        let Ok(stat) = std::fs::read_to_string(format!("/proc/{pane_pid}/stat")) else {
            log::debug!("No /proc stat for pane pid {pane_pid}");
            return Vec::new();
        };
        let Some(tpgid) = foreground_group(&stat) else {
            return Vec::new();
        };
        match std::fs::read(format!("/proc/{tpgid}/cmdline")) {
            Ok(raw) => split_cmdline(&raw),
            Err(e) => {
                log::debug!("Cannot read cmdline of foreground group {tpgid}: {e}");
                Vec::new()
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn foreground_command_line(&self, _pane_pid: u32) -> Vec<String> {
        Vec::new()
    }
}

/// Extract `tpgid` from the contents of `/proc/<pid>/stat`.
///
/// Fields are counted after the last `)` so a command name containing spaces
/// or parentheses does not shift them.
pub(crate) fn foreground_group(stat: &str) -> Option<u32> {
    let (_, after_comm) = stat.rsplit_once(')')?;
    // state ppid pgrp session tty_nr tpgid
    let tpgid: i64 = after_comm.split_whitespace().nth(5)?.parse().ok()?;
    u32::try_from(tpgid).ok().filter(|&pid| pid > 0)
}

/// Split a NUL-separated `/proc/<pid>/cmdline`, dropping empty parts.
pub(crate) fn split_cmdline(raw: &[u8]) -> Vec<String> {
    raw.split(|&b| b == 0)
        .filter(|part| !part.is_empty())
        .map(|part| String::from_utf8_lossy(part).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_group_simple() {
        let stat = "1234 (zsh) S 1 1234 1234 34816 5678 4194304 0 0";
        assert_eq!(foreground_group(stat), Some(5678));
    }

    #[test]
    fn test_foreground_group_comm_with_spaces() {
        let stat = "1234 (my (odd) shell) S 1 1234 1234 34816 4321 4194304";
        assert_eq!(foreground_group(stat), Some(4321));
    }

    #[test]
    fn test_foreground_group_no_terminal() {
        let stat = "1234 (daemon) S 1 1234 1234 0 -1 4194304";
        assert_eq!(foreground_group(stat), None);
        assert_eq!(foreground_group("garbage"), None);
    }

    #[test]
    fn test_split_cmdline() {
        let raw = b"ssh\0-p\02222\0host\0";
        assert_eq!(split_cmdline(raw), vec!["ssh", "-p", "2222", "host"]);
        assert!(split_cmdline(b"").is_empty());
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |pid: u32| vec![format!("pid-{pid}")];
        assert_eq!(lookup.foreground_command_line(7), vec!["pid-7"]);
    }

    #[test]
    fn test_proc_lookup_missing_pid_is_empty() {
        assert!(ProcFsLookup.foreground_command_line(u32::MAX).is_empty());
    }
}
