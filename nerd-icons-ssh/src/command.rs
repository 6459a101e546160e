//! SSH/mosh command-line parsing.

use crate::hostname::normalize_hostname;

/// Program names treated as remote-login commands.
pub const REMOTE_COMMANDS: [&str; 4] = ["ssh", "slogin", "mosh", "mosh-client"];

/// ssh options that consume the following argument as their value.
const OPTIONS_WITH_ARG: [&str; 20] = [
    "-b", // bind address
    "-c", // cipher spec
    "-D", // dynamic port forward
    "-E", // log file
    "-F", // config file
    "-I", // PKCS#11 shared library
    "-i", // identity file
    "-J", // jump host
    "-L", // local port forward
    "-l", // login name
    "-m", // MAC spec
    "-O", // control command
    "-o", // option
    "-p", // port
    "-Q", // query
    "-R", // remote port forward
    "-S", // control socket
    "-W", // stdio forward
    "-w", // tunnel device
    "-B", // bind interface
];

/// Split a command line string into arguments.
///
/// Quote-aware; input that is not valid shell syntax (an unbalanced quote,
/// say) falls back to plain whitespace splitting.
pub fn split_command_line(line: &str) -> Vec<String> {
    shell_words::split(line)
        .unwrap_or_else(|_| line.split_whitespace().map(String::from).collect())
}

/// Extract the normalized target host from a command line string.
pub fn extract_host_from_str(line: &str) -> Option<String> {
    extract_host(&split_command_line(line))
}

/// Extract the normalized target host from an argument vector.
///
/// Returns `None` unless `argv[0]`'s basename is one of [`REMOTE_COMMANDS`]
/// and a positional argument follows the options.
///
/// ```
/// use nerd_icons_ssh::extract_host;
///
/// let argv = ["ssh", "-i", "~/.ssh/key", "-p", "2222", "server.local"];
/// assert_eq!(extract_host(&argv).as_deref(), Some("server.local"));
/// assert_eq!(extract_host(&["vim", "file.txt"]), None);
/// ```
pub fn extract_host<S: AsRef<str>>(argv: &[S]) -> Option<String> {
    let (program, args) = argv.split_first()?;
    let program = program.as_ref();
    let name = program.rsplit('/').next().unwrap_or(program);
    if !REMOTE_COMMANDS.contains(&name) {
        return None;
    }

    let target = first_positional(args)?;
    let host = normalize_hostname(target);
    log::trace!("Remote target {:?} → host {:?}", target, host);
    (!host.is_empty()).then_some(host)
}

/// Find the first non-option argument, skipping options and their values.
fn first_positional<S: AsRef<str>>(args: &[S]) -> Option<&str> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();

        if arg == "--" {
            return args.get(i + 1).map(AsRef::as_ref);
        }

        if !arg.starts_with('-') {
            return Some(arg);
        }

        i += option_width(arg);
    }
    None
}

/// Number of arguments an option occupies.
fn option_width(arg: &str) -> usize {
    if OPTIONS_WITH_ARG.contains(&arg) {
        // `-p 2222`
        return 2;
    }
    // `-p2222` carries its value; any other `-x` is a plain flag
    1
}
