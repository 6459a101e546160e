//! Command-line interface for nerd-icons.
//!
//! [`run`] executes a parsed [`Cli`] against injected output sinks and
//! returns the process exit code, so every subcommand can be exercised
//! without spawning the binary.

use crate::resolver::{IconResolver, ResolveRequest};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use nerd_icons_config::{ConfigCache, ConfigError, default_config_path, expand_tilde, load};
use nerd_icons_ssh::{ForegroundLookup, ProcFsLookup, extract_host, extract_host_from_str};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Exit code for any failure without a more specific code (and for `host`
/// when no host was detected).
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NOT_FOUND: i32 = 2;
pub const EXIT_TOO_LARGE: i32 = 3;
pub const EXIT_PARSE: i32 = 4;

/// nerd-icons - Resolve Nerd Font icons for tmux windows
#[derive(Parser)]
#[command(name = "nerd-icons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set debug log level (overrides RUST_LOG and DEBUG_LEVEL)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Mirror log output to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the icon for a window
    Resolve(ResolveArgs),

    /// Check a config file and print a summary
    Validate {
        /// Config file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print a parsed config file as JSON
    Dump {
        /// Config file to dump
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the remote host of an ssh/mosh command line
    Host {
        /// Look up the foreground command of this pane instead
        #[arg(long, value_name = "PID", conflicts_with = "args")]
        pane_pid: Option<u32>,

        /// Command line, e.g. `ssh -p 2222 user@box`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Foreground process name
    #[arg(short, long, default_value = "")]
    pub process: String,

    /// Window/pane title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// tmux session name
    #[arg(short, long, default_value = "")]
    pub session: String,

    /// Full command line, for remote host detection
    #[arg(short, long)]
    pub cmdline: Option<String>,

    /// Pane pid, to read the foreground command line
    #[arg(long, value_name = "PID")]
    pub pane_pid: Option<u32>,

    /// Config file (default: ~/.config/nerd-icons/config.yml)
    #[arg(long, value_name = "PATH", env = "NERD_ICONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print only the icon instead of JSON
    #[arg(long)]
    pub simple: bool,
}

impl ResolveArgs {
    fn request(&self) -> ResolveRequest {
        ResolveRequest {
            process: self.process.clone(),
            title: self.title.clone(),
            session: self.session.clone(),
            cmdline: self.cmdline.clone(),
            pane_pid: self.pane_pid,
        }
    }
}

/// Execute `cli`, writing normal output to `out` and errors to `err`.
pub fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> i32 {
    run_with_lookup(cli, &ProcFsLookup, out, err)
}

/// [`run`] with a custom foreground lookup.
pub fn run_with_lookup<L: ForegroundLookup + Clone>(
    cli: Cli,
    lookup: &L,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let outcome = match cli.command {
        Commands::Resolve(args) => resolve(&args, lookup, out),
        Commands::Validate { file } => validate(&file, out),
        Commands::Dump { file } => dump(&file, out),
        Commands::Host { pane_pid, args } => host(pane_pid, &args, lookup, out),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            let _ = writeln!(err, "Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

/// Map an error to the exit code of the [`ConfigError`] it wraps, if any.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ConfigError>() {
        Some(ConfigError::NotFound { .. }) => EXIT_NOT_FOUND,
        Some(ConfigError::TooLarge { .. }) => EXIT_TOO_LARGE,
        Some(ConfigError::Parse { .. }) => EXIT_PARSE,
        None => EXIT_FAILURE,
    }
}

fn resolve<L: ForegroundLookup + Clone>(
    args: &ResolveArgs,
    lookup: &L,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    let path = args.config.clone().unwrap_or_else(default_config_path);
    let cache = ConfigCache::new();
    let resolver = IconResolver::with_lookup(lookup.clone());
    let result = resolver.resolve_from_path(&cache, &path, &args.request())?;

    if args.simple {
        writeln!(out, "{}", result.icon)?;
    } else {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    }
    Ok(EXIT_OK)
}

fn validate(file: &Path, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = load(file)?;
    writeln!(out, "Config valid: {}", expand_tilde(file).display())?;
    writeln!(out, "  Icons:         {}", config.icons.len())?;
    writeln!(out, "  Title icons:   {}", config.title_icons.len())?;
    writeln!(out, "  Sessions:      {}", config.sessions.len())?;
    writeln!(out, "  Hosts:         {}", config.hosts.len())?;
    writeln!(
        out,
        "  Layout glyphs: {}",
        config.settings.layout_glyphs.len()
    )?;
    Ok(EXIT_OK)
}

fn dump(file: &Path, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = load(file)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    writeln!(out, "{json}")?;
    Ok(EXIT_OK)
}

fn host<L: ForegroundLookup>(
    pane_pid: Option<u32>,
    args: &[String],
    lookup: &L,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    let detected = match pane_pid {
        Some(pid) => extract_host_from_str(&lookup.foreground_command_line(pid).join(" ")),
        // `host "ssh -p 22 box"` is split like a shell would
        None => match args {
            [line] => extract_host_from_str(line),
            argv => extract_host(argv),
        },
    };

    match detected {
        Some(host) => {
            writeln!(out, "{host}")?;
            Ok(EXIT_OK)
        }
        None => Ok(EXIT_FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "nerd-icons",
            "resolve",
            "-p",
            "nvim",
            "--title",
            "README.md",
            "--pane-pid",
            "42",
            "--simple",
        ])
        .unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.process, "nvim");
        assert_eq!(args.title, "README.md");
        assert_eq!(args.session, "");
        assert_eq!(args.pane_pid, Some(42));
        assert!(args.simple);
    }

    #[test]
    fn test_cli_host_keeps_hyphen_args() {
        let cli = Cli::try_parse_from(["nerd-icons", "host", "ssh", "-p", "22", "box"]).unwrap();
        let Commands::Host { pane_pid, args } = cli.command else {
            panic!("expected host");
        };
        assert_eq!(pane_pid, None);
        assert_eq!(args, vec!["ssh", "-p", "22", "box"]);
    }

    #[test]
    fn test_global_log_level_after_subcommand() {
        let cli =
            Cli::try_parse_from(["nerd-icons", "validate", "x.yml", "--log-level", "debug"]).unwrap();
        assert_eq!(
            cli.log_level.map(LogLevelArg::to_level_filter),
            Some(log::LevelFilter::Debug)
        );
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(ConfigError::NotFound {
            path: PathBuf::from("x"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(exit_code_for(&not_found), EXIT_NOT_FOUND);
        let parse = anyhow::Error::new(ConfigError::parse_at("bad", 3));
        assert_eq!(exit_code_for(&parse), EXIT_PARSE);
        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), EXIT_FAILURE);
    }
}
