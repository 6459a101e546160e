use clap::Parser;
use nerd_icons::cli::{self, Cli, LogLevelArg};
use std::io;

fn main() {
    let cli = Cli::parse();

    // Logging goes to a file in the temp dir; stdout belongs to tmux.
    nerd_icons::debug::init_log_bridge(cli.log_level.map(LogLevelArg::to_level_filter), cli.debug);

    let code = {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        cli::run(cli, &mut out, &mut err)
    };
    log::logger().flush();
    std::process::exit(code);
}
