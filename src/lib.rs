// Library exports for testing and for embedding the resolver.
//
// Crate layout:
//   - `nerd-icons-config` parses and caches the user's config.yml
//   - `nerd-icons-ssh` finds the remote host in an ssh/mosh command line
//   - this crate matches a window against the config and hosts the CLI

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod glob;
pub mod resolver;

pub use resolver::{
    IconResolver, ResolutionResult, ResolutionSource, ResolveRequest, resolve_with_host,
};

pub use nerd_icons_config as config;
pub use nerd_icons_ssh as ssh;
