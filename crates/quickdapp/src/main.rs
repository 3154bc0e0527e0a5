//! QuickDapp CLI - Web3 dApp scaffolding
//!
//! This is the main entry point for the `quickdapp` command-line interface.

mod banner;
mod commands;
mod output;
mod version;

use quickdapp_scaffold::ParsedArgs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
QuickDapp CLI - Web3 dApp starter template

Usage:
  quickdapp <project-name>     Create a new project
  quickdapp .                  Create in the current directory
  quickdapp ./                 Create in the current directory
  quickdapp                    Interactive mode

Options:
  --pm <manager>               Package manager (pnpm|npm|yarn)
  --help, -h                   Show help
  --version, -v                Show version

Examples:
  quickdapp my-awesome-dapp
  quickdapp . --pm pnpm
  quickdapp my-project --pm yarn
";

#[tokio::main]
async fn main() {
    let args = ParsedArgs::parse(std::env::args().skip(1));

    init_tracing();

    if args.help {
        println!("{USAGE}");
        return;
    }

    if args.version {
        println!("{}", version::VersionInfo::current());
        return;
    }

    if let Err(e) = commands::create::run(args).await {
        eprintln!();
        output::error(&format!("{e:#}"));
        eprintln!();
        output::warning("Try the following:");
        eprintln!("   - Check your internet connection");
        eprintln!("   - Ensure the required tools (git, forge) are installed");
        eprintln!("   - Run the command again");
        std::process::exit(1);
    }
}

/// Initialize tracing
///
/// Interactive output is the primary surface, so the default level is
/// `warn`; QUICKDAPP_LOG or RUST_LOG override it for diagnostics.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUICKDAPP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
