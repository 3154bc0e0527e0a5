//! # quickdapp-scaffold
//!
//! Scaffolding library for the QuickDapp CLI providing:
//! - Argument parsing for the `quickdapp` command surface
//! - Project target resolution and directory-state checks
//! - Package manager metadata and availability probes
//! - External process execution behind a single trait seam
//! - The six-stage project-creation pipeline
//!
//! # Examples
//!
//! ## Resolve a project target
//!
//! ```
//! use quickdapp_scaffold::project::resolve_target;
//! use camino::Utf8Path;
//!
//! let target = resolve_target("my-dapp", Utf8Path::new("/home/dev"));
//! assert_eq!(target.path, "/home/dev/my-dapp");
//! assert_eq!(target.display_name, "my-dapp");
//! ```
//!
//! ## Run the creation pipeline
//!
//! ```no_run
//! use quickdapp_scaffold::manager::PackageManager;
//! use quickdapp_scaffold::pipeline::{self, CreateOptions};
//! use quickdapp_scaffold::process::ProcessRunner;
//! use quickdapp_scaffold::project::resolve_target;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let target = resolve_target("my-dapp", Utf8Path::new("/home/dev"));
//! let options = CreateOptions::new(target, PackageManager::Pnpm);
//!
//! pipeline::run(&options, &ProcessRunner, |stage| {
//!     println!("[{}/{}] {}", stage.position(), 6, stage.label());
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod error;
pub mod git;
pub mod manager;
pub mod pipeline;
pub mod process;
pub mod project;

pub use error::{Error, Result};

// Re-export the types the CLI works with directly
pub use args::ParsedArgs;
pub use manager::PackageManager;
pub use pipeline::{CreateOptions, Stage};
pub use process::{CommandRunner, ProcessRunner, RunOptions};
pub use project::ProjectTarget;
