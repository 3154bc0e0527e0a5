//! The project-creation pipeline
//!
//! Six stages run strictly in order; the first failure aborts the run
//! with stage-qualified context. Disk side effects of completed stages
//! are not rolled back.

use crate::error::{Error, Result};
use crate::git;
use crate::manager::PackageManager;
use crate::process::{CommandRunner, RunOptions};
use crate::project::ProjectTarget;
use tracing::info;

/// Repository the project template is cloned from
pub const TEMPLATE_REPO_URL: &str = "https://github.com/moayaan1911/quickdapp.git";

/// Subdirectory holding the Foundry contract workspace
pub const CONTRACTS_DIR: &str = "contracts";

/// Ordered stages of project creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Clone the template repository
    Clone,
    /// Install web application dependencies
    InstallDependencies,
    /// Install Foundry dependencies in the contracts workspace
    InstallContractDependencies,
    /// Compile the smart contracts
    BuildContracts,
    /// Build the web application
    BuildApplication,
    /// Strip template history and initialize a fresh repository
    ReinitializeRepository,
}

impl Stage {
    /// All stages, in execution order
    pub fn all() -> [Self; 6] {
        [
            Self::Clone,
            Self::InstallDependencies,
            Self::InstallContractDependencies,
            Self::BuildContracts,
            Self::BuildApplication,
            Self::ReinitializeRepository,
        ]
    }

    /// 1-based position in the pipeline
    pub fn position(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0) + 1
    }

    /// Total number of stages
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Human-readable progress label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clone => "Cloning template",
            Self::InstallDependencies => "Installing dependencies",
            Self::InstallContractDependencies => "Installing Foundry dependencies",
            Self::BuildContracts => "Building smart contracts",
            Self::BuildApplication => "Building application",
            Self::ReinitializeRepository => "Setting up fresh git repository",
        }
    }
}

/// Options for a project-creation run
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Resolved destination
    pub target: ProjectTarget,
    /// Package manager driving install and build
    pub manager: PackageManager,
    /// Template repository URL
    pub template_url: String,
    /// Contract workspace subdirectory
    pub contracts_dir: String,
}

impl CreateOptions {
    /// Options for the stock template
    pub fn new(target: ProjectTarget, manager: PackageManager) -> Self {
        Self {
            target,
            manager,
            template_url: TEMPLATE_REPO_URL.to_string(),
            contracts_dir: CONTRACTS_DIR.to_string(),
        }
    }
}

/// Run the full pipeline
///
/// `progress` is invoked with each stage before it starts; it is purely
/// observational and has no effect on control flow. A failure at any
/// stage aborts the run; later stages never execute.
pub async fn run<F>(options: &CreateOptions, runner: &dyn CommandRunner, mut progress: F) -> Result<()>
where
    F: FnMut(Stage),
{
    info!(
        "Creating project '{}' at {} with {}",
        options.target.display_name, options.target.path, options.manager
    );

    for stage in Stage::all() {
        progress(stage);
        execute_stage(stage, options, runner)
            .await
            .map_err(|e| Error::stage(stage.label(), e))?;
    }

    info!("Project '{}' created", options.target.display_name);
    Ok(())
}

async fn execute_stage(
    stage: Stage,
    options: &CreateOptions,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let path = &options.target.path;
    let contracts = path.join(&options.contracts_dir);

    match stage {
        Stage::Clone => git::clone_template(runner, &options.template_url, path).await,
        Stage::InstallDependencies => {
            let (cmd, args) = options.manager.install_command();
            runner.run(cmd, args, &RunOptions::silent_in(path)).await
        }
        Stage::InstallContractDependencies => {
            runner
                .run("forge", &["install"], &RunOptions::silent_in(contracts))
                .await
        }
        Stage::BuildContracts => {
            runner
                .run("forge", &["build"], &RunOptions::silent_in(contracts))
                .await
        }
        Stage::BuildApplication => {
            let (cmd, args) = options.manager.build_command();
            runner.run(cmd, args, &RunOptions::silent_in(path)).await
        }
        Stage::ReinitializeRepository => git::reinitialize_repository(runner, path).await,
    }
}
