//! The project-creation flow
//!
//! Collects missing inputs interactively, applies the directory
//! confirmation policy, verifies tooling, and drives the pipeline.

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use dialoguer::{Confirm, Input, Select};

use quickdapp_scaffold::pipeline::{self, CreateOptions, Stage};
use quickdapp_scaffold::process::ProcessRunner;
use quickdapp_scaffold::project::{self, ProjectTarget};
use quickdapp_scaffold::{git, Error, PackageManager, ParsedArgs};

use crate::banner;
use crate::output;

/// Create a new project from the template
pub async fn run(args: ParsedArgs) -> Result<()> {
    banner::show();

    let raw_name = match args.project_name {
        Some(name) => name,
        None => prompt_project_name()?,
    };

    let cwd = current_dir()?;
    let target = project::resolve_target(&raw_name, &cwd);

    if project::is_current_dir(&raw_name) {
        output::kv("Project location", "current directory");
    } else {
        output::kv("Project location", target.path.as_str());
    }

    if project::confirmation_required(&raw_name, &target.path) {
        let prompt = if project::is_current_dir(&raw_name) {
            "Current directory is not empty. Continue?"
        } else {
            "Directory already exists. Continue?"
        };

        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        if !confirmed {
            output::info("Aborted");
            return Ok(());
        }
    }

    let manager = match args.package_manager.as_deref() {
        Some(name) => name.parse::<PackageManager>()?,
        None => prompt_package_manager()?,
    };

    let runner = ProcessRunner;

    // Nothing destructive may happen before these checks pass
    if !manager.is_available(&runner).await {
        return Err(Error::package_manager_unavailable(manager.as_str()).into());
    }
    git::ensure_git_available()?;

    println!();
    output::info("Creating your Web3 dApp project...");
    println!();

    let options = CreateOptions::new(target.clone(), manager);
    let spinner = output::spinner(&stage_message(Stage::Clone));

    let result = pipeline::run(&options, &runner, |stage| {
        spinner.set_message(stage_message(stage));
    })
    .await;

    match result {
        Ok(()) => spinner.finish_with_message("Your Web3 dApp is built successfully"),
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("Project setup failed");
        }
    }

    print_next_steps(&target, &raw_name, manager);
    Ok(())
}

/// Spinner text for a stage: `[k/6] <label>`
fn stage_message(stage: Stage) -> String {
    format!("[{}/{}] {}", stage.position(), Stage::count(), stage.label())
}

fn prompt_project_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Enter your project name")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if project::validate_project_name(input.trim()) {
                Ok(())
            } else {
                Err("Invalid project name. Use only letters, numbers, hyphens, and underscores")
            }
        })
        .interact_text()?;

    Ok(name.trim().to_string())
}

fn prompt_package_manager() -> Result<PackageManager> {
    let managers = PackageManager::all();
    let labels: Vec<&str> = managers.iter().map(|m| m.label()).collect();

    let selection = Select::new()
        .with_prompt("Choose your package manager")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(managers[selection])
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Working directory is not valid UTF-8: {}", p.display()))
}

fn print_next_steps(target: &ProjectTarget, raw_name: &str, manager: PackageManager) {
    println!();
    output::success("Your Web3 dApp is ready to launch!");
    println!();

    output::info("Next steps:");
    if project::is_current_dir(raw_name) {
        println!("   1. Start your development server: {}", manager.start_command());
        println!("   2. Visit your dApp: http://localhost:3000");
        println!("   3. Add your Thirdweb API key to .env.local (https://thirdweb.com/dashboard)");
    } else {
        println!("   1. cd {}", target.display_name);
        println!("   2. Start your development server: {}", manager.start_command());
        println!("   3. Visit your dApp: http://localhost:3000");
        println!("   4. Add your Thirdweb API key to .env.local (https://thirdweb.com/dashboard)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages_advance() {
        assert_eq!(stage_message(Stage::Clone), "[1/6] Cloning template");
        assert_eq!(
            stage_message(Stage::ReinitializeRepository),
            "[6/6] Setting up fresh git repository"
        );
    }
}
