//! Supported package managers and their command metadata

use crate::error::{Error, Result};
use crate::process::{CommandRunner, RunOptions};
use std::str::FromStr;

/// Package managers the scaffold can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// pnpm
    Pnpm,
    /// npm
    Npm,
    /// yarn
    Yarn,
}

impl PackageManager {
    /// Get all supported package managers, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::Pnpm, Self::Npm, Self::Yarn]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Get the label shown in the selection prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm (recommended - fast and efficient)",
            Self::Npm => "npm (classic and reliable)",
            Self::Yarn => "yarn (modern alternative)",
        }
    }

    /// Get the dependency-install command
    pub fn install_command(&self) -> (&'static str, &'static [&'static str]) {
        (self.as_str(), &["install"])
    }

    /// Get the application-build command
    ///
    /// npm needs the explicit `run` prefix for package.json scripts.
    pub fn build_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Npm => ("npm", &["run", "build"]),
            other => (other.as_str(), &["build"]),
        }
    }

    /// Get the command used to start the dev server, for display only
    pub fn start_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm start",
            Self::Pnpm => "pnpm start",
            Self::Yarn => "yarn start",
        }
    }

    /// Probe whether the manager binary is usable
    ///
    /// Runs `<manager> --version` through the given runner. Any failure
    /// (missing binary, non-zero exit, spawn error) yields `false`;
    /// this never errors.
    pub async fn is_available(&self, runner: &dyn CommandRunner) -> bool {
        runner
            .run(self.as_str(), &["--version"], &RunOptions::silent())
            .await
            .is_ok()
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pnpm" => Ok(Self::Pnpm),
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(Error::unsupported_package_manager(other)),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
