pub mod check;
pub mod completions;
pub mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{load_project, Manifest};
use crate::error::Result;

/// icondoc - Markdown reference tables for an icon asset tree
#[derive(Parser, Debug)]
#[command(name = "icondoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write icons_<style>.md and missing_icons.md (the default)
    Generate,

    /// List missing size/style variants and fail if there are any
    Check,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Manifest to read instead of ./icondoc.yaml
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Root of the icon asset tree
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    /// Directory to write reports to
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the manifest and apply command-line overrides.
    pub fn resolve(&self) -> Result<Manifest> {
        let project = load_project(".", self.manifest.as_deref())?;
        let mut manifest = project.manifest;

        if let Some(assets) = &self.assets {
            manifest.assets = assets.clone();
        }
        if let Some(output) = &self.output {
            manifest.output = output.clone();
        }

        Ok(manifest)
    }
}
