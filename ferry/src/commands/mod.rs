mod check;
mod completions;
mod info;
mod init;
mod new;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use env_logger::Env;
use eyre::Result;
use ferry_manifest::{MANIFEST_FILE, Manifest};
use info::InfoCommand;
use init::InitCommand;
use new::NewCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ferry")]
#[command(version)]
#[command(about = "Scaffold versioned state migrations for TypeScript projects")]
pub(crate) struct Cli {
    /// Log every step (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_logger(&self) {
        let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
        if self.verbose {
            builder.filter_level(log::LevelFilter::Debug);
        }
        builder.format_timestamp(None).init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate migration stubs for the next schema version
    New(NewCommand),

    /// Validate the configuration, version marker and registries
    Check(CheckCommand),

    /// Show the current version and tracked models
    Info(InfoCommand),

    /// Write a ferry.toml with the default layout
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where a command finds its project.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Path to ferry.toml (defaults to <root>/ferry.toml, then the built-in layout)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root that configured paths are relative to
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    pub fn manifest(&self) -> ferry_manifest::Result<Manifest> {
        match &self.config {
            Some(path) => Manifest::from_file(path),
            None => Manifest::discover(&self.root),
        }
    }

    /// Human-readable description of where the configuration came from.
    pub fn source(&self) -> String {
        if let Some(path) = &self.config {
            return path.display().to_string();
        }
        let path = self.root.join(MANIFEST_FILE);
        if path.is_file() {
            path.display().to_string()
        } else {
            "built-in layout".to_string()
        }
    }
}
