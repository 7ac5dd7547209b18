use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use ferry_core::{DiskTree, GeneratedFile, WriteResult};
use ferry_manifest::FerryToml;

#[derive(Args)]
pub struct InitCommand {
    /// Project root to write ferry.toml into
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut tree = DiskTree::new(&self.root);
        let file = FerryToml::default_layout();
        let path = file.path(&self.root);

        let result = file
            .write(&mut tree, Path::new(""))
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  review the paths in {}", path.display());
                println!("  ferry check");
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
            }
        }

        Ok(())
    }
}
