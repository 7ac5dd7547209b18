use clap::Args;
use eyre::Result;
use ferry_core::DiskTree;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Migration name, e.g. `add-backup-codes`
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the files that would be written without touching the project
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.project.manifest().unwrap_or_exit();
        let mut tree = DiskTree::new(&self.project.root);

        let report = ops::scaffold(
            &manifest,
            &mut tree,
            &self.name,
            ops::scaffold::ScaffoldOptions {
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
