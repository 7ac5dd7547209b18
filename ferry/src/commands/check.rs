use clap::Args;
use eyre::Result;
use ferry_core::DiskTree;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = self.project.manifest().unwrap_or_exit();
        let tree = DiskTree::new(&self.project.root);

        let report = ops::check(&manifest, &tree, &self.project.source()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
