//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod info;
mod output;
mod scaffold;

pub use check::{CheckReport, RegistryCheck};
pub use info::InfoReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use scaffold::{PlannedFile, ScaffoldReport, ScaffoldResult};
