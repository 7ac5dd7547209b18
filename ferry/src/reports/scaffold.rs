//! New command report data structures.

use ferry_core::SchemaVersion;

use super::output::{Output, Report};

/// Report data from generating one migration.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Exported identifier of the generated stubs.
    pub identifier: String,
    /// Version the stubs migrate from.
    pub version: SchemaVersion,
    /// Version the canonical file now declares.
    pub next_version: SchemaVersion,
    /// Files written or previewed, in plan order.
    pub result: ScaffoldResult,
}

/// Result of scaffolding.
#[derive(Debug)]
pub enum ScaffoldResult {
    /// Files were written to the project.
    Written(Vec<PlannedFile>),
    /// Dry-run preview.
    Preview(Vec<PlannedFile>),
}

/// A file touched by the plan.
#[derive(Debug)]
pub struct PlannedFile {
    pub path: String,
    /// Whether the file is new rather than an existing file being rewritten.
    pub created: bool,
    pub content: String,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            ScaffoldResult::Written(files) => self.render_written(out, files),
            ScaffoldResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ScaffoldReport {
    fn render_written(&self, out: &mut dyn Output, files: &[PlannedFile]) {
        out.preformatted(&format!(
            "{} (version {} -> {})",
            self.identifier, self.version, self.next_version
        ));
        out.newline();

        out.section("Created");
        for file in files.iter().filter(|f| f.created) {
            out.added_item(&file.path);
        }

        out.newline();
        out.section("Updated");
        for file in files.iter().filter(|f| !f.created) {
            out.changed_item(&file.path);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PlannedFile]) {
        for file in files {
            let label = if file.created { "new" } else { "updated" };
            out.divider(&format!("{} ({})", file.path, label));
            out.preformatted(file.content.trim_end());
        }

        let created = files.iter().filter(|f| f.created).count();
        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be created and {} updated, moving version {} to {}",
            plural(created, "file"),
            plural(files.len() - created, "file"),
            self.version,
            self.next_version
        ));
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
