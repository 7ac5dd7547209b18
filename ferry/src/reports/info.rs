//! Info command report data structures.

use ferry_migrate::{ProjectStatus, RegistryState};

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Where the configuration came from.
    pub config: String,
    pub status: ProjectStatus,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let status = &self.status;
        out.newline();

        // Metadata
        out.preformatted(&format!("  Config      {}", self.config));
        out.preformatted(&format!("  Canonical   {}", status.canonical.display()));
        let next = status
            .next_version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "none".to_string());
        out.preformatted(&format!("  Version     {} (next {})", status.version, next));
        out.newline();

        // Models
        out.preformatted("  Models");
        out.preformatted("  ──────");
        let width = status
            .models
            .iter()
            .map(|m| m.key.len())
            .max()
            .unwrap_or(0)
            .max(10);
        for model in &status.models {
            out.preformatted(&format!(
                "  {:<width$}  {}",
                model.key,
                model.type_name,
                width = width
            ));
            let pad = " ".repeat(width + 4);
            out.preformatted(&format!("{}└─ dir: {}", pad, model.dir.display()));
            if let Some(registry) = &model.registry {
                let state = match &registry.state {
                    RegistryState::Missing => "not created yet".to_string(),
                    RegistryState::Parsed { entries, .. } => format!(
                        "{} {}",
                        entries.len(),
                        if entries.len() == 1 { "entry" } else { "entries" }
                    ),
                };
                out.preformatted(&format!(
                    "{}└─ registry: {} in {} ({})",
                    pad,
                    registry.name,
                    registry.path.display(),
                    state
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ferry_core::SchemaVersion;
    use ferry_migrate::{ModelStatus, RegistryStatus};

    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_models() {
        let report = InfoReport {
            config: "built-in layout".to_string(),
            status: ProjectStatus {
                canonical: PathBuf::from("app.state.ts"),
                version: SchemaVersion::new(5),
                next_version: Some(SchemaVersion::new(6)),
                models: vec![
                    ModelStatus {
                        key: "state-app".to_string(),
                        type_name: "AppStateModel".to_string(),
                        dir: PathBuf::from("migrations/app"),
                        registry: Some(RegistryStatus {
                            path: PathBuf::from("migrations/app/index.ts"),
                            name: "AppStateMigrations".to_string(),
                            state: RegistryState::Parsed {
                                imports: 3,
                                entries: vec!["aMigration".to_string()],
                            },
                        }),
                    },
                    ModelStatus {
                        key: "user".to_string(),
                        type_name: "User".to_string(),
                        dir: PathBuf::from("migrations/user"),
                        registry: Some(RegistryStatus {
                            path: PathBuf::from("migrations/user/index.ts"),
                            name: "UserMigrations".to_string(),
                            state: RegistryState::Missing,
                        }),
                    },
                ],
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        let text = out.text();

        assert!(text.contains("  Version     5 (next 6)"));
        assert!(text.contains("  state-app   AppStateModel"));
        assert!(text.contains("└─ registry: AppStateMigrations in migrations/app/index.ts (1 entry)"));
        assert!(text.contains("└─ registry: UserMigrations in migrations/user/index.ts (not created yet)"));
    }
}
