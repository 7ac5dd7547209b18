//! Core operations.
//!
//! This module contains the business logic for ferry commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod info;
pub mod scaffold;

pub use check::check;
pub use info::info;
pub use scaffold::scaffold;

#[cfg(test)]
pub(crate) mod fixtures {
    use ferry_core::MemoryTree;

    pub const CANONICAL: &str = "src/app/state/app/app.state.ts";
    pub const RESTORE_REGISTRY: &str = "src/app/migrations/restore-file/index.ts";

    pub const APP_STATE: &str = "@State<AppStateModel>({
  name: 'app',
  defaults: { version: 5 }
})
export class AppState {}
";

    pub const RESTORE_INDEX: &str = "import { Migration } from '../migrator/migrator';
import { RestoreFile } from '../../features/restore/owner/restore-file/restore-file.model';
import { firstMigration } from './1.first';

export const RestoreFileMigrations: Migration<RestoreFile>[] = [
  firstMigration,
];
";

    /// A project using the default layout with one registry in place.
    pub fn project() -> MemoryTree {
        MemoryTree::new()
            .with_file(CANONICAL, APP_STATE)
            .with_file(RESTORE_REGISTRY, RESTORE_INDEX)
    }
}
