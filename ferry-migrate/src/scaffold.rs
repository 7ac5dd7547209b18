//! The `new` pipeline: read the version, plan every write, then apply.

use std::path::{Path, PathBuf};

use ferry_codegen::{Import, MigrationTs, RegistryTs, TypeRef};
use ferry_core::{FileTree, GeneratedFile, SchemaVersion, module_specifier};
use ferry_manifest::{Manifest, ModelConfig};

use crate::{
    Error, FileChange, MigrationName, Plan, RegistryAnchor, RegistryFile, Result,
    VersionExtractor, VersionMarker,
    status::{ModelStatus, ProjectStatus, RegistryState, RegistryStatus},
};

/// Runs migration scaffolding for one project layout.
///
/// All paths are relative to the root of the [`FileTree`] it is given.
pub struct Scaffold<'m> {
    manifest: &'m Manifest,
    extractor: VersionExtractor,
}

/// The canonical file and the version marker found in it.
struct Canonical {
    content: String,
    marker: VersionMarker,
}

impl<'m> Scaffold<'m> {
    pub fn new(manifest: &'m Manifest) -> Result<Self> {
        Ok(Self {
            manifest,
            extractor: VersionExtractor::new(&manifest.project.decorator)?,
        })
    }

    /// Plan and apply a migration named `name`.
    ///
    /// Every check happens while planning, so a missing canonical file,
    /// missing marker, invalid name, path collision or registry without
    /// anchors leaves the tree untouched.
    pub fn run(&self, tree: &mut dyn FileTree, name: &str) -> Result<Plan> {
        let plan = self.plan(&*tree, name)?;
        plan.apply(tree)?;
        log::debug!(
            "created {} files, updated {}",
            plan.created().count(),
            plan.mutated().count()
        );
        Ok(plan)
    }

    /// Compute every change a migration named `name` makes, without writing.
    pub fn plan(&self, tree: &dyn FileTree, name: &str) -> Result<Plan> {
        let project = &self.manifest.project;
        let canonical = self.read_canonical(tree)?;
        let version = canonical.marker.version;
        let next_version = version
            .next()
            .ok_or_else(|| Box::new(Error::VersionOverflow { version }))?;
        let name = MigrationName::parse(name, project.casing)?;
        log::debug!(
            "planning {} ({} -> {})",
            name.identifier,
            version,
            next_version
        );

        let mut plan = Plan::new(version, next_version, name.clone());
        let migrations: Vec<_> = self
            .manifest
            .models
            .values()
            .map(|model| self.migration(model, version, next_version, &name))
            .collect();

        for migration in &migrations {
            let change = FileChange::generated(migration, Path::new(""));
            if tree.exists(change.path()) {
                return Err(Box::new(Error::PathCollision {
                    path: change.path().to_path_buf(),
                }));
            }
            plan.push(change);
        }

        for (model, migration) in self.manifest.models.values().zip(&migrations) {
            if let Some(change) = self.registry_change(tree, model, migration, &name)? {
                plan.push(change);
            }
        }

        plan.push(FileChange::Overwrite {
            path: project.canonical.clone(),
            content: canonical.marker.rewrite(&canonical.content, next_version),
        });

        Ok(plan)
    }

    /// Read the current version and the state of every registry.
    pub fn inspect(&self, tree: &dyn FileTree) -> Result<ProjectStatus> {
        let canonical = self.read_canonical(tree)?;
        let version = canonical.marker.version;

        let mut models = Vec::with_capacity(self.manifest.models.len());
        for (key, model) in &self.manifest.models {
            let registry = match self.registry(model) {
                Some(registry) => Some(self.registry_status(tree, &registry)?),
                None => None,
            };
            models.push(ModelStatus {
                key: key.clone(),
                type_name: model.type_name.clone(),
                dir: model.dir.clone(),
                registry,
            });
        }

        Ok(ProjectStatus {
            canonical: self.manifest.project.canonical.clone(),
            version,
            next_version: version.next(),
            models,
        })
    }

    fn read_canonical(&self, tree: &dyn FileTree) -> Result<Canonical> {
        let path = &self.manifest.project.canonical;
        if !tree.exists(path) {
            return Err(Box::new(Error::ConfigurationMissing { path: path.clone() }));
        }
        let content = tree.read(path).map_err(|e| Error::io(path, e))?;
        let marker = self.extractor.extract(path, &content)?;
        Ok(Canonical { content, marker })
    }

    fn contract(&self) -> TypeRef {
        let project = &self.manifest.project;
        TypeRef::new(&project.contract_type, &project.contract)
    }

    fn migration(
        &self,
        model: &ModelConfig,
        version: SchemaVersion,
        next_version: SchemaVersion,
        name: &MigrationName,
    ) -> MigrationTs {
        let project = &self.manifest.project;
        MigrationTs {
            identifier: name.identifier.clone(),
            slug: name.slug.clone(),
            version,
            next_version,
            dir: model.dir.clone(),
            extension: project.extension.clone(),
            contract: self.contract(),
            domain: TypeRef::new(&model.type_name, &model.import),
            style: project.style(),
        }
    }

    fn registry(&self, model: &ModelConfig) -> Option<RegistryTs> {
        Some(RegistryTs {
            name: model.registry_name()?,
            path: model.registry.clone()?,
            contract: self.contract(),
            domain: TypeRef::new(&model.type_name, &model.import),
            style: self.manifest.project.style(),
        })
    }

    /// Patch the model's registry, starting from a skeleton when it does
    /// not exist yet.
    fn registry_change(
        &self,
        tree: &dyn FileTree,
        model: &ModelConfig,
        migration: &MigrationTs,
        name: &MigrationName,
    ) -> Result<Option<FileChange>> {
        let Some(registry) = self.registry(model) else {
            return Ok(None);
        };
        let style = self.manifest.project.style();
        let path = registry.path(Path::new(""));
        let registry_dir = path.parent().unwrap_or(Path::new(""));
        let import = Import::new(module_specifier(registry_dir, &migration.module_path()))
            .named(&name.identifier)
            .quote(style.quote)
            .statement();
        let anchor = RegistryAnchor::new(&registry.name, registry.element_type());

        let (existing, src) = if tree.exists(&path) {
            (true, tree.read(&path).map_err(|e| Error::io(&path, e))?)
        } else {
            log::debug!("{} does not exist, starting from a skeleton", path.display());
            (false, registry.render())
        };
        let content = RegistryFile::parse(&path, &src, &anchor)?.patch(
            &import,
            &name.identifier,
            style.indent,
        );

        Ok(Some(if existing {
            FileChange::Overwrite { path, content }
        } else {
            FileChange::Create { path, content }
        }))
    }

    fn registry_status(&self, tree: &dyn FileTree, registry: &RegistryTs) -> Result<RegistryStatus> {
        let path: PathBuf = registry.path(Path::new(""));
        let state = if tree.exists(&path) {
            let src = tree.read(&path).map_err(|e| Error::io(&path, e))?;
            let anchor = RegistryAnchor::new(&registry.name, registry.element_type());
            let file = RegistryFile::parse(&path, &src, &anchor)?;
            RegistryState::Parsed {
                imports: file.imports().count(),
                entries: file.entries().map(str::to_string).collect(),
            }
        } else {
            RegistryState::Missing
        };

        Ok(RegistryStatus {
            path,
            name: registry.name.clone(),
            state,
        })
    }
}
