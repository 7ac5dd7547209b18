use std::{io, path::PathBuf};

use ferry_core::SchemaVersion;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for ferry-migrate operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("canonical file '{path}' does not exist")]
    #[diagnostic(
        code(ferry::configuration_missing),
        help("run ferry from the project root, or point `project.canonical` in ferry.toml at the file holding the schema version")
    )]
    ConfigurationMissing { path: PathBuf },

    #[error("{message} in '{path}'")]
    #[diagnostic(
        code(ferry::pattern_mismatch),
        help("the canonical file needs exactly one `@{decorator}({{ ... defaults: {{ version: <number> }} }})` block")
    )]
    PatternMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        path: PathBuf,
        decorator: String,
        message: String,
    },

    #[error("'{path}' already exists")]
    #[diagnostic(
        code(ferry::path_collision),
        help("a migration with this name was already generated for this version; bump the canonical version or choose another name")
    )]
    PathCollision { path: PathBuf },

    #[error("could not find the {anchor} in registry '{path}'")]
    #[diagnostic(
        code(ferry::registry_anchor_missing),
        help("the registry must export `{anchor}`; fix the file or delete it to have ferry recreate it")
    )]
    RegistryAnchorMissing {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected near here")]
        span: Option<SourceSpan>,
        path: PathBuf,
        anchor: String,
    },

    #[error("invalid migration name '{name}'")]
    #[diagnostic(code(ferry::invalid_name), help("{reason}"))]
    InvalidName { name: String, reason: String },

    #[error("schema version {version} cannot be incremented")]
    #[diagnostic(code(ferry::version_overflow))]
    VersionOverflow { version: SchemaVersion },

    #[error("invalid search pattern for {what}: {message}")]
    #[diagnostic(code(ferry::invalid_pattern))]
    InvalidPattern { what: String, message: String },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(ferry::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn invalid_pattern(what: impl Into<String>, source: regex::Error) -> Box<Self> {
        Box::new(Error::InvalidPattern {
            what: what.into(),
            message: source.to_string(),
        })
    }
}
