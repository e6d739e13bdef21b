use std::path::PathBuf;

use draftbase_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("project manifest not found at {0}")]
    MissingManifest(PathBuf),

    #[error("{entity} {code} does not belong to the loaded project/creator")]
    ForeignEntity { entity: &'static str, code: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| FormatError::Io { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| FormatError::Json { path, source }
    }
}
