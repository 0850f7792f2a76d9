use crate::core::io::error::FileError;
use crate::core::models::error::GeometryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to load '{path}': {source}", path = path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Failed to render: {0}")]
    Geometry(#[from] GeometryError),
}

impl WorkflowError {
    pub(crate) fn load(path: &std::path::Path) -> impl FnOnce(FileError) -> Self + '_ {
        move |source| WorkflowError::Load {
            path: path.to_path_buf(),
            source,
        }
    }
}
