use std::path::PathBuf;

use crate::reasoner::InconsistencyReport;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize RDF/XML: {message}")]
    Xml { message: String },

    #[error("ontology is inconsistent ({} issue(s))", reports.len())]
    Inconsistent { reports: Vec<InconsistencyReport> },

    #[error("reasoner {reasoner} did not finish before the deadline")]
    ReasonerTimedOut { reasoner: String },

    #[error(transparent)]
    Options(#[from] onto_model::ModelError),
}

impl EmitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xml(source: impl std::fmt::Display) -> Self {
        Self::Xml {
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
