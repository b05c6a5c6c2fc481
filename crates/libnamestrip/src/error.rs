use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NamestripError {
  #[error("could not read source {path}: {reason}")]
  SourceUnavailable { path: PathBuf, reason: String },
  #[error("linguistic model unavailable: {0}")]
  ModelUnavailable(String),
  #[error("malformed record: {0}")]
  MalformedRecord(String),
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}

impl NamestripError {
  pub(crate) fn source_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
    NamestripError::SourceUnavailable {
      path: path.into(),
      reason: reason.to_string(),
    }
  }
}
