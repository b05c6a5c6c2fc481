use libnamestrip::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error(transparent)]
  PipelineError(NamestripError),
  #[error("could not write output: {0}")]
  OutputError(String),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}

impl From<NamestripError> for AppError {
  fn from(value: NamestripError) -> Self {
    match value {
      NamestripError::ConfigError(err) => AppError::ConfigError(err),
      NamestripError::OtherError(err) => AppError::OtherError(err),
      err => AppError::PipelineError(err),
    }
  }
}
