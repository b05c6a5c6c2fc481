use std::{
  fs::File,
  io::BufReader,
  path::{Path, PathBuf},
};

use serde_json::Value;

use crate::error::NamestripError;

pub const DEFAULT_REFERENCE_COLUMN: &str = "Employer Name";

/// Where the names to clean and the reference corpus come from.
pub trait NameSource {
  /// The raw organization names to deduplicate.
  fn load_names(&self) -> Result<Vec<String>, NamestripError>;
  /// Clean organization names used to discover stopwords.
  fn load_reference(&self) -> Result<Vec<String>, NamestripError>;
}

/// Names read from a JSON array of strings, reference corpus read from one
/// column of a CSV file with headers.
#[derive(Clone, Debug)]
pub struct FileSource {
  pub names_path: PathBuf,
  pub reference_path: PathBuf,
  pub reference_column: String,
}

impl FileSource {
  pub fn new(names_path: impl Into<PathBuf>, reference_path: impl Into<PathBuf>) -> FileSource {
    FileSource {
      names_path: names_path.into(),
      reference_path: reference_path.into(),
      reference_column: DEFAULT_REFERENCE_COLUMN.to_string(),
    }
  }

  pub fn with_reference_column(mut self, column: impl Into<String>) -> FileSource {
    self.reference_column = column.into();
    self
  }
}

impl NameSource for FileSource {
  fn load_names(&self) -> Result<Vec<String>, NamestripError> {
    let file = open(&self.names_path)?;
    let records: Vec<Value> = serde_json::from_reader(BufReader::new(file)).map_err(|err| match err.classify() {
      serde_json::error::Category::Io => NamestripError::source_unavailable(&self.names_path, err),
      _ => NamestripError::MalformedRecord(format!("{} is not a JSON list: {err}", self.names_path.display())),
    })?;

    records
      .into_iter()
      .enumerate()
      .map(|(index, record)| match record {
        Value::String(name) => Ok(name),
        other => Err(NamestripError::MalformedRecord(format!("entry #{index} of {} is not a string: {other}", self.names_path.display()))),
      })
      .collect()
  }

  fn load_reference(&self) -> Result<Vec<String>, NamestripError> {
    let file = open(&self.reference_path)?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
      .headers()
      .map_err(|err| NamestripError::MalformedRecord(format!("could not read headers of {}: {err}", self.reference_path.display())))?;

    let Some(column) = headers.iter().position(|header| header.trim() == self.reference_column) else {
      return Err(NamestripError::MalformedRecord(format!("column '{}' not found in {}", self.reference_column, self.reference_path.display())));
    };

    let mut names = Vec::new();

    for (index, record) in reader.records().enumerate() {
      let record = record.map_err(|err| match err.kind() {
        csv::ErrorKind::Io(_) => NamestripError::source_unavailable(&self.reference_path, &err),
        _ => NamestripError::MalformedRecord(format!("row #{} of {}: {err}", index + 1, self.reference_path.display())),
      })?;

      match record.get(column) {
        Some(name) if !name.trim().is_empty() => names.push(name.to_string()),
        _ => {
          return Err(NamestripError::MalformedRecord(format!(
            "row #{} of {} has no value for '{}'",
            index + 1,
            self.reference_path.display(),
            self.reference_column
          )));
        }
      }
    }

    Ok(names)
  }
}

fn open(path: &Path) -> Result<File, NamestripError> {
  File::open(path).map_err(|err| NamestripError::source_unavailable(path, err))
}

/// In-memory names and reference corpus.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
  pub names: Vec<String>,
  pub reference: Vec<String>,
}

impl StaticSource {
  pub fn new<N, R>(names: N, reference: R) -> StaticSource
  where
    N: IntoIterator,
    N::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
  {
    StaticSource {
      names: names.into_iter().map(Into::into).collect(),
      reference: reference.into_iter().map(Into::into).collect(),
    }
  }
}

impl NameSource for StaticSource {
  fn load_names(&self) -> Result<Vec<String>, NamestripError> {
    Ok(self.names.clone())
  }

  fn load_reference(&self) -> Result<Vec<String>, NamestripError> {
    Ok(self.reference.clone())
  }
}
