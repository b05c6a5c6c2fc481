use std::{
  env::{self, VarError},
  fmt::Display,
  fs,
  path::PathBuf,
  str::FromStr,
};

use libnamestrip::prelude::*;

use crate::batch::{errors::AppError, output::OutputFormat};

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,

  // Sources
  pub names_path: PathBuf,
  pub reference_path: PathBuf,
  pub reference_column: String,
  pub lexicon_path: Option<PathBuf>,
  pub params_path: Option<PathBuf>,

  // Output
  pub output_format: OutputFormat,
  pub output_path: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      env: Env::Dev,
      names_path: PathBuf::from("org_names.json"),
      reference_path: PathBuf::from("comp_names_uk.csv"),
      reference_column: DEFAULT_REFERENCE_COLUMN.to_string(),
      lexicon_path: None,
      params_path: None,
      output_format: OutputFormat::default(),
      output_path: None,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let defaults = Config::default();

    Ok(Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      names_path: path_env("NAMES_PATH").unwrap_or(defaults.names_path),
      reference_path: path_env("REFERENCE_PATH").unwrap_or(defaults.reference_path),
      reference_column: parse_env("REFERENCE_COLUMN", defaults.reference_column)?,
      lexicon_path: path_env("LEXICON_PATH"),
      params_path: path_env("PARAMS_PATH"),
      output_format: parse_env("OUTPUT_FORMAT", defaults.output_format)?,
      output_path: path_env("OUTPUT_PATH"),
    })
  }

  /// Pipeline parameters, read from `params_path` when set.
  pub fn params(&self) -> Result<StripParams, AppError> {
    let Some(path) = &self.params_path else {
      return Ok(StripParams::default());
    };

    let data = fs::read(path).map_err(|err| AppError::ConfigError(format!("could not read parameters file {}: {err}", path.display())))?;

    serde_yaml::from_slice(&data).map_err(|err| AppError::ConfigError(format!("could not parse parameters file {}: {err}", path.display())))
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> Result<T, AppError>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}"))),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}"))),
    },
  }
}

fn path_env(name: &str) -> Option<PathBuf> {
  env::var_os(name).filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
  use std::{env, io::Write, path::PathBuf};

  use crate::batch::{errors::AppError, output::OutputFormat};

  use super::{Config, Env};

  const VARIABLES: &[&str] = &["ENV", "NAMES_PATH", "REFERENCE_PATH", "REFERENCE_COLUMN", "LEXICON_PATH", "PARAMS_PATH", "OUTPUT_FORMAT", "OUTPUT_PATH"];

  fn clear_env() {
    for name in VARIABLES {
      unsafe {
        env::remove_var(name);
      }
    }
  }

  #[test]
  #[serial_test::serial]
  fn default_config() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Dev);
    assert_eq!(config.names_path, PathBuf::from("org_names.json"));
    assert_eq!(config.reference_path, PathBuf::from("comp_names_uk.csv"));
    assert_eq!(config.reference_column, "Employer Name");
    assert_eq!(config.lexicon_path, None);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.output_path, None);
    assert_eq!(config.params().unwrap(), libnamestrip::prelude::StripParams::default());
  }

  #[test]
  #[serial_test::serial]
  fn parse_config_from_env() {
    clear_env();

    unsafe {
      env::set_var("ENV", "production");
      env::set_var("NAMES_PATH", "/data/names.json");
      env::set_var("REFERENCE_PATH", "/data/reference.csv");
      env::set_var("REFERENCE_COLUMN", "company");
      env::set_var("LEXICON_PATH", "/data/lexicon.yml");
      env::set_var("OUTPUT_FORMAT", "yaml");
      env::set_var("OUTPUT_PATH", "");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.names_path, PathBuf::from("/data/names.json"));
    assert_eq!(config.reference_path, PathBuf::from("/data/reference.csv"));
    assert_eq!(config.reference_column, "company");
    assert_eq!(config.lexicon_path, Some(PathBuf::from("/data/lexicon.yml")));
    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert_eq!(config.output_path, None);

    clear_env();
  }

  #[test]
  #[serial_test::serial]
  fn invalid_output_format() {
    clear_env();

    unsafe {
      env::set_var("OUTPUT_FORMAT", "xml");
    }

    assert!(matches!(Config::from_env(), Err(AppError::ConfigError(_))));

    clear_env();
  }

  #[test]
  fn params_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();

    writeln!(file, "stopword_count: 20\nexceptions: [Trust]").unwrap();

    let config = Config {
      params_path: Some(file.path().to_path_buf()),
      ..Default::default()
    };

    let params = config.params().unwrap();

    assert_eq!(params.stopword_count, 20);
    assert_eq!(params.exceptions, vec!["Trust"]);
    assert_eq!(params.strip_function_words, false);

    let config = Config {
      params_path: Some(PathBuf::from("/nonexistent/params.yml")),
      ..Default::default()
    };

    assert!(matches!(config.params(), Err(AppError::ConfigError(_))));
  }

  #[test]
  #[serial_test::serial]
  fn parse_env() {
    unsafe {
      env::set_var("INT", "42");
      env::set_var("BOOL", "true");
      env::set_var("EMPTY", "");
    }

    assert_eq!(super::parse_env::<u32>("INT", 0).unwrap(), 42);
    assert_eq!(super::parse_env::<bool>("BOOL", false).unwrap(), true);
    assert_eq!(super::parse_env::<u32>("EMPTY", 7).unwrap(), 7);
    assert_eq!(super::parse_env::<u32>("UNSET_VARIABLE", 7).unwrap(), 7);

    assert!(matches!(super::parse_env::<u32>("BOOL", 0), Err(_)));
  }
}
