use std::{collections::HashSet, io::Write, str::FromStr};

use libnamestrip::prelude::*;

use crate::batch::errors::AppError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Text,
}

impl FromStr for OutputFormat {
  type Err = AppError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "json" => Ok(OutputFormat::Json),
      "yaml" => Ok(OutputFormat::Yaml),
      "text" => Ok(OutputFormat::Text),
      other => Err(AppError::ConfigError(format!("unsupported output format: {other}"))),
    }
  }
}

/// Serialize the result of a run.
///
/// The text format prints one organization per line, each followed by its
/// indented branches.
pub fn render<W: Write>(format: OutputFormat, output: &StripOutput, mut writer: W) -> Result<(), AppError> {
  match format {
    OutputFormat::Json => {
      serde_json::to_writer_pretty(&mut writer, output).map_err(output_error)?;
      writeln!(writer).map_err(output_error)?;
    }

    OutputFormat::Yaml => serde_yaml::to_writer(&mut writer, output).map_err(output_error)?,

    OutputFormat::Text => {
      let branches = output.hierarchy.children.values().flatten().map(String::as_str).collect::<HashSet<_>>();

      for name in output.names.iter().filter(|name| !branches.contains(name.as_str())) {
        writeln!(writer, "{name}").map_err(output_error)?;

        for branch in output.hierarchy.branches(name) {
          writeln!(writer, "  {branch}").map_err(output_error)?;
        }
      }
    }
  }

  writer.flush().map_err(output_error)
}

fn output_error(err: impl std::error::Error) -> AppError {
  AppError::OutputError(err.to_string())
}

#[cfg(test)]
mod tests {
  use libnamestrip::prelude::*;

  use super::{OutputFormat, render};

  fn output() -> StripOutput {
    let model = MockedModel::with_entities(&[("Berlin", EntityLabel::Gpe)]);
    let names = ["Soho House", "Soho House Berlin", "Acme Ltd"].map(String::from).to_vec();

    Namestrip::new(&model).build().unwrap().run(names, &["Widgets Ltd".to_string()])
  }

  fn rendered(format: OutputFormat) -> String {
    let mut buffer = Vec::new();

    render(format, &output(), &mut buffer).unwrap();

    String::from_utf8(buffer).unwrap()
  }

  #[test]
  fn output_format_from_str() {
    assert!(matches!("json".parse(), Ok(OutputFormat::Json)));
    assert!(matches!("yaml".parse(), Ok(OutputFormat::Yaml)));
    assert!(matches!("text".parse(), Ok(OutputFormat::Text)));

    assert!(matches!("xml".parse::<OutputFormat>(), Err(_)));
  }

  #[test]
  fn render_json() {
    let value = serde_json::from_str::<serde_json::Value>(&rendered(OutputFormat::Json)).unwrap();

    assert_eq!(value["names"], serde_json::json!(["Acme", "Soho House", "Soho House Berlin"]));
    assert_eq!(value["hierarchy"]["parents"], serde_json::json!(["Soho House"]));
    assert_eq!(value["hierarchy"]["children"]["Soho House"], serde_json::json!(["Soho House Berlin"]));
    assert!(value["stopwords"].as_array().unwrap().contains(&serde_json::json!("Ltd")));
  }

  #[test]
  fn render_yaml() {
    let value = serde_yaml::from_str::<serde_yaml::Value>(&rendered(OutputFormat::Yaml)).unwrap();

    assert_eq!(value["names"][0], serde_yaml::Value::from("Acme"));
    assert_eq!(value["hierarchy"]["children"]["Soho House"][0], serde_yaml::Value::from("Soho House Berlin"));
  }

  #[test]
  fn render_text() {
    assert_eq!(rendered(OutputFormat::Text), "Acme\nSoho House\n  Soho House Berlin\n");
  }
}
