use std::{
  fs::File,
  io::{self, BufWriter},
};

use libnamestrip::{nlp, prelude::*};

use crate::batch::{config::Config, errors::AppError, output::render};

pub mod config;
pub mod errors;
pub mod output;

/// Clean the configured names and write the result to the configured
/// destination.
pub fn run(config: &Config) -> Result<StripOutput, AppError> {
  let model = nlp::shared(config.lexicon_path.as_deref())?;
  let output = process(config, model)?;

  match &config.output_path {
    Some(path) => {
      let file = File::create(path).map_err(|err| AppError::OutputError(format!("could not create {}: {err}", path.display())))?;

      render(config.output_format, &output, BufWriter::new(file))?;
    }

    None => render(config.output_format, &output, io::stdout().lock())?,
  }

  Ok(output)
}

pub fn process<M: LanguageModel>(config: &Config, model: &M) -> Result<StripOutput, AppError> {
  let source = FileSource::new(&config.names_path, &config.reference_path).with_reference_column(&config.reference_column);
  let namestrip = Namestrip::new(model).params(config.params()?).build()?;

  Ok(namestrip.run_source(&source)?)
}
