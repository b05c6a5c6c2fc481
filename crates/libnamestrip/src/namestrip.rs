use std::time::Instant;

use bon::bon;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use tracing::instrument;

use crate::{
  error::NamestripError,
  hierarchy::{self, Hierarchy},
  nlp::LanguageModel,
  normalize::{dedup, strip_punctuation, title_case, unwrap_websites},
  source::NameSource,
  stopwords::{self, DEFAULT_EXCEPTIONS, remove_stopwords, strip_function_words},
};

/// Tuning of the stopword discovery and optional stages.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct StripParams {
  /// How many of the most frequent reference tokens are stopword candidates.
  #[serde_inline_default(75)]
  pub stopword_count: usize,
  /// Words appended to the stopword candidates regardless of frequency.
  #[serde_inline_default(DEFAULT_EXCEPTIONS.iter().map(|word| word.to_string()).collect())]
  pub exceptions: Vec<String>,
  /// Also strip articles, prepositions and other closed-class words.
  #[serde(default)]
  pub strip_function_words: bool,
}

impl Default for StripParams {
  fn default() -> Self {
    StripParams {
      stopword_count: 75,
      exceptions: DEFAULT_EXCEPTIONS.iter().map(|word| word.to_string()).collect(),
      strip_function_words: false,
    }
  }
}

/// Result of a run: the cleaned names, the stopwords that were stripped from
/// them and the detected branches.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StripOutput {
  pub names: Vec<String>,
  pub stopwords: Vec<String>,
  pub hierarchy: Hierarchy,
}

/// The main entrypoint for cleaning a list of organization names.
///
/// # Examples
///
/// ```rust
/// # use libnamestrip::prelude::*;
/// let model = MockedModel::with_entities(&[("Berlin", EntityLabel::Gpe)]);
/// let namestrip = Namestrip::new(&model).build().unwrap();
///
/// let output = namestrip.run(vec!["Acme Ltd.".into(), "ACME LTD".into(), "Acme Ltd Berlin".into()], &["Widgets Ltd".into()]);
///
/// assert_eq!(output.names, vec!["Acme", "Acme Berlin"]);
/// assert_eq!(output.hierarchy.branches("Acme"), ["Acme Berlin"]);
/// ```
#[derive(Debug)]
pub struct Namestrip<'m, M: LanguageModel> {
  model: &'m M,
  params: StripParams,
}

#[bon]
impl<'m, M: LanguageModel> Namestrip<'m, M> {
  /// Create a new pipeline over a linguistic model.
  ///
  /// Most callers will want the process-wide model returned by
  /// [`crate::nlp::shared`].
  #[allow(clippy::new_ret_no_self)]
  #[builder(start_fn = new, finish_fn = build)]
  pub fn _new(#[builder(start_fn)] model: &'m M, #[builder(default)] params: StripParams) -> Result<Namestrip<'m, M>, NamestripError> {
    if let Some(word) = params.exceptions.iter().find(|word| word.trim().is_empty() || word.contains(char::is_whitespace)) {
      return Err(NamestripError::ConfigError(format!("stopword exceptions must be single words, got {word:?}")));
    }

    Ok(Namestrip { model, params })
  }
}

impl<M: LanguageModel> Namestrip<'_, M> {
  pub fn params(&self) -> &StripParams {
    &self.params
  }

  /// Load names and reference corpus from a source and run the pipeline.
  pub fn run_source<S: NameSource + ?Sized>(&self, source: &S) -> Result<StripOutput, NamestripError> {
    let names = source.load_names()?;
    let reference = source.load_reference()?;

    Ok(self.run(names, &reference))
  }

  /// Deduplicate and canonicalize `names`, using `reference` to discover
  /// which words are too common to be meaningful.
  #[instrument(name = "namestrip", skip_all, fields(names = names.len(), reference = reference.len()))]
  pub fn run(&self, names: Vec<String>, reference: &[String]) -> StripOutput {
    let names = stage("dedup", names, |names| names);
    let names = stage("website", names, unwrap_websites);
    let names = stage("punctuation", names, |names| names.iter().map(|name| strip_punctuation(name)).collect());
    let names = stage("case", names, |names| names.iter().map(|name| title_case(name)).collect());

    let stopwords = stopwords::discover(self.model, reference, self.params.stopword_count, &self.params.exceptions);
    let mut names = stage("stopwords", names, |names| remove_stopwords(names, &stopwords));

    if self.params.strip_function_words {
      names = stage("function_words", names, |names| strip_function_words(self.model, names));
    }

    names.sort_unstable();

    let hierarchy = hierarchy::build(self.model, &names);

    tracing::info!(names = names.len(), parents = hierarchy.parents.len(), "cleaned organization names");

    StripOutput { names, stopwords, hierarchy }
  }
}

fn stage<F>(name: &'static str, names: Vec<String>, func: F) -> Vec<String>
where
  F: FnOnce(Vec<String>) -> Vec<String>,
{
  let then = Instant::now();
  let before = names.len();
  let names = dedup(func(names));

  histogram!("namestrip_stage_latency_seconds", "stage" => name).record(then.elapsed().as_secs_f64());
  counter!("namestrip_names_dropped_total", "stage" => name).increment(before.saturating_sub(names.len()) as u64);

  tracing::info!(stage = name, before, after = names.len(), "deduplicated names");

  names
}
