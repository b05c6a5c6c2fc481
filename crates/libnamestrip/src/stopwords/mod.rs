use tracing::instrument;

use crate::{
  nlp::LanguageModel,
  normalize::{strip_punctuation, title_case},
};

pub(crate) mod entities;
pub(crate) mod frequency;
pub(crate) mod function_words;
pub(crate) mod remover;

pub use entities::without_entities;
pub use frequency::most_common;
pub use function_words::strip_function_words;
pub use remover::remove_stopwords;

/// Words too generic to tell organizations apart that are not frequent enough
/// in the reference corpus to be discovered.
pub const DEFAULT_EXCEPTIONS: &[&str] = &["Party", "Capital", "Restaurants", "Le"];

/// Build the list of words to strip from names.
///
/// The reference corpus is normalized the same way as the names, its `count`
/// most frequent tokens are extended with the manual `exceptions`, and any
/// token recognized as a named entity is left out.
///
/// An exception already among the frequent tokens is not appended again:
/// removal runs once per listed word, so a duplicate would strip a second
/// occurrence of it from a name.
#[instrument(name = "discover_stopwords", skip_all, fields(count = count))]
pub fn discover<M: LanguageModel + ?Sized>(model: &M, reference: &[String], count: usize, exceptions: &[String]) -> Vec<String> {
  let corpus = reference.iter().map(|name| strip_punctuation(&title_case(name))).collect::<Vec<_>>();
  let mut candidates = most_common(corpus.iter(), count);

  for exception in exceptions {
    if !candidates.contains(exception) {
      candidates.push(exception.clone());
    }
  }

  let stopwords = without_entities(model, &candidates);

  tracing::info!(corpus = corpus.len(), candidates = candidates.len(), stopwords = stopwords.len(), "discovered stopwords");

  stopwords
}
