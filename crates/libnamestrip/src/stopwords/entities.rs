use metrics::counter;

use crate::nlp::LanguageModel;

/// Filter out candidates recognized as named entities on their own.
///
/// Survivors are collected into a new list so every candidate is looked at
/// exactly once.
pub fn without_entities<M: LanguageModel + ?Sized>(model: &M, candidates: &[String]) -> Vec<String> {
  let mut survivors = Vec::with_capacity(candidates.len());

  for candidate in candidates {
    let doc = model.analyze(candidate);

    if doc.has_entities() {
      tracing::debug!(word = candidate.as_str(), label = %doc.entities[0].label, "keeping entity out of stopwords");

      counter!("namestrip_stopwords_excluded_total").increment(1);

      continue;
    }

    survivors.push(candidate.clone());
  }

  survivors
}
