use crate::{nlp::LanguageModel, stopwords::remover::omit_word};

/// Remove closed-class words (articles, prepositions, conjunctions, ...) from
/// every name, using the same rule as stopword removal.
pub fn strip_function_words<M: LanguageModel + ?Sized>(model: &M, names: Vec<String>) -> Vec<String> {
  names
    .into_iter()
    .map(|name| {
      let doc = model.analyze(&name);

      doc.tokens.iter().filter(|token| token.pos.is_function_word()).fold(name, |name, token| omit_word(name, &token.text))
    })
    .collect()
}
