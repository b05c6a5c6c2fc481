use crate::nlp::{Doc, EntityLabel, LanguageModel, PartOfSpeech, Span, Token};

/// Linguistic model recognizing only the entities it was given.
///
/// Tokens made of ASCII digits are tagged as numerals, everything else as
/// proper or common nouns.
#[derive(Clone, Debug, Default)]
pub struct MockedModel {
  entities: Vec<(Vec<String>, EntityLabel)>,
}

impl MockedModel {
  pub fn with_entities(entities: &[(&str, EntityLabel)]) -> MockedModel {
    MockedModel {
      entities: entities.iter().map(|(text, label)| (text.split_whitespace().map(ToOwned::to_owned).collect(), *label)).collect(),
    }
  }
}

impl LanguageModel for MockedModel {
  fn analyze(&self, text: &str) -> Doc {
    let words = text.split_whitespace().collect::<Vec<_>>();

    let tokens = words
      .iter()
      .map(|word| Token {
        text: word.to_string(),
        pos: match word.chars().next() {
          _ if word.chars().all(|c| c.is_ascii_digit()) => PartOfSpeech::Num,
          Some(c) if c.is_uppercase() => PartOfSpeech::Propn,
          _ => PartOfSpeech::Noun,
        },
      })
      .collect();

    let entities = self
      .entities
      .iter()
      .filter(|(parts, _)| !parts.is_empty() && words.windows(parts.len()).any(|window| window == parts.as_slice()))
      .map(|(parts, label)| Span { text: parts.join(" "), label: *label })
      .collect();

    Doc { entities, tokens }
  }
}
