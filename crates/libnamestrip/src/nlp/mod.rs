use std::{path::Path, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::NamestripError;

pub(crate) mod mock;
pub(crate) mod tagger;

pub use mock::MockedModel;
pub use tagger::Lexicon;

static MODEL: OnceLock<Lexicon> = OnceLock::new();

/// Retrieve the process-wide linguistic model, building it on first use.
///
/// The model is built once and never mutated afterwards. `extra` points to an
/// optional lexicon file merged into the embedded one; it is only considered
/// by the call that actually builds the model.
pub fn shared(extra: Option<&Path>) -> Result<&'static Lexicon, NamestripError> {
  if let Some(model) = MODEL.get() {
    return Ok(model);
  }

  let model = Lexicon::load(extra)?;

  Ok(MODEL.get_or_init(|| model))
}

/// Named entity recognition and part-of-speech tagging over a short text.
pub trait LanguageModel {
  fn analyze(&self, text: &str) -> Doc;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
  Org,
  Person,
  Norp,
  Fac,
  Gpe,
  Loc,
}

impl std::fmt::Display for EntityLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      EntityLabel::Org => "ORG",
      EntityLabel::Person => "PERSON",
      EntityLabel::Norp => "NORP",
      EntityLabel::Fac => "FAC",
      EntityLabel::Gpe => "GPE",
      EntityLabel::Loc => "LOC",
    })
  }
}

impl EntityLabel {
  /// Facilities, geo-political entities and other locations.
  pub fn is_location(&self) -> bool {
    matches!(self, EntityLabel::Fac | EntityLabel::Gpe | EntityLabel::Loc)
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
  Adj,
  Adp,
  Adv,
  Aux,
  Cconj,
  Det,
  Intj,
  Noun,
  Num,
  Part,
  Pron,
  Propn,
  Punct,
  Sconj,
  Sym,
  Verb,
  X,
}

impl PartOfSpeech {
  pub fn is_function_word(&self) -> bool {
    matches!(
      self,
      PartOfSpeech::Adp | PartOfSpeech::Aux | PartOfSpeech::Cconj | PartOfSpeech::Det | PartOfSpeech::Part | PartOfSpeech::Pron | PartOfSpeech::Sconj
    )
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
  pub text: String,
  pub label: EntityLabel,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
  pub text: String,
  pub pos: PartOfSpeech,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Doc {
  pub entities: Vec<Span>,
  pub tokens: Vec<Token>,
}

impl Doc {
  pub fn has_entities(&self) -> bool {
    !self.entities.is_empty()
  }

  pub fn has_location(&self) -> bool {
    self.entities.iter().any(|span| span.label.is_location())
  }

  pub fn has_numeral(&self) -> bool {
    self.tokens.iter().any(|token| token.pos == PartOfSpeech::Num)
  }
}
