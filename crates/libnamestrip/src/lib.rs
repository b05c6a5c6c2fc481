mod error;
mod namestrip;
mod source;

pub mod hierarchy;
pub mod nlp;
pub mod normalize;
pub mod stopwords;

/// Build the process-wide linguistic model from the embedded lexicon.
///
/// Calling this is optional, the model is otherwise built on first use.
pub fn init() -> Result<(), error::NamestripError> {
  nlp::shared(None).map(|_| ())
}

pub mod prelude {
  pub use crate::error::NamestripError;
  pub use crate::hierarchy::Hierarchy;
  pub use crate::namestrip::{Namestrip, StripOutput, StripParams};
  pub use crate::nlp::{Doc, EntityLabel, LanguageModel, Lexicon, PartOfSpeech};
  pub use crate::source::{DEFAULT_REFERENCE_COLUMN, FileSource, NameSource, StaticSource};
  pub use crate::stopwords::DEFAULT_EXCEPTIONS;

  pub use crate::nlp::MockedModel;
}
