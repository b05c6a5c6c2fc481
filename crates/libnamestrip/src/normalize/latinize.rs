use any_ascii::any_ascii;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Transliterate a value to its closest ASCII rendition.
///
/// Compatibility decomposition runs first so that combining accents are
/// dropped instead of being spelled out by the transliteration table.
pub(crate) fn latinize(value: &str) -> String {
  if value.is_ascii() {
    return value.to_string();
  }

  let folded = value.nfkd().filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark).collect::<String>();

  any_ascii(&folded)
}
