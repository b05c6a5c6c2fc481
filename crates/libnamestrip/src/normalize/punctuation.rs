use crate::normalize::latinize::latinize;

/// Strip punctuation from a name.
///
/// Dashes become spaces, ampersands become the word "And" and any other ASCII
/// punctuation is removed. A name with any non-ASCII word is transliterated
/// as a whole, then stripped again since transliteration can reintroduce
/// punctuation.
pub fn strip_punctuation(name: &str) -> String {
  let stripped = replace_punctuation(name);

  if stripped.split_whitespace().any(|word| !word.is_ascii()) {
    return replace_punctuation(&latinize(&stripped));
  }

  stripped
}

fn replace_punctuation(name: &str) -> String {
  let mut out = String::with_capacity(name.len());

  for c in name.chars() {
    match c {
      '-' => out.push(' '),
      '&' => out.push_str("And"),
      c if c.is_ascii_punctuation() => {}
      c => out.push(c),
    }
  }

  out
}
