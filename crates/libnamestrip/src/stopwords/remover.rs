/// Remove every stopword, in order, from every name.
pub fn remove_stopwords<S: AsRef<str>>(names: Vec<String>, stopwords: &[S]) -> Vec<String> {
  names.into_iter().map(|name| stopwords.iter().fold(name, |name, word| omit_word(name, word.as_ref()))).collect()
}

/// Remove one word from a name.
///
/// When the name starts with the word, a leading "word " is removed. Otherwise
/// the first " word" found is removed. Matching works on raw substrings, so a
/// word can be cut out of a longer one ("Acme Ltdx" loses " Ltd").
pub(crate) fn omit_word(mut name: String, word: &str) -> String {
  if word.is_empty() {
    return name;
  }

  if name.as_bytes().starts_with(word.as_bytes()) {
    if name.as_bytes().get(word.len()) == Some(&b' ') {
      name.replace_range(..=word.len(), "");
    }

    return name;
  }

  if let Some(start) = name.find(&format!(" {word}")) {
    name.replace_range(start..start + word.len() + 1, "");
  }

  name
}
