/// Uppercase the first character of every whitespace-delimited word and
/// lowercase the rest. Whitespace is kept as is.
///
/// When uppercasing expands to several characters ("ß", "ﬁ"), only the first
/// one stays uppercase.
pub fn title_case(name: &str) -> String {
  let mut out = String::with_capacity(name.len());
  let mut word_start = true;

  for c in name.chars() {
    if c.is_whitespace() {
      out.push(c);
      word_start = true;
      continue;
    }

    if word_start {
      let mut upper = c.to_uppercase();

      out.extend(upper.next());
      out.extend(upper.flat_map(char::to_lowercase));
    } else {
      out.extend(c.to_lowercase());
    }

    word_start = false;
  }

  out
}
