const RULES: &[(&str, &str)] = &[("www.", ""), (".com", ""), (".co.uk", ""), (".com/", " "), (".co.uk/", " ")];

/// Remove website decorations from a name.
///
/// Rules apply in order, each one to the output of the previous one.
pub fn unwrap_website(name: &str) -> String {
  RULES.iter().fold(name.to_string(), |acc, (pattern, replacement)| acc.replace(pattern, replacement))
}

/// Unwrap website-styled names and drop the ones duplicating another name.
///
/// A name is website-styled when unwrapping changed its length. It is a
/// duplicate when, lowercased and with spaces removed, it equals another
/// surviving name rendered the same way. Website names are considered in
/// order, and a dropped name no longer counts as a match for later ones.
pub fn unwrap_websites(names: Vec<String>) -> Vec<String> {
  let unwrapped = names
    .iter()
    .map(|name| {
      let value = unwrap_website(name);
      let is_website = value.len() != name.len();

      (value, is_website)
    })
    .collect::<Vec<_>>();

  let mut keys = unwrapped.iter().map(|(value, _)| Some(comparison_key(value))).collect::<Vec<_>>();

  for (index, (value, is_website)) in unwrapped.iter().enumerate() {
    if !is_website {
      continue;
    }

    let Some(key) = keys[index].clone() else {
      continue;
    };

    if keys.iter().enumerate().any(|(other, candidate)| other != index && candidate.as_deref() == Some(key.as_str())) {
      tracing::debug!(website = names[index].as_str(), name = value.as_str(), "dropping website duplicating an existing name");

      keys[index] = None;
    }
  }

  unwrapped.into_iter().zip(keys).filter_map(|((value, _), key)| key.map(|_| value)).collect()
}

fn comparison_key(name: &str) -> String {
  name.to_lowercase().replace(' ', "")
}
