use itertools::Itertools;

pub(crate) mod case;
pub(crate) mod latinize;
pub(crate) mod punctuation;
pub(crate) mod website;

pub use case::title_case;
pub use punctuation::strip_punctuation;
pub use website::{unwrap_website, unwrap_websites};

/// Remove duplicate names, keeping the first occurrence of each.
///
/// Blank names are discarded as well.
pub fn dedup(names: Vec<String>) -> Vec<String> {
  names.into_iter().filter(|name| !name.trim().is_empty()).unique().collect()
}

#[cfg(test)]
mod tests {
  fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
  }

  #[test]
  fn dedup() {
    assert_eq!(super::dedup(names(&["Acme", "Soho House", "Acme", "acme"])), names(&["Acme", "Soho House", "acme"]));
    assert_eq!(super::dedup(names(&["", "  ", "Acme"])), names(&["Acme"]));
    assert_eq!(super::dedup(vec![]), Vec::<String>::new());
  }

  #[test]
  fn dedup_idempotence() {
    let once = super::dedup(names(&["b", "a", "b", "c", "a", " "]));

    assert_eq!(super::dedup(once.clone()), once);
  }
}
