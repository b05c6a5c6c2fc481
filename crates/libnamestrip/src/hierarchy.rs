use std::collections::{BTreeMap, BTreeSet};

use metrics::counter;
use serde::Serialize;
use tracing::instrument;

use crate::nlp::LanguageModel;

/// Parent organizations and their branches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Hierarchy {
  /// Names that acquired at least one branch.
  pub parents: BTreeSet<String>,
  /// Every visited parent candidate and its branches, possibly none.
  pub children: BTreeMap<String, Vec<String>>,
}

impl Hierarchy {
  pub fn branches(&self, parent: &str) -> &[String] {
    self.children.get(parent).map(Vec::as_slice).unwrap_or_default()
  }
}

/// Group a sorted list of names into parents and branches.
///
/// A name is a branch of the current parent candidate when it starts with the
/// candidate and the remainder, past one separator character, holds a location
/// or a numeral. The first name failing either test becomes the next
/// candidate. Names must be sorted in ascending order for prefixes to be
/// adjacent.
#[instrument(name = "build_hierarchy", skip_all, fields(names = names.len()))]
pub fn build<M: LanguageModel + ?Sized, S: AsRef<str>>(model: &M, names: &[S]) -> Hierarchy {
  debug_assert!(names.windows(2).all(|pair| pair[0].as_ref() <= pair[1].as_ref()), "names must be sorted");

  let mut hierarchy = Hierarchy::default();

  if names.is_empty() {
    return hierarchy;
  }

  let (mut i, mut j) = (0, 1);
  let mut children = Vec::new();

  while i + j < names.len() {
    let parent = names[i].as_ref();
    let candidate = names[i + j].as_ref();

    if let Some(excess) = excess(parent, candidate) {
      let doc = model.analyze(excess);

      if doc.has_location() || doc.has_numeral() {
        tracing::debug!(parent, branch = candidate, "detected branch");

        children.push(candidate.to_string());
        hierarchy.parents.insert(parent.to_string());
        j += 1;

        continue;
      }
    }

    hierarchy.children.insert(parent.to_string(), std::mem::take(&mut children));
    i += j;
    j = 1;
  }

  hierarchy.children.insert(names[i].as_ref().to_string(), children);

  counter!("namestrip_branches_total").increment(hierarchy.children.values().map(Vec::len).sum::<usize>() as u64);

  hierarchy
}

/// The part of `candidate` following `parent` and one separator character,
/// if `parent` is a prefix of `candidate`.
fn excess<'c>(parent: &str, candidate: &'c str) -> Option<&'c str> {
  let rest = candidate.strip_prefix(parent)?;

  Some(rest.char_indices().nth(1).map(|(index, _)| &rest[index..]).unwrap_or_default())
}
