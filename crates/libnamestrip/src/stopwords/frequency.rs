use std::{borrow::Borrow, cmp::Ordering};

use ahash::AHashMap;

/// Find the `k` most frequent whitespace tokens across a corpus of names.
///
/// Tokens are ordered by decreasing count, ties going to the token seen
/// first. Only the `k` retained tokens are fully sorted.
pub fn most_common<'s, I, S>(corpus: I, k: usize) -> Vec<String>
where
  S: Borrow<str> + 's,
  I: Iterator<Item = &'s S>,
{
  let mut counts: AHashMap<&'s str, (usize, usize)> = AHashMap::default();

  for token in corpus.flat_map(|name| name.borrow().split_whitespace()) {
    let discovered = counts.len();

    counts.entry(token).or_insert((0, discovered)).0 += 1;
  }

  let mut ranked = counts.into_iter().collect::<Vec<_>>();

  if k < ranked.len() {
    if k > 0 {
      ranked.select_nth_unstable_by(k - 1, by_rank);
    }
    ranked.truncate(k);
  }

  ranked.sort_unstable_by(by_rank);
  ranked.into_iter().map(|(token, _)| token.to_string()).collect()
}

fn by_rank<T>((_, (lcount, lseen)): &(T, (usize, usize)), (_, (rcount, rseen)): &(T, (usize, usize))) -> Ordering {
  rcount.cmp(lcount).then(lseen.cmp(rseen))
}
