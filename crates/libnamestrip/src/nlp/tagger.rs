use std::{borrow::Cow, cmp::Reverse, collections::HashMap, fs, io::BufReader, path::Path, sync::LazyLock};

use ahash::{AHashMap, AHashSet};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use itertools::Itertools;
use regex::Regex;
use rust_embed::Embed;
use serde::Deserialize;
use serde_jsonlines::JsonLinesReader;

use crate::{
  error::NamestripError,
  nlp::{Doc, EntityLabel, LanguageModel, PartOfSpeech, Span, Token},
};

#[derive(Embed)]
#[folder = "./assets/lexicon"]
struct Gazetteer;

static NUMERALS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").unwrap());

static FACILITIES: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\b(?:[A-Z][A-Za-z]*\s+)+(?:Road|Street|Lane|Avenue|Square|Place|Crescent|Terrace|Airport|Station|Bridge|Park|Centre|Center|Hospital|Stadium|Wharf|Quay|Dock|Arcade|Market)\b").unwrap()
});

/// Gazetteer-backed linguistic model.
///
/// Entities are recognized from embedded dictionaries of territories, places,
/// facilities and well-known organizations. Parts of speech are assigned from
/// the token shape and a closed-class word list.
pub struct Lexicon {
  automaton: AhoCorasick,
  labels: Vec<Vec<EntityLabel>>,
  cardinals: AHashSet<String>,
  closed_classes: AHashMap<String, PartOfSpeech>,
}

impl std::fmt::Debug for Lexicon {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Lexicon").field("entities", &self.labels.len()).field("closed_classes", &self.closed_classes.len()).finish()
  }
}

impl Lexicon {
  /// Build the model from the embedded dictionaries, merging in an optional
  /// extra places file.
  pub fn load(extra: Option<&Path>) -> Result<Lexicon, NamestripError> {
    let mut mapping: AHashMap<String, Vec<EntityLabel>> = AHashMap::default();

    add_territories(&mut mapping)?;
    add_places(&mut mapping, &embedded("places.yml")?)?;

    if let Some(path) = extra {
      let data = fs::read(path).map_err(|err| NamestripError::ModelUnavailable(format!("could not read lexicon {}: {err}", path.display())))?;

      add_places(&mut mapping, &data)?;
    }

    let lexicon = Lexicon::new(mapping, cardinals()?, closed_classes()?)?;

    tracing::debug!(entities = lexicon.labels.len(), "loaded linguistic model");

    Ok(lexicon)
  }

  fn new(mapping: AHashMap<String, Vec<EntityLabel>>, cardinals: AHashSet<String>, closed_classes: AHashMap<String, PartOfSpeech>) -> Result<Lexicon, NamestripError> {
    let mut patterns = Vec::new();
    let mut labels = Vec::new();

    for (pattern, entry) in mapping {
      if pattern.is_empty() {
        continue;
      }
      patterns.push(pattern);
      labels.push(entry);
    }

    let automaton = AhoCorasickBuilder::new()
      .match_kind(MatchKind::Standard)
      .ascii_case_insensitive(true)
      .build(patterns)
      .map_err(|err| NamestripError::ModelUnavailable(format!("could not build entity automaton: {err}")))?;

    Ok(Lexicon {
      automaton,
      labels,
      cardinals,
      closed_classes,
    })
  }

  fn tag(&self, word: &str) -> PartOfSpeech {
    let bare = word.trim_matches(|c: char| c.is_ascii_punctuation());

    if bare.is_empty() {
      return PartOfSpeech::Punct;
    }
    if NUMERALS.is_match(bare) {
      return PartOfSpeech::Num;
    }

    let lower = bare.to_lowercase();

    if self.cardinals.contains(&lower) {
      return PartOfSpeech::Num;
    }
    if let Some(pos) = self.closed_classes.get(&lower) {
      return *pos;
    }

    match bare.chars().next() {
      Some(c) if c.is_uppercase() => PartOfSpeech::Propn,
      Some(c) if c.is_alphabetic() => PartOfSpeech::Noun,
      _ => PartOfSpeech::X,
    }
  }
}

impl LanguageModel for Lexicon {
  fn analyze(&self, text: &str) -> Doc {
    let words = text.split_whitespace().collect::<Vec<_>>();

    if words.is_empty() {
      return Doc::default();
    }

    let tokens = words.iter().map(|word| Token { text: word.to_string(), pos: self.tag(word) }).collect();
    let normalized = unaccent::unaccent(words.join(" "));
    let mut entities = Vec::new();

    // Leftmost-longest over whole-token matches only, so a longer entry
    // ending mid-token does not hide a shorter one starting inside it.
    let mut matches = self
      .automaton
      .find_overlapping_iter(&normalized)
      .filter(|mat| is_token_boundary(&normalized, mat.start(), mat.end()))
      .collect::<Vec<_>>();

    matches.sort_unstable_by_key(|mat| (mat.start(), Reverse(mat.end())));

    let mut cursor = 0;

    for mat in matches {
      if mat.start() < cursor {
        continue;
      }

      cursor = mat.end();

      for label in &self.labels[mat.pattern().as_usize()] {
        entities.push(Span {
          text: normalized[mat.start()..mat.end()].to_string(),
          label: *label,
        });
      }
    }

    for mat in FACILITIES.find_iter(&normalized) {
      if entities.iter().any(|span: &Span| span.text == mat.as_str()) {
        continue;
      }

      entities.push(Span {
        text: mat.as_str().to_string(),
        label: EntityLabel::Fac,
      });
    }

    Doc { entities, tokens }
  }
}

fn is_token_boundary(text: &str, start: usize, end: usize) -> bool {
  let start_ok = start == 0 || text[..start].chars().last().is_some_and(|c| c.is_whitespace());
  let end_ok = end == text.len() || text[end..].chars().next().is_some_and(|c| c.is_whitespace());

  start_ok && end_ok
}

fn normalize_entry(value: &str) -> String {
  unaccent::unaccent(value.split_whitespace().join(" ").to_lowercase())
}

fn insert(mapping: &mut AHashMap<String, Vec<EntityLabel>>, value: &str, label: EntityLabel) {
  let labels = mapping.entry(normalize_entry(value)).or_default();

  if !labels.contains(&label) {
    labels.push(label);
  }
}

fn embedded(name: &str) -> Result<Cow<'static, [u8]>, NamestripError> {
  Gazetteer::get(name)
    .map(|file| file.data)
    .ok_or_else(|| NamestripError::ModelUnavailable(format!("missing embedded lexicon {name}")))
}

fn add_territories(mapping: &mut AHashMap<String, Vec<EntityLabel>>) -> Result<(), NamestripError> {
  #[derive(Deserialize)]
  struct Territory {
    name: String,
    full_name: Option<String>,
    #[serde(default)]
    names_strong: Vec<String>,
  }

  let file = embedded("territories.jsonl")?;
  let territories = JsonLinesReader::new(BufReader::new(file.as_ref()))
    .read_all::<Territory>()
    .collect::<Result<Vec<_>, _>>()
    .map_err(|err| NamestripError::ModelUnavailable(format!("could not read territories dictionary: {err}")))?;

  for territory in territories {
    for name in territory.names_strong.iter().chain(territory.full_name.iter()).chain([&territory.name]) {
      insert(mapping, name, EntityLabel::Gpe);
    }
  }

  Ok(())
}

fn add_places(mapping: &mut AHashMap<String, Vec<EntityLabel>>, data: &[u8]) -> Result<(), NamestripError> {
  #[derive(Deserialize)]
  struct PlacesDictionary {
    #[serde(default)]
    entities: HashMap<EntityLabel, Vec<String>>,
  }

  let dictionary = serde_yaml::from_slice::<PlacesDictionary>(data).map_err(|err| NamestripError::ModelUnavailable(format!("could not unmarshal places dictionary: {err}")))?;

  for (label, values) in dictionary.entities {
    for value in values {
      insert(mapping, &value, label);
    }
  }

  Ok(())
}

fn cardinals() -> Result<AHashSet<String>, NamestripError> {
  #[derive(Deserialize)]
  struct NumbersDictionary {
    cardinals: Vec<String>,
  }

  let dictionary = serde_yaml::from_slice::<NumbersDictionary>(&embedded("numbers.yml")?)
    .map_err(|err| NamestripError::ModelUnavailable(format!("could not unmarshal numbers dictionary: {err}")))?;

  Ok(dictionary.cardinals.into_iter().map(|word| word.to_lowercase()).collect())
}

fn closed_classes() -> Result<AHashMap<String, PartOfSpeech>, NamestripError> {
  let dictionary = serde_yaml::from_slice::<HashMap<PartOfSpeech, Vec<String>>>(&embedded("closed_classes.yml")?)
    .map_err(|err| NamestripError::ModelUnavailable(format!("could not unmarshal closed classes dictionary: {err}")))?;

  Ok(dictionary.into_iter().flat_map(|(pos, words)| words.into_iter().map(move |word| (word.to_lowercase(), pos))).collect())
}
