use std::io::Write;

use libnamestrip::{nlp, prelude::*};
use tempfile::NamedTempFile;

fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn location_branches() {
  libnamestrip::init().unwrap();

  let model = nlp::shared(None).unwrap();
  let namestrip = Namestrip::new(model).build().unwrap();

  let output = namestrip.run(strings(&["Soho House Brighton", "soho house", "Soho House Berlin"]), &[]);

  assert_eq!(output.names, vec!["Soho House", "Soho House Berlin", "Soho House Brighton"]);
  assert_eq!(output.hierarchy.parents.iter().collect::<Vec<_>>(), vec!["Soho House"]);
  assert_eq!(output.hierarchy.branches("Soho House"), ["Soho House Berlin", "Soho House Brighton"]);
}

#[test]
fn duplicated_websites() {
  let model = MockedModel::default();
  let output = Namestrip::new(&model).build().unwrap().run(strings(&["www.dailymail.co.uk", "Daily Mail"]), &[]);

  assert_eq!(output.names, vec!["Daily Mail"]);
}

#[test]
fn legal_suffixes() {
  let model = MockedModel::default();
  let output = Namestrip::new(&model).build().unwrap().run(strings(&["Acme Limited"]), &strings(&["Widgets Limited", "Gadgets Limited"]));

  assert!(output.stopwords.contains(&"Limited".to_string()));
  assert_eq!(output.names, vec!["Acme"]);
}

#[test]
fn frequent_places_are_kept() {
  let model = nlp::shared(None).unwrap();
  let namestrip = Namestrip::new(model).build().unwrap();

  let mut reference = std::iter::repeat_n("London Limited".to_string(), 80).collect::<Vec<_>>();

  reference.extend(strings(&["Zeta Holdings", "Widgets Holdings"]));

  let output = namestrip.run(strings(&["Acme London Limited", "Acme Holdings London"]), &reference);

  assert!(!output.stopwords.contains(&"London".to_string()));
  assert!(output.stopwords.contains(&"Limited".to_string()));
  assert_eq!(output.names, vec!["Acme London"]);
}

#[test]
fn from_files() {
  let mut names = NamedTempFile::new().unwrap();
  let mut reference = NamedTempFile::new().unwrap();

  names.write_all(r#"["Olswang Directors 2 Limited", "OLSWANG DIRECTORS", "www.olswang.com"]"#.as_bytes()).unwrap();
  reference.write_all(b"Employer Name,Size\nAcme Limited,250\nWidgets Limited,500\n").unwrap();

  let model = nlp::shared(None).unwrap();
  let source = FileSource::new(names.path(), reference.path());
  let output = Namestrip::new(model).build().unwrap().run_source(&source).unwrap();

  assert_eq!(output.names, vec!["Olswang", "Olswang Directors", "Olswang Directors 2"]);
  assert_eq!(output.hierarchy.branches("Olswang Directors"), ["Olswang Directors 2"]);

  let source = FileSource::new("/nonexistent.json", reference.path());

  assert!(matches!(Namestrip::new(model).build().unwrap().run_source(&source), Err(NamestripError::SourceUnavailable { .. })));
}
