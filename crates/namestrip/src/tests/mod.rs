use std::io::Write;

use tempfile::NamedTempFile;

mod log_writer;

pub(super) fn file(content: &str) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();

  file.write_all(content.as_bytes()).unwrap();
  file
}
