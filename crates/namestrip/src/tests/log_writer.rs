use std::{
  io,
  sync::{Arc, Mutex},
};

/// Log sink splitting everything written to it into lines.
#[derive(Clone, Debug, Default)]
pub(super) struct VecLogWriter {
  pending: Vec<u8>,
  lines: Arc<Mutex<Vec<String>>>,
}

impl VecLogWriter {
  pub(super) fn new(lines: Arc<Mutex<Vec<String>>>) -> Self {
    Self { pending: Vec::new(), lines }
  }
}

impl io::Write for VecLogWriter {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.pending.extend_from_slice(buf);

    while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
      let line = self.pending.drain(..=end).collect::<Vec<u8>>();

      self.lines.lock().unwrap().push(String::from_utf8_lossy(&line).trim_end().to_string());
    }

    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    if !self.pending.is_empty() {
      let line = String::from_utf8_lossy(&self.pending).trim_end().to_string();

      self.lines.lock().unwrap().push(line);
      self.pending.clear();
    }

    Ok(())
  }
}
