mod batch;
mod trace;

#[cfg(test)]
mod tests;

use crate::batch::config::Config;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let _guard = trace::init_tracing(&config, std::io::stderr())?;

  tracing::info!(namestrip = env!("CARGO_PKG_VERSION"), names = %config.names_path.display(), reference = %config.reference_path.display(), "starting deduplication");

  match batch::run(&config) {
    Ok(output) => {
      tracing::info!(names = output.names.len(), stopwords = output.stopwords.len(), parents = output.hierarchy.parents.len(), "done");

      Ok(())
    }

    Err(err) => {
      tracing::error!(error = %err, "could not deduplicate names");

      Err(err.into())
    }
  }
}
