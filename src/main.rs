use anyhow::Context;
use clap::Parser;
use jokebox::config::Config;
use jokebox::logging::init_tracing;
use jokebox::storage::FileStore;
use jokebox::ui::runtime;
use std::path::PathBuf;
use std::sync::Arc;

/// Random jokes in your terminal. Rate them, keep the good ones.
#[derive(Debug, Parser)]
#[command(name = "jokebox", version, about)]
struct Cli {
    /// Config file path (default: ~/.config/jokebox/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the random joke endpoint
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Override the directory favorites and ratings are stored in
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.storage.dir = Some(dir.clone());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match init_tracing() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(err) => eprintln!("jokebox: logging disabled, cannot create log file: {err}"),
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    let storage_dir = config.storage.resolved_dir();
    tracing::info!(
        api_url = %config.api.url,
        storage_dir = %storage_dir.display(),
        "starting jokebox"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let store = Arc::new(FileStore::new(storage_dir));

    runtime::run(&config, store, tokio_runtime.handle())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["jokebox", "--api-url", "http://localhost:1/j", "--data-dir", "/tmp/j"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.api.url, "http://localhost:1/j");
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/j")));
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["jokebox"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
