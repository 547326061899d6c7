use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

mod config;
mod networking;
mod sync;

const DEFAULT_CONFIG_NAME: &str = "launcher-config.json";

#[derive(Parser, Debug)]
#[command(
    name = "fetch-launcher-assets",
    author,
    version,
    about = "Fetch public launcher assets into a local directory, skipping files already present"
)]
struct Cli {
    /// Directory the assets are materialized into; created if absent.
    output_dir: PathBuf,

    /// Path to the launcher asset configuration. Defaults to
    /// launcher-config.json inside OUTPUT_DIR.
    config: Option<PathBuf>,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.output_dir.join(DEFAULT_CONFIG_NAME))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Bad arguments exit 1 like every other fatal error; --help and
    // --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config_path = cli.config_path();

    match sync::AssetSyncer::new().sync(&cli.output_dir, &config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
