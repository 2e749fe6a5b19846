use std::path::{Path, PathBuf};

mod donate;
mod list;
mod show;
mod terminal;

use clap::ArgAction;
use donate::Donate;
use list::List;
use miauplace::{Config, JsonStore};
use show::Show;
use tracing::instrument;

/// The `miau` command-line interface.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the data root (config and catalogue)
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Run the selected subcommand.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::List(List::default()))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Load the configuration from the data root, falling back to defaults.
fn load_config(root: &Path) -> Config {
    let path = root.join("config.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Open the catalogue store described by the configuration.
fn open_store(root: &Path, config: &Config) -> JsonStore {
    JsonStore::new(root.join(config.data_file()))
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Initialize a data root with a default configuration
    Init,

    /// Donate a cat: the interactive four-step wizard
    Donate(Donate),

    /// List the cats in the local catalogue (default)
    List(List),

    /// Show one cat's full profile
    Show(Show),
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Init => Init::run(root)?,
            Self::Donate(command) => command.run(root)?,
            Self::List(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
        }
        Ok(())
    }
}

struct Init;

impl Init {
    #[instrument]
    fn run(root: &Path) -> anyhow::Result<()> {
        let config_path = root.join("config.toml");
        if config_path.exists() {
            anyhow::bail!("Data root already initialized (found existing config.toml)");
        }

        std::fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create data root: {e}"))?;

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        println!("Initialized miauplace data root in {}", root.display());
        println!("  Created: config.toml");
        println!("  Catalogue: {}", config.data_file());
        println!();
        println!("Next steps:");
        println!("  miau donate");

        Ok(())
    }
}
