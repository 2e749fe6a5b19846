use std::path::Path;

use miauplace::{CatStore, PersistedCat};
use tracing::instrument;

use crate::cli::{load_config, open_store, terminal, terminal::Colorize};

/// List the cats in the local catalogue.
#[derive(Debug, Default, clap::Parser)]
pub struct List {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    format: Format,

    /// Filter by city (case-insensitive)
    #[arg(long)]
    city: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let mut cats = store.list_all()?;

        if let Some(ref city) = self.city {
            let needle = city.to_lowercase();
            cats.retain(|cat| cat.location.city.to_lowercase() == needle);
        }

        if cats.is_empty() {
            println!("Nenhum gatinho cadastrado ainda. Use `miau donate` para anunciar um.");
            return Ok(());
        }

        match self.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&cats)?),
            Format::Table => output_table(&cats),
        }

        Ok(())
    }
}

fn output_table(cats: &[PersistedCat]) {
    // Narrow terminals drop the ID column; `miau show` still takes ids.
    let narrow = terminal::terminal_width().is_some_and(|w| w < 100);

    if narrow {
        println!("{:<14}  {:<10}  {:<18}  {}", "NOME", "IDADE", "RACA", "LOCAL");
    } else {
        println!(
            "{:<36}  {:<14}  {:<10}  {:<18}  {}",
            "ID", "NOME", "IDADE", "RACA", "LOCAL"
        );
    }
    for cat in cats {
        let place = if cat.location.state.is_empty() {
            cat.location.city.clone()
        } else {
            format!("{} - {}", cat.location.city, cat.location.state)
        };
        if narrow {
            println!("{:<14}  {:<10}  {:<18}  {place}", cat.name, cat.age, cat.breed);
        } else {
            println!(
                "{:<36}  {:<14}  {:<10}  {:<18}  {place}",
                cat.id, cat.name, cat.age, cat.breed
            );
        }
    }
    println!();
    println!("{}", format!("{} gatinho(s) no catalogo", cats.len()).dim());
}
