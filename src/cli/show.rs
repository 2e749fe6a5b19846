use std::path::Path;

use miauplace::CatStore;
use tracing::instrument;

use crate::cli::{load_config, open_store, terminal::Colorize};

/// Show one cat's full profile.
#[derive(Debug, clap::Parser)]
pub struct Show {
    /// The record identifier, as printed by `miau list`
    id: String,
}

impl Show {
    #[instrument(skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let store = open_store(root, &config);
        let cats = store.list_all()?;

        let Some(cat) = cats.iter().find(|cat| cat.id == self.id) else {
            anyhow::bail!("No cat with id {}", self.id);
        };

        println!("{}", cat.name.accent());
        println!("{}", format!("{} · {}", cat.breed, cat.age).dim());
        println!();
        println!("{}", cat.description);
        println!();
        println!("Personalidade: {}", cat.personality.join(", "));

        let mut health = Vec::new();
        if cat.vaccinated {
            health.push("Vacinado");
        }
        if cat.neutered {
            health.push("Castrado");
        }
        if !health.is_empty() {
            println!("Saude: {}", health.join(", ").success());
        }
        if !cat.health_info.is_empty() {
            println!("{}", cat.health_info.dim());
        }

        let mut good_with = Vec::new();
        if cat.good_with.kids {
            good_with.push("criancas");
        }
        if cat.good_with.dogs {
            good_with.push("caes");
        }
        if cat.good_with.cats {
            good_with.push("outros gatos");
        }
        if !good_with.is_empty() {
            println!("Convive bem com: {}", good_with.join(", "));
        }

        println!();
        println!(
            "Local: {}, {} - {}",
            cat.location.neighborhood, cat.location.city, cat.location.state
        );
        println!("Contato: {} (WhatsApp {})", cat.owner.name, cat.owner.whatsapp);
        println!("{}", format!("{} foto(s) · publicado em {}", cat.images.len(), cat.created_at).dim());

        Ok(())
    }
}
