use std::{path::Path, time::Duration};

use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::ProgressBar;
use miauplace::{
    domain::{format_phone, BREEDS, MAX_PERSONALITY, PERSONALITY_TRAITS},
    wizard::images,
    AgeUnit, CatStore, DraftPatch, Gender, State, Step, SubmitError, ViaCep, Wizard,
};
use tracing::instrument;

use crate::cli::{load_config, open_store, terminal::Colorize};

/// The interactive donation wizard.
#[derive(Debug, clap::Parser)]
pub struct Donate {}

impl Donate {
    #[instrument(skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = load_config(root);
        let mut store = open_store(root, &config);
        let lookup = ViaCep::new(config.lookup_base_url());
        let max_images = config.max_images();

        println!("{}", "Doar um Gatinho".accent());
        println!(
            "{}",
            "Preencha as informacoes abaixo para ajudar seu gatinho a encontrar um novo lar".dim()
        );

        let mut wizard = Wizard::new();
        loop {
            match wizard.state() {
                State::Editing(step) => {
                    print_step_header(step);
                    match step {
                        Step::CatInfo => prompt_cat_info(&mut wizard)?,
                        Step::Photos => prompt_photos(&mut wizard, max_images)?,
                        Step::Location => prompt_location(&mut wizard, &lookup)?,
                        Step::Contact => {
                            prompt_contact(&mut wizard)?;
                            attempt_submit(&mut wizard, &mut store)?;
                            continue;
                        }
                    }
                    if !wizard.advance() {
                        print_errors(&wizard);
                        offer_retreat(&mut wizard)?;
                    }
                }
                // Submission runs to completion inside `attempt_submit`.
                State::Submitting => unreachable!("submission is synchronous"),
                State::Success => {
                    let again = Confirm::new()
                        .with_prompt("Cadastrar outro gatinho?")
                        .default(false)
                        .interact()?;
                    if !again {
                        break;
                    }
                    wizard.reset();
                }
            }
        }

        Ok(())
    }
}

fn print_step_header(step: Step) {
    let label = match step {
        Step::CatInfo => "Sobre o gato",
        Step::Photos => "Fotos",
        Step::Location => "Localizacao",
        Step::Contact => "Contato",
    };
    println!();
    println!("{}", format!("Passo {}/4: {label}", step.number()).accent());
}

fn print_errors(wizard: &Wizard) {
    for (_, message) in wizard.errors().iter() {
        println!("{}", message.error());
    }
}

/// After a failed step gate, offer to go back one step instead of
/// re-entering the same one.
fn offer_retreat(wizard: &mut Wizard) -> anyhow::Result<()> {
    if wizard.state() == State::Editing(Step::CatInfo) {
        return Ok(());
    }
    let back = Confirm::new()
        .with_prompt("Voltar ao passo anterior?")
        .default(false)
        .interact()?;
    if back {
        wizard.retreat();
    }
    Ok(())
}

fn prompt_cat_info(wizard: &mut Wizard) -> anyhow::Result<()> {
    let draft = wizard.draft().clone();

    let name: String = Input::new()
        .with_prompt("Nome do gatinho")
        .with_initial_text(draft.name)
        .allow_empty(true)
        .interact_text()?;

    let age: String = Input::new()
        .with_prompt("Idade")
        .with_initial_text(draft.age)
        .allow_empty(true)
        .interact_text()?;

    let unit = Select::new()
        .with_prompt("Meses ou anos?")
        .items(&["Anos", "Meses"])
        .default(usize::from(draft.age_unit == AgeUnit::Months))
        .interact()?;
    let age_unit = if unit == 1 { AgeUnit::Months } else { AgeUnit::Years };

    let breed_index = Select::new()
        .with_prompt("Raca")
        .items(&BREEDS)
        .default(0)
        .interact()?;

    let gender = Select::new()
        .with_prompt("Sexo")
        .items(&["Femea", "Macho"])
        .default(usize::from(draft.gender == Gender::Male))
        .interact()?;

    let description: String = Input::new()
        .with_prompt("Descricao (pelo menos 20 caracteres)")
        .with_initial_text(draft.description)
        .allow_empty(true)
        .interact_text()?;

    let personality = prompt_personality(&draft.personality)?;

    let vaccinated = Confirm::new()
        .with_prompt("Vacinado?")
        .default(draft.vaccinated)
        .interact()?;
    let neutered = Confirm::new()
        .with_prompt("Castrado?")
        .default(draft.neutered)
        .interact()?;

    let health_info: String = Input::new()
        .with_prompt("Informacoes de saude (opcional)")
        .with_initial_text(draft.health_info)
        .allow_empty(true)
        .interact_text()?;

    let good_with_kids = Confirm::new()
        .with_prompt("Convive bem com criancas?")
        .default(draft.good_with_kids)
        .interact()?;
    let good_with_dogs = Confirm::new()
        .with_prompt("Convive bem com caes?")
        .default(draft.good_with_dogs)
        .interact()?;
    let good_with_cats = Confirm::new()
        .with_prompt("Convive bem com outros gatos?")
        .default(draft.good_with_cats)
        .interact()?;

    wizard.update(DraftPatch {
        name: Some(name),
        age: Some(age),
        age_unit: Some(age_unit),
        breed: Some(BREEDS[breed_index].to_string()),
        gender: Some(if gender == 1 { Gender::Male } else { Gender::Female }),
        description: Some(description),
        personality: Some(personality),
        vaccinated: Some(vaccinated),
        neutered: Some(neutered),
        health_info: Some(health_info),
        good_with_kids: Some(good_with_kids),
        good_with_dogs: Some(good_with_dogs),
        good_with_cats: Some(good_with_cats),
        ..DraftPatch::default()
    });

    Ok(())
}

fn prompt_personality(current: &[String]) -> anyhow::Result<Vec<String>> {
    loop {
        let defaults: Vec<bool> = PERSONALITY_TRAITS
            .iter()
            .map(|t| current.iter().any(|c| c == t))
            .collect();
        let chosen = MultiSelect::new()
            .with_prompt(format!("Personalidade (selecione ate {MAX_PERSONALITY})"))
            .items(&PERSONALITY_TRAITS)
            .defaults(&defaults)
            .interact()?;

        if chosen.len() > MAX_PERSONALITY {
            println!(
                "{}",
                format!("Selecione no maximo {MAX_PERSONALITY} caracteristicas").error()
            );
            continue;
        }
        return Ok(chosen
            .into_iter()
            .map(|i| PERSONALITY_TRAITS[i].to_string())
            .collect());
    }
}

fn prompt_photos(wizard: &mut Wizard, max_images: usize) -> anyhow::Result<()> {
    let staged = wizard.draft().images.clone();
    println!(
        "{}",
        format!(
            "{} de {max_images} fotos adicionadas. A primeira foto sera a capa do anuncio.",
            staged.len()
        )
        .dim()
    );

    let raw: String = Input::new()
        .with_prompt("Caminhos das fotos (separados por virgula)")
        .allow_empty(true)
        .interact_text()?;
    let paths: Vec<&Path> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(Path::new)
        .collect();

    let mut updated = images::add_files(&staged, &paths, max_images);
    let skipped = staged.len() + paths.len() - updated.len();
    if skipped > 0 {
        println!("{}", format!("{skipped} arquivo(s) ignorado(s)").dim());
    }

    if updated.len() > 1 {
        let labels: Vec<String> = (1..=updated.len()).map(|i| format!("Foto {i}")).collect();
        let cover = Select::new()
            .with_prompt("Qual foto sera a capa?")
            .items(&labels)
            .default(0)
            .interact()?;
        updated = images::move_image(&updated, cover, 0);
    }

    wizard.update(DraftPatch {
        images: Some(updated),
        ..DraftPatch::default()
    });

    Ok(())
}

fn prompt_location(wizard: &mut Wizard, lookup: &ViaCep) -> anyhow::Result<()> {
    let cep: String = Input::new()
        .with_prompt("CEP")
        .with_initial_text(wizard.draft().postal_code.clone())
        .allow_empty(true)
        .interact_text()?;

    if wizard.set_postal_code(&cep) {
        let spinner = spinner("Buscando endereco...");
        let address = lookup.lookup(&cep);
        spinner.finish_and_clear();
        match address {
            Some(address) => wizard.apply_address(&address),
            // Lookup is an enhancement; fall through to manual entry.
            None => println!("{}", "Endereco nao encontrado, preencha manualmente".dim()),
        }
    }

    let draft = wizard.draft().clone();
    let city: String = Input::new()
        .with_prompt("Cidade")
        .with_initial_text(draft.city)
        .allow_empty(true)
        .interact_text()?;
    let neighborhood: String = Input::new()
        .with_prompt("Bairro")
        .with_initial_text(draft.neighborhood)
        .allow_empty(true)
        .interact_text()?;
    let street: String = Input::new()
        .with_prompt("Rua (opcional, nao sera exibido publicamente)")
        .with_initial_text(draft.street)
        .allow_empty(true)
        .interact_text()?;

    wizard.update(DraftPatch {
        city: Some(city),
        neighborhood: Some(neighborhood),
        street: Some(street),
        ..DraftPatch::default()
    });

    Ok(())
}

fn prompt_contact(wizard: &mut Wizard) -> anyhow::Result<()> {
    let draft = wizard.draft().clone();

    let owner_name: String = Input::new()
        .with_prompt("Seu nome")
        .with_initial_text(draft.owner_name)
        .allow_empty(true)
        .interact_text()?;
    let whatsapp: String = Input::new()
        .with_prompt("WhatsApp")
        .with_initial_text(draft.owner_whatsapp)
        .allow_empty(true)
        .interact_text()?;
    let phone: String = Input::new()
        .with_prompt("Telefone (opcional)")
        .with_initial_text(draft.owner_phone)
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::new()
        .with_prompt("E-mail (opcional)")
        .with_initial_text(draft.owner_email)
        .allow_empty(true)
        .interact_text()?;

    wizard.update(DraftPatch {
        owner_name: Some(owner_name),
        owner_whatsapp: Some(format_phone(&whatsapp)),
        owner_phone: Some(format_phone(&phone)),
        owner_email: Some(email),
        ..DraftPatch::default()
    });

    Ok(())
}

fn attempt_submit<S: CatStore>(wizard: &mut Wizard, store: &mut S) -> anyhow::Result<()> {
    let spinner = spinner("Publicando...");
    let result = wizard.submit(store);
    spinner.finish_and_clear();

    match result {
        Ok(record) => {
            println!();
            println!("{}", "Anuncio Criado!".success());
            println!(
                "O perfil de {} foi publicado com sucesso. Em breve ele encontrara um novo lar \
                 cheio de amor!",
                record.name.accent()
            );
            println!("{}", format!("id: {}", record.id).dim());
        }
        Err(SubmitError::Invalid) => print_errors(wizard),
        Err(SubmitError::Store(_)) => {
            if let Some(banner) = wizard.submit_error() {
                println!("{}", banner.error());
            }
        }
        Err(SubmitError::NotReady) => {}
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
