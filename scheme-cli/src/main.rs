mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use scheme_core::{
    default_schemes_path, ModifierField, Scheme, SchemeError, SchemeStore, SettingField, Storage,
};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let schemes_path = match &cli.file {
        Some(path) => path.clone(),
        None => default_schemes_path()?,
    };
    let storage = Storage::new(schemes_path);

    match &cli.command {
        Command::List => {
            list_schemes(&storage)?;
        }
        Command::Show { name } => {
            show_scheme(&storage, name)?;
        }
        Command::New { name } => {
            new_scheme(&storage, name)?;
        }
        Command::Copy { name, new_name } => {
            copy_scheme(&storage, name, new_name.as_deref())?;
        }
        Command::Del { name, yes } => {
            delete_scheme(&storage, name, *yes)?;
        }
        Command::Set { name, field, value } => {
            set_field(&storage, name, field, value)?;
        }
        Command::Rename { name, new_name } => {
            rename_scheme(&storage, name, new_name)?;
        }
        Command::Fields => {
            list_fields();
        }
        Command::Export { output } => {
            export_schemes(&storage, output.as_deref())?;
        }
    }

    Ok(())
}

fn find_scheme(store: &SchemeStore, name: &str) -> Result<usize> {
    store
        .find_by_name(name)
        .ok_or_else(|| SchemeError::NotFound { name: name.to_string() }.into())
}

fn list_schemes(storage: &Storage) -> Result<()> {
    let store = storage.load()?;
    for (idx, scheme) in store.iter().enumerate() {
        if store.is_default(idx) {
            println!("{} {}", scheme.name, "[built-in]".dimmed());
        } else {
            println!("{}", scheme.name.green());
        }
    }
    Ok(())
}

fn show_scheme(storage: &Storage, name: &str) -> Result<()> {
    let store = storage.load()?;
    let idx = find_scheme(&store, name)?;
    let scheme = store.get(idx).context("scheme disappeared during lookup")?;

    if store.is_default(idx) {
        println!("{} {}", scheme.name.bold(), "[built-in]".dimmed());
    } else {
        println!("{}", scheme.name.bold());
    }

    println!("\n{}", "Game Modifiers".yellow());
    for field in ModifierField::ALL {
        let mark = if scheme.modifiers.get(field) { "on".green() } else { "off".dimmed() };
        println!("  {:28} {}", field.label(), mark);
    }

    println!("\n{}", "Basic Settings".yellow());
    for field in SettingField::ALL {
        let value = scheme.settings.get(field);
        if field == SettingField::MinesTime && value == -1 {
            println!("  {:28} {}", field.label(), "Random");
        } else {
            println!("  {:28} {}", field.label(), value);
        }
    }
    Ok(())
}

fn new_scheme(storage: &Storage, name: &str) -> Result<()> {
    let mut store = storage.load()?;
    store.add_new(name);
    storage.save(&store)?;
    println!("{} '{}'", "Created scheme".green(), name);
    Ok(())
}

fn copy_scheme(storage: &Storage, name: &str, new_name: Option<&str>) -> Result<()> {
    let mut store = storage.load()?;
    let idx = find_scheme(&store, name)?;
    let copy = store.duplicate(idx)?;
    if let Some(new_name) = new_name {
        store.get_mut(copy)?.name = new_name.to_string();
    }
    let copy_name = store.get(copy).map(|s| s.name.clone()).unwrap_or_default();
    storage.save(&store)?;
    println!("{} '{}' -> '{}'", "Copied".green(), name, copy_name);
    Ok(())
}

fn delete_scheme(storage: &Storage, name: &str, skip_confirm: bool) -> Result<()> {
    let mut store = storage.load()?;
    let idx = find_scheme(&store, name)?;

    if store.is_default(idx) {
        anyhow::bail!(SchemeError::BuiltIn { index: idx });
    }

    println!("{}", "Scheme to delete:".yellow());
    println!("  Name: {}", name);

    if !skip_confirm {
        let confirm = inquire::Confirm::new("Really delete this game scheme?")
            .with_default(false)
            .prompt()?;

        if !confirm {
            println!("{}", "Deletion cancelled.".yellow());
            return Ok(());
        }
    }

    store.remove(idx)?;
    storage.save(&store)?;
    println!("{} '{}'", "Deleted scheme".green(), name);
    Ok(())
}

fn set_field(storage: &Storage, name: &str, field: &str, value: &str) -> Result<()> {
    let mut store = storage.load()?;
    let idx = find_scheme(&store, name)?;

    if let Some(modifier) = ModifierField::from_name(field) {
        let on = parse_toggle(value)?;
        store.get_mut(idx)?.modifiers.set(modifier, on);
        storage.save(&store)?;
        println!("{} {} = {}", "Set".green(), modifier.label(), on);
        return Ok(());
    }

    if let Some(setting) = SettingField::from_name(field) {
        let requested: i32 = value
            .parse()
            .with_context(|| format!("'{}' is not an integer", value))?;
        let stored = store.get_mut(idx)?.settings.set_clamped(setting, requested);
        storage.save(&store)?;
        if stored != requested {
            let spec = setting.spec();
            println!(
                "{} {} clamped to {} (range {}..={})",
                "Note:".yellow(),
                setting.label(),
                stored,
                spec.min,
                spec.max
            );
        } else {
            println!("{} {} = {}", "Set".green(), setting.label(), stored);
        }
        return Ok(());
    }

    anyhow::bail!("Unknown field '{}' (see `schemes fields`)", field);
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => anyhow::bail!("'{}' is not a toggle value (use true/false)", other),
    }
}

fn rename_scheme(storage: &Storage, name: &str, new_name: &str) -> Result<()> {
    let mut store = storage.load()?;
    let idx = find_scheme(&store, name)?;
    store.get_mut(idx)?.name = new_name.to_string();
    storage.save(&store)?;
    println!("{} '{}' -> '{}'", "Renamed".green(), name, new_name);
    Ok(())
}

fn list_fields() {
    println!("{}", "Toggles (true/false)".yellow());
    for field in ModifierField::ALL {
        println!("  {:24} {}", field.name(), field.label().dimmed());
    }
    println!("\n{}", "Settings (integer)".yellow());
    for field in SettingField::ALL {
        let spec = field.spec();
        println!(
            "  {:24} {}..={} step {} (default {})",
            field.name(),
            spec.min,
            spec.max,
            spec.step,
            spec.default
        );
    }
}

fn export_schemes(storage: &Storage, output: Option<&std::path::Path>) -> Result<()> {
    let store = storage.load()?;
    let schemes: Vec<&Scheme> = store.iter().collect();
    let json = serde_json::to_string_pretty(&schemes)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write export to {:?}", path))?;
            println!("{} {}", "Exported to".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
