//! Theme mode commands backed by the persisted mode file.

use crate::cli::common::{load_config, load_tokens, print_json, CliError, CliResult};
use crate::config::Config;
use crate::theme::{FileStorage, ThemeMode, ThemePalette, ThemeStorage, ThemeStore};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Theme mode commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Show the current theme mode
    Show(ThemeShowArgs),
    /// Flip between light and dark and persist the result
    Toggle,
    /// Print the colour palette of a mode
    Palette(ThemePaletteArgs),
}

/// Show the current theme mode
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Print the colour palette of a mode
#[derive(Args, Debug)]
pub struct ThemePaletteArgs {
    /// Mode to print (defaults to the current mode)
    #[arg(long, value_name = "MODE")]
    mode: Option<ThemeMode>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ThemeOutput {
    mode: ThemeMode,
    persisted: bool,
    storage: String,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemeCommand::Show(args) => args.execute(),
            ThemeCommand::Toggle => toggle(),
            ThemeCommand::Palette(args) => args.execute(),
        }
    }
}

fn open_storage(config: &Config) -> CliResult<FileStorage> {
    let dir = config
        .state_dir()
        .map_err(|e| CliError::io(format!("Failed to locate state directory: {e}")))?;
    Ok(FileStorage::new(dir))
}

fn open_store(config: &Config) -> CliResult<(ThemeStore, FileStorage)> {
    let storage = open_storage(config)?;
    let store = ThemeStore::new(storage.clone(), config.ui.initial_mode.resolve());
    Ok((store, storage))
}

impl ThemeShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let (store, storage) = open_store(&config)?;
        let persisted = matches!(storage.load(), Ok(Some(_)));

        if self.json {
            return print_json(&ThemeOutput {
                mode: store.mode(),
                persisted,
                storage: storage.path().display().to_string(),
            });
        }

        println!("{}", store.mode());
        Ok(())
    }
}

fn toggle() -> CliResult<()> {
    let config = load_config()?;
    let (mut store, storage) = open_store(&config)?;
    let mode = store.toggle();

    // The store only logs write failures.
    match storage.load() {
        Ok(Some(saved)) if saved == mode.as_str() => {}
        _ => {
            return Err(CliError::io(format!(
                "Failed to persist theme mode to {}",
                storage.path().display()
            )))
        }
    }

    println!("{mode}");
    Ok(())
}

impl ThemePaletteArgs {
    /// Execute palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mode = match self.mode {
            Some(mode) => mode,
            None => open_store(&config)?.0.mode(),
        };
        let tokens = load_tokens(None, &[], &config)?;
        let palette = ThemePalette::for_mode(mode, &tokens);

        if self.json {
            return print_json(&palette);
        }

        println!("Palette ({mode})");
        println!("  background      {}", palette.background);
        println!("  paper           {}", palette.paper);
        println!("  overlay         {}", palette.overlay);
        println!("  divider         {}", palette.divider);
        println!("  text.primary    {}", palette.text_primary);
        println!("  text.secondary  {}", palette.text_secondary);
        println!("  text.disabled   {}", palette.text_disabled);
        println!("  primary         {}", palette.primary);
        println!("  secondary       {}", palette.secondary);
        println!("  accent          {}", palette.accent);
        println!("  success         {}", palette.success);
        println!("  warning         {}", palette.warning);
        println!("  error           {}", palette.error);
        println!("  info            {}", palette.info);
        Ok(())
    }
}
