//! Brand preset commands.

use crate::brand::{BrandPreset, BrandRegistry};
use crate::cli::common::{load_config, load_tokens, print_json, CliResult};
use clap::{Args, Subcommand};

/// Brand identity preset commands
#[derive(Args, Debug)]
pub struct BrandArgs {
    #[command(subcommand)]
    command: BrandCommand,
}

#[derive(Subcommand, Debug)]
enum BrandCommand {
    /// List the available presets
    List,
    /// Show one preset (unknown keys show the default preset)
    Show(BrandShowArgs),
}

/// Show one preset
#[derive(Args, Debug)]
pub struct BrandShowArgs {
    /// Preset key (defaults to the configured brand)
    #[arg(value_name = "KEY")]
    key: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl BrandArgs {
    /// Execute brand subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            BrandCommand::List => list(),
            BrandCommand::Show(args) => args.execute(),
        }
    }
}

fn load_registry() -> CliResult<(BrandRegistry, String)> {
    let config = load_config()?;
    let tokens = load_tokens(None, &[], &config)?;
    let registry = BrandRegistry::load(&tokens)?;
    Ok((registry, config.ui.brand))
}

fn list() -> CliResult<()> {
    let (registry, configured) = load_registry()?;
    let default_key = registry.default_preset().key.clone();

    for summary in registry.available() {
        let mut marks = Vec::new();
        if summary.key == default_key {
            marks.push("default");
        }
        if summary.key == configured {
            marks.push("configured");
        }
        let suffix = if marks.is_empty() {
            String::new()
        } else {
            format!(" ({})", marks.join(", "))
        };
        println!("{} {:<12} {}{suffix}", summary.icon, summary.key, summary.name);
    }
    Ok(())
}

impl BrandShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let (registry, configured) = load_registry()?;
        let key = self.key.as_deref().unwrap_or(&configured);
        let preset = registry.get_preset(key);

        if self.json {
            return print_json(preset);
        }

        print_preset(preset);
        Ok(())
    }
}

fn print_preset(preset: &BrandPreset) {
    println!("{} {} ({})", preset.icon, preset.name, preset.key);

    if !preset.values.is_empty() {
        println!();
        println!("Values:");
        for (name, text) in &preset.values {
            println!("  {name}: {text}");
        }
    }

    if !preset.personality.is_empty() {
        println!();
        println!("Personality:");
        for (name, text) in &preset.personality {
            println!("  {name}: {text}");
        }
    }

    if let Some(voice) = &preset.voice {
        println!();
        println!("Voice:");
        for line in &voice.characteristics {
            println!("  + {line}");
        }
        for line in &voice.avoid {
            println!("  - {line}");
        }
    }

    if let Some(visual) = &preset.visual {
        if !visual.colors.is_empty() {
            println!();
            println!("Colors:");
            for (role, guide) in &visual.colors {
                println!("  {role:<10} {} {}", guide.color, guide.name);
            }
        }
        if !visual.typography.is_empty() {
            println!();
            println!("Typography:");
            for (role, guide) in &visual.typography {
                println!("  {role:<10} {}", guide.family);
            }
        }
    }

    if !preset.modules.is_empty() {
        println!();
        println!("Modules:");
        for (key, module) in &preset.modules {
            println!("  {key}: {} - {}", module.name, module.tagline);
        }
    }
}
