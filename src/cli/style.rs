//! Component style commands.

use crate::cli::common::{load_config, load_tokens, print_json, CliError, CliResult};
use crate::styles::{
    badge_style, button_style, BadgeOptions, BadgeSize, BadgeVariant, ButtonSize, ButtonState,
    ButtonVariant, StyleRecord,
};
use clap::{Args, ValueEnum};
use std::str::FromStr;

/// Component a style is composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Component {
    /// Button
    Button,
    /// Badge
    Badge,
}

/// Print the composed style of a component
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Component to style
    #[arg(value_enum)]
    component: Component,

    /// Variant (button: primary, secondary, accent, success, warning, error, ghost;
    /// badge: default, primary, secondary, accent, success, warning, error, info)
    #[arg(long, value_name = "VARIANT")]
    variant: Option<String>,

    /// Size (button: sm, md, lg; badge: xs, sm, md, lg)
    #[arg(long, value_name = "SIZE")]
    size: Option<String>,

    /// Button: disabled state
    #[arg(long)]
    disabled: bool,

    /// Button: loading state
    #[arg(long)]
    loading: bool,

    /// Button: stretch to the container width
    #[arg(long)]
    full_width: bool,

    /// Badge: outline instead of filled
    #[arg(long)]
    outline: bool,

    /// Badge: square corners instead of a pill
    #[arg(long)]
    square: bool,

    /// Badge: render as a dot
    #[arg(long)]
    dot: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl StyleArgs {
    /// Execute style command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let tokens = load_tokens(None, &[], &config)?;

        let style = match self.component {
            Component::Button => {
                self.reject_flags(&[
                    ("--outline", self.outline),
                    ("--square", self.square),
                    ("--dot", self.dot),
                ])?;
                let variant: ButtonVariant = parse_or_default(self.variant.as_deref())?;
                let size: ButtonSize = parse_or_default(self.size.as_deref())?;
                let state = ButtonState {
                    disabled: self.disabled,
                    loading: self.loading,
                    full_width: self.full_width,
                };
                button_style(&tokens, variant, size, state)
            }
            Component::Badge => {
                self.reject_flags(&[
                    ("--disabled", self.disabled),
                    ("--loading", self.loading),
                    ("--full-width", self.full_width),
                ])?;
                let variant: BadgeVariant = parse_or_default(self.variant.as_deref())?;
                let size: BadgeSize = parse_or_default(self.size.as_deref())?;
                let options = BadgeOptions {
                    outline: self.outline,
                    rounded: !self.square,
                    dot: self.dot,
                };
                badge_style(&tokens, variant, size, options)
            }
        };

        output(&style, self.json)
    }

    fn reject_flags(&self, flags: &[(&str, bool)]) -> CliResult<()> {
        let given: Vec<&str> = flags.iter().filter(|(_, on)| *on).map(|(n, _)| *n).collect();
        if given.is_empty() {
            return Ok(());
        }
        Err(CliError::validation(format!(
            "{} not supported for {:?}",
            given.join(", "),
            self.component
        )))
    }
}

fn parse_or_default<T>(value: Option<&str>) -> CliResult<T>
where
    T: FromStr<Err = String> + Default,
{
    match value {
        Some(value) => value.parse().map_err(CliError::validation),
        None => Ok(T::default()),
    }
}

fn output(style: &StyleRecord, json: bool) -> CliResult<()> {
    if json {
        return print_json(style);
    }
    print!("{}", style.to_css());
    Ok(())
}
