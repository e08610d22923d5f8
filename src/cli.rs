use crate::config::{ConfigLoader, WidgetConfig};
use crate::error::{CliError, ConfigurationError};
use crate::fields::{FieldKind, FieldType};
use crate::sync::SyncEvent;
use crate::widget::{DateTimeField, HostElement, InputElement};
use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
#[clap(version, about)]
pub struct CliArgs {
    /// Widget options file (yaml, json, toml or ron). Flags below override its values.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// One of datetime, date or time
    #[clap(short = 't', long = "type")]
    pub field_type: Option<FieldType>,

    #[clap(short, long)]
    pub input_format: Option<String>,

    #[clap(short, long)]
    pub output_format: Option<String>,

    /// Locale tag such as fr-FR
    #[clap(short, long)]
    pub lang: Option<String>,

    /// Name of the simulated input element
    #[clap(short, long, default_value = "datetime")]
    pub name: String,

    /// Initial value of the simulated input element
    #[clap(short, long, default_value = "")]
    pub value: String,

    /// Edit to replay, as `<kind>=<value>`. Repeatable, applied in order.
    #[clap(short, long = "edit", value_parser = parse_edit)]
    pub edits: Vec<(FieldKind, String)>,

    /// Milliseconds between two replayed edits
    #[clap(short, long, default_value = "100")]
    pub step_ms: u64,
}

fn parse_edit(edit: &str) -> Result<(FieldKind, String), String> {
    let (kind, value) = edit
        .split_once('=')
        .ok_or_else(|| format!("Expected <kind>=<value>, got '{edit}'."))?;
    let kind = FieldKind::from_str(kind.trim()).map_err(|err| format!("{err}: '{kind}'"))?;
    Ok((kind, value.to_string()))
}

/// Run the CLI
pub fn run() -> ExitCode {
    let args = CliArgs::parse();

    match replay(&args) {
        Ok(lines) => {
            lines.iter().for_each(|line| println!("{line}"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

pub fn build_config(args: &CliArgs) -> Result<WidgetConfig, ConfigurationError> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load::<WidgetConfig>(path)?,
        None => WidgetConfig::default(),
    };
    if let Some(field_type) = args.field_type {
        config.field_type = field_type;
    }
    if let Some(format) = &args.input_format {
        config = config.with_input_format(format);
    }
    if let Some(format) = &args.output_format {
        config = config.with_output_format(format);
    }
    if let Some(lang) = &args.lang {
        config = config.with_lang(lang);
    }
    Ok(config)
}

/// Renders the field, replays every edit and lets all timers fire.
///
/// Returns one line per observable step, each ending with the host value.
pub fn replay(args: &CliArgs) -> Result<Vec<String>, CliError> {
    let config = build_config(args)?;
    let mut field = DateTimeField::new(InputElement::text(&args.name, &args.value), config)?;
    field.render()?;

    let mut lines = vec![format!("rendered -> '{}'", composed_or_empty(&field))];
    let step = Duration::from_millis(args.step_ms);
    let mut now = Duration::ZERO;

    for (kind, value) in &args.edits {
        now += step;
        for event in field.advance(now)? {
            lines.push(describe(&event, field.host()));
        }
        let event = if kind.is_choice() {
            field.select(*kind, value)?
        } else {
            field.type_value(*kind, value, now)?
        };
        lines.push(describe(&event, field.host()));
    }

    while let Some(deadline) = field.next_deadline() {
        for event in field.advance(deadline)? {
            lines.push(describe(&event, field.host()));
        }
    }
    lines.push(format!("final -> '{}'", field.host().value()));
    Ok(lines)
}

fn composed_or_empty<H: HostElement>(field: &DateTimeField<H>) -> String {
    field.composed().unwrap_or_default()
}

fn describe(event: &SyncEvent, host: &impl HostElement) -> String {
    let step = match event {
        SyncEvent::Scheduled { kind, deadline } => {
            format!("{kind} scheduled for {}ms", deadline.as_millis())
        }
        SyncEvent::Errored(err) => format!("error: {err}"),
        SyncEvent::Committed { kind, value } => format!("{kind} committed '{value}'"),
        SyncEvent::RolledBack {
            kind,
            rejected,
            restored,
        } => format!("{kind} rejected '{rejected}', restored '{restored}'"),
    };
    format!("{step} -> '{}'", host.value())
}
