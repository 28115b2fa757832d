//! edbinds - Flatten Elite Dangerous key-binding files into a readable table
//!
//! This is the main entry point for the edbinds command line.
//! The actual logic is in the library modules for better testability.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use edbinds::config::{self, Settings};
use edbinds::error::ConfigError;
use edbinds::export::ExportFormat;
use edbinds::mappings::select_device_map;
use edbinds::{ActionMapping, BindingFile, DeviceMap, KeyBindingView, filter, load_device_maps};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Show every configured Elite Dangerous binding with readable device labels
#[derive(Debug, Parser)]
#[command(name = "edbinds", version, about)]
struct Cli {
    /// Binding file to read (looked up in the bindings directory if not found)
    #[arg(required_unless_present = "list_device_maps")]
    binds: Option<PathBuf>,

    /// Settings file (default: ~/.edbinds/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Action mappings JSON file
    #[arg(long, value_name = "PATH")]
    actions: Option<PathBuf>,

    /// Directory of device map JSON files
    #[arg(long, value_name = "DIR")]
    device_maps: Option<PathBuf>,

    /// Name of the device map to use
    #[arg(short = 'd', long, value_name = "NAME")]
    device_map: Option<String>,

    /// Only show rows whose action, area, category or keys contain TEXT
    #[arg(short = 'f', long, value_name = "TEXT")]
    filter: Option<String>,

    /// Output format (inferred from --output when omitted)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// List available device maps and exit
    #[arg(long)]
    list_device_maps: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        explicit
            .or_else(|| match ExportFormat::from_path(output?)? {
                ExportFormat::Csv => Some(OutputFormat::Csv),
                ExportFormat::Json => Some(OutputFormat::Json),
            })
            .unwrap_or(OutputFormat::Table)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    edbinds::logging::init(cli.verbose);

    let settings = apply_overrides(load_settings(cli.config.as_deref())?, &cli);

    let device_maps = load_maps(&settings.device_mappings_dir);
    if cli.list_device_maps {
        let active = select_device_map(&device_maps, settings.device_map.as_deref());
        for map in &device_maps {
            let marker = if active.is_some_and(|a| std::ptr::eq(a, map)) { "*" } else { " " };
            println!("{} {}", marker, map.name());
        }
        return Ok(());
    }

    let fallback = DeviceMap::default();
    let device_map = match select_device_map(&device_maps, settings.device_map.as_deref()) {
        Some(map) => map,
        None => {
            warn!("no device maps loaded, showing raw device ids");
            &fallback
        }
    };
    info!(device_map = device_map.name(), "active device map");

    let actions = load_actions(&settings.action_mappings)?;

    let Some(binds) = cli.binds.as_deref() else {
        bail!("no binding file given");
    };
    let binds_path = settings.resolve_bindings_path(binds);
    let file = BindingFile::open(&binds_path)?;

    let views = edbinds::project_all(&file, device_map, &actions);
    let shown = filter::apply(&views, cli.filter.as_deref().unwrap_or(""));

    let rendered = match OutputFormat::resolve(cli.format, cli.output.as_deref()) {
        OutputFormat::Table => {
            let mut out = edbinds::table::render(&shown);
            out.push_str(&format!(
                "\n{} of {} bindings | {} | keyboard layout {} | device map {}\n",
                shown.len(),
                views.len(),
                file.display_name(),
                file.keyboard_layout,
                display_or(device_map.name(), "(none)"),
            ));
            out
        }
        OutputFormat::Csv => ExportFormat::Csv.render(&owned(&shown))?,
        OutputFormat::Json => ExportFormat::Json.render(&owned(&shown))?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = shown.len(), "wrote output");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => config::load_settings_from(path)?,
        None => match config::load_settings() {
            Err(ConfigError::NoHomeDir) => Settings::default(),
            other => other?,
        },
    };
    Ok(settings)
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(actions) = &cli.actions {
        settings.action_mappings = actions.clone();
    }
    if let Some(dir) = &cli.device_maps {
        settings.device_mappings_dir = dir.clone();
    }
    if let Some(name) = &cli.device_map {
        settings.device_map = Some(name.clone());
    }
    settings
}

/// A missing table is not fatal: rows just show raw action codes
fn load_actions(path: &Path) -> Result<Vec<ActionMapping>> {
    if !path.exists() {
        warn!(path = %path.display(), "action mappings file not found");
        return Ok(Vec::new());
    }
    Ok(ActionMapping::open(path)?)
}

fn load_maps(dir: &Path) -> Vec<DeviceMap> {
    load_device_maps(dir).unwrap_or_else(|e| {
        warn!(error = %e, "device mappings directory unavailable");
        Vec::new()
    })
}

fn owned(views: &[&KeyBindingView]) -> Vec<KeyBindingView> {
    views.iter().map(|v| (*v).clone()).collect()
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
