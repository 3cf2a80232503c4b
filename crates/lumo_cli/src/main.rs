//! Lumo CLI
//!
//! Inspect and set the persisted theme preference, and print the styles and
//! shadows the engine resolves for it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lumo_cn::prelude::*;
use lumo_core::Color;
use lumo_theme::{compose_shadow, ManualAppearance, ThemeSettings, ThemeStore};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "lumo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lumo theme and component style inspector", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ./lumo.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Simulated OS appearance instead of detecting it
    #[arg(long, global = true, value_enum)]
    scheme: Option<SchemeArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Button,
    Chip,
    Checkbox,
    Input,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the theme preference and resolved theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },

    /// Resolve a component style
    Style {
        /// Component kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Style variant name (unknown names fall back to the default variant)
        #[arg(long)]
        variant: Option<String>,

        /// Size name (sm, md, lg, icon)
        #[arg(long)]
        size: Option<String>,

        #[arg(long)]
        hover: bool,

        #[arg(long)]
        press: bool,

        #[arg(long)]
        focus: bool,

        #[arg(long)]
        loading: bool,

        #[arg(long)]
        selected: bool,

        #[arg(long)]
        disabled: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compose a shadow value
    Shadow {
        /// Shadow key, e.g. regular.card
        key: String,

        /// Add the border ring (card, modal, and popover shadows)
        #[arg(long)]
        border: bool,

        /// Focus ring: default, destructive, misc, or input
        #[arg(long)]
        focus: Option<String>,
    },

    /// List the resolved color tokens
    Tokens,

    /// Print the effective settings as TOML
    Config,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Set and persist the preference (light, dark, or system)
    Set { preference: String },

    /// Switch to the opposite of the resolved theme
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let settings = config::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Theme { command } => {
            let store = open_store(&settings, cli.scheme)?;
            match command {
                None => cmd_theme_show(&store),
                Some(ThemeCommands::Set { preference }) => cmd_theme_set(&store, &preference),
                Some(ThemeCommands::Toggle) => cmd_theme_toggle(&store),
            }
        }

        Commands::Style {
            kind,
            variant,
            size,
            hover,
            press,
            focus,
            loading,
            selected,
            disabled,
            json,
        } => {
            let store = open_store(&settings, cli.scheme)?;
            let flags = InteractionFlags {
                hovered: hover,
                pressed: press,
                focused: focus,
                loading,
                disabled,
                selected,
            };
            let request = StyleRequest {
                variant: variant.as_deref(),
                size: size.as_deref(),
                flags,
                json,
            };
            match kind {
                KindArg::Button => cmd_style::<Button>(&store, request),
                KindArg::Chip => cmd_style::<Chip>(&store, request),
                KindArg::Checkbox => cmd_style::<Checkbox>(&store, request),
                KindArg::Input => cmd_style::<Input>(&store, request),
            }
        }

        Commands::Shadow { key, border, focus } => {
            let store = open_store(&settings, cli.scheme)?;
            cmd_shadow(&store, &key, border, focus.as_deref())
        }

        Commands::Tokens => {
            let store = open_store(&settings, cli.scheme)?;
            cmd_tokens(&store)
        }

        Commands::Config => cmd_config(&settings),
    }
}

fn open_store(settings: &ThemeSettings, scheme: Option<SchemeArg>) -> Result<ThemeStore> {
    let appearance = match scheme {
        Some(SchemeArg::Dark) => ManualAppearance::new(true),
        Some(SchemeArg::Light) => ManualAppearance::new(false),
        None => ManualAppearance::detect(),
    };

    ThemeStore::from_settings(settings, Arc::new(appearance)).context("Failed to open theme store")
}

fn cmd_theme_show(store: &ThemeStore) -> Result<()> {
    let snapshot = store.snapshot();
    println!("theme:      {}", store.bundle().name());
    println!("preference: {}", snapshot.preference);
    println!("resolved:   {}", snapshot.resolved);
    println!(
        "storage:    {}",
        if store.is_persistent() {
            "persistent"
        } else {
            "session only"
        }
    );
    Ok(())
}

fn cmd_theme_set(store: &ThemeStore, preference: &str) -> Result<()> {
    store
        .set_preference_str(preference)
        .with_context(|| format!("Cannot set theme to '{}'", preference))?;

    if store.is_persistent() {
        info!("Theme preference set to {}", preference);
    } else {
        warn!("Theme preference could not be saved; it applies to this run only");
    }
    cmd_theme_show(store)
}

fn cmd_theme_toggle(store: &ThemeStore) -> Result<()> {
    let scheme = store.toggle_scheme();
    info!("Switched to {}", scheme);
    cmd_theme_show(store)
}

struct StyleRequest<'a> {
    variant: Option<&'a str>,
    size: Option<&'a str>,
    flags: InteractionFlags,
    json: bool,
}

#[derive(Serialize)]
struct StyleReport {
    kind: &'static str,
    variant: String,
    size: &'static str,
    scheme: String,
    state: &'static str,
    background: String,
    text: String,
    border: Option<String>,
    shadow: String,
    metrics: MetricsReport,
}

#[derive(Serialize)]
struct MetricsReport {
    height: f32,
    padding_x: f32,
    padding_y: f32,
    gap: f32,
    icon_size: f32,
    corner_radius: f32,
    font_size: f32,
}

impl From<SizeMetrics> for MetricsReport {
    fn from(metrics: SizeMetrics) -> Self {
        Self {
            height: metrics.height,
            padding_x: metrics.padding_x,
            padding_y: metrics.padding_y,
            gap: metrics.gap,
            icon_size: metrics.icon_size,
            corner_radius: metrics.corner_radius,
            font_size: metrics.font_size,
        }
    }
}

fn cmd_style<C: ComponentStyle>(store: &ThemeStore, request: StyleRequest<'_>) -> Result<()> {
    let size = match request.size {
        Some(name) => C::size_named(name).with_context(|| {
            let known: Vec<&str> = C::SIZES.iter().map(|size| size.name()).collect();
            format!("Unknown {} size '{}'. Valid sizes: {:?}", C::KIND, name, known)
        })?,
        None => C::Size::default(),
    };

    if C::declared_flags(request.flags) != request.flags {
        warn!("{} ignores flags for states it does not have", C::KIND);
    }

    let tokens = store.color_tokens();
    let style = match request.variant {
        Some(name) => C::resolve_named(&tokens, name, size, request.flags),
        None => C::resolve_style(&tokens, C::Variant::default(), size, request.flags),
    };
    let variant = request
        .variant
        .and_then(C::variant_named)
        .unwrap_or_default();

    let report = StyleReport {
        kind: C::KIND,
        variant: variant.name().to_string(),
        size: size.name(),
        scheme: store.resolved_theme().to_string(),
        state: style.state.as_str(),
        background: style.visual.background.to_css(),
        text: style.visual.text.to_css(),
        border: style.visual.border.map(|color| color.to_css()),
        shadow: style.visual.shadow.clone(),
        metrics: style.metrics.into(),
    };

    if request.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}/{} ({}, {})",
        report.kind, report.variant, report.size, report.scheme, report.state
    );
    println!("  background  {}", report.background);
    println!("  text        {}", report.text);
    println!("  border      {}", report.border.as_deref().unwrap_or("none"));
    println!("  shadow      {}", report.shadow);
    let m = &report.metrics;
    println!(
        "  metrics     height {} padding {}x{} gap {} icon {} radius {} font {}",
        m.height, m.padding_x, m.padding_y, m.gap, m.icon_size, m.corner_radius, m.font_size
    );
    Ok(())
}

fn cmd_shadow(store: &ThemeStore, key: &str, border: bool, focus: Option<&str>) -> Result<()> {
    let mut options = ShadowOptions::new();
    if border {
        options = options.border();
    }
    if let Some(focus) = focus {
        let focus: FocusType = focus.parse().map_err(anyhow::Error::msg)?;
        options = options.focus(focus);
    }

    let tokens = store.color_tokens();
    println!("{}", compose_shadow(key, &tokens, options));
    Ok(())
}

fn cmd_tokens(store: &ThemeStore) -> Result<()> {
    let tokens = store.color_tokens();
    println!("# {} ({})", store.bundle().name(), store.resolved_theme());
    for (path, color) in tokens.entries() {
        println!("{:<28} {}", path, swatch(color));
    }
    Ok(())
}

fn swatch(color: Color) -> String {
    if color.is_transparent() {
        "transparent".to_string()
    } else {
        color.to_css()
    }
}

fn cmd_config(settings: &ThemeSettings) -> Result<()> {
    let text = settings
        .to_toml()
        .context("Failed to serialize settings")?;
    print!("{}", text);
    Ok(())
}
