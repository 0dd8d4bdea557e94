use anyhow::{Context, Result, anyhow};
use arena_app::ascii_canvas::AsciiCanvas;
use arena_app::preset_file::PresetDirectory;
use arena_app::{format_fingerprint, format_seed};
use arena_core::levelgen::builtin_preset;
use arena_core::{GenerationConfig, LayoutGenerator, LevelLayout, PresetStore, paint_layout};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate and inspect arena layouts", long_about = None)]
struct Args {
    /// TOML file with generation parameters; missing keys take defaults
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in or stored preset name
    #[arg(short, long)]
    preset: Option<String>,

    /// Directory of stored presets (defaults to the per-user data dir)
    #[arg(long)]
    preset_dir: Option<PathBuf>,

    /// Fixed seed overriding the config's seed setting
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Store the effective config under this name before generating
    #[arg(long)]
    save_preset: Option<String>,
}

fn preset_directory(args: &Args) -> Result<PresetDirectory> {
    let root = match &args.preset_dir {
        Some(dir) => dir.clone(),
        None => PresetDirectory::get_default_root()
            .ok_or_else(|| anyhow!("no data directory available; pass --preset-dir"))?,
    };
    Ok(PresetDirectory::new(root))
}

fn load_config_file(path: &Path) -> Result<GenerationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn resolve_config(args: &Args) -> Result<GenerationConfig> {
    let mut config = if let Some(path) = &args.config {
        load_config_file(path)?
    } else if let Some(name) = &args.preset {
        match builtin_preset(name) {
            Some(config) => config,
            None => preset_directory(args)?
                .load_preset(name)
                .with_context(|| format!("Failed to load preset '{name}'"))?
                .ok_or_else(|| anyhow!("unknown preset '{name}'"))?,
        }
    } else {
        GenerationConfig::default()
    };

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn render_ascii(layout: &LevelLayout) -> String {
    let mut canvas = AsciiCanvas::new();
    paint_layout(layout, &mut canvas);
    canvas.render()
}

fn summary_line(layout: &LevelLayout) -> String {
    let stats = layout.stats();
    format!(
        "seed {} fingerprint {} platforms {} weapons {}/{} tiles {}/{} bridges {}",
        format_seed(layout.seed()),
        format_fingerprint(layout.fingerprint()),
        layout.platforms().len(),
        layout.weapon_spawns().len(),
        stats.weapons_requested,
        stats.placed_tiles,
        stats.target_tiles,
        stats.bridges_inserted
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let generator =
        LayoutGenerator::new(config).map_err(|e| anyhow!("Invalid generation config: {e}"))?;

    if let Some(name) = &args.save_preset {
        let mut store = preset_directory(&args)?;
        store
            .save_preset(name, generator.config())
            .with_context(|| format!("Failed to save preset '{name}'"))?;
        info!("saved preset '{name}' to {}", store.root().display());
    }

    let layout = generator.generate();
    match args.format {
        OutputFormat::Ascii => {
            print!("{}", render_ascii(&layout));
            println!("{}", summary_line(&layout));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&layout)
                .with_context(|| "Failed to serialize layout")?;
            println!("{json}");
        }
    }

    Ok(())
}
