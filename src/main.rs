use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ansify::loaders::{load_font, load_image};
use ansify::models::config::CONFIG_ENV;
use ansify::models::AppConfig;
use ansify::services::RenderService;
use glyph_match::Palette;

#[derive(Parser)]
#[command(name = "ansify")]
#[command(about = "Render images as text-mode art using bitmap fonts and retro palettes")]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image to a PNG of glyphs
    Render {
        /// Source PNG image
        #[arg(short, long)]
        image: PathBuf,

        /// Raw 8xN bitmap font (256 glyphs, e.g. CP437.F08)
        #[arg(short, long)]
        font: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Text columns
        #[arg(short, long)]
        columns: Option<usize>,

        /// Text rows (default: keep the image aspect ratio)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Built-in palette name (cga, c64)
        #[arg(short, long)]
        palette: Option<String>,

        /// Custom palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#AA0000")
        #[arg(long)]
        colors: Option<String>,

        /// Character codes: "all", "printable", or a list like "32,176-178,219"
        #[arg(long)]
        codes: Option<String>,

        /// Also use glyphs whose foreground and background are the same color
        #[arg(long)]
        keep_equal_pairs: bool,

        /// Matching threads (0 = one per core, 1 = single-threaded)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Write a JSON glyph map (code and colors per cell)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// YAML config file (overrides ANSIFY_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List built-in palettes
    Palettes,
}

/// Command-line overrides for [`AppConfig`]
struct RenderOverrides {
    columns: Option<usize>,
    rows: Option<usize>,
    palette: Option<String>,
    colors: Option<String>,
    codes: Option<String>,
    keep_equal_pairs: bool,
    threads: Option<usize>,
}

impl RenderOverrides {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.rows = Some(rows);
        }
        if let Some(palette) = self.palette {
            config.palette = palette;
            config.colors = None;
        }
        if let Some(colors) = self.colors {
            config.colors = Some(
                colors
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect(),
            );
        }
        if let Some(codes) = self.codes {
            config.codes = codes;
        }
        if self.keep_equal_pairs {
            config.skip_equal_color_pairs = false;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            image,
            font,
            output,
            columns,
            rows,
            palette,
            colors,
            codes,
            keep_equal_pairs,
            threads,
            map,
            config,
        }) => {
            init_logging(cli.quiet);
            let config_path = AppConfig::resolve_path(config);
            let config = RenderOverrides {
                columns,
                rows,
                palette,
                colors,
                codes,
                keep_equal_pairs,
                threads,
            }
            .apply(AppConfig::load(config_path.as_deref()));
            run_render_command(&image, &font, &output, map.as_deref(), &config)
        }
        Some(Commands::Palettes) => {
            run_palettes_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet {
        "ansify=warn,glyph_match=warn"
    } else {
        "ansify=info,glyph_match=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render an image to a PNG file (and optionally a JSON glyph map)
fn run_render_command(
    image_path: &Path,
    font_path: &Path,
    output: &Path,
    map_path: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let font = load_font(font_path)?;
    let image = load_image(image_path)?;
    tracing::info!(
        width = image.width,
        height = image.height,
        cell_height = font.cell_height(),
        "Loaded inputs"
    );

    let service = RenderService::new(&font, config)?;
    let rendered = service.render_to_png(&image)?;

    std::fs::write(output, &rendered.png)?;
    println!(
        "Rendered {} ({}x{} cells, {} bytes)",
        output.display(),
        rendered.map.columns,
        rendered.map.rows,
        rendered.png.len()
    );

    if let Some(map_path) = map_path {
        std::fs::write(map_path, rendered.map.to_json()?)?;
        println!("Wrote glyph map {}", map_path.display());
    }

    Ok(())
}

/// Print the built-in palettes
fn run_palettes_command() {
    for name in Palette::builtin_names() {
        let Ok(palette) = Palette::builtin(name) else {
            continue;
        };
        println!("{name} ({} colors)", palette.len());
        for (i, color) in palette.colors().iter().enumerate() {
            println!("  {i:>2}  {}", color.to_hex());
        }
    }
}

/// Print version, environment and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Ansify v{VERSION}");
    println!("Text-mode art from images with bitmap fonts and retro palettes\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG      = {}",
        rust_log.as_deref().unwrap_or("ansify=info (default)")
    );

    println!("\nBuilt-in Palettes:");
    for name in Palette::builtin_names() {
        println!("  {name}");
    }

    println!("\nCommands:");
    println!("  ansify render -i <image.png> -f <font> -o <out.png>   Render an image");
    println!("  ansify palettes                                      List palette colors");
    println!("  ansify --help                                        Show all options");
}
