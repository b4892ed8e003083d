use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconsmith::artwork::{self, GenerateOptions};
use iconsmith::config::{self, Config};
use iconsmith::export::{ExportReport, IconSizeSet, OutputRoot};
use iconsmith::fonts::{BuiltinFontProvider, FontProvider, SystemFontProvider};
use iconsmith::logger;
use iconsmith::Result;

#[derive(Parser, Debug)]
#[command(name = "iconsmith", version)]
/// Draw the app icon and export its PNG size cascade
struct Cli {
    /// Artwork preset to render (see --list)
    #[arg(short, long)]
    artwork: Option<String>,

    /// Render every preset, each into its own subdirectory of the output dir
    #[arg(long, conflicts_with = "artwork")]
    all: bool,

    /// Output directory (default: assets)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Comma separated sizes replacing the preset's cascade, e.g. 256,128,64
    #[arg(long)]
    sizes: Option<IconSizeSet>,

    /// Font file to try before the well-known system fonts (repeatable)
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Skip font probing and use the builtin bitmap font
    #[arg(long)]
    builtin_font: bool,

    /// Also write a macOS .iconset directory
    #[arg(long)]
    iconset: bool,

    /// Print the list of written files as JSON on stdout
    #[arg(long)]
    json: bool,

    /// List the available presets and exit
    #[arg(long)]
    list: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = config::read_config();
    let level = cfg.as_ref().map(Config::level_filter).unwrap_or(log::LevelFilter::Info);
    logger::init(logger::level_for(cli.verbose, level));

    let result = cfg.and_then(|cfg| run(cli, cfg));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, cfg: Config) -> Result<()> {
    if cli.list {
        for art in artwork::all() {
            println!("{:<10} {:>4}px  {}", art.name(), art.master_size(), art.description());
        }
        return Ok(());
    }

    let fonts: Box<dyn FontProvider> = if cli.builtin_font {
        Box::new(BuiltinFontProvider)
    } else {
        let mut preferred = cli.fonts;
        preferred.extend(cfg.font_paths.iter().cloned());
        Box::new(SystemFontProvider::with_defaults(preferred))
    };
    let options = GenerateOptions {
        sizes: cli.sizes.or(cfg.sizes.clone()),
        iconset: cli.iconset || cfg.iconset,
    };
    let root = OutputRoot::acquire(cli.out.unwrap_or(cfg.output_dir))?;

    let mut report = ExportReport::default();
    if cli.all {
        // every preset writes icon.png, so each gets its own directory
        for art in artwork::all() {
            let sub = root.subroot(art.name())?;
            report.extend(artwork::generate(art.as_ref(), fonts.as_ref(), &sub, &options)?);
        }
    } else {
        let name = cli.artwork.unwrap_or(cfg.artwork);
        let art = artwork::by_name(&name)?;
        report = artwork::generate(art.as_ref(), fonts.as_ref(), &root, &options)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into()));
    }
    log::info!("Wrote {} files to {}", report.files.len(), root.dir().display());
    Ok(())
}
