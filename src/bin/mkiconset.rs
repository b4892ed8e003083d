use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconsmith::artwork;
use iconsmith::export::{self, OutputRoot};
use iconsmith::fonts::SystemFontProvider;
use iconsmith::logger;

#[derive(Parser, Debug)]
#[command(name = "mkiconset")]
/// Write a macOS <artwork>.iconset directory (feed it to iconutil)
struct Args {
    #[arg(short, long, default_value = "final")]
    artwork: String,

    #[arg(short, long, default_value = "assets")]
    out: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(log::LevelFilter::Info);

    // the 512@2x entry needs a 1024 master; 512 px presets lose it
    let result = artwork::by_name(&args.artwork).and_then(|art| {
        let master = artwork::render(art.as_ref(), &SystemFontProvider::default());
        let root = OutputRoot::acquire(&args.out)?;
        export::export_iconset(&master, &root, art.name())
    });
    match result {
        Ok(report) => {
            log::info!("{} iconset entries", report.files.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
