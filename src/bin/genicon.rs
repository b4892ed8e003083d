use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconsmith::artwork;
use iconsmith::export::{self, ExportPlan, OutputRoot};
use iconsmith::fonts::SystemFontProvider;
use iconsmith::logger;

#[derive(Parser, Debug)]
#[command(name = "genicon")]
/// Write only the full-size master of a preset as icon_<size>.png
struct Args {
    #[arg(short, long, default_value = "final")]
    artwork: String,

    #[arg(short, long, default_value = "assets")]
    out: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(log::LevelFilter::Info);

    let result = artwork::by_name(&args.artwork).and_then(|art| {
        let master = artwork::render(art.as_ref(), &SystemFontProvider::default());
        let root = OutputRoot::acquire(&args.out)?;
        export::export(&master, &root, &ExportPlan::new("icon").with_master())
    });
    match result {
        Ok(report) => {
            for file in report.files {
                println!("Wrote {}", file.path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
