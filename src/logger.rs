use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Plain `LEVEL message` lines on stderr. `RUST_LOG` overrides `level`.
pub fn init(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|f, record| {
            if record.level() == log::Level::Info {
                writeln!(f, "{}", record.args())
            } else {
                writeln!(f, "{:>5} {}", record.level(), record.args())
            }
        })
        .try_init();
}

pub fn level_for(verbose: bool, configured: LevelFilter) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { configured }
}
