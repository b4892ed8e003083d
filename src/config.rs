use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::export::IconSizeSet;

pub const CONFIG_FILE_NAME: &str = "iconsmith.conf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub output_dir: PathBuf,
    pub artwork: String,
    #[serde(default)]
    pub sizes: Option<IconSizeSet>,
    #[serde(default)]
    pub font_paths: Vec<PathBuf>, // tried before the well-known system fonts
    pub log_level: String,
    #[serde(default)]
    pub iconset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets"),
            artwork: "final".to_string(),
            sizes: None,
            font_paths: Vec::new(),
            log_level: "info".to_string(),
            iconset: false,
        }
    }
}

impl Config {
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "iconsmith").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads the config from the platform config dir, then from `./iconsmith.conf`.
/// Without either file the defaults apply.
pub fn read_config() -> Result<Config> {
    let candidates = config_file_path().into_iter().chain(std::iter::once(PathBuf::from(CONFIG_FILE_NAME)));
    for path in candidates {
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("reading config {}", path.display());
                return parse_config(&content);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(IconError::io(path, e)),
        }
    }
    Ok(Config::default())
}

fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// `key=value` lines; `#` starts a comment, unknown keys are ignored.
pub fn parse_config(content: &str) -> Result<Config> {
    let mut cfg = Config::default();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bad = |message: String| IconError::Config { line: idx + 1, message };
        let Some((k, v)) = line.split_once('=') else {
            return Err(bad(format!("expected key=value, got '{}'", line)));
        };
        let v = v.trim();
        match k.trim() {
            "output_dir" => cfg.output_dir = PathBuf::from(v),
            "artwork" => cfg.artwork = v.to_string(),
            "sizes" => cfg.sizes = Some(v.parse::<IconSizeSet>().map_err(bad)?),
            "font_path" => cfg.font_paths.push(PathBuf::from(v)),
            "log_level" => {
                v.parse::<LevelFilter>().map_err(|_| bad(format!("unknown log level '{}'", v)))?;
                cfg.log_level = v.to_string();
            }
            "iconset" => cfg.iconset = parse_bool(v).ok_or_else(|| bad(format!("expected a boolean, got '{}'", v)))?,
            other => log::debug!("ignoring unknown config key '{}'", other),
        }
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn keys_are_read_and_font_paths_accumulate() {
        let cfg = parse_config(
            "# icons\noutput_dir = out/icons\nartwork=terminal\nsizes=128,64\n\
             font_path=/a.ttf\nfont_path=/b.ttf\nlog_level=debug\niconset=1\nmystery=42\n",
        )
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                output_dir: PathBuf::from("out/icons"),
                artwork: "terminal".into(),
                sizes: Some(IconSizeSet::new(vec![128, 64])),
                font_paths: vec![PathBuf::from("/a.ttf"), PathBuf::from("/b.ttf")],
                log_level: "debug".into(),
                iconset: true,
            }
        );
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn malformed_values_report_their_line() {
        let err = parse_config("artwork=final\nsizes=12,x\n").unwrap_err();
        assert!(matches!(err, IconError::Config { line: 2, .. }), "{}", err);
        assert!(matches!(parse_config("iconset=maybe").unwrap_err(), IconError::Config { line: 1, .. }));
        assert!(matches!(parse_config("log_level=loud").unwrap_err(), IconError::Config { line: 1, .. }));
        assert!(matches!(parse_config("just words").unwrap_err(), IconError::Config { line: 1, .. }));
    }
}
