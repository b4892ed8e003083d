pub mod artwork;
pub mod builtin_font;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod fonts;
pub mod logger;
pub mod models;
pub mod shapes;
pub mod text;

pub use error::{IconError, Result};
