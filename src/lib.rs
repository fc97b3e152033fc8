pub mod config;
pub mod endpoints;
mod map;
pub mod models;
pub mod output;
pub mod render;
pub mod server;
pub mod utils;

pub use config::{Cli, Command, MapConfig};
pub use output::{OutputMode, publish};
pub use render::{MapArtifact, render};
pub use server::MapServer;
