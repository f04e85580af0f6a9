//! Command implementations

pub mod color;
pub mod info;
pub mod quiet_zones;
pub mod render;

use crate::cli::Commands;
use anyhow::Result;

pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info => info::run(),
        Commands::Render(args) => render::run(&args),
        Commands::QuietZones(args) => quiet_zones::run(&args),
        Commands::Color(args) => color::run(&args),
    }
}
