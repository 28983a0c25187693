use std::fs::File;
use std::path::Path;

use env_logger::{Env, Target};

/// Sends log output to `path`; the terminal is busy drawing the game.
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(std::io::Error::other)
}
