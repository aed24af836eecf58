//! Regenerate the asset module from `assetgen.toml` and defaults.
//!
//! Takes no arguments: run it from the project root after adding assets.

use anyhow::Result;

fn main() -> Result<()> {
    assetgen::logging::init(0);

    let cwd = std::env::current_dir()?;
    let (config, warnings) = assetgen::Config::discover(&cwd, None)?;
    assetgen::commands::report_config_warnings(&warnings);

    assetgen::commands::cmd_encode(&config.encode.encode_options(), false)
}
