//! Upscale 16×16 icons into the sibling `x64` directory.
//!
//! Takes no arguments: paths come from `assetgen.toml` or the defaults.

use anyhow::Result;

fn main() -> Result<()> {
    assetgen::logging::init(0);

    let cwd = std::env::current_dir()?;
    let (config, warnings) = assetgen::Config::discover(&cwd, None)?;
    assetgen::commands::report_config_warnings(&warnings);

    assetgen::commands::cmd_resize(&config.resize.resize_options(), false)
}
