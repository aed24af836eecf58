//! Encode and check command handlers

use anyhow::{Context, Result};

use crate::encode::{check_assets, encode_assets, EncodeOptions};
use crate::ui::{supports_unicode, Icon};

/// Regenerate the asset module and print a summary
pub fn cmd_encode(options: &EncodeOptions, json: bool) -> Result<()> {
    let unicode = supports_unicode();
    if !json {
        println!("{} Encoding assets", Icon::Encode.render(unicode));
        println!("Source: {}", options.source.display());
    }

    let report = encode_assets(options)
        .with_context(|| format!("failed to encode assets from {}", options.source.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "encode",
            "output": report.output.display().to_string(),
            "svg": report.svg_count,
            "png": report.png_count,
            "written": report.written,
            "hash": report.hash,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "{} Encoded {} svg, {} png assets",
            Icon::Success.render(unicode),
            report.svg_count,
            report.png_count
        );
        if report.written {
            println!("{} Wrote {}", Icon::Success.render(unicode), report.output.display());
        } else {
            println!(
                "{} {} is up to date",
                Icon::Skipped.render(unicode),
                report.output.display()
            );
        }
    }

    Ok(())
}

/// Compare the generated module on disk with a fresh rendering
///
/// Returns `false` when the file is stale.
pub fn cmd_check(options: &EncodeOptions, json: bool) -> Result<bool> {
    let report = check_assets(options)
        .with_context(|| format!("failed to encode assets from {}", options.source.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "check",
            "output": report.output.display().to_string(),
            "up_to_date": report.up_to_date,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(report.up_to_date);
    }

    let unicode = supports_unicode();
    if report.up_to_date {
        println!(
            "{} {} is up to date",
            Icon::Success.render(unicode),
            report.output.display()
        );
    } else {
        if let Some(diff) = &report.diff {
            print!("{}", diff);
        }
        println!(
            "{} {} is stale; run `{}` to regenerate it",
            Icon::Error.render(unicode),
            report.output.display(),
            options.codegen.generator
        );
    }

    Ok(report.up_to_date)
}
