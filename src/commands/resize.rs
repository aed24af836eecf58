//! Resize command handler

use anyhow::{Context, Result};

use crate::resize::{resize_icons, ResizeOptions};
use crate::ui::{supports_unicode, Icon};

pub fn cmd_resize(options: &ResizeOptions, json: bool) -> Result<()> {
    let unicode = supports_unicode();
    if !json {
        println!("{} Resizing icons", Icon::Resize.render(unicode));
        println!("Source: {}", options.source.display());
        println!("Destination: {}", options.destination.display());
    }

    let report = resize_icons(options)
        .with_context(|| format!("failed to resize icons in {}", options.source.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "resize",
            "destination": options.destination.display().to_string(),
            "written": report.written.len(),
            "skipped": report.skipped.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for path in &report.written {
            println!("  {} {}", Icon::Success.render(unicode), path.display());
        }
        println!(
            "{} Resized {} icons to {}x{}",
            Icon::Success.render(unicode),
            report.written.len(),
            options.target_size,
            options.target_size
        );
    }

    Ok(())
}
