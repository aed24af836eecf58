//! Command handlers shared by the `assetgen` CLI and the single-purpose
//! entry points.

mod encode;
mod resize;

pub use encode::{cmd_check, cmd_encode};
pub use resize::cmd_resize;

use crate::config::ConfigWarning;
use crate::ui::{supports_unicode, Icon};

/// Print non-fatal config warnings to stderr
pub fn report_config_warnings(warnings: &[ConfigWarning]) {
    let unicode = supports_unicode();
    for warning in warnings {
        eprintln!("{} {}", Icon::Warning.render(unicode), warning);
    }
}
