//! Human-readable output tokens
//!
//! Icons are Unicode on an interactive UTF-8 terminal and ASCII everywhere
//! else (pipes, CI logs, `TERM=dumb`).

use is_terminal::IsTerminal;

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "✗";
    pub const SKIPPED: &str = "○";
    pub const ENCODE: &str = "📦";
    pub const RESIZE: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const ERROR: &str = "[FAIL]";
    pub const SKIPPED: &str = "[SKIP]";
    pub const ENCODE: &str = "[ENCODE]";
    pub const RESIZE: &str = "[RESIZE]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Error,
    Skipped,
    Encode,
    Resize,
}

impl Icon {
    pub fn render(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Skipped, true) => icons::SKIPPED,
            (Icon::Encode, true) => icons::ENCODE,
            (Icon::Resize, true) => icons::RESIZE,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Skipped, false) => icons_ascii::SKIPPED,
            (Icon::Encode, false) => icons_ascii::ENCODE,
            (Icon::Resize, false) => icons_ascii::RESIZE,
        }
    }
}

/// Whether stdout should get Unicode icons
pub fn supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if !is_tty {
        return false;
    }
    if get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb")) {
        return false;
    }

    let locale = get_env("LC_ALL")
        .or_else(|| get_env("LC_CTYPE"))
        .or_else(|| get_env("LANG"))
        .unwrap_or_default()
        .to_lowercase();
    cfg!(windows) || locale.contains("utf-8") || locale.contains("utf8")
}
