//! Isolated project directory for driving the assetgen binaries.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp project"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run `assetgen` from the project root
    pub fn assetgen(&self, args: &[&str]) -> TestResult {
        self.run(Path::new(env!("CARGO_BIN_EXE_assetgen")), args)
    }

    /// Run the argument-less `encode-assets` entry point
    pub fn encode_assets(&self) -> TestResult {
        self.run(Path::new(env!("CARGO_BIN_EXE_encode-assets")), &[])
    }

    /// Run the argument-less `resize-icons` entry point
    pub fn resize_icons(&self) -> TestResult {
        self.run(Path::new(env!("CARGO_BIN_EXE_resize-icons")), &[])
    }

    fn run(&self, bin: &Path, args: &[&str]) -> TestResult {
        Command::new(bin)
            .current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("ASSETGEN_ASSETS_DIR")
            .env_remove("ASSETGEN_OUTPUT")
            .env_remove("ASSETGEN_SVG_ENCODING")
            .env_remove("ASSETGEN_COLOR_TEMPLATE")
            .env_remove("ASSETGEN_ICONS_DIR")
            .env_remove("ASSETGEN_ICONS_DEST")
            .output()
            .expect("Failed to execute binary")
            .into()
    }
}

/// Find the data URI generated for `name` in the `svg` or `png` section.
///
/// Template entries are evaluated with no color argument, which yields the
/// stored data URI.
pub fn generated_data_uri(module: &str, section: &str, name: &str) -> Option<String> {
    evaluate_entry(module, section, name, None)
}

/// Evaluate a generated entry the way the module would at runtime.
///
/// Color functions substitute `color` (or their default) through the same
/// `#` to `%23` mapping as `encodeColor`; other entries ignore it.
pub fn evaluate_entry(
    module: &str,
    section: &str,
    name: &str,
    color: Option<&str>,
) -> Option<String> {
    let start = module.find(&format!("\n  {}: {{\n", section))?;
    let body = &module[start..];
    let end = body.find("\n  },")?;
    let body = &body[..end];

    let prefix = format!("    {}: ", name);
    let line = body.lines().find(|l| l.starts_with(&prefix))?;
    let value = &line[prefix.len()..];

    let Some(open) = value.find('`') else {
        let literal = value.strip_suffix(" as ImageURI,")?;
        return serde_json::from_str(literal).ok();
    };
    let close = value.rfind('`')?;
    let template = &value[open + 1..close];

    let default = match value.strip_prefix("(color = ") {
        Some(rest) => {
            let end = rest.find(") => `")?;
            serde_json::from_str::<String>(&rest[..end]).ok()?
        }
        None => return Some(unescape_template(template)),
    };
    let encoded = color.unwrap_or(&default).replace('#', "%23");

    let pieces: Vec<String> = template
        .split("${encodeColor(color)}")
        .map(unescape_template)
        .collect();
    Some(pieces.join(&encoded))
}

fn unescape_template(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
