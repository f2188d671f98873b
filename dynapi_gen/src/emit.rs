use std::{fs, io, path::Path};

use clap::ValueEnum;
use log::{debug, info};
use strum_macros::{Display, EnumIter, EnumString, VariantArray};

use crate::extract::FunctionList;

#[derive(ValueEnum, PartialEq, Debug, EnumString, Display, EnumIter, VariantArray, Hash, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum EmitFormat {
    /// `pub const NAME: [&str; N] = [...]`
    Rust,
    /// pretty printed array of strings
    Json,
}

/// Renders the constant exactly as hyperwarp expects to `include` it: two space
/// indent, trailing commas, a blank line before `];` and no final newline.
pub fn render_rust(funcs: &FunctionList, const_name: &str) -> String {
    let mut out = format!("pub const {}: [&str; {}] = [\n", const_name, funcs.len());
    for func in funcs.iter() {
        out.push_str(&format!("  {:?},\n", func));
    }
    out.push_str("\n];");
    out
}

pub fn render_json(funcs: &FunctionList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(funcs.as_slice())
}

pub fn render(funcs: &FunctionList, format: EmitFormat, const_name: &str) -> serde_json::Result<String> {
    match format {
        EmitFormat::Rust => Ok(render_rust(funcs, const_name)),
        EmitFormat::Json => render_json(funcs),
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

pub fn write_if_changed(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    if let Ok(existing) = fs::read(path) {
        if existing == contents.as_bytes() {
            debug!("{} is already up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(WriteOutcome::Written)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

pub fn check(path: &Path, contents: &str) -> io::Result<CheckOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => Ok(CheckOutcome::UpToDate),
        Ok(_) => Ok(CheckOutcome::Stale),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(CheckOutcome::Missing),
        Err(err) => Err(err),
    }
}
