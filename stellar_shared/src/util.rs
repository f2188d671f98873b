// https://stackoverflow.com/a/36848555

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::constants::framebuffer::{RAW_EXTENSION, SHM_DIR};

pub fn prog() -> Option<String> {
    env::args().next()
        .as_ref()
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .map(String::from)
}

/// `frame.raw` + `png` -> `frame.raw.png`, the original extension is kept.
pub fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

pub fn session_frame_path(session_id: &str) -> PathBuf {
    Path::new(SHM_DIR).join(format!("{}.{}", session_id, RAW_EXTENSION))
}
