use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Error;
use crate::templating;

/// Suffix every input path must carry; stripped to form the output path.
pub const EXTENSION: &str = ".tmpl";

pub fn output_path(path: &str) -> Result<PathBuf, Error> {
    match path.strip_suffix(EXTENSION) {
        Some(stem) => Ok(PathBuf::from(stem)),
        None => Err(Error::Extension {
            ext: EXTENSION,
            path: path.to_string(),
        }),
    }
}

/// Renders the template at `path` and writes it next to the source with the
/// extension stripped, carrying over the source's permission bits. An
/// existing output file is overwritten.
pub fn process(path: &str, data: Option<&serde_json::Value>) -> Result<PathBuf, Error> {
    let out = output_path(path)?;

    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound,
        _ => Error::Io(e),
    })?;

    let text = fs::read_to_string(path)?;
    let rendered = templating::render(&text, data)?;

    fs::write(&out, rendered)?;
    fs::set_permissions(&out, meta.permissions())?;
    Ok(out)
}
