use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use animalia_common::{Error, Result};

/// Joins `fragments` with newlines and substitutes them for every occurrence
/// of `placeholder` in `template`.
///
/// Plain substring replacement. A template without the placeholder comes back
/// unchanged.
pub fn assemble<S: AsRef<str>>(fragments: &[S], template: &str, placeholder: &str) -> String {
    if placeholder.is_empty() || !template.contains(placeholder) {
        warn!("Placeholder '{}' not found in template, page left unchanged", placeholder);
        return template.to_string();
    }

    let joined: String = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");

    template.replace(placeholder, &joined)
}

pub fn read_template(path: &Path) -> Result<String> {
    debug!("Reading template from {}", path.display());
    fs::read_to_string(path).map_err(|err| Error::from_io(path, err))
}

/// Writes the finished page, replacing whatever was at `path`.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| Error::from_io(parent, err))?;
        }
    }
    fs::write(path, html).map_err(|err| Error::from_io(path, err))
}
