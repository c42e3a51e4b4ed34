//! Directory listing capability and artifact enumeration.

use std::{io, path::Path};

use trellis_naming::ArtifactType;

use crate::error::{Error, Result};

/// Capability to list the file names in a directory.
///
/// Production code supplies [`FsLister`]; tests supply stubs. A missing
/// directory must surface as [`io::ErrorKind::NotFound`] so callers can
/// treat it as "nothing generated yet" rather than a failure.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Directory listing backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// List the generated artifact files of one kind in `dir`, sorted by name.
///
/// Matches both `.ts` sources and `.js` build output. A directory that does
/// not exist yet yields an empty list; any other listing failure is
/// reported with the attempted path attached.
pub fn artifact_files(
    dir: &Path,
    kind: ArtifactType,
    lister: &dyn DirectoryLister,
) -> Result<Vec<String>> {
    let mut names = match lister.list(dir) {
        Ok(names) => names,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(Error::io(dir, source)),
    };
    let ts_suffix = format!(".{}.ts", kind.suffix());
    let js_suffix = format!(".{}.js", kind.suffix());
    names.retain(|name| name.ends_with(&ts_suffix) || name.ends_with(&js_suffix));
    names.sort();
    Ok(names)
}
