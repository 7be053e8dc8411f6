use crate::error::{EngineError, Result};
use log::debug;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `domains` to `path`, one per line, replacing any existing content.
///
/// An existing path (including a symlink, which is written through) is
/// truncated and rewritten in place, keeping its permissions. A new output
/// goes to a temporary sibling first and is renamed into place, so a failed
/// write never leaves a partial file behind. Returns the size of the written
/// file in bytes.
pub fn write_domains(path: &Path, domains: &[String]) -> Result<u64> {
    let write_err = |source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if fs::symlink_metadata(path).is_ok() {
        debug!("overwriting {} with {} domains", path.display(), domains.len());
        write_lines(path, domains).map_err(write_err)?;
    } else {
        let tmp = temp_path_for(path);
        debug!("writing {} domains to {}", domains.len(), tmp.display());

        if let Err(source) = write_lines(&tmp, domains).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }
        debug!("renamed {} to {}", tmp.display(), path.display());
    }

    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_lines(target: &Path, domains: &[String]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(target)?);
    for domain in domains {
        w.write_all(domain.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    let _ = w.get_ref().sync_all();
    Ok(())
}

/// Hidden sibling of `path`, unique per process.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or(Cow::Borrowed("domains"), |n| n.to_string_lossy());
    let tmp_name = format!(".{name}.{}.tmp", std::process::id());
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(tmp_name),
        _ => PathBuf::from(tmp_name),
    }
}
