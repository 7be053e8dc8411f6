use crate::directive::{LineKind, classify};
use crate::error::{EngineError, Result};
use crate::stats::{Extraction, MalformedLine};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Open `path` and extract every server directive domain from it.
pub fn process_file(path: &Path, strict: bool) -> Result<Extraction> {
    debug!("opening {}", path.display());
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    extract(BufReader::new(file), path, strict)
}

/// Fold the lines of `reader` into an [`Extraction`].
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. `path` is only used for error
/// reporting. Invalid UTF-8 surfaces as [`EngineError::FileRead`].
pub fn extract<R: Read>(mut reader: R, path: &Path, strict: bool) -> Result<Extraction> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    split_lines(&text)
        .enumerate()
        .try_fold(Extraction::default(), |acc, (idx, line)| {
            absorb_line(acc, idx + 1, line, strict)
        })
}

/// Split on `\r\n`, `\r` and `\n`. A terminator at the very end does not
/// start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(pos) => {
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..pos];
                rest = &rest[pos + width..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

fn absorb_line(mut acc: Extraction, line_number: usize, raw: &str, strict: bool) -> Result<Extraction> {
    acc.total_lines += 1;
    let line = raw.trim();

    match classify(line) {
        LineKind::Blank | LineKind::Comment => acc.ignored += 1,
        LineKind::Directive(domain) => {
            trace!("line {line_number}: {domain}");
            acc.domains.push(domain.to_owned());
        }
        LineKind::Malformed => {
            debug!("line {line_number} is not a server directive: {line}");
            if strict {
                return Err(EngineError::MalformedLine {
                    line_number,
                    content: line.to_owned(),
                });
            }
            acc.malformed.push(MalformedLine {
                line_number,
                content: line.to_owned(),
            });
        }
    }

    Ok(acc)
}
