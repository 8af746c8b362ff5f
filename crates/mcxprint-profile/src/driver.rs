// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PPD driver resolution.
//
// A driver selector is turned into a concrete path plus a read mode before
// any I/O happens. The generic PostScript PPD ships uncompressed while the
// vendor PPDs under /Library/Printers are gzip-compressed; the read mode
// follows the selector, never the file contents.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{debug, info};

use mcxprint_core::config::DriverLocations;
use mcxprint_core::error::{ProfileError, Result};

/// Directive carrying the human-readable model name.
pub const NICKNAME_MARKER: &str = "*NickName: ";

/// Which driver the profile should reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverSelector {
    /// The generic PostScript driver.
    Generic,
    /// A file name under the PPD directory.
    NamedRelative(PathBuf),
    /// A full path under the driver root.
    NamedAbsolute(PathBuf),
}

/// How the driver file is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Plain,
    Gzip,
}

/// A selector resolved to a concrete file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSource {
    pub path: PathBuf,
    pub read_mode: ReadMode,
}

/// The driver path written to `PPDURL` and the model written to `Model`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDriver {
    pub path: PathBuf,
    pub model: String,
}

impl DriverSelector {
    /// Classify a `--driver` argument. Paths under the driver root are used
    /// as-is, anything else is treated as a name inside the PPD directory.
    pub fn from_named(name: &str, locations: &DriverLocations) -> Self {
        let path = PathBuf::from(name);
        if path.starts_with(&locations.absolute_root) {
            Self::NamedAbsolute(path)
        } else {
            Self::NamedRelative(path)
        }
    }

    pub fn locate(&self, locations: &DriverLocations) -> DriverSource {
        match self {
            Self::Generic => DriverSource {
                path: locations.generic_ppd.clone(),
                read_mode: ReadMode::Plain,
            },
            Self::NamedAbsolute(path) => DriverSource {
                path: path.clone(),
                read_mode: ReadMode::Gzip,
            },
            Self::NamedRelative(name) => DriverSource {
                path: locations.ppd_dir.join(name),
                read_mode: ReadMode::Gzip,
            },
        }
    }
}

/// Locate the selected PPD and read its model name.
pub fn resolve_driver(
    selector: &DriverSelector,
    locations: &DriverLocations,
) -> Result<ResolvedDriver> {
    let source = selector.locate(locations);
    debug!(path = %source.path.display(), mode = ?source.read_mode, "resolving driver");

    let model = read_model(&source)?;
    info!(path = %source.path.display(), model = %model, "resolved driver model");

    Ok(ResolvedDriver {
        path: source.path,
        model,
    })
}

fn read_model(source: &DriverSource) -> Result<String> {
    let file = File::open(&source.path).map_err(|e| open_error(&source.path, e))?;

    let nickname = match source.read_mode {
        ReadMode::Plain => extract_nickname(BufReader::new(file)),
        ReadMode::Gzip => extract_nickname(BufReader::new(GzDecoder::new(file))),
    }
    .map_err(|e| ProfileError::DriverRead {
        path: source.path.clone(),
        source: e,
    })?;

    nickname.ok_or_else(|| ProfileError::DriverFormat {
        path: source.path.clone(),
    })
}

fn open_error(path: &Path, err: io::Error) -> ProfileError {
    if err.kind() == io::ErrorKind::NotFound {
        ProfileError::DriverNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ProfileError::DriverRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Scan PPD lines for the first `*NickName: ` directive and return the text
/// after its first double quote, up to the next quote.
///
/// Returns `Ok(None)` when no directive exists or the directive carries no
/// quote. Lines are decoded lossily since PPDs are frequently Latin-1.
pub fn extract_nickname<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if line.contains(NICKNAME_MARKER) {
            return Ok(line.split('"').nth(1).map(str::to_owned));
        }
    }
}
