// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for mcxprint.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for every stage of profile generation.
///
/// Every variant is fatal for the current invocation: the pipeline aborts
/// before the output file is written.
#[derive(Debug, Error)]
pub enum ProfileError {
    // -- Driver resolution --
    #[error("driver file not found: {}", path.display())]
    DriverNotFound { path: PathBuf },

    #[error("no *NickName model directive in driver file {}", path.display())]
    DriverFormat { path: PathBuf },

    #[error("failed to read driver file {}: {source}", path.display())]
    DriverRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -- Input validation --
    #[error("malformed option {0:?}: expected key=value")]
    OptionFormat(String),

    #[error("invalid printer name {0:?}: may not be empty or contain spaces, tabs, '#' or '/'")]
    InvalidPrinterName(String),

    #[error("invalid profile version {0:?}: may not contain '/' or NUL")]
    InvalidVersion(String),

    #[error("required field `{0}` was not provided")]
    MissingField(&'static str),

    // -- Configuration --
    #[error("invalid configuration file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    // -- Output --
    #[error("profile serialization failed: {0}")]
    Serialization(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ProfileError>;
