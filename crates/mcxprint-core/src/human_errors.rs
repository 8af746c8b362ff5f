// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error reports for administrators running the tool.
//
// Every error is mapped to the pipeline stage that failed, a one-line
// summary naming the offending input, and a concrete next step.

use std::fmt;

use crate::error::ProfileError;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Loading the `--config` file.
    Config,
    /// Locating and reading the PPD.
    Driver,
    /// Parsing `--option` values.
    Options,
    /// Assembling the profile document.
    Build,
    /// Serialising and writing the `.mobileconfig`.
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Driver => "driver",
            Self::Options => "options",
            Self::Build => "build",
            Self::Output => "output",
        };
        f.write_str(label)
    }
}

/// An error report with the failing stage and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub stage: Stage,
    /// Summary including the offending input (shown after `error:`).
    pub message: String,
    /// What to try next (shown as a `hint:` line).
    pub suggestion: String,
}

/// Convert a `ProfileError` into a report for the terminal.
pub fn humanize_error(err: &ProfileError) -> HumanError {
    match err {
        // -- Driver resolution --
        ProfileError::DriverNotFound { path } => HumanError {
            stage: Stage::Driver,
            message: format!("driver file {} does not exist", path.display()),
            suggestion: "Pass the PPD file name as it appears in /Library/Printers/PPDs/Contents/Resources, a full path starting with /Library, or use --generic.".into(),
        },

        ProfileError::DriverFormat { path } => HumanError {
            stage: Stage::Driver,
            message: format!("{} has no quoted *NickName: line", path.display()),
            suggestion: "Check that the file is a PPD. Named drivers must be gzip-compressed; the generic driver must be plain text.".into(),
        },

        ProfileError::DriverRead { path, source } => HumanError {
            stage: Stage::Driver,
            message: format!("could not read {}: {source}", path.display()),
            suggestion: "Named drivers are read as gzip. If the PPD is uncompressed, compress it with gzip or use --generic.".into(),
        },

        // -- Input validation --
        ProfileError::OptionFormat(raw) => HumanError {
            stage: Stage::Options,
            message: format!("option {raw:?} is not in key=value form"),
            suggestion: "Write options as --option key=value, e.g. --option Duplex=DuplexNoTumble.".into(),
        },

        ProfileError::InvalidPrinterName(name) => HumanError {
            stage: Stage::Build,
            message: format!("printer name {name:?} is not a valid queue name"),
            suggestion: "Use a name without spaces, tabs, '#' or '/'. Put the friendly name in --displayname instead.".into(),
        },

        ProfileError::InvalidVersion(version) => HumanError {
            stage: Stage::Build,
            message: format!("version {version:?} cannot be used in the output file name"),
            suggestion: "Use a version such as 1.0 or 2024.3 without '/' characters.".into(),
        },

        ProfileError::MissingField(field) => HumanError {
            stage: Stage::Build,
            message: format!("missing required value `{field}`"),
            suggestion: "Provide --printername, --address and one of --driver or --generic.".into(),
        },

        // -- Configuration --
        ProfileError::Config { path, message } => HumanError {
            stage: Stage::Config,
            message: format!("{}: {message}", path.display()),
            suggestion: "The config file must be a JSON object; see `mcxprint --help` for the keys it accepts.".into(),
        },

        // -- Output --
        ProfileError::Serialization(detail) => HumanError {
            stage: Stage::Output,
            message: format!("could not render the profile: {detail}"),
            suggestion: "Check --option values for characters that cannot appear in XML.".into(),
        },

        ProfileError::Io(io_err) => {
            let suggestion = if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                "Choose a writable directory with --output-dir."
            } else {
                "Check that the output directory exists and has free space."
            };
            HumanError {
                stage: Stage::Output,
                message: format!("could not write the profile: {io_err}"),
                suggestion: suggestion.into(),
            }
        }
    }
}
