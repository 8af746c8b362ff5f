// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tool configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Generic PostScript PPD shipped with macOS. Stored uncompressed.
pub const GENERIC_PPD_PATH: &str = "/System/Library/Frameworks/ApplicationServices.framework/Versions/A/Frameworks/PrintCore.framework/Versions/A/Resources/Generic.ppd";

/// Directory holding vendor PPDs (gzip-compressed).
pub const PPD_DIR: &str = "/Library/Printers/PPDs/Contents/Resources";

/// Prefix marking a `--driver` argument as a full path.
pub const DRIVER_ROOT: &str = "/Library";

/// Where driver description files live on the target system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverLocations {
    /// Plain-text PPD used for `--generic`.
    pub generic_ppd: PathBuf,
    /// Directory relative driver names are joined onto.
    pub ppd_dir: PathBuf,
    /// Driver arguments starting with this prefix are taken as-is.
    pub absolute_root: PathBuf,
}

impl Default for DriverLocations {
    fn default() -> Self {
        Self {
            generic_ppd: PathBuf::from(GENERIC_PPD_PATH),
            ppd_dir: PathBuf::from(PPD_DIR),
            absolute_root: PathBuf::from(DRIVER_ROOT),
        }
    }
}

/// Defaults applied when the command line leaves a value out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub drivers: DriverLocations,
    /// `PayloadOrganization` when `--organization` is absent.
    pub default_organization: String,
    /// Identifier base when `--identifier` is absent.
    pub default_identifier: String,
    /// Profile version when `--version` is absent.
    pub default_version: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            drivers: DriverLocations::default(),
            default_organization: "GitHub".into(),
            default_identifier: "com.github.wardsparadox".into(),
            default_version: "1.0".into(),
        }
    }
}

impl ToolConfig {
    /// Load a JSON config file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ProfileError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| ProfileError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_system_layout() {
        let config = ToolConfig::default();
        assert_eq!(config.default_organization, "GitHub");
        assert_eq!(config.default_identifier, "com.github.wardsparadox");
        assert_eq!(config.default_version, "1.0");
        assert_eq!(config.drivers.ppd_dir, PathBuf::from(PPD_DIR));
        assert!(config.drivers.generic_ppd.ends_with("Generic.ppd"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{ "default_organization": "Acme", "drivers": {{ "ppd_dir": "/opt/ppds" }} }}"#
        )
        .expect("write");

        let config = ToolConfig::load(file.path()).expect("load");
        assert_eq!(config.default_organization, "Acme");
        assert_eq!(config.drivers.ppd_dir, PathBuf::from("/opt/ppds"));
        assert_eq!(config.drivers.absolute_root, PathBuf::from(DRIVER_ROOT));
        assert_eq!(config.default_version, "1.0");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "not json").expect("write");

        match ToolConfig::load(file.path()) {
            Err(ProfileError::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = ToolConfig::load(Path::new("/nonexistent/mcxprint.json"));
        assert!(matches!(result, Err(ProfileError::Config { .. })));
    }
}
