// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: the configuration profile document and its parts.
//
// Field order inside each struct is alphabetical by plist key so the emitted
// dictionaries come out key-sorted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// `PayloadType` of the printing payload.
pub const PRINTING_PAYLOAD_TYPE: &str = "com.apple.mcxprinting";

/// `PayloadDisplayName` of the printing payload.
pub const PRINTING_PAYLOAD_DISPLAY_NAME: &str = "Printing";

/// `PayloadType` of the top-level profile.
pub const PROFILE_PAYLOAD_TYPE: &str = "Configuration";

/// `PayloadScope` of the top-level profile.
pub const PROFILE_SCOPE: &str = "System";

/// Schema version written to both `PayloadVersion` fields.
pub const PAYLOAD_SCHEMA_VERSION: u64 = 1;

/// Option key that is always forced to `false`.
pub const PRINTER_IS_SHARED: &str = "printer-is-shared";

/// A CUPS queue name, validated against the characters the spooler rejects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrinterName(String);

impl PrinterName {
    /// Validate a queue name. Empty names and names containing a space, tab,
    /// `#` or `/` are rejected.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains([' ', '\t', '#', '/']) {
            return Err(ProfileError::InvalidPrinterName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrinterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reject profile versions that cannot be used in the output file name.
pub fn check_version(version: &str) -> Result<()> {
    if version.contains(['/', '\0']) {
        return Err(ProfileError::InvalidVersion(version.to_owned()));
    }
    Ok(())
}

/// A single printer option value. Plist booleans and strings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    String(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Printer options keyed by CUPS option name.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// One entry of `UserPrinterList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    #[serde(rename = "DeviceURI")]
    pub device_uri: String,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Option")]
    pub options: OptionMap,
    /// Path of the PPD the queue is created with.
    #[serde(rename = "PPDURL")]
    pub ppd_path: String,
    #[serde(rename = "PrinterLocked")]
    pub locked: bool,
}

/// The `com.apple.mcxprinting` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRecord {
    #[serde(rename = "PayloadDisplayName")]
    pub display_name: String,
    #[serde(rename = "PayloadEnabled")]
    pub enabled: bool,
    #[serde(rename = "PayloadIdentifier")]
    pub identifier: String,
    #[serde(rename = "PayloadType")]
    pub payload_type: String,
    #[serde(rename = "PayloadUUID")]
    pub uuid: String,
    #[serde(rename = "PayloadVersion")]
    pub version: u64,
    /// Printers keyed by queue name.
    #[serde(rename = "UserPrinterList")]
    pub printers: BTreeMap<String, PrinterRecord>,
}

/// The top-level configuration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Always exactly one printing payload.
    #[serde(rename = "PayloadContent")]
    pub content: Vec<PayloadRecord>,
    #[serde(rename = "PayloadDisplayName")]
    pub display_name: String,
    #[serde(rename = "PayloadIdentifier")]
    pub identifier: String,
    #[serde(rename = "PayloadOrganization")]
    pub organization: String,
    #[serde(rename = "PayloadRemovalDisallowed")]
    pub removal_disallowed: bool,
    #[serde(rename = "PayloadScope")]
    pub scope: String,
    #[serde(rename = "PayloadType")]
    pub payload_type: String,
    #[serde(rename = "PayloadUUID")]
    pub uuid: String,
    #[serde(rename = "PayloadVersion")]
    pub version: u64,
}

impl ProfileDocument {
    /// The single printing payload.
    pub fn payload(&self) -> Option<&PayloadRecord> {
        self.content.first()
    }

    /// Look up a printer record by queue name.
    pub fn printer(&self, name: &str) -> Option<&PrinterRecord> {
        self.payload().and_then(|p| p.printers.get(name))
    }
}
