// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile serialization and output.
//
// The document is rendered to a complete XML plist in memory before the
// output file is touched, so a failed render never leaves a partial file.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use mcxprint_core::error::{ProfileError, Result};
use mcxprint_core::types::{OptionValue, ProfileDocument, check_version};

/// Extension macOS expects for configuration profiles.
pub const PROFILE_EXTENSION: &str = "mobileconfig";

/// A profile written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedProfile {
    pub path: PathBuf,
    pub bytes_written: usize,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256: String,
}

/// `AddPrinter_<printer>_<version>.mobileconfig`
pub fn output_file_name(printer_name: &str, version: &str) -> String {
    format!("AddPrinter_{printer_name}_{version}.{PROFILE_EXTENSION}")
}

/// Render the document as an XML property list.
pub fn to_xml_bytes(doc: &ProfileDocument) -> Result<Vec<u8>> {
    check_representable(doc)?;

    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, doc)
        .map_err(|e| ProfileError::Serialization(e.to_string()))?;
    debug!(bytes = buf.len(), "rendered profile plist");
    Ok(buf)
}

/// Parse a rendered profile back into a document.
pub fn from_xml_bytes(bytes: &[u8]) -> Result<ProfileDocument> {
    plist::from_bytes(bytes).map_err(|e| ProfileError::Serialization(e.to_string()))
}

/// Render `doc` and write it to `out_dir`, replacing any existing file of
/// the same name.
pub fn emit(
    doc: &ProfileDocument,
    printer_name: &str,
    version: &str,
    out_dir: &Path,
) -> Result<EmittedProfile> {
    check_version(version)?;
    let bytes = to_xml_bytes(doc)?;
    let path = out_dir.join(output_file_name(printer_name, version));

    std::fs::write(&path, &bytes)?;
    let sha256 = hex::encode(Sha256::digest(&bytes));

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        sha256 = %sha256,
        "wrote configuration profile"
    );
    Ok(EmittedProfile {
        path,
        bytes_written: bytes.len(),
        sha256,
    })
}

/// XML 1.0 forbids most C0 control characters even when escaped, and the
/// noncharacters U+FFFE and U+FFFF outright. Option values come straight
/// from the command line, so reject them up front.
fn check_representable(doc: &ProfileDocument) -> Result<()> {
    let mut strings: Vec<(&str, &str)> = vec![
        ("PayloadDisplayName", doc.display_name.as_str()),
        ("PayloadIdentifier", doc.identifier.as_str()),
        ("PayloadOrganization", doc.organization.as_str()),
    ];
    for payload in &doc.content {
        strings.push(("PayloadIdentifier", payload.identifier.as_str()));
        for (name, printer) in &payload.printers {
            strings.push(("UserPrinterList", name.as_str()));
            strings.push(("DeviceURI", printer.device_uri.as_str()));
            strings.push(("DisplayName", printer.display_name.as_str()));
            strings.push(("Location", printer.location.as_str()));
            strings.push(("Model", printer.model.as_str()));
            strings.push(("PPDURL", printer.ppd_path.as_str()));
            for (key, value) in &printer.options {
                strings.push(("Option", key.as_str()));
                if let OptionValue::String(s) = value {
                    strings.push(("Option", s.as_str()));
                }
            }
        }
    }

    for (field, value) in strings {
        if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
            return Err(ProfileError::Serialization(format!(
                "{field} value {value:?} contains character U+{:04X}, which XML cannot represent",
                c as u32
            )));
        }
    }
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        _ => !c.is_control() || ('\u{7f}'..='\u{9f}').contains(&c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ProfileBuilder;
    use crate::identifiers::{IdentifierPolicy, RunIds};
    use crate::options::{BoolCoercion, build_options};

    fn sample(options: &[&str]) -> ProfileDocument {
        let ids = RunIds::generate();
        ProfileBuilder::new()
            .printer_name("HPLaser")
            .device_uri("socket://10.0.0.5")
            .model("LaserJet 4")
            .driver_path("/Library/Printers/PPDs/Contents/Resources/HP LaserJet 4.gz")
            .options(build_options(options, BoolCoercion::Literal).unwrap())
            .organization("GitHub")
            .identifiers(IdentifierPolicy::default().derive("com.acme", &ids))
            .run_ids(ids)
            .build()
            .unwrap()
    }

    #[test]
    fn file_name_is_deterministic() {
        assert_eq!(
            output_file_name("HPLaser", "1.0"),
            "AddPrinter_HPLaser_1.0.mobileconfig"
        );
    }

    #[test]
    fn xml_has_expected_keys_and_types() {
        let xml = String::from_utf8(to_xml_bytes(&sample(&["Duplex=True"])).unwrap()).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<key>PayloadContent</key>"));
        assert!(xml.contains("<key>UserPrinterList</key>"));
        assert!(xml.contains("<key>PayloadVersion</key>"));
        assert!(xml.contains("<integer>1</integer>"));
        assert!(xml.contains("<key>printer-is-shared</key>"));
        assert!(xml.contains("<string>com.apple.mcxprinting</string>"));
        assert!(!xml.contains("<key>device_uri</key>"));
    }

    #[test]
    fn round_trip_preserves_document() {
        let doc = sample(&["Duplex=True", "Media=A4", "Note=x=y"]);
        let parsed = from_xml_bytes(&to_xml_bytes(&doc).unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn control_characters_are_serialization_errors() {
        let doc = sample(&["Note=bell\u{7}"]);
        match to_xml_bytes(&doc) {
            Err(ProfileError::Serialization(msg)) => assert!(msg.contains("U+0007")),
            other => panic!("expected Serialization error, got {other:?}"),
        }

        for (option, code) in [("Note=a\u{FFFE}b", "U+FFFE"), ("Note=a\u{FFFF}b", "U+FFFF")] {
            match to_xml_bytes(&sample(&[option])) {
                Err(ProfileError::Serialization(msg)) => assert!(msg.contains(code)),
                other => panic!("expected Serialization error for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_ascii_text_is_representable() {
        let doc = sample(&["Note=Büro \u{FFFD} 東京"]);
        assert!(to_xml_bytes(&doc).is_ok());
    }

    #[test]
    fn emit_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("AddPrinter_HPLaser_1.0.mobileconfig");
        std::fs::write(&target, "stale").unwrap();

        let doc = sample(&[]);
        let emitted = emit(&doc, "HPLaser", "1.0", dir.path()).unwrap();

        assert_eq!(emitted.path, target);
        let written = std::fs::read(&target).unwrap();
        assert_eq!(written.len(), emitted.bytes_written);
        assert_eq!(emitted.sha256, hex::encode(Sha256::digest(&written)));
        assert_eq!(from_xml_bytes(&written).unwrap(), doc);
    }

    #[test]
    fn version_outside_output_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let result = emit(&sample(&[]), "HPLaser", "../x", &out);
        assert!(matches!(result, Err(ProfileError::InvalidVersion(_))));
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn failed_render_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = sample(&["Note=\u{0}"]);

        assert!(emit(&doc, "HPLaser", "1.0", dir.path()).is_err());
        assert!(!dir.path().join(output_file_name("HPLaser", "1.0")).exists());
    }
}
