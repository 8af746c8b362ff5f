// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile document assembly.
//
// Composes the resolved driver, device URI, options and identifiers into
// profile -> printing payload -> printer record. Missing inputs fail before
// any part of the document is created.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use mcxprint_core::error::{ProfileError, Result};
use mcxprint_core::types::{
    OptionMap, OptionValue, PAYLOAD_SCHEMA_VERSION, PRINTER_IS_SHARED,
    PRINTING_PAYLOAD_DISPLAY_NAME, PRINTING_PAYLOAD_TYPE, PROFILE_PAYLOAD_TYPE, PROFILE_SCOPE,
    PayloadRecord, PrinterName, PrinterRecord, ProfileDocument, check_version,
};

use crate::driver::ResolvedDriver;
use crate::identifiers::{ProfileIdentifiers, RunIds};

/// Version used when none is given.
pub const DEFAULT_VERSION: &str = "1.0";

/// Collects the inputs of a profile and validates them in `build`.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    printer_name: Option<String>,
    device_uri: Option<String>,
    display_name: Option<String>,
    location: Option<String>,
    model: Option<String>,
    driver_path: Option<PathBuf>,
    options: OptionMap,
    organization: Option<String>,
    profile_identifier: Option<String>,
    payload_identifier: Option<String>,
    profile_uuid: Option<Uuid>,
    payload_uuid: Option<Uuid>,
    version: Option<String>,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printer_name(mut self, name: impl Into<String>) -> Self {
        self.printer_name = Some(name.into());
        self
    }

    /// Fully qualified device URI, see [`crate::address::normalize`].
    pub fn device_uri(mut self, uri: impl Into<String>) -> Self {
        self.device_uri = Some(uri.into());
        self
    }

    pub fn display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn driver_path(mut self, path: impl AsRef<Path>) -> Self {
        self.driver_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets both `model` and `driver_path`.
    pub fn driver(self, driver: &ResolvedDriver) -> Self {
        self.model(driver.model.clone()).driver_path(&driver.path)
    }

    pub fn options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn identifiers(mut self, identifiers: ProfileIdentifiers) -> Self {
        self.profile_identifier = Some(identifiers.profile);
        self.payload_identifier = Some(identifiers.payload);
        self
    }

    pub fn run_ids(mut self, ids: RunIds) -> Self {
        self.profile_uuid = Some(ids.profile_uuid);
        self.payload_uuid = Some(ids.payload_uuid);
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Validate the inputs and compose the document.
    pub fn build(self) -> Result<ProfileDocument> {
        let printer_name = PrinterName::new(require(self.printer_name, "printer_name")?)?;
        let device_uri = require(self.device_uri, "device_uri")?;
        let model = require(self.model, "model")?;
        let driver_path = require(self.driver_path, "driver_path")?;
        let profile_identifier = require(self.profile_identifier, "profile_identifier")?;
        let payload_identifier = require(self.payload_identifier, "payload_identifier")?;
        let profile_uuid = require(self.profile_uuid, "profile_uuid")?;
        let payload_uuid = require(self.payload_uuid, "payload_uuid")?;
        let organization = require(self.organization, "organization")?;

        let display_name = or_printer_name(self.display_name, &printer_name);
        let location = or_printer_name(self.location, &printer_name);
        let version = self
            .version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_owned());
        check_version(&version)?;

        let mut options = self.options;
        if options.get(PRINTER_IS_SHARED) != Some(&OptionValue::Bool(false)) {
            warn!(printer = %printer_name, "forcing printer-is-shared to false");
            options.insert(PRINTER_IS_SHARED.to_owned(), OptionValue::Bool(false));
        }

        let printer = PrinterRecord {
            device_uri,
            display_name: display_name.clone(),
            location,
            model,
            options,
            ppd_path: driver_path.to_string_lossy().into_owned(),
            locked: false,
        };

        let mut printers = BTreeMap::new();
        printers.insert(printer_name.as_str().to_owned(), printer);

        let payload = PayloadRecord {
            display_name: PRINTING_PAYLOAD_DISPLAY_NAME.to_owned(),
            enabled: true,
            identifier: payload_identifier,
            payload_type: PRINTING_PAYLOAD_TYPE.to_owned(),
            uuid: payload_uuid.to_string(),
            version: PAYLOAD_SCHEMA_VERSION,
            printers,
        };

        let document = ProfileDocument {
            content: vec![payload],
            display_name: format!("{display_name} Printer Profile {version}"),
            identifier: profile_identifier,
            organization,
            removal_disallowed: false,
            scope: PROFILE_SCOPE.to_owned(),
            payload_type: PROFILE_PAYLOAD_TYPE.to_owned(),
            uuid: profile_uuid.to_string(),
            version: PAYLOAD_SCHEMA_VERSION,
        };

        info!(
            printer = %printer_name,
            identifier = %document.identifier,
            "built printer profile"
        );
        Ok(document)
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ProfileError::MissingField(field))
}

fn or_printer_name(value: Option<String>, printer_name: &PrinterName) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| printer_name.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::IdentifierPolicy;

    fn complete() -> ProfileBuilder {
        let ids = RunIds::generate();
        let mut options = OptionMap::new();
        options.insert(PRINTER_IS_SHARED.into(), OptionValue::Bool(false));

        ProfileBuilder::new()
            .printer_name("HPLaser")
            .device_uri("socket://10.0.0.5")
            .model("Generic PostScript Printer")
            .driver_path("/System/Generic.ppd")
            .options(options)
            .organization("GitHub")
            .identifiers(IdentifierPolicy::default().derive("com.github.wardsparadox", &ids))
            .run_ids(ids)
    }

    #[test]
    fn defaults_display_name_location_and_version() {
        let doc = complete().build().unwrap();
        let printer = doc.printer("HPLaser").expect("printer record");
        assert_eq!(printer.display_name, "HPLaser");
        assert_eq!(printer.location, "HPLaser");
        assert_eq!(doc.display_name, "HPLaser Printer Profile 1.0");
    }

    #[test]
    fn empty_optional_values_fall_back() {
        let doc = complete()
            .display_name(Some(String::new()))
            .location(Some(String::new()))
            .version(Some(String::new()))
            .build()
            .unwrap();
        let printer = doc.printer("HPLaser").unwrap();
        assert_eq!(printer.display_name, "HPLaser");
        assert_eq!(printer.location, "HPLaser");
        assert_eq!(doc.display_name, "HPLaser Printer Profile 1.0");
    }

    #[test]
    fn explicit_values_are_used() {
        let doc = complete()
            .display_name(Some("Front Desk Laser".into()))
            .location(Some("Lobby".into()))
            .version(Some("2.1".into()))
            .build()
            .unwrap();
        let printer = doc.printer("HPLaser").unwrap();
        assert_eq!(printer.display_name, "Front Desk Laser");
        assert_eq!(printer.location, "Lobby");
        assert_eq!(doc.display_name, "Front Desk Laser Printer Profile 2.1");
    }

    #[test]
    fn fixed_schema_fields() {
        let doc = complete().build().unwrap();
        assert_eq!(doc.payload_type, "Configuration");
        assert_eq!(doc.scope, "System");
        assert_eq!(doc.version, 1);
        assert!(!doc.removal_disallowed);
        assert_eq!(doc.content.len(), 1);

        let payload = doc.payload().unwrap();
        assert_eq!(payload.display_name, "Printing");
        assert_eq!(payload.payload_type, "com.apple.mcxprinting");
        assert!(payload.enabled);
        assert_eq!(payload.version, 1);
        assert_ne!(payload.uuid, doc.uuid);
        assert_ne!(payload.identifier, doc.identifier);

        let printer = doc.printer("HPLaser").unwrap();
        assert!(!printer.locked);
        assert_eq!(printer.ppd_path, "/System/Generic.ppd");
        assert_eq!(printer.options[PRINTER_IS_SHARED], OptionValue::Bool(false));
    }

    #[test]
    fn uuids_are_threaded_into_document() {
        let ids = RunIds::generate();
        let doc = complete().run_ids(ids).build().unwrap();
        assert_eq!(doc.uuid, ids.profile_uuid.to_string());
        assert_eq!(doc.payload().unwrap().uuid, ids.payload_uuid.to_string());
    }

    #[test]
    fn missing_model_fails_fast() {
        let mut builder = complete();
        builder.model = None;
        match builder.build() {
            Err(ProfileError::MissingField(field)) => assert_eq!(field, "model"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_address_fails_fast() {
        let mut builder = complete();
        builder.device_uri = None;
        assert!(matches!(
            builder.build(),
            Err(ProfileError::MissingField("device_uri"))
        ));
    }

    #[test]
    fn sharing_flag_added_when_options_omitted() {
        let mut builder = complete();
        builder.options = OptionMap::new();
        let doc = builder.build().unwrap();
        let printer = doc.printer("HPLaser").unwrap();
        assert_eq!(printer.options.len(), 1);
        assert_eq!(printer.options[PRINTER_IS_SHARED], OptionValue::Bool(false));
    }

    #[test]
    fn sharing_flag_overrides_caller_map() {
        let mut options = OptionMap::new();
        options.insert(PRINTER_IS_SHARED.into(), OptionValue::from("True"));
        options.insert("Duplex".into(), OptionValue::from("DuplexNoTumble"));

        let doc = complete().options(options).build().unwrap();
        let printer = doc.printer("HPLaser").unwrap();
        assert_eq!(printer.options[PRINTER_IS_SHARED], OptionValue::Bool(false));
        assert_eq!(printer.options["Duplex"], OptionValue::from("DuplexNoTumble"));
    }

    #[test]
    fn version_with_path_separator_is_rejected() {
        for bad in ["1/2", "../x", "1\0"] {
            match complete().version(Some(bad.to_owned())).build() {
                Err(ProfileError::InvalidVersion(version)) => assert_eq!(version, bad),
                other => panic!("expected InvalidVersion for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_printer_name_is_rejected() {
        let result = complete().printer_name("Front Desk").build();
        assert!(matches!(result, Err(ProfileError::InvalidPrinterName(_))));
    }
}
