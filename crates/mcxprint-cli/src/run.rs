// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline orchestration: parsed arguments in, one profile out.
//
// Driver resolution, address normalisation, option parsing and identifier
// derivation are independent; the builder composes their results and the
// emitter writes the file. Any error stops the run before the write.

use std::path::Path;

use tracing::{debug, info};

use mcxprint_core::config::ToolConfig;
use mcxprint_core::error::Result;
use mcxprint_core::types::{PrinterName, ProfileDocument};
use mcxprint_profile::emitter::{self, EmittedProfile};
use mcxprint_profile::identifiers::RunIds;
use mcxprint_profile::{ProfileBuilder, address, build_options, resolve_driver};

use crate::cli::Cli;

/// What a successful run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The profile was written to disk.
    Written(EmittedProfile),
    /// `--dry-run`: the rendered plist, nothing written.
    DryRun(String),
}

/// A fully assembled profile and the version it is filed under.
#[derive(Debug)]
pub struct Assembled {
    pub document: ProfileDocument,
    pub version: String,
}

/// Load `--config` when given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig> {
    match path {
        Some(path) => {
            let config = ToolConfig::load(path)?;
            debug!(path = %path.display(), "loaded config file");
            Ok(config)
        }
        None => Ok(ToolConfig::default()),
    }
}

/// Resolve every input and compose the profile document.
pub fn assemble(cli: &Cli, config: &ToolConfig, ids: RunIds) -> Result<Assembled> {
    let printer_name = PrinterName::new(cli.printer_name.as_str())?;

    let selector = cli.driver_selector(&config.drivers);
    let driver = resolve_driver(&selector, &config.drivers)?;
    let device_uri = address::normalize(&cli.address);
    let options = build_options(cli.options.as_slice(), cli.bool_coercion())?;

    let requested = cli
        .identifier
        .as_deref()
        .unwrap_or(&config.default_identifier);
    let identifiers = cli.identifier_policy().derive(requested, &ids);

    let version = non_empty(cli.version.as_deref())
        .unwrap_or(&config.default_version)
        .to_owned();
    let organization = cli
        .organization
        .clone()
        .unwrap_or_else(|| config.default_organization.clone());

    let document = ProfileBuilder::new()
        .printer_name(printer_name.as_str())
        .device_uri(device_uri)
        .display_name(cli.display_name.clone())
        .location(cli.location.clone())
        .driver(&driver)
        .options(options)
        .organization(organization)
        .identifiers(identifiers)
        .run_ids(ids)
        .version(Some(version.clone()))
        .build()?;

    Ok(Assembled { document, version })
}

/// Run the whole pipeline for one invocation.
pub fn run(cli: &Cli) -> Result<RunOutcome> {
    let config = load_config(cli.config.as_deref())?;
    let ids = RunIds::generate();
    let Assembled { document, version } = assemble(cli, &config, ids)?;

    if cli.dry_run {
        let xml = emitter::to_xml_bytes(&document)?;
        info!(bytes = xml.len(), "dry run, not writing profile");
        return Ok(RunOutcome::DryRun(String::from_utf8_lossy(&xml).into_owned()));
    }

    let emitted = emitter::emit(&document, &cli.printer_name, &version, &cli.output_dir)?;
    Ok(RunOutcome::Written(emitted))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
