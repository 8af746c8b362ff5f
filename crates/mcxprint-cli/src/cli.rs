// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use mcxprint_core::config::DriverLocations;
use mcxprint_profile::driver::DriverSelector;
use mcxprint_profile::identifiers::IdentifierPolicy;
use mcxprint_profile::options::BoolCoercion;

// `--version` sets the profile version, so clap's own version flag is left off.
#[derive(Parser, Debug)]
#[command(
    name = "mcxprint",
    about = "Generate a configuration profile that installs a network printer queue",
    group(ArgGroup::new("driver_source").required(true).args(["driver", "generic"]))
)]
pub struct Cli {
    /// Name of the printer queue. May not contain spaces, tabs, # or /.
    #[arg(long = "printername", value_name = "NAME")]
    pub printer_name: String,

    /// PPD file name in /Library/Printers/PPDs/Contents/Resources, or a full
    /// path starting with /Library. Read as gzip.
    #[arg(long, value_name = "PPD")]
    pub driver: Option<String>,

    /// Use the Generic PostScript Printer driver.
    #[arg(long)]
    pub generic: bool,

    /// IP or DNS address of the printer. Defaults to socket:// when no
    /// protocol is given.
    #[arg(long, value_name = "ADDRESS")]
    pub address: String,

    /// Location shown for the printer. Defaults to the printer name.
    #[arg(long)]
    pub location: Option<String>,

    /// Display name for the printer. Defaults to the printer name.
    #[arg(long = "displayname", value_name = "NAME")]
    pub display_name: Option<String>,

    /// Profile version, used in the display name and output file name.
    /// Defaults to 1.0.
    #[arg(long)]
    pub version: Option<String>,

    /// PayloadOrganization of the profile. Defaults to GitHub.
    #[arg(long)]
    pub organization: Option<String>,

    /// Identifier namespace; the payload UUID is appended to keep it unique.
    /// Defaults to com.github.wardsparadox.
    #[arg(long)]
    pub identifier: Option<String>,

    /// Extra printer option in key=value form, in addition to
    /// printer-is-shared=false. May be repeated.
    #[arg(long = "option", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub options: Vec<String>,

    /// Store option values of true/false (any case) as booleans.
    #[arg(long = "coerce-bools")]
    pub coerce_bools: bool,

    /// Append the profile UUID to a custom --identifier as well.
    #[arg(long = "suffix-profile-identifier")]
    pub suffix_profile_identifier: bool,

    /// Directory the .mobileconfig is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file overriding driver locations and defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the profile to stdout instead of writing a file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The driver selector for `--generic` or `--driver`.
    pub fn driver_selector(&self, locations: &DriverLocations) -> DriverSelector {
        match (&self.driver, self.generic) {
            (Some(name), false) => DriverSelector::from_named(name, locations),
            _ => DriverSelector::Generic,
        }
    }

    pub fn bool_coercion(&self) -> BoolCoercion {
        if self.coerce_bools {
            BoolCoercion::Literal
        } else {
            BoolCoercion::Verbatim
        }
    }

    pub fn identifier_policy(&self) -> IdentifierPolicy {
        if self.suffix_profile_identifier {
            IdentifierPolicy::SuffixBoth
        } else {
            IdentifierPolicy::LegacyUnsuffixedProfile
        }
    }
}
