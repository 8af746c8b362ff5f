// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mcxprint Profile — PPD model resolution, device URI normalisation,
// identifier derivation, and `.mobileconfig` emission. This crate turns the
// core document types defined in `mcxprint-core` into a file macOS can
// install.

pub mod address;
pub mod builder;
pub mod driver;
pub mod emitter;
pub mod identifiers;
pub mod options;

pub use builder::ProfileBuilder;
pub use driver::{DriverSelector, ResolvedDriver, resolve_driver};
pub use emitter::{EmittedProfile, emit};
pub use identifiers::{IdentifierPolicy, RunIds};
pub use options::{BoolCoercion, build_options};
