// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mcxprint — command-line front end for the profile pipeline.

pub mod cli;
pub mod logging;
pub mod run;

pub use cli::Cli;
pub use run::{RunOutcome, run};
