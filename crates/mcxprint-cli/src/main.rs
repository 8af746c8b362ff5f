// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mcxprint — Printer-install configuration profile generator
//
// Entry point. Parses arguments, initialises logging, runs the pipeline and
// maps the outcome to an exit status.

use clap::Parser;

use mcxprint_cli::logging::init_logging;
use mcxprint_cli::{Cli, RunOutcome, run};
use mcxprint_core::human_errors::humanize_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!(printer = %cli.printer_name, "mcxprint starting");

    let exit_code = match run(&cli) {
        Ok(RunOutcome::Written(emitted)) => {
            println!("{}", emitted.path.display());
            println!("sha256: {}", emitted.sha256);
            0
        }
        Ok(RunOutcome::DryRun(xml)) => {
            print!("{xml}");
            0
        }
        Err(e) => {
            tracing::debug!(error = ?e, "profile generation failed");
            let human = humanize_error(&e);
            eprintln!("error: {}: {}", human.stage, human.message);
            eprintln!("hint: {}", human.suggestion);
            1
        }
    };
    std::process::exit(exit_code);
}
