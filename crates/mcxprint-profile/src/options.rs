// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer option parsing.
//
// Turns the repeated `--option key=value` arguments into the `Option`
// dictionary of a printer record. Sharing is always disabled.

use tracing::{debug, warn};

use mcxprint_core::error::{ProfileError, Result};
use mcxprint_core::types::{OptionMap, OptionValue, PRINTER_IS_SHARED};

/// Whether `True`/`False` style values become plist booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolCoercion {
    /// Every value stays a string.
    #[default]
    Verbatim,
    /// `true` and `false`, in any ASCII case, become booleans.
    Literal,
}

impl BoolCoercion {
    fn apply(self, value: &str) -> OptionValue {
        if self == Self::Literal {
            if value.eq_ignore_ascii_case("true") {
                return OptionValue::Bool(true);
            }
            if value.eq_ignore_ascii_case("false") {
                return OptionValue::Bool(false);
            }
        }
        OptionValue::String(value.to_owned())
    }
}

/// Parse `key=value` entries into an option map.
///
/// Each entry is split on its first `=`. Later entries overwrite earlier
/// ones with the same key. `printer-is-shared` is set to `false` last,
/// replacing any caller-supplied value.
pub fn build_options<S: AsRef<str>>(raw: &[S], coercion: BoolCoercion) -> Result<OptionMap> {
    let mut options = OptionMap::new();

    for entry in raw {
        let entry = entry.as_ref();
        let (key, value) = entry
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| ProfileError::OptionFormat(entry.to_owned()))?;
        options.insert(key.to_owned(), coercion.apply(value));
    }

    if let Some(previous) = options.get(PRINTER_IS_SHARED) {
        if *previous != OptionValue::Bool(false) {
            warn!(value = ?previous, "overriding printer-is-shared; queues are never shared");
        }
    }
    options.insert(PRINTER_IS_SHARED.to_owned(), OptionValue::Bool(false));

    debug!(count = options.len(), ?coercion, "built printer options");
    Ok(options)
}
