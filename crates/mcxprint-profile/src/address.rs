// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Device URI normalisation.

/// Scheme applied to bare host names and IP addresses (AppSocket / JetDirect).
pub const DEFAULT_SCHEME: &str = "socket://";

/// Turn a user-supplied printer address into a device URI.
///
/// Addresses that already carry a scheme are returned unchanged. Nothing
/// about the host part is validated.
pub fn normalize(address: &str) -> String {
    if address.contains("://") {
        address.to_owned()
    } else {
        format!("{DEFAULT_SCHEME}{address}")
    }
}
