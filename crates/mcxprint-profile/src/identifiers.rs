// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Payload identifier and UUID derivation.

use tracing::debug;
use uuid::Uuid;

/// Token that marks the caller as using the default namespace.
pub const DEFAULT_NAMESPACE_MARKER: &str = "wardsparadox";

/// Namespace both identifiers are built on when the marker is present.
pub const DEFAULT_NAMESPACE: &str = "com.github.wardsparadox";

/// A fresh random (v4) UUID.
pub fn new_uuid() -> Uuid {
    Uuid::new_v4()
}

/// `base.suffix`.
pub fn compose_identifier(base: &str, suffix: &str) -> String {
    format!("{base}.{suffix}")
}

/// The two UUIDs generated once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunIds {
    pub profile_uuid: Uuid,
    pub payload_uuid: Uuid,
}

impl RunIds {
    pub fn generate() -> Self {
        Self {
            profile_uuid: new_uuid(),
            payload_uuid: new_uuid(),
        }
    }
}

/// Derived `PayloadIdentifier` values for the profile and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIdentifiers {
    pub profile: String,
    pub payload: String,
}

/// How identifiers are derived from a custom (non-default) namespace.
///
/// The default namespace always gets both identifiers suffixed with their
/// own UUID; the policies only differ for caller-supplied namespaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Profile identifier is the caller's namespace verbatim; only the
    /// payload identifier gets the payload UUID appended.
    #[default]
    LegacyUnsuffixedProfile,
    /// Both identifiers get their own UUID appended.
    SuffixBoth,
}

impl IdentifierPolicy {
    pub fn derive(self, requested: &str, ids: &RunIds) -> ProfileIdentifiers {
        let profile_suffix = ids.profile_uuid.to_string();
        let payload_suffix = ids.payload_uuid.to_string();

        let derived = if requested.contains(DEFAULT_NAMESPACE_MARKER) {
            ProfileIdentifiers {
                profile: compose_identifier(DEFAULT_NAMESPACE, &profile_suffix),
                payload: compose_identifier(DEFAULT_NAMESPACE, &payload_suffix),
            }
        } else {
            let profile = match self {
                Self::LegacyUnsuffixedProfile => requested.to_owned(),
                Self::SuffixBoth => compose_identifier(requested, &profile_suffix),
            };
            ProfileIdentifiers {
                profile,
                payload: compose_identifier(requested, &payload_suffix),
            }
        };

        debug!(
            profile = %derived.profile,
            payload = %derived.payload,
            policy = ?self,
            "derived payload identifiers"
        );
        derived
    }
}
