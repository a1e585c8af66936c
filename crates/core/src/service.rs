// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service identity: logical names and their running container ids.

use serde::{Deserialize, Serialize};

use crate::call::UsageError;

/// A service in the group, optionally bound to its running container.
///
/// `runtime_id` is resolved on demand and never cached: a service may have
/// been recreated between two calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), runtime_id: None }
    }

    /// Bind the descriptor to the id reported by `ps -q`.
    ///
    /// An empty id means the service has no running container.
    pub fn with_runtime_id(mut self, raw: &str) -> Self {
        let id = clean_container_id(raw);
        self.runtime_id = if id.is_empty() { None } else { Some(id) };
        self
    }

    pub fn is_running(&self) -> bool {
        self.runtime_id.is_some()
    }
}

/// Remove every line ending (`\n`, `\r\n`, `\r`) from a container id listing.
pub fn clean_container_id(raw: &str) -> String {
    raw.replace(['\r', '\n'], "")
}

/// Check that `name` can be passed to the group tool as a single service name.
///
/// Service names are `[A-Za-z0-9._-]+`; anything else would be split or
/// interpreted by the shell the command line runs through.
pub fn validate_service_name(name: &str) -> Result<(), UsageError> {
    if name.is_empty() {
        return Err(UsageError::EmptyServiceName);
    }
    let allowed = |c: &char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    if let Some(c) = name.chars().find(|c| !allowed(c)) {
        return Err(UsageError::InvalidServiceName { name: name.to_string(), found: c });
    }
    Ok(())
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
