// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative service-group documents.
//!
//! Only the emit direction exists: [`generate`] serializes any document
//! (typed [`ComposeFile`] or free-form values) into the group tool's YAML
//! format. Parsing compose files is left to the group tool itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to serialize compose document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize `document` into the group tool's declarative format.
pub fn generate<T: Serialize + ?Sized>(document: &T) -> Result<String, GenerateError> {
    Ok(serde_yaml::to_string(document)?)
}

/// A service-group document. Services keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposeFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub services: IndexMap<String, ServiceSpec>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub networks: IndexMap<String, serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub volumes: IndexMap<String, serde_yaml::Value>,
}

impl ComposeFile {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        option {
            version: String,
        }
    }

    /// Add or replace a service.
    pub fn service(mut self, name: impl Into<String>, spec: ServiceSpec) -> Self {
        self.services.insert(name.into(), spec);
        self
    }

    /// Declare a named volume with default driver settings.
    pub fn volume(mut self, name: impl Into<String>) -> Self {
        self.volumes.insert(name.into(), serde_yaml::Value::Null);
        self
    }

    /// Declare a named network with default driver settings.
    pub fn network(mut self, name: impl Into<String>) -> Self {
        self.networks.insert(name.into(), serde_yaml::Value::Null);
        self
    }

    pub fn to_yaml(&self) -> Result<String, GenerateError> {
        generate(self)
    }
}

/// One service entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub environment: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
}

impl ServiceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service running a prebuilt image.
    pub fn image(image: impl Into<String>) -> Self {
        Self { image: Some(image.into()), ..Self::default() }
    }

    /// A service built from a local context directory.
    pub fn build(context: impl Into<String>) -> Self {
        Self {
            build: Some(BuildSpec { context: context.into(), dockerfile: None }),
            ..Self::default()
        }
    }

    crate::setters! {
        option {
            container_name: String,
            command: String,
            restart: String,
        }
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    pub fn port(mut self, mapping: impl Into<String>) -> Self {
        self.ports.push(mapping.into());
        self
    }

    pub fn mount(mut self, mapping: impl Into<String>) -> Self {
        self.volumes.push(mapping.into());
        self
    }

    pub fn depends_on(mut self, service: impl Into<String>) -> Self {
        self.depends_on.push(service.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
}

#[cfg(test)]
#[path = "compose_file_tests.rs"]
mod tests;
