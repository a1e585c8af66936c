// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service name to container id resolution.
//!
//! Ids are looked up on every call: a service may have been recreated since
//! the last operation.

use berth_core::{clean_container_id, validate_service_name, ServiceDescriptor};

use crate::compose::Compose;
use crate::error::ComposeError;

impl Compose {
    /// Container id of `service`, or an empty string if it has none.
    pub async fn get_id(&self, service: &str) -> Result<String, ComposeError> {
        validate_service_name(service)?;
        let raw = self.run(&format!("ps -q {}", service), None).await?;
        Ok(clean_container_id(&raw))
    }

    /// `service` bound to its current container id, if any.
    pub async fn describe(&self, service: &str) -> Result<ServiceDescriptor, ComposeError> {
        let raw = self.get_id(service).await?;
        Ok(ServiceDescriptor::new(service).with_runtime_id(&raw))
    }

    /// Container id of `service`, failing if it has no container.
    pub(crate) async fn resolve_running(&self, service: &str) -> Result<String, ComposeError> {
        match self.describe(service).await?.runtime_id {
            Some(id) => Ok(id),
            None => {
                tracing::warn!(service, "service has no running container");
                Err(ComposeError::NotRunning(service.to_string()))
            }
        }
    }

    /// Copy `src` on the host to `dst` inside `service`'s container.
    pub async fn cp(&self, service: &str, src: &str, dst: &str) -> Result<String, ComposeError> {
        let id = self.resolve_running(service).await?;
        tracing::debug!(service, container = %id, src, dst, "copying into container");
        let output = self.engine().copy(&id, src, dst).wait().await?;
        Ok(output.stdout)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
