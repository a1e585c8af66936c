// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Call shapes for lifecycle operations.
//!
//! Every lifecycle operation (`up`, `down`, `start`, `stop`, `restart`, `ps`)
//! applies either to the whole service group or to one named service, and may
//! carry a notifier that receives incremental output. A [`Call`] captures
//! which of the two shapes the caller meant; [`Call::resolve`] turns it into
//! the canonical `{target, notify}` pair the dispatcher consumes.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::service::validate_service_name;

/// Receives incremental text from a running command.
pub type Notifier = Arc<dyn Fn(&str) + Send + Sync>;

/// Wrap a closure as a [`Notifier`].
pub fn notifier(f: impl Fn(&str) + Send + Sync + 'static) -> Notifier {
    Arc::new(f)
}

/// Errors for calls that do not match a supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("empty service name; use the group call shape to address every service")]
    EmptyServiceName,
    #[error("invalid service name `{name}`: unexpected character {found:?}")]
    InvalidServiceName { name: String, found: char },
}

/// Which part of the service group an operation applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallShape {
    /// `op(callback, notify?)`: every service in the group.
    #[default]
    Group,
    /// `op(target, callback, notify?)`: one named service.
    Service(String),
}

/// A lifecycle call as the caller expressed it.
#[derive(Clone, Default)]
pub struct Call {
    shape: CallShape,
    notify: Option<Notifier>,
}

impl Call {
    pub fn group() -> Self {
        Self::default()
    }

    pub fn service(name: impl Into<String>) -> Self {
        Self { shape: CallShape::Service(name.into()), notify: None }
    }

    /// Attach a notifier for incremental output.
    pub fn notify(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.notify = Some(notifier(f));
        self
    }

    /// Attach an existing notifier.
    pub fn with_notifier(mut self, notify: Notifier) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn shape(&self) -> &CallShape {
        &self.shape
    }

    /// Produce the canonical `{target, notify}` pair.
    ///
    /// The group shape resolves to an empty target ("all services"). A
    /// service shape whose name cannot be passed to the group tool as a single
    /// service name is a usage error.
    pub fn resolve(self) -> Result<ResolvedCall, UsageError> {
        let target = match self.shape {
            CallShape::Group => String::new(),
            CallShape::Service(name) => {
                validate_service_name(&name)?;
                name
            }
        };
        Ok(ResolvedCall { target, notify: self.notify })
    }
}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("shape", &self.shape)
            .field("notify", &self.notify.is_some())
            .finish()
    }
}

impl From<&str> for Call {
    fn from(name: &str) -> Self {
        Call::service(name)
    }
}

impl From<String> for Call {
    fn from(name: String) -> Self {
        Call::service(name)
    }
}

impl From<CallShape> for Call {
    fn from(shape: CallShape) -> Self {
        Self { shape, notify: None }
    }
}

/// Canonical form of a [`Call`].
#[derive(Clone)]
pub struct ResolvedCall {
    /// Service name, or empty for the whole group.
    pub target: String,
    pub notify: Option<Notifier>,
}

impl ResolvedCall {
    pub fn is_group(&self) -> bool {
        self.target.is_empty()
    }
}

impl fmt::Debug for ResolvedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCall")
            .field("target", &self.target)
            .field("notify", &self.notify.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
