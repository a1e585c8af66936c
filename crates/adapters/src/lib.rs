// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! berth-adapters: Single-container primitives used when a command must
//! address one container directly instead of going through the group tool.

pub mod container;

pub use container::{shell_quote, ContainerEngine, DockerCli};

#[cfg(any(test, feature = "test-support"))]
pub use container::{EngineCall, FakeContainerEngine};
