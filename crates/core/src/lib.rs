// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! berth-core: Shared types for driving a docker-compose service group

pub mod macros;

pub mod call;
pub mod compose_file;
pub mod exec;
pub mod logs;
pub mod service;

pub use call::{notifier, Call, CallShape, Notifier, ResolvedCall, UsageError};
pub use compose_file::{generate, BuildSpec, ComposeFile, GenerateError, ServiceSpec};
pub use exec::ExecOptions;
pub use logs::{drop_banner, format_snapshot, strip_service_prefix, LogsOptions, PrefixStripper};
pub use service::{clean_container_id, validate_service_name, ServiceDescriptor};
