// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `logs` options and output reformatting.
//!
//! The group tool multiplexes every service's output into one stream, each
//! line prefixed with `<service>(_<n>)? | `. Snapshot output also starts with
//! a one-line banner (`Attaching to ...`).

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Options recognized by the `logs` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogsOptions {
    /// Keep streaming instead of returning a snapshot.
    pub follow: bool,
    /// Include timestamps.
    pub time: bool,
    /// Only the last N lines per service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<u32>,
    /// Disable ANSI coloring.
    pub no_color: bool,
}

impl LogsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        set {
            follow: bool,
            time: bool,
            no_color: bool,
        }
        option {
            tail: u32,
        }
    }

    /// Flags for the `logs` subcommand, in a stable order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.follow {
            args.push("-f".to_string());
        }
        if self.time {
            args.push("-t".to_string());
        }
        if let Some(tail) = self.tail {
            args.push(format!("--tail={}", tail));
        }
        if self.no_color {
            args.push("--no-color".to_string());
        }
        args
    }
}

/// Leading `<service>(_N|-N)?  | ` prefix, optionally wrapped in color codes.
fn prefix_pattern(service: &str) -> String {
    const SGR: &str = r"(?:\x1b\[[0-9;]*m)*";
    format!(r"^{SGR}{}(?:[_-]\d+)?\s+\|{SGR} ?", regex::escape(service))
}

/// Strips one service's multiplexing prefix; compiled once, reused per chunk.
#[derive(Debug, Clone)]
pub struct PrefixStripper {
    pattern: Option<Regex>,
}

impl PrefixStripper {
    pub fn new(service: &str) -> Self {
        Self::compile(service, &prefix_pattern(service))
    }

    fn compile(service: &str, pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Self { pattern: Some(re) },
            Err(e) => {
                tracing::warn!(service, error = %e, "invalid log prefix pattern, lines kept as-is");
                Self { pattern: None }
            }
        }
    }

    /// Strip the prefix from each line of `text`.
    ///
    /// Lines that belong to other services, or carry no prefix at all, pass
    /// through unchanged.
    pub fn strip(&self, text: &str) -> String {
        let Some(re) = &self.pattern else {
            return text.to_string();
        };
        text.split('\n').map(|line| re.replace(line, "")).collect::<Vec<_>>().join("\n")
    }
}

/// Strip `service`'s multiplexing prefix from each line of `text`.
pub fn strip_service_prefix(text: &str, service: &str) -> String {
    PrefixStripper::new(service).strip(text)
}

/// Drop the first line (the group tool's banner) and keep the rest.
pub fn drop_banner(text: &str) -> String {
    match text.split_once('\n') {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    }
}

/// Reformat a completed `logs` snapshot.
///
/// An empty `target` means every service: the banner is dropped but the
/// per-service prefixes are kept so lines remain attributable.
pub fn format_snapshot(text: &str, target: &str) -> String {
    let body = drop_banner(text);
    if target.is_empty() {
        body
    } else {
        strip_service_prefix(&body, target)
    }
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
