// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ComposeConfig;
use berth_core::{ComposeFile, ServiceSpec};

#[tokio::test]
async fn writes_into_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let compose = Compose::new(ComposeConfig::new(dir.path()));
    let document = ComposeFile::new().service("web", ServiceSpec::image("nginx:alpine"));

    let path = compose.write_config(&document).await.unwrap();

    assert_eq!(path, dir.path().join("docker-compose.yml"));
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("web:"), "{text}");
    assert!(text.contains("nginx:alpine"), "{text}");
}

#[tokio::test]
async fn missing_working_dir_is_reported() {
    let compose = Compose::new(ComposeConfig::new("/nonexistent/berth/stack"));
    let err = compose.write_config(&ComposeFile::new()).await.unwrap_err();
    assert!(matches!(err, ComposeError::Write { .. }), "{err:?}");
    assert!(err.to_string().contains("docker-compose.yml"));
}
