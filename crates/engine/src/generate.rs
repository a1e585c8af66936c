// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use serde::Serialize;

use crate::compose::Compose;
use crate::error::ComposeError;

/// File the group tool reads from its working directory by default.
pub const CONFIG_FILE_NAME: &str = "docker-compose.yml";

impl Compose {
    /// Serialize `document` and write it as the group's configuration file.
    ///
    /// Returns the path written. The document is not validated.
    pub async fn write_config<T>(&self, document: &T) -> Result<PathBuf, ComposeError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let text = berth_core::generate(document)?;
        let path = self.config().working_dir.join(CONFIG_FILE_NAME);
        tokio::fs::write(&path, text)
            .await
            .map_err(|source| ComposeError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "wrote compose file");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
