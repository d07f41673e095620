// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - prints the effective configuration

use crate::config::Config;
use anyhow::Result;

/// Print the whole configuration, or a single dotted key
pub fn run(key: Option<&str>, config: &Config) -> Result<()> {
    match key {
        Some(k) => {
            tracing::debug!("Getting {}", k);
            let value = config
                .get(k)
                .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", k))?;
            println!("{value}");
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
