// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Validate command - strict checks on a candidate list without ranking it

use crate::input::load_candidates;
use crate::validation::find_problems;
use anyhow::{bail, Result};
use std::path::Path;

/// Run the validate command
pub fn run(file: &Path, json: bool) -> Result<()> {
    let candidates = load_candidates(file)?;
    let problems: Vec<String> = find_problems(&candidates)
        .iter()
        .map(ToString::to_string)
        .collect();

    if json {
        let report = serde_json::json!({
            "valid": problems.is_empty(),
            "candidates": candidates.len(),
            "problems": problems,
        });
        println!("{report:#}");
    } else if problems.is_empty() {
        println!("All {} route candidates are valid", candidates.len());
    } else {
        for problem in &problems {
            println!("  {problem}");
        }
    }

    if !problems.is_empty() {
        bail!("{} problem(s) found in {}", problems.len(), file.display());
    }
    Ok(())
}
