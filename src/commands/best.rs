// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Best command - prints only the recommended route

use super::{describe, enforce, OutputOptions};
use crate::config::RankingConfig;
use crate::input::load_candidates;
use crate::ranker::RouteSuggestionRanker;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the best command
pub fn run(file: &Path, ranking: RankingConfig, output: OutputOptions) -> Result<()> {
    let candidates = load_candidates(file)?;
    enforce(ranking.validation, &candidates)?;

    let ranker = RouteSuggestionRanker::for_kind(ranking.strategy);
    let best = ranker.best_candidate(candidates);

    if output.json {
        let json = serde_json::to_string_pretty(&best).context("Failed to serialize route")?;
        println!("{json}");
        return Ok(());
    }

    match best {
        Some(route) if output.color => println!("Recommended: {}", describe(&route).green().bold()),
        Some(route) => println!("Recommended: {}", describe(&route)),
        None => println!("No routes to rank"),
    }

    Ok(())
}
