// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Rank command - flags the best route in a candidate list

use super::{enforce, OutputOptions};
use crate::config::RankingConfig;
use crate::input::load_candidates;
use crate::ranker::RouteSuggestionRanker;
use crate::types::RankedRoutes;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

/// Run the rank command
pub fn run(file: &Path, ranking: RankingConfig, output: OutputOptions) -> Result<()> {
    let candidates = load_candidates(file)?;
    enforce(ranking.validation, &candidates)?;

    let ranker = RouteSuggestionRanker::for_kind(ranking.strategy);
    info!("Ranking {} routes ({})", candidates.len(), ranker.strategy_name());
    let ranked = RankedRoutes::new(ranker.rank(candidates), ranker.strategy_name());

    if output.json {
        let json = serde_json::to_string_pretty(&ranked).context("Failed to serialize ranking")?;
        println!("{json}");
    } else {
        print!("{}", render_table(&ranked, output.color));
    }

    Ok(())
}

/// Render the ranked list as an aligned table, recommended row starred
#[must_use]
pub fn render_table(ranked: &RankedRoutes, color: bool) -> String {
    if ranked.candidates.is_empty() {
        return "No routes to rank\n".to_string();
    }

    let id_width = ranked
        .candidates
        .iter()
        .map(|c| c.route_id.chars().count())
        .chain(std::iter::once("ROUTE".chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "Ranked {} routes (strategy: {})\n\n",
        ranked.candidates.len(),
        ranked.strategy
    );
    out.push_str(&format!(
        "    {:<id_width$}  {:>8}  {:>10}  LABEL\n",
        "ROUTE", "TIME", "DISTANCE"
    ));

    for candidate in &ranked.candidates {
        let marker = if candidate.recommended { '*' } else { ' ' };
        let row = format!(
            "  {} {:<id_width$}  {:>4} min  {:>7.2} km  {}",
            marker,
            candidate.route_id,
            candidate.time_estimate,
            candidate.distance,
            candidate.label.as_deref().unwrap_or(""),
        );
        let row = row.trim_end();
        if candidate.recommended && color {
            out.push_str(&format!("{}\n", row.green().bold()));
        } else {
            out.push_str(row);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::rank;
    use crate::types::RouteCandidate;

    #[test]
    fn test_render_marks_recommended_row() {
        let ranked = RankedRoutes::new(
            rank(vec![
                RouteCandidate::new("A", 30, 5.0),
                RouteCandidate::new("C", 25, 3.0).with_label("MyCiTi T01"),
            ]),
            "fastest",
        );

        let table = render_table(&ranked, false);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "Ranked 2 routes (strategy: fastest)");
        assert!(lines[3].starts_with("    A "));
        assert!(lines[4].starts_with("  * C "));
        assert!(lines[4].ends_with("MyCiTi T01"));
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn test_render_empty() {
        let ranked = RankedRoutes::new(vec![], "fastest");
        assert_eq!(render_table(&ranked, true), "No routes to rank\n");
    }

    #[test]
    fn test_color_only_on_recommended_row() {
        let ranked = RankedRoutes::new(
            rank(vec![RouteCandidate::new("A", 1, 1.0), RouteCandidate::new("B", 2, 1.0)]),
            "fastest",
        );

        let table = render_table(&ranked, true);
        let colored: Vec<_> = table.lines().filter(|l| l.contains('\u{1b}')).collect();

        assert_eq!(colored.len(), 1);
        assert!(colored[0].contains("* A"));
    }

    #[test]
    fn test_columns_align_with_non_ascii_ids() {
        let ranked = RankedRoutes::new(
            rank(vec![
                RouteCandidate::new("Café", 30, 5.0),
                RouteCandidate::new("Bo-Kaap→CBD", 25, 3.0),
                RouteCandidate::new("A", 40, 2.0),
            ]),
            "fastest",
        );

        let table = render_table(&ranked, false);
        let lines: Vec<_> = table.lines().collect();
        let column_end = |line: &str, needle: &str| {
            let byte = line.find(needle).unwrap() + needle.len();
            line[..byte].chars().count()
        };

        let header_end = column_end(lines[2], "TIME");
        for row in &lines[3..] {
            assert_eq!(column_end(row, " min"), header_end, "misaligned row: {row}");
        }
    }
}
