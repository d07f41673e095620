// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Routeify library - route suggestion ranking for transit navigation
//!
//! This crate selects and flags the single best route out of a set of
//! candidate routes, and ships the CLI plumbing (input loading, layered
//! configuration, command implementations) around it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod input;
pub mod ranker;
pub mod validation;

pub use ranker::{best_candidate, rank, RouteSuggestionRanker};

/// Core data types for route candidates and ranking results
pub mod types {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use sha2::{Digest, Sha256};

    // =========================================================================
    // Route Candidate
    // =========================================================================

    /// A single proposed route, summarised by estimated time and distance
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RouteCandidate {
        /// Opaque identifier, unique within one ranking call
        #[serde(alias = "route_id")]
        pub route_id: String,
        /// Estimated trip duration in minutes
        #[serde(alias = "time_estimate")]
        pub time_estimate: i64,
        /// Trip distance in kilometres
        pub distance: f64,
        /// Human-readable summary, carried through untouched
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub label: Option<String>,
        /// Output flag marking the best candidate (ignored on input)
        #[serde(default)]
        pub recommended: bool,
    }

    impl RouteCandidate {
        /// Create an unflagged candidate
        #[must_use]
        pub fn new(route_id: impl Into<String>, time_estimate: i64, distance: f64) -> Self {
            Self {
                route_id: route_id.into(),
                time_estimate,
                distance,
                label: None,
                recommended: false,
            }
        }

        /// Attach a human-readable label
        #[must_use]
        pub fn with_label(mut self, label: impl Into<String>) -> Self {
            self.label = Some(label.into());
            self
        }

        /// Generate a deterministic ID for a candidate that arrived without one.
        ///
        /// `index` is the candidate's position in its list, so identical
        /// records in one list still get distinct ids.
        #[must_use]
        pub fn generate_id(
            label: Option<&str>,
            time_estimate: i64,
            distance: f64,
            index: usize,
        ) -> String {
            let mut hasher = Sha256::new();
            if let Some(l) = label {
                hasher.update(l.as_bytes());
            }
            hasher.update((index as u64).to_le_bytes());
            hasher.update(time_estimate.to_le_bytes());
            hasher.update(distance.to_bits().to_le_bytes());
            let hash = hex::encode(hasher.finalize());
            format!("route:{}", &hash[..8])
        }
    }

    // =========================================================================
    // Ranking Result
    // =========================================================================

    /// Outcome of ranking one candidate list, as emitted by the CLI
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RankedRoutes {
        /// Ranked candidates, in input order
        pub candidates: Vec<RouteCandidate>,
        /// Index of the recommended candidate, if any
        pub recommended_index: Option<usize>,
        /// Name of the strategy that produced the ordering
        pub strategy: String,
        /// When the ranking ran
        pub ranked_at: DateTime<Utc>,
    }

    impl RankedRoutes {
        /// Wrap an already ranked list
        #[must_use]
        pub fn new(candidates: Vec<RouteCandidate>, strategy: &str) -> Self {
            let recommended_index = candidates.iter().position(|c| c.recommended);
            Self {
                candidates,
                recommended_index,
                strategy: strategy.to_string(),
                ranked_at: Utc::now(),
            }
        }

        /// The recommended candidate, if the list was non-empty
        #[must_use]
        pub fn recommended(&self) -> Option<&RouteCandidate> {
            self.recommended_index.and_then(|i| self.candidates.get(i))
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::ranker::{
        FastestFirst, RankingStrategy, RouteSuggestionRanker, ShortestFirst, StrategyKind,
    };
    pub use crate::types::*;
    pub use crate::validation::{RankError, ValidationPolicy};
    pub use anyhow::{Context, Result};
}
