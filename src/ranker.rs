// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route suggestion ranking
//!
//! The ranker picks the single best candidate out of a list and flags it as
//! recommended. The visible list keeps its input order; only the flag moves.
//! What counts as "best" is decided by a [`RankingStrategy`], and exact ties
//! always resolve to the first occurrence.

use crate::types::RouteCandidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Strategies
// =============================================================================

/// Ordering used to decide which candidate is best (the minimum wins)
pub trait RankingStrategy: Send + Sync {
    /// Short name, used in output and configuration
    fn name(&self) -> &'static str;

    /// Compare two candidates; `Less` means `a` is the better route
    fn compare(&self, a: &RouteCandidate, b: &RouteCandidate) -> Ordering;
}

/// Distance ordering: NaN (of either sign) sorts after every number, and
/// NaNs are equal to each other
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (nan_a, nan_b) => nan_a.cmp(&nan_b),
    }
}

/// Lowest time estimate first, ties broken by lowest distance
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestFirst;

impl RankingStrategy for FastestFirst {
    fn name(&self) -> &'static str {
        "fastest"
    }

    fn compare(&self, a: &RouteCandidate, b: &RouteCandidate) -> Ordering {
        a.time_estimate
            .cmp(&b.time_estimate)
            .then_with(|| compare_distance(a.distance, b.distance))
    }
}

/// Lowest distance first, ties broken by lowest time estimate
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestFirst;

impl RankingStrategy for ShortestFirst {
    fn name(&self) -> &'static str {
        "shortest"
    }

    fn compare(&self, a: &RouteCandidate, b: &RouteCandidate) -> Ordering {
        compare_distance(a.distance, b.distance)
            .then_with(|| a.time_estimate.cmp(&b.time_estimate))
    }
}

/// Configurable selector for the built-in strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Lowest time first, then lowest distance
    #[default]
    Fastest,
    /// Lowest distance first, then lowest time
    Shortest,
}

impl StrategyKind {
    /// Instantiate the strategy
    #[must_use]
    pub fn build(self) -> Box<dyn RankingStrategy> {
        match self {
            Self::Fastest => Box::new(FastestFirst),
            Self::Shortest => Box::new(ShortestFirst),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fastest => f.write_str("fastest"),
            Self::Shortest => f.write_str("shortest"),
        }
    }
}

// =============================================================================
// Ranker
// =============================================================================

/// Selects and flags the best candidate in a list
pub struct RouteSuggestionRanker {
    strategy: Box<dyn RankingStrategy>,
}

impl Default for RouteSuggestionRanker {
    fn default() -> Self {
        Self::new(FastestFirst)
    }
}

impl fmt::Debug for RouteSuggestionRanker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSuggestionRanker")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl RouteSuggestionRanker {
    /// Create a ranker using the given strategy
    #[must_use]
    pub fn new(strategy: impl RankingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Create a ranker for a configured strategy kind
    #[must_use]
    pub fn for_kind(kind: StrategyKind) -> Self {
        Self {
            strategy: kind.build(),
        }
    }

    /// Name of the active strategy
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Index of the best candidate, or `None` for an empty list
    #[must_use]
    pub fn select(&self, candidates: &[RouteCandidate]) -> Option<usize> {
        // min_by yields the first of several equal minima
        candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| self.strategy.compare(a, b))
            .map(|(idx, _)| idx)
    }

    /// Recompute the recommended flag on every candidate.
    ///
    /// The returned list has the same length and order as the input. Exactly
    /// one candidate is flagged when the input is non-empty; an empty input
    /// comes back empty.
    #[must_use]
    pub fn rank(&self, mut candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
        let best = self.select(&candidates);
        for (idx, candidate) in candidates.iter_mut().enumerate() {
            candidate.recommended = best == Some(idx);
        }
        candidates
    }

    /// The candidate `rank` would flag, or `None` for an empty list
    #[must_use]
    pub fn best_candidate(&self, candidates: Vec<RouteCandidate>) -> Option<RouteCandidate> {
        self.rank(candidates).into_iter().find(|c| c.recommended)
    }
}

/// Rank with the default fastest-first strategy
#[must_use]
pub fn rank(candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    RouteSuggestionRanker::default().rank(candidates)
}

/// Best candidate under the default fastest-first strategy
#[must_use]
pub fn best_candidate(candidates: Vec<RouteCandidate>) -> Option<RouteCandidate> {
    RouteSuggestionRanker::default().best_candidate(candidates)
}
