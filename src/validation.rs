// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Input validation for route candidates
//!
//! Ranking never rejects input. Callers that want out-of-domain values
//! (negative times or distances, NaN, duplicate ids) refused before ranking
//! opt in with [`ValidationPolicy::Strict`].

use crate::types::RouteCandidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Problems found in a candidate list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// Time estimate below zero
    #[error("route {route_id}: negative time estimate ({minutes} min)")]
    NegativeTime {
        /// Offending route
        route_id: String,
        /// Reported estimate
        minutes: i64,
    },

    /// Distance below zero
    #[error("route {route_id}: negative distance ({km} km)")]
    NegativeDistance {
        /// Offending route
        route_id: String,
        /// Reported distance
        km: f64,
    },

    /// Distance is NaN or infinite
    #[error("route {route_id}: distance is not a finite number")]
    NonFiniteDistance {
        /// Offending route
        route_id: String,
    },

    /// The same id appears more than once in one list
    #[error("duplicate route id: {0}")]
    DuplicateRouteId(String),

    /// Several problems at once
    #[error("{} invalid route candidate entries", .0.len())]
    Invalid(Vec<RankError>),
}

impl RankError {
    /// Flatten into the individual problems
    #[must_use]
    pub fn problems(&self) -> Vec<&RankError> {
        match self {
            Self::Invalid(inner) => inner.iter().collect(),
            other => vec![other],
        }
    }
}

/// Whether out-of-domain values are rejected before ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Accept every well-formed record
    #[default]
    Permissive,
    /// Reject negative, non-finite and duplicate entries
    Strict,
}

impl ValidationPolicy {
    /// Apply the policy to a candidate list
    pub fn check(self, candidates: &[RouteCandidate]) -> Result<(), RankError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict => validate(candidates),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Collect every problem in the list, in input order
#[must_use]
pub fn find_problems(candidates: &[RouteCandidate]) -> Vec<RankError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for candidate in candidates {
        if !seen.insert(candidate.route_id.as_str()) {
            problems.push(RankError::DuplicateRouteId(candidate.route_id.clone()));
        }
        if candidate.time_estimate < 0 {
            problems.push(RankError::NegativeTime {
                route_id: candidate.route_id.clone(),
                minutes: candidate.time_estimate,
            });
        }
        if !candidate.distance.is_finite() {
            problems.push(RankError::NonFiniteDistance {
                route_id: candidate.route_id.clone(),
            });
        } else if candidate.distance < 0.0 {
            problems.push(RankError::NegativeDistance {
                route_id: candidate.route_id.clone(),
                km: candidate.distance,
            });
        }
    }

    problems
}

/// Strict validation: fail with a single error or an aggregate
pub fn validate(candidates: &[RouteCandidate]) -> Result<(), RankError> {
    let mut problems = find_problems(candidates);
    match problems.len() {
        0 => Ok(()),
        1 => Err(problems.remove(0)),
        _ => Err(RankError::Invalid(problems)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_list_passes() {
        let list = vec![
            RouteCandidate::new("A", 10, 1.5),
            RouteCandidate::new("B", 0, 0.0),
        ];
        assert!(validate(&list).is_ok());
    }

    #[test]
    fn test_single_problem_is_not_wrapped() {
        let list = vec![RouteCandidate::new("A", -1, 1.0)];
        assert_eq!(
            validate(&list),
            Err(RankError::NegativeTime {
                route_id: "A".into(),
                minutes: -1
            })
        );
    }

    #[test]
    fn test_all_problems_reported() {
        let list = vec![
            RouteCandidate::new("A", 10, -3.0),
            RouteCandidate::new("B", 10, f64::INFINITY),
            RouteCandidate::new("A", 5, 1.0),
        ];

        let err = validate(&list).unwrap_err();
        let problems = err.problems();

        assert_eq!(problems.len(), 3);
        assert!(matches!(problems[0], RankError::NegativeDistance { .. }));
        assert!(matches!(problems[1], RankError::NonFiniteDistance { .. }));
        assert_eq!(problems[2], &RankError::DuplicateRouteId("A".into()));
        assert_eq!(err.to_string(), "3 invalid route candidate entries");
    }

    #[test]
    fn test_nan_is_non_finite_not_negative() {
        let problems = find_problems(&[RouteCandidate::new("A", 1, f64::NAN)]);
        assert_eq!(
            problems,
            vec![RankError::NonFiniteDistance { route_id: "A".into() }]
        );
    }

    #[test]
    fn test_permissive_policy_accepts_anything() {
        let list = vec![RouteCandidate::new("A", -10, f64::NAN)];
        assert!(ValidationPolicy::Permissive.check(&list).is_ok());
        assert!(ValidationPolicy::Strict.check(&list).is_err());
    }
}
