// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod best;
pub mod completions;
pub mod config;
pub mod rank;
pub mod validate;

use crate::types::RouteCandidate;
use crate::validation::ValidationPolicy;
use anyhow::Result;

/// How command output should be rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Emit JSON instead of text
    pub json: bool,
    /// Highlight with ANSI colours
    pub color: bool,
}

/// Apply the validation policy, logging every problem before failing
fn enforce(policy: ValidationPolicy, candidates: &[RouteCandidate]) -> Result<()> {
    if let Err(err) = policy.check(candidates) {
        for problem in err.problems() {
            tracing::error!("{}", problem);
        }
        return Err(anyhow::Error::new(err).context("Route candidates failed strict validation"));
    }
    Ok(())
}

/// One-line summary of a candidate: `C (25 min, 3.00 km) MyCiTi T01`
#[must_use]
pub fn describe(candidate: &RouteCandidate) -> String {
    let mut line = format!(
        "{} ({} min, {:.2} km)",
        candidate.route_id, candidate.time_estimate, candidate.distance
    );
    if let Some(label) = &candidate.label {
        line.push(' ');
        line.push_str(label);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let plain = RouteCandidate::new("C", 25, 3.0);
        assert_eq!(describe(&plain), "C (25 min, 3.00 km)");

        let labelled = plain.with_label("MyCiTi T01");
        assert_eq!(describe(&labelled), "C (25 min, 3.00 km) MyCiTi T01");
    }

    #[test]
    fn test_enforce_respects_policy() {
        let bad = vec![RouteCandidate::new("A", -1, 1.0)];
        assert!(enforce(ValidationPolicy::Permissive, &bad).is_ok());
        assert!(enforce(ValidationPolicy::Strict, &bad).is_err());
    }
}
