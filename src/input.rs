// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Loading candidate lists from JSON

use crate::types::RouteCandidate;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// A candidate as it appears on the wire; `routeId` may be missing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateRecord {
    #[serde(default, alias = "route_id")]
    route_id: Option<String>,
    #[serde(alias = "time_estimate")]
    time_estimate: i64,
    distance: f64,
    #[serde(default)]
    label: Option<String>,
}

impl CandidateRecord {
    /// Convert, minting an id from the record's content and list position
    fn into_candidate(self, index: usize) -> RouteCandidate {
        let route_id = self.route_id.unwrap_or_else(|| {
            RouteCandidate::generate_id(
                self.label.as_deref(),
                self.time_estimate,
                self.distance,
                index,
            )
        });
        RouteCandidate {
            route_id,
            time_estimate: self.time_estimate,
            distance: self.distance,
            label: self.label,
            recommended: false,
        }
    }
}

/// Accepted top-level shapes: a bare array or `{ "candidates": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<CandidateRecord>),
    Wrapped { candidates: Vec<CandidateRecord> },
}

/// Parse a JSON document into candidates, in document order
pub fn parse_candidates(json: &str) -> Result<Vec<RouteCandidate>> {
    let document: Document =
        serde_json::from_str(json).context("Failed to parse route candidates")?;
    let records = match document {
        Document::List(records) | Document::Wrapped { candidates: records } => records,
    };
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_candidate(index))
        .collect())
}

/// Load candidates from a file, or from stdin when the path is `-`
pub fn load_candidates(path: &Path) -> Result<Vec<RouteCandidate>> {
    let content = if path.as_os_str() == "-" {
        tracing::debug!("Reading candidates from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read candidates from stdin")?;
        buf
    } else {
        tracing::debug!("Reading candidates from {}", path.display());
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let candidates = parse_candidates(&content)
        .with_context(|| format!("Invalid candidate list in {}", path.display()))?;
    tracing::info!("Loaded {} route candidates", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"routeId": "A", "timeEstimate": 30, "distance": 5.0},
            {"routeId": "B", "timeEstimate": 25, "distance": 8.5, "label": "MyCiTi T01"}
        ]"#;

        let candidates = parse_candidates(json).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].route_id, "B");
        assert_eq!(candidates[1].label.as_deref(), Some("MyCiTi T01"));
    }

    #[test]
    fn test_parse_wrapped_and_snake_case() {
        let json = r#"{"candidates": [{"route_id": "A", "time_estimate": 12, "distance": 3}]}"#;

        let candidates = parse_candidates(json).unwrap();

        assert_eq!(candidates, vec![RouteCandidate::new("A", 12, 3.0)]);
    }

    #[test]
    fn test_input_recommended_flag_is_dropped() {
        let json = r#"[{"routeId": "A", "timeEstimate": 1, "distance": 1.0, "recommended": true}]"#;
        let candidates = parse_candidates(json).unwrap();
        assert!(!candidates[0].recommended);
    }

    #[test]
    fn test_missing_id_is_generated_deterministically() {
        let json = r#"[{"timeEstimate": 18, "distance": 6.2, "label": "Golden Arrow 104"}]"#;

        let first = parse_candidates(json).unwrap();
        let second = parse_candidates(json).unwrap();

        assert!(first[0].route_id.starts_with("route:"));
        assert_eq!(first[0].route_id, second[0].route_id);
    }

    #[test]
    fn test_identical_records_without_id_get_distinct_ids() {
        let json = r#"[
            {"timeEstimate": 10, "distance": 2.0},
            {"timeEstimate": 10, "distance": 2.0}
        ]"#;

        let candidates = parse_candidates(json).unwrap();

        assert_ne!(candidates[0].route_id, candidates[1].route_id);
        assert!(crate::validation::validate(&candidates).is_ok());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_candidates(r#"{"routes": []}"#).is_err());
        assert!(parse_candidates(r#"[{"routeId": "A", "distance": 1.0}]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("routes.json");
        fs::write(&path, "[]").unwrap();

        assert!(load_candidates(&path).unwrap().is_empty());
        assert!(load_candidates(&dir.path().join("missing.json")).is_err());
    }
}
