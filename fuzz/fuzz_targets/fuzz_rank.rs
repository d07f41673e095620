// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use routeify::prelude::*;

#[derive(Debug, Arbitrary)]
struct Input {
    shortest: bool,
    routes: Vec<(i64, f64)>,
}

fuzz_target!(|input: Input| {
    let candidates: Vec<_> = input
        .routes
        .iter()
        .enumerate()
        .map(|(i, &(time, distance))| RouteCandidate::new(format!("f{i}"), time, distance))
        .collect();

    let ranker = if input.shortest {
        RouteSuggestionRanker::new(ShortestFirst)
    } else {
        RouteSuggestionRanker::new(FastestFirst)
    };

    let first = ranker.rank(candidates.clone());
    let second = ranker.rank(candidates);

    assert_eq!(first.len(), input.routes.len());
    let flags: Vec<bool> = first.iter().map(|c| c.recommended).collect();
    assert_eq!(flags, second.iter().map(|c| c.recommended).collect::<Vec<_>>());
    assert_eq!(flags.iter().filter(|f| **f).count(), usize::from(!flags.is_empty()));
});
