// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use routeify::input::parse_candidates;
use routeify::rank;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(candidates) = parse_candidates(text) else {
        return;
    };

    let expected = usize::from(!candidates.is_empty());
    let ranked = rank(candidates);
    assert_eq!(ranked.iter().filter(|c| c.recommended).count(), expected);

    // Ranked output must serialize back out
    let _ = serde_json::to_string(&ranked).unwrap();
});
