// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, default target increments, and reference distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KaiserLift Contributors

//! Constants module
//!
//! Constants are grouped by activity family. Values that users may want to
//! tune (increments, steps) only provide defaults here; the effective values
//! live in the synthesis configuration.

/// Strength (load vs. repetitions) constants
pub mod strength {
    /// Repetition divisor of the load-equivalence curve: `L * (1 + R / 30)`
    pub const EQUIVALENCE_REP_DIVISOR: f64 = 30.0;

    /// Default load increment for synthesized targets (lbs-equivalent units)
    pub const DEFAULT_LOAD_INCREMENT: f64 = 5.0;

    /// Default repetition step between adjacent frontier points
    pub const DEFAULT_REP_STEP: f64 = 1.0;

    /// Repetition count of the low-end extension target
    pub const SINGLE_REP: f64 = 1.0;

    /// Rep counts reported by the standard rep-max table
    pub const STANDARD_REP_TARGETS: [f64; 6] = [1.0, 3.0, 5.0, 8.0, 10.0, 12.0];
}

/// Cardio (pace vs. distance) constants
pub mod cardio {
    /// Fractional pace slowdown per unit of distance ratio above the reference
    pub const PACE_DEGRADATION_PER_RATIO: f64 = 0.05;

    /// Default fractional pace improvement for synthesized targets (5% faster)
    pub const DEFAULT_PACE_IMPROVEMENT: f64 = 0.05;

    /// Default distance step between adjacent frontier points (distance units)
    pub const DEFAULT_DISTANCE_STEP: f64 = 0.5;

    /// Seconds per minute, used by pace formatting
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Seconds per hour, used by duration formatting
    pub const SECONDS_PER_HOUR: u64 = 3_600;
}

/// Frontier geometry constants
pub mod frontier {
    /// Relative tolerance when comparing ordering gaps against a step
    ///
    /// Decimal distances such as `4.4 - 3.9` land a few ULPs above the
    /// nominal step; gaps within this tolerance count as exactly one step.
    pub const ORDERING_EPSILON: f64 = 1e-9;
}

/// Standard race distances in miles
pub mod race_distances {
    /// 5 kilometres
    pub const FIVE_K_MILES: f64 = 3.106_86;
    /// 10 kilometres
    pub const TEN_K_MILES: f64 = 6.213_71;
    /// Half marathon
    pub const HALF_MARATHON_MILES: f64 = 13.109_4;
    /// Marathon
    pub const MARATHON_MILES: f64 = 26.218_8;

    /// Named races reported by the standard race-pace table
    pub const STANDARD_RACES: [(&str, f64); 4] = [
        ("5K", FIVE_K_MILES),
        ("10K", TEN_K_MILES),
        ("Half Marathon", HALF_MARATHON_MILES),
        ("Marathon", MARATHON_MILES),
    ];
}
