//! Test fixtures shared with downstream crates via the `tests` feature
