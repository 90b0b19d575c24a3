//! Property-based tests for the IAL scanner
//!
//! These tests verify invariants that should hold for ANY input, not just
//! the hand-written cases next to each module.

mod generators;
mod invariants;
