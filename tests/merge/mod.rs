//! Merge tests
//!
//! End-to-end merges over small fixture worlds:
//! - Official exports (positional parameter ids, slot translation)
//! - Legacy exports (rebuilt parameter ids, constructor side-table)
//! - Whole-merge properties (determinism, empty tables, doc shapes)

mod tests_behavior;
mod tests_legacy;
mod tests_official;
