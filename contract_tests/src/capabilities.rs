//! Capability-resolution contract tests
//!
//! These tests define how board configuration maps to operation presence:
//! callers branch on resolved flags, never on missing symbols.
