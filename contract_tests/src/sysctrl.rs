//! Register-block contract tests
//!
//! These tests define the stable hardware layout contract: two consecutive
//! 32-bit fields in fixed order, whole-word access, and retention of
//! last-written values across every board-support operation.
