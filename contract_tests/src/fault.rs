//! Fatal-fault contract tests
//!
//! These tests define the stable observable behavior of fault reporting:
//! exactly one debugger trap, then either a permanent halt (develop mode)
//! or an immediate return (non-develop).
