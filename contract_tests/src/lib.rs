//! # Board-Support Contract Tests
//!
//! This crate provides "golden" tests for the board-support contract to
//! ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The contract's observable properties are
//!   written as code
//! - **Testability first**: Contract tests fail when behavior changes
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each contract area has a module verifying its externally observable
//! properties against the ARMv7-M implementations through the fake CPU seam:
//! - Power: single-wake idle, divergent reboot and power-off
//! - Fault: exactly one trap, develop-mode halt versus return
//! - Device identifier: exact length, fixed byte order, idempotence
//! - Register block: layout and retention across operations
//! - Capabilities: configuration-resolved presence flags

pub mod capabilities;
pub mod device_id;
pub mod fault;
pub mod power;
pub mod sysctrl;

/// Common test helpers for contract validation
pub mod test_helpers {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Runs `f` and verifies it diverges with the expected marker panic
    ///
    /// Terminal operations are modeled by the fake CPU as marker panics;
    /// proving the panic fired proves execution never continued past the
    /// call.
    pub fn assert_diverges<F: FnOnce()>(marker: &str, f: F) {
        let result = catch_unwind(AssertUnwindSafe(f));
        let payload = match result {
            Ok(()) => panic!("operation returned control; expected '{marker}'"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_default();
        assert!(
            message.contains(marker),
            "diverged with unexpected panic: '{message}', expected '{marker}'"
        );
    }
}
