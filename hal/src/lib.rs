//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the board-support contract the Kestrel kernel consumes
//! from an architecture-specific adaptation layer: power control, fatal-fault
//! reporting, and device-identifier retrieval.
//!
//! ## Philosophy
//!
//! **Architecture must be fully abstracted and swappable.**
//!
//! No architecture-specific assumptions should leak into core logic.
//! The HAL provides traits that architecture-specific crates implement.
//!
//! ## Design Principles
//!
//! 1. **Mechanism, not policy**: This layer executes power and fault
//!    transitions; deciding *when* to idle or *why* a fault is fatal belongs
//!    to the layers above
//! 2. **Trait-based**: All hardware operations go through traits
//! 3. **Presence is data**: Operations a board configuration omits are
//!    expressed as resolved capability flags, not missing symbols
//! 4. **Testable**: HAL can be mocked for testing

pub mod config;
pub mod device_id;
pub mod fault;
pub mod power;

pub use config::{BspConfig, Capabilities, ConfigError};
pub use device_id::{DeviceIdHal, DEVICE_ID_NATIVE_LEN};
pub use fault::FaultHal;
pub use power::PowerHal;
