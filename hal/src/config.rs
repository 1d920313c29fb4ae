//! Board configuration and capability resolution
//!
//! Board configurations historically gated whole operations in and out at
//! build time, leaving callers to discover absence through missing symbols.
//! Here presence is data: a [`BspConfig`] resolves once into [`Capabilities`],
//! and callers branch on explicit flags instead.

use core::num::NonZeroUsize;

use thiserror::Error;

use crate::device_id::DEVICE_ID_NATIVE_LEN;

/// Errors that can occur while resolving a board configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Configured identifier length exceeds the native register width
    #[error("device id length {0} exceeds the native register width")]
    DeviceIdTooLong(usize),
}

/// Build-time board configuration, as written by the board definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BspConfig {
    /// Develop-mode build: fatal faults halt for the debugger instead of
    /// returning to the generic handler
    pub develop_mode: bool,
    /// The layered power manager is configured in and supersedes the simple
    /// lowest-idle primitive
    pub layered_pm: bool,
    /// Number of device-identifier bytes the board publishes; zero means the
    /// identifier operation is absent
    pub device_id_len: usize,
}

impl BspConfig {
    /// Production defaults: no debugger halt, simple idle present, full-width
    /// identifier
    pub const fn production() -> Self {
        Self {
            develop_mode: false,
            layered_pm: false,
            device_id_len: DEVICE_ID_NATIVE_LEN,
        }
    }

    /// Develop defaults: like [`production`](Self::production) but fatal
    /// faults halt for the debugger
    pub const fn develop() -> Self {
        Self {
            develop_mode: true,
            ..Self::production()
        }
    }
}

/// Configuration-resolved operation presence
///
/// Produced by [`Capabilities::resolve`]; callers consult these flags instead
/// of relying on conditionally compiled symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `enter_lowest_idle_power` is present (absent when the layered
    /// power manager owns idle)
    pub lowest_idle: bool,
    /// Identifier length when the identifier operation is present
    pub device_id_len: Option<NonZeroUsize>,
    /// Whether fatal faults halt for the debugger
    pub develop_mode: bool,
}

impl Capabilities {
    /// Resolves a board configuration into capability flags
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeviceIdTooLong`] if the configured identifier
    /// length exceeds [`DEVICE_ID_NATIVE_LEN`]; truncation to the configured
    /// length is expected, overflow of it is a board definition bug.
    pub fn resolve(config: BspConfig) -> Result<Self, ConfigError> {
        if config.device_id_len > DEVICE_ID_NATIVE_LEN {
            return Err(ConfigError::DeviceIdTooLong(config.device_id_len));
        }
        Ok(Self {
            lowest_idle: !config.layered_pm,
            device_id_len: NonZeroUsize::new(config.device_id_len),
            develop_mode: config.develop_mode,
        })
    }

    /// Whether the identifier operation is present
    pub fn has_device_id(&self) -> bool {
        self.device_id_len.is_some()
    }
}
