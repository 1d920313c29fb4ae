//! Device-identifier abstraction
//!
//! Boards expose a hardware identifier for provisioning and device
//! identification. The native register is a single machine word; boards
//! configure how many of its low-order bytes they publish.

/// Width in bytes of the native hardware identifier register
///
/// Configured identifier lengths must not exceed this; see
/// [`crate::Capabilities::resolve`].
pub const DEVICE_ID_NATIVE_LEN: usize = 4;

/// Device-identifier retrieval operations
///
/// # Implementation Notes
///
/// - `copy_device_id` writes exactly the configured number of bytes into the
///   front of `dest` and touches nothing else; byte order is fixed
///   (little-endian low-order bytes of the native register)
/// - Two calls with unchanged hardware state must produce identical bytes
/// - A zero-length configuration copies nothing at all, including through
///   stub implementations
/// - There is no failure path; callers guarantee `dest` holds at least the
///   configured length
pub trait DeviceIdHal {
    /// Number of identifier bytes this implementation writes
    fn device_id_len(&self) -> usize;

    /// Copies the identifier into the front of `dest`
    ///
    /// # Panics
    ///
    /// Implementations may panic if `dest` is shorter than
    /// [`device_id_len`](Self::device_id_len); providing enough room is part
    /// of the caller contract.
    fn copy_device_id(&mut self, dest: &mut [u8]);
}
