//! ARMv7-M device-identifier retrieval

use hal::{Capabilities, DeviceIdHal};

use crate::cpu::CpuOps;

/// ARMv7-M implementation of the device-identifier contract
///
/// The identifier register is one 32-bit word; the board configuration picks
/// how many of its low-order bytes get published. Byte order is little
/// endian and stable across calls. A zero-length configuration makes the
/// operation a strict no-op that never touches the destination.
#[derive(Debug, Default)]
pub struct Armv7mDeviceId<C: CpuOps> {
    cpu: C,
    len: usize,
}

impl<C: CpuOps> Armv7mDeviceId<C> {
    /// Creates the identifier provider publishing `len` bytes
    ///
    /// `len` must already be capability-resolved (at most
    /// [`hal::DEVICE_ID_NATIVE_LEN`]); see [`Capabilities::resolve`].
    pub fn new(cpu: C, len: usize) -> Self {
        debug_assert!(len <= hal::DEVICE_ID_NATIVE_LEN);
        Self { cpu, len }
    }

    /// Creates the identifier provider with the length taken from resolved
    /// capabilities
    pub fn from_caps(cpu: C, caps: &Capabilities) -> Self {
        Self::new(cpu, caps.device_id_len.map_or(0, |len| len.get()))
    }

    /// Returns the underlying CPU primitives
    pub fn cpu(&self) -> &C {
        &self.cpu
    }
}

impl<C: CpuOps> DeviceIdHal for Armv7mDeviceId<C> {
    fn device_id_len(&self) -> usize {
        self.len
    }

    fn copy_device_id(&mut self, dest: &mut [u8]) {
        if self.len == 0 {
            return;
        }
        let bytes = self.cpu.device_id().to_le_bytes();
        dest[..self.len].copy_from_slice(&bytes[..self.len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::FakeCpu;

    fn provider(id: u32, len: usize) -> Armv7mDeviceId<FakeCpu> {
        let mut cpu = FakeCpu::new();
        cpu.set_device_id(id);
        Armv7mDeviceId::new(cpu, len)
    }

    #[test]
    fn test_copies_low_order_bytes_little_endian() {
        let mut id = provider(0x1122_3344, 4);
        let mut buf = [0u8; 4];
        id.copy_device_id(&mut buf);
        assert_eq!(buf, [0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_truncates_to_configured_length() {
        let mut id = provider(0x1122_3344, 2);
        let mut buf = [0xFFu8; 4];
        id.copy_device_id(&mut buf);
        assert_eq!(buf, [0x44, 0x33, 0xFF, 0xFF]);
    }

    #[test]
    fn test_zero_length_touches_nothing() {
        let mut id = provider(0x1122_3344, 0);
        let mut buf = [0xA5u8; 4];
        id.copy_device_id(&mut buf);
        assert_eq!(buf, [0xA5; 4]);
    }
}
