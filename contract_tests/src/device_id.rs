//! Device-identifier contract tests
//!
//! These tests define the stable observable behavior of identifier
//! retrieval: exactly the configured number of low-order bytes, fixed
//! little-endian order, idempotent, and a strict no-op at length zero.

#[cfg(test)]
mod tests {
    use hal::{DeviceIdHal, DEVICE_ID_NATIVE_LEN};
    use hal_armv7m::cpu::FakeCpu;
    use hal_armv7m::Armv7mDeviceId;

    const SAMPLE_ID: u32 = 0xCAFE_F00D;

    fn provider(len: usize) -> Armv7mDeviceId<FakeCpu> {
        let mut cpu = FakeCpu::new();
        cpu.set_device_id(SAMPLE_ID);
        Armv7mDeviceId::new(cpu, len)
    }

    #[test]
    fn test_every_length_writes_exactly_that_many_bytes() {
        let expected = SAMPLE_ID.to_le_bytes();
        for len in 1..=DEVICE_ID_NATIVE_LEN {
            let mut id = provider(len);
            let mut buf = [0x5Au8; DEVICE_ID_NATIVE_LEN + 2];

            id.copy_device_id(&mut buf);

            assert_eq!(&buf[..len], &expected[..len], "length {len}");
            // Sentinels past the configured length stay untouched
            assert!(
                buf[len..].iter().all(|&b| b == 0x5A),
                "length {len} wrote past the configured length"
            );
        }
    }

    #[test]
    fn test_successive_calls_are_byte_identical() {
        let mut id = provider(DEVICE_ID_NATIVE_LEN);
        let mut first = [0u8; DEVICE_ID_NATIVE_LEN];
        let mut second = [0u8; DEVICE_ID_NATIVE_LEN];

        id.copy_device_id(&mut first);
        id.copy_device_id(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_byte_order_is_little_endian_low_order() {
        let mut id = provider(DEVICE_ID_NATIVE_LEN);
        let mut buf = [0u8; DEVICE_ID_NATIVE_LEN];

        id.copy_device_id(&mut buf);

        assert_eq!(buf, [0x0D, 0xF0, 0xFE, 0xCA]);
    }

    #[test]
    fn test_zero_length_stub_never_touches_buffer() {
        let mut id = provider(0);
        let mut buf = [0xA5u8; DEVICE_ID_NATIVE_LEN];

        id.copy_device_id(&mut buf);

        assert_eq!(buf, [0xA5; DEVICE_ID_NATIVE_LEN]);
        assert_eq!(id.device_id_len(), 0);
    }

    #[test]
    fn test_reported_length_matches_configuration() {
        for len in 0..=DEVICE_ID_NATIVE_LEN {
            assert_eq!(provider(len).device_id_len(), len);
        }
    }
}
