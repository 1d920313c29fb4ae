//! Power control abstraction
//!
//! This module defines the power transitions the kernel can request from the
//! board-support layer.
//!
//! ## Philosophy
//!
//! - **Transitions, not policy**: Implementations execute exactly one
//!   transition per call; deciding when to idle belongs to the power manager
//!   above this layer
//! - **No retries**: A transition either completes or never returns; there is
//!   no recovery logic down here
//! - **Divergence is explicit**: Terminal transitions return `!` so callers
//!   cannot write code that depends on resuming after them

/// Power control operations
///
/// Different architectures have different sleep and reset mechanisms, but all
/// can implement this trait.
///
/// # Implementation Notes
///
/// - `enter_lowest_idle_power` must suspend until the next interrupt and then
///   return; it must not change any observable hardware register state
/// - `reboot` and `power_off` must not return under any circumstances
/// - None of these operations may report a recoverable error
pub trait PowerHal {
    /// Enters the lowest idle power state until an interrupt arrives
    ///
    /// Issues a single sleep request with a retained wake count of one: the
    /// first interrupt wakes the core and the call returns normally. Only
    /// meaningful when the simple idle capability is present (boards that
    /// configure the layered power manager drive idle through it instead;
    /// see [`crate::Capabilities::lowest_idle`]).
    fn enter_lowest_idle_power(&mut self);

    /// Reboots the platform
    ///
    /// Control never returns to the caller.
    fn reboot(&mut self) -> !;

    /// Powers the platform off
    ///
    /// Control never returns to the caller.
    fn power_off(&mut self) -> !;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host-side implementation used to exercise the trait surface
    struct CountingPower {
        idles: u32,
    }

    impl PowerHal for CountingPower {
        fn enter_lowest_idle_power(&mut self) {
            self.idles += 1;
        }

        fn reboot(&mut self) -> ! {
            panic!("reboot requested");
        }

        fn power_off(&mut self) -> ! {
            panic!("power off requested");
        }
    }

    #[test]
    fn test_idle_returns_control() {
        let mut power = CountingPower { idles: 0 };
        power.enter_lowest_idle_power();
        power.enter_lowest_idle_power();
        assert_eq!(power.idles, 2);
    }

    #[test]
    #[should_panic(expected = "reboot requested")]
    fn test_reboot_diverges() {
        let mut power = CountingPower { idles: 0 };
        power.reboot();
    }

    #[test]
    #[should_panic(expected = "power off requested")]
    fn test_power_off_diverges() {
        let mut power = CountingPower { idles: 0 };
        power.power_off();
    }
}
