//! ARMv7-M power transitions

use hal::PowerHal;

use crate::cpu::CpuOps;

/// ARMv7-M implementation of the power contract
///
/// Idle is a single `wfi`: the request retains a wake count of one, so a
/// pending interrupt makes it fall through immediately and any later
/// interrupt wakes the core. Reboot and power-off both route to the
/// abnormal-termination primitive and never return.
#[derive(Debug, Default)]
pub struct Armv7mPower<C: CpuOps> {
    cpu: C,
}

impl<C: CpuOps> Armv7mPower<C> {
    /// Creates the power controller over the given CPU primitives
    pub fn new(cpu: C) -> Self {
        Self { cpu }
    }

    /// Returns the underlying CPU primitives
    pub fn cpu(&self) -> &C {
        &self.cpu
    }
}

impl<C: CpuOps> PowerHal for Armv7mPower<C> {
    fn enter_lowest_idle_power(&mut self) {
        self.cpu.wait_for_interrupt();
    }

    fn reboot(&mut self) -> ! {
        self.cpu.abort()
    }

    fn power_off(&mut self) -> ! {
        self.cpu.abort()
    }
}
