//! ARMv7-M fatal-fault reporting

use hal::{Capabilities, FaultHal};

use crate::cpu::CpuOps;

/// ARMv7-M implementation of the fatal-fault contract
///
/// Issues one `bkpt` to attract an attached debugger. Develop-mode
/// configurations then park the core so the failure state stays inspectable;
/// otherwise control returns to the generic fault handler.
#[derive(Debug, Default)]
pub struct Armv7mFault<C: CpuOps> {
    cpu: C,
    develop_mode: bool,
}

impl<C: CpuOps> Armv7mFault<C> {
    /// Creates the fault reporter over the given CPU primitives
    pub fn new(cpu: C, develop_mode: bool) -> Self {
        Self { cpu, develop_mode }
    }

    /// Creates the fault reporter with behavior taken from resolved
    /// capabilities
    pub fn from_caps(cpu: C, caps: &Capabilities) -> Self {
        Self::new(cpu, caps.develop_mode)
    }

    /// Returns the underlying CPU primitives
    pub fn cpu(&self) -> &C {
        &self.cpu
    }
}

impl<C: CpuOps> FaultHal for Armv7mFault<C> {
    fn report_fatal_fault(&mut self) {
        self.cpu.breakpoint();
        if self.develop_mode {
            self.cpu.park();
        }
    }
}
