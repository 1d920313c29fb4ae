//! CPU primitive abstraction for ARMv7-M
//!
//! This module provides a trait-based seam over the handful of architecture
//! instructions the board-support layer needs, allowing for both real
//! hardware access and fake implementations for testing.
//!
//! ## Safety
//!
//! The real implementation executes privileged instructions and reads a
//! fixed-address hardware register. Care must be taken to:
//! - Only run it on an actual ARMv7-M core in a privileged context
//! - Keep every unsafe block small and auditable
//!
//! The `RealCpu` implementation isolates all unsafe code to small, auditable
//! functions.

use std::cell::RefCell;
use std::rc::Rc;

/// CPU primitive trait
///
/// Abstracts the architecture instructions behind the power, fault, and
/// identifier operations to allow test doubles.
///
/// ## Implementation Notes
///
/// Implementations must guarantee:
/// - `breakpoint` issues exactly one debugger trap and returns
/// - `wait_for_interrupt` suspends until one interrupt arrives, then returns
/// - `abort` and `park` never return
/// - `device_id` reads the native-width hardware identifier register with no
///   side effect
pub trait CpuOps {
    /// Issues a debugger breakpoint trap
    fn breakpoint(&mut self);

    /// Suspends execution until the next interrupt
    fn wait_for_interrupt(&mut self);

    /// Terminates abnormally; control never returns
    fn abort(&mut self) -> !;

    /// Parks the core forever; control never returns
    fn park(&mut self) -> !;

    /// Reads the hardware identifier register
    fn device_id(&mut self) -> u32;
}

/// Address of the CPUID-class identifier register in the system control space
const CPUID_REG: usize = 0xE000_ED00;

/// Real hardware CPU primitives
///
/// Uses ARMv7-M instructions directly. On non-ARM hosts the instruction
/// bodies compile to inert fallbacks so the crate's portable code and tests
/// still build; only an ARM target gets the real behavior.
///
/// ## Safety
///
/// This implementation is only safe when:
/// - Running on an ARMv7-M core in privileged (handler or thread) mode
/// - The debugger trap is acceptable at the call site (`bkpt` escalates to a
///   fault when no debugger is attached and halting debug is off)
#[derive(Debug, Default)]
pub struct RealCpu;

impl RealCpu {
    /// Creates a new real CPU primitive implementation
    pub fn new() -> Self {
        Self
    }
}

impl CpuOps for RealCpu {
    #[inline]
    fn breakpoint(&mut self) {
        // SAFETY: `bkpt` has no memory or register side effects. It traps to
        // the attached debugger, or escalates to a fault handled above this
        // layer when none is attached.
        #[cfg(target_arch = "arm")]
        unsafe {
            core::arch::asm!("bkpt 0", options(nomem, nostack, preserves_flags));
        }
    }

    #[inline]
    fn wait_for_interrupt(&mut self) {
        // SAFETY: `wfi` suspends the core until an interrupt or debug event
        // and touches no architectural state. A pending interrupt makes it
        // fall through immediately, which satisfies the wake-count-of-one
        // contract.
        #[cfg(target_arch = "arm")]
        unsafe {
            core::arch::asm!("wfi", options(nomem, nostack, preserves_flags));
        }
    }

    fn abort(&mut self) -> ! {
        // TODO: confirm whether reboot should drive AIRCR.SYSRESETREQ instead
        // of the permanently-undefined instruction; until then this is the
        // shared abnormal-termination path.
        //
        // SAFETY: `udf` raises UsageFault/HardFault; no state is touched
        // before the exception entry.
        #[cfg(target_arch = "arm")]
        unsafe {
            core::arch::asm!("udf #0", options(nomem, nostack, preserves_flags));
        }
        // Unreachable on hardware.
        loop {
            core::hint::spin_loop();
        }
    }

    fn park(&mut self) -> ! {
        loop {
            self.wait_for_interrupt();
            #[cfg(not(target_arch = "arm"))]
            core::hint::spin_loop();
        }
    }

    #[cfg(target_arch = "arm")]
    #[inline]
    fn device_id(&mut self) -> u32 {
        // SAFETY: CPUID_REG is the architecturally fixed, always-mapped
        // identifier register; a whole-word volatile read has no side effect.
        unsafe { core::ptr::read_volatile(CPUID_REG as *const u32) }
    }

    #[cfg(not(target_arch = "arm"))]
    #[inline]
    fn device_id(&mut self) -> u32 {
        let _ = CPUID_REG;
        0
    }
}

/// Externally observable CPU primitive effects, as recorded by [`FakeCpu`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuEvent {
    /// A debugger breakpoint trap was issued
    Breakpoint,
    /// The core suspended and was woken by a scripted interrupt
    WaitForInterrupt,
    /// The abnormal-termination primitive was reached
    Abort,
    /// The core was parked permanently
    Park,
}

/// Shared event log handle
///
/// Cloning the handle before driving an operation that diverges lets a test
/// inspect the recorded events after catching the marker panic.
pub type CpuEventLog = Rc<RefCell<Vec<CpuEvent>>>;

/// Fake CPU primitives for testing
///
/// Records every primitive effect, scripts interrupt wakes and the
/// identifier register, and turns the divergent primitives into panics with
/// fixed marker messages so tests can prove execution never continues past
/// them.
///
/// ## Example
///
/// ```rust
/// use hal_armv7m::cpu::{CpuEvent, CpuOps, FakeCpu};
///
/// let mut cpu = FakeCpu::new();
/// cpu.script_wake();
/// cpu.wait_for_interrupt();
///
/// assert_eq!(cpu.events(), [CpuEvent::WaitForInterrupt]);
/// assert_eq!(cpu.remaining_wakes(), 0);
/// ```
#[derive(Debug)]
pub struct FakeCpu {
    /// Recorded primitive effects, in order
    log: CpuEventLog,
    /// Scripted interrupt wakes remaining
    pending_wakes: u32,
    /// Value the identifier register reads as
    device_id: u32,
}

/// Panic message marking the divergent abort primitive in tests
pub const ABORT_MARKER: &str = "FakeCpu: abort";

/// Panic message marking the divergent park primitive in tests
pub const PARK_MARKER: &str = "FakeCpu: park";

impl FakeCpu {
    /// Creates a new fake with no scripted wakes and an all-zero identifier
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            pending_wakes: 0,
            device_id: 0,
        }
    }

    /// Scripts one interrupt wake
    ///
    /// The next call to `wait_for_interrupt` will consume it and return.
    pub fn script_wake(&mut self) {
        self.pending_wakes += 1;
    }

    /// Scripts `count` interrupt wakes
    pub fn script_wakes(&mut self, count: u32) {
        self.pending_wakes += count;
    }

    /// Sets the value the identifier register reads as
    pub fn set_device_id(&mut self, id: u32) {
        self.device_id = id;
    }

    /// Returns the number of scripted wakes remaining
    pub fn remaining_wakes(&self) -> u32 {
        self.pending_wakes
    }

    /// Returns all recorded events, in order
    pub fn events(&self) -> Vec<CpuEvent> {
        self.log.borrow().clone()
    }

    /// Returns a handle to the event log that survives a marker panic
    pub fn log_handle(&self) -> CpuEventLog {
        Rc::clone(&self.log)
    }

    fn record(&self, event: CpuEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl Default for FakeCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuOps for FakeCpu {
    fn breakpoint(&mut self) {
        self.record(CpuEvent::Breakpoint);
    }

    fn wait_for_interrupt(&mut self) {
        if self.pending_wakes == 0 {
            panic!("FakeCpu: wait_for_interrupt with no scripted wake");
        }
        self.pending_wakes -= 1;
        self.record(CpuEvent::WaitForInterrupt);
    }

    fn abort(&mut self) -> ! {
        self.record(CpuEvent::Abort);
        panic!("{}", ABORT_MARKER);
    }

    fn park(&mut self) -> ! {
        self.record(CpuEvent::Park);
        panic!("{}", PARK_MARKER);
    }

    fn device_id(&mut self) -> u32 {
        self.device_id
    }
}
