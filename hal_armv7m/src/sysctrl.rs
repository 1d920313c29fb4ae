//! System-control register block
//!
//! The ARMv7-M trap dispatch hardware reads two words of board state: which
//! memory bank is remapped to the vector area, and where the vector table
//! lives. They sit in one fixed-address block, and this module is the only
//! description of that layout.
//!
//! ## Layout Contract
//!
//! Field order, width, and whole-word access semantics are hardware-fixed:
//! `mem_remap` then `vector_base`, each one 32-bit word, no partial-word
//! access. [`SysCtrl`] deliberately exposes nothing finer-grained.

/// Device address of the system-control register block
pub const SYS_CTRL_BASE: usize = 0x400F_C000;

/// The system-control register block layout
///
/// Exactly two consecutive 32-bit words. `#[repr(C)]` pins the field order
/// the hardware defines.
#[repr(C)]
#[derive(Debug)]
pub struct SysCtrlRegisters {
    /// Memory-bank remap selector
    pub mem_remap: u32,
    /// Trap-vector table base address
    pub vector_base: u32,
}

impl SysCtrlRegisters {
    /// Creates a block with both fields cleared, for use as a test double
    pub const fn zeroed() -> Self {
        Self {
            mem_remap: 0,
            vector_base: 0,
        }
    }
}

/// Accessor capability for the system-control block
///
/// All access to the block goes through one of these, bound either to the
/// fixed device address ([`SysCtrl::fixed`]) or to a caller-owned block for
/// tests ([`SysCtrl::with_base`]). There is no other sanctioned path to the
/// registers; keeping access behind an explicit object keeps it auditable
/// and substitutable.
///
/// Every read and write is a whole-word volatile operation; the hardware
/// forbids caching and partial-word access.
#[derive(Debug)]
pub struct SysCtrl {
    base: *mut SysCtrlRegisters,
}

impl SysCtrl {
    /// Binds the accessor to the fixed device address
    ///
    /// # Safety
    ///
    /// The caller must be running on the target device in a privileged
    /// context, and must ensure only one execution context uses the block at
    /// a time (single-core, no preemption during access).
    pub unsafe fn fixed() -> Self {
        Self {
            base: SYS_CTRL_BASE as *mut SysCtrlRegisters,
        }
    }

    /// Binds the accessor to a caller-provided block
    ///
    /// # Safety
    ///
    /// `base` must point to a valid `SysCtrlRegisters` that outlives the
    /// accessor and is not accessed by any other path while the accessor is
    /// live.
    pub unsafe fn with_base(base: *mut SysCtrlRegisters) -> Self {
        Self { base }
    }

    /// Reads the memory-bank remap selector
    pub fn mem_remap(&self) -> u32 {
        // SAFETY: base validity is a constructor precondition; volatile
        // whole-word reads are the only access mode the hardware permits.
        unsafe { core::ptr::addr_of!((*self.base).mem_remap).read_volatile() }
    }

    /// Writes the memory-bank remap selector
    pub fn set_mem_remap(&mut self, value: u32) {
        // SAFETY: see `mem_remap`.
        unsafe { core::ptr::addr_of_mut!((*self.base).mem_remap).write_volatile(value) }
    }

    /// Reads the trap-vector table base address
    pub fn vector_base(&self) -> u32 {
        // SAFETY: see `mem_remap`.
        unsafe { core::ptr::addr_of!((*self.base).vector_base).read_volatile() }
    }

    /// Writes the trap-vector table base address
    pub fn set_vector_base(&mut self, value: u32) {
        // SAFETY: see `mem_remap`.
        unsafe { core::ptr::addr_of_mut!((*self.base).vector_base).write_volatile(value) }
    }
}
