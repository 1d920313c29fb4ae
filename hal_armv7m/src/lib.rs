//! # ARMv7-M Hardware Abstraction Layer
//!
//! This crate implements the HAL traits for ARMv7-M class (Cortex-M)
//! microcontrollers: power transitions, fatal-fault reporting, and
//! device-identifier retrieval, plus the system-control register block the
//! trap dispatch hardware reads.
//!
//! ## Scope
//!
//! The architecture primitives (`bkpt`, `wfi`, abort, the identifier
//! register) sit behind the [`CpuOps`] seam. [`RealCpu`] carries the actual
//! instructions; [`FakeCpu`] scripts them for host tests. Everything above
//! the seam is ordinary portable code.

pub mod cpu;
pub mod device_id;
pub mod fault;
pub mod power;
pub mod sysctrl;

pub use cpu::{CpuEvent, CpuOps, FakeCpu, RealCpu};
pub use device_id::Armv7mDeviceId;
pub use fault::Armv7mFault;
pub use power::Armv7mPower;
pub use sysctrl::{SysCtrl, SysCtrlRegisters, SYS_CTRL_BASE};
