//! Power contract tests
//!
//! These tests define the stable observable behavior of the power
//! transitions: idle suspends until exactly one interrupt wake and changes
//! no register state; reboot and power-off never return.

#[cfg(test)]
mod tests {
    use crate::test_helpers::assert_diverges;
    use hal::PowerHal;
    use hal_armv7m::cpu::{CpuEvent, FakeCpu, ABORT_MARKER};
    use hal_armv7m::sysctrl::{SysCtrl, SysCtrlRegisters};
    use hal_armv7m::Armv7mPower;

    #[test]
    fn test_idle_consumes_exactly_one_wake() {
        let mut cpu = FakeCpu::new();
        cpu.script_wakes(2);
        let mut power = Armv7mPower::new(cpu);

        power.enter_lowest_idle_power();

        // One suspend, one wake; the second scripted interrupt stays pending
        assert_eq!(power.cpu().events(), [CpuEvent::WaitForInterrupt]);
        assert_eq!(power.cpu().remaining_wakes(), 1);
    }

    #[test]
    fn test_idle_suspends_until_interrupt() {
        // With no pending interrupt the suspend must not fall through; the
        // fake models that as a misuse panic rather than a silent return
        assert_diverges("no scripted wake", || {
            let mut power = Armv7mPower::new(FakeCpu::new());
            power.enter_lowest_idle_power();
        });
    }

    #[test]
    fn test_idle_leaves_register_block_unchanged() {
        let mut block = SysCtrlRegisters::zeroed();
        let mut ctrl = unsafe { SysCtrl::with_base(&mut block) };
        ctrl.set_mem_remap(0x2);
        ctrl.set_vector_base(0x2000_0100);

        let mut cpu = FakeCpu::new();
        cpu.script_wake();
        let mut power = Armv7mPower::new(cpu);
        power.enter_lowest_idle_power();

        assert_eq!(ctrl.mem_remap(), 0x2);
        assert_eq!(ctrl.vector_base(), 0x2000_0100);
    }

    #[test]
    fn test_reboot_never_returns() {
        let mut power = Armv7mPower::new(FakeCpu::new());
        let log = power.cpu().log_handle();

        assert_diverges(ABORT_MARKER, || power.reboot());

        assert_eq!(*log.borrow(), [CpuEvent::Abort]);
    }

    #[test]
    fn test_power_off_never_returns() {
        let mut power = Armv7mPower::new(FakeCpu::new());
        let log = power.cpu().log_handle();

        assert_diverges(ABORT_MARKER, || power.power_off());

        assert_eq!(*log.borrow(), [CpuEvent::Abort]);
    }
}
