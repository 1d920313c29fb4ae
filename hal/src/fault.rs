//! Fatal-fault reporting abstraction
//!
//! The kernel calls into this interface only after it has already classified
//! a condition as unrecoverable. Nothing here inspects or records the fault;
//! the only job is to make the failure visible to a debugger and then either
//! hand control back or stop.

/// Fatal-fault reporting operations
///
/// # Implementation Notes
///
/// - Must issue exactly one architecture trap to attract an attached debugger
/// - In develop-mode configurations the call must then halt permanently;
///   execution does not resume
/// - In non-develop configurations the call returns promptly so the generic
///   fault handler can take further platform action
/// - This operation never signals an error; it *is* the terminal failure path
pub trait FaultHal {
    /// Reports an unrecoverable fault
    ///
    /// Returns only in non-develop configurations.
    fn report_fatal_fault(&mut self);
}
