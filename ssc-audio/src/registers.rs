//! Peripheral register interface.
//!
//! The driver core never touches memory-mapped registers directly; it talks
//! to the hardware through [`SscRegisters`], implemented once per target
//! peripheral (and by a mock on the host). The trait covers exactly what the
//! core needs: reset, descriptor loads, interrupt-source and data-path
//! enables, and a single-shot status read.
//!
//! FIFO access is modeled as the opaque [`TxFifo`] / [`RxFifo`] capabilities:
//! a fixed-width volatile word location, obtained once and usable only
//! through `write` / `read`. Raw addresses never cross the public API.

use crate::config::{ClockConfig, FrameConfig};

// ── Interrupt sources ──────────────────────────────────────────────────────

/// Interrupt sources the driver arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Transmit holding register is ready for the next word.
    TxReady,
    /// Receive holding register holds a new word.
    RxReady,
}

// ── Status word ────────────────────────────────────────────────────────────

/// Snapshot of the peripheral status register.
///
/// Some status bits are cleared by the act of reading, so
/// [`SscRegisters::status`] must be called exactly once per interrupt and
/// the returned snapshot consulted for every decision in that dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(u32);

impl Status {
    /// Transmit ready: the TX holding register can accept a word.
    pub const TX_READY: u32 = 1 << 0;
    /// Receive ready: the RX holding register holds a word.
    pub const RX_READY: u32 = 1 << 1;
    /// Transmit sync: the TX ready event belongs to the start-condition slot.
    pub const TX_SYNC: u32 = 1 << 2;
    /// Receive sync: the RX ready event belongs to the start-condition slot.
    pub const RX_SYNC: u32 = 1 << 3;

    /// Status with no flags set.
    pub const fn empty() -> Self {
        Status(0)
    }

    /// Build a status snapshot from raw flag bits.
    pub const fn new(bits: u32) -> Self {
        Status(bits)
    }

    /// Raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn tx_ready(self) -> bool {
        self.0 & Self::TX_READY != 0
    }

    pub const fn rx_ready(self) -> bool {
        self.0 & Self::RX_READY != 0
    }

    pub const fn tx_sync(self) -> bool {
        self.0 & Self::TX_SYNC != 0
    }

    pub const fn rx_sync(self) -> bool {
        self.0 & Self::RX_SYNC != 0
    }
}

// ── FIFO accessors ─────────────────────────────────────────────────────────

/// Write-only accessor for the transmit holding register.
///
/// One instance stands for the capability to push sample words into the
/// peripheral. The only operation is a single fixed-width volatile write.
#[derive(Debug, Clone)]
pub struct TxFifo {
    addr: *mut u32,
}

impl TxFifo {
    /// Wrap the transmit holding register address.
    ///
    /// # Safety
    ///
    /// `addr` must be the peripheral's transmit holding register (or an
    /// equivalent location that stays valid and writable for the accessor's
    /// lifetime).
    pub const unsafe fn new(addr: *mut u32) -> Self {
        TxFifo { addr }
    }

    /// Push one sample word.
    pub fn write(&mut self, word: u32) {
        unsafe { core::ptr::write_volatile(self.addr, word) }
    }
}

// SAFETY: the accessor is just a device address; the register location is
// valid from any context that legitimately holds the capability.
unsafe impl Send for TxFifo {}

/// Read-only accessor for the receive holding register.
///
/// Counterpart of [`TxFifo`]; the only operation is a single fixed-width
/// volatile read.
#[derive(Debug, Clone)]
pub struct RxFifo {
    addr: *const u32,
}

impl RxFifo {
    /// Wrap the receive holding register address.
    ///
    /// # Safety
    ///
    /// `addr` must be the peripheral's receive holding register (or an
    /// equivalent location that stays valid and readable for the accessor's
    /// lifetime).
    pub const unsafe fn new(addr: *const u32) -> Self {
        RxFifo { addr }
    }

    /// Pull one sample word.
    pub fn read(&mut self) -> u32 {
        unsafe { core::ptr::read_volatile(self.addr) }
    }
}

// SAFETY: see TxFifo.
unsafe impl Send for RxFifo {}

// ── Register interface trait ───────────────────────────────────────────────

/// The register-level operations the driver core consumes.
///
/// Implementations translate the semantic descriptors ([`ClockConfig`],
/// [`FrameConfig`]) into the target peripheral's register encodings. Note
/// for SAM3X SSC implementors: the vendor header's clock-source macros for
/// "own pin" vs "opposite direction's pin" are swapped relative to their
/// names; map [`ClockSource`](crate::config::ClockSource) from the part's
/// manual, not from the macro names.
pub trait SscRegisters {
    /// Software-reset the peripheral, dropping all configuration and any
    /// in-flight transfer. Implementations also do whatever the platform
    /// needs to make the peripheral reachable: ungating its clock and
    /// enabling its interrupt line in the interrupt controller.
    fn reset(&mut self);

    /// The transmit holding register accessor.
    fn tx_fifo(&self) -> TxFifo;

    /// The receive holding register accessor.
    fn rx_fifo(&self) -> RxFifo;

    /// Load the transmit clock and frame descriptors.
    fn load_tx_config(&mut self, clock: &ClockConfig, frame: &FrameConfig);

    /// Load the receive clock and frame descriptors.
    fn load_rx_config(&mut self, clock: &ClockConfig, frame: &FrameConfig);

    /// Arm an interrupt source. Sources are only ever armed, never disarmed:
    /// an unserviced ready event with no callback is simply dropped by the
    /// dispatcher.
    fn enable_event(&mut self, event: Event);

    /// Enable or disable the transmit data path. Configuration is untouched.
    fn set_tx_enabled(&mut self, enabled: bool);

    /// Enable or disable the receive data path. Configuration is untouched.
    fn set_rx_enabled(&mut self, enabled: bool);

    /// Read the status register.
    ///
    /// Reading clears some bits in hardware; call once per interrupt and
    /// work from the returned snapshot.
    fn status(&mut self) -> Status;
}
