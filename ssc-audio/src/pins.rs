//! Signal-to-pin binding tables and the pin-mux seam.
//!
//! Each direction needs up to three pins: serial data, frame clock, and bit
//! clock. The binding tables list them **data first** — that ordering is
//! load-bearing, because a peer-synced direction shares its clock pins with
//! the opposite direction and binds only the first (data) entry.
//!
//! Routing a pin to its peripheral function is platform work, reached
//! through the [`PinMux`] trait.

// ── Descriptors ────────────────────────────────────────────────────────────

/// Parallel I/O controller instance a pin lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    A,
    B,
    C,
    D,
}

/// Alternate peripheral function multiplexed onto a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralFunction {
    A,
    B,
}

/// One physical pin and the peripheral function that routes an SSC signal
/// onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    /// Port the pin belongs to.
    pub port: PortId,
    /// Single-bit mask of the pin within its port.
    pub mask: u32,
    /// Peripheral function to select.
    pub function: PeripheralFunction,
}

/// Platform seam: hand a pin over to its peripheral function.
pub trait PinMux {
    /// Route `pin` to the peripheral function named in its descriptor,
    /// detaching it from GPIO control.
    fn connect(&mut self, pin: &PinDescriptor);
}

/// The per-direction binding tables consumed by the driver.
///
/// Each table holds exactly `[data, frame clock, bit clock]`, in that order.
#[derive(Debug, Clone, Copy)]
pub struct PinTables {
    /// Transmit signals: TD, TF, TK.
    pub tx: &'static [PinDescriptor; 3],
    /// Receive signals: RD, RF, RK.
    pub rx: &'static [PinDescriptor; 3],
}

// ── SAM3X / Arduino DUE tables ─────────────────────────────────────────────

/// Pin bindings for the SSC on the SAM3X as wired on the Arduino DUE.
#[cfg(feature = "due-pins")]
pub mod due {
    use super::{PeripheralFunction, PinDescriptor, PinTables, PortId};

    /// Transmit signals: TD (PA16, DUE pin A0), TF (PA15, pin 24),
    /// TK (PA14, pin 23). All on peripheral function B.
    pub const TX_PINS: [PinDescriptor; 3] = [
        PinDescriptor { port: PortId::A, mask: 1 << 16, function: PeripheralFunction::B },
        PinDescriptor { port: PortId::A, mask: 1 << 15, function: PeripheralFunction::B },
        PinDescriptor { port: PortId::A, mask: 1 << 14, function: PeripheralFunction::B },
    ];

    /// Receive signals: RD (PB18, DUE pin A9), RF (PB17, pin A8),
    /// RK (PB19, pin A10). All on peripheral function A.
    pub const RX_PINS: [PinDescriptor; 3] = [
        PinDescriptor { port: PortId::B, mask: 1 << 18, function: PeripheralFunction::A },
        PinDescriptor { port: PortId::B, mask: 1 << 17, function: PeripheralFunction::A },
        PinDescriptor { port: PortId::B, mask: 1 << 19, function: PeripheralFunction::A },
    ];

    /// The DUE binding tables, ready to pass to
    /// [`SscAudio::new`](crate::driver::SscAudio::new).
    pub const TABLES: PinTables = PinTables {
        tx: &TX_PINS,
        rx: &RX_PINS,
    };
}
