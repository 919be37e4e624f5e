//! Recording mocks for the register interface and the pin mux.
//!
//! `MockSsc` keeps the last descriptors loaded per direction, counts resets
//! and status reads, and models the hardware's clear-on-read status
//! semantics: reading the status consumes it. Tests script the next
//! interrupt by assigning `pending_status`.

use core::cell::UnsafeCell;

use crate::config::{ClockConfig, FrameConfig};
use crate::pins::{PeripheralFunction, PinDescriptor, PinMux, PinTables, PortId};
use crate::registers::{Event, RxFifo, SscRegisters, Status, TxFifo};

/// Transmit table for tests: data, frame clock, bit clock.
pub(crate) const TX_PINS: [PinDescriptor; 3] = [
    PinDescriptor { port: PortId::A, mask: 1 << 16, function: PeripheralFunction::B },
    PinDescriptor { port: PortId::A, mask: 1 << 15, function: PeripheralFunction::B },
    PinDescriptor { port: PortId::A, mask: 1 << 14, function: PeripheralFunction::B },
];

/// Receive table for tests: data, frame clock, bit clock.
pub(crate) const RX_PINS: [PinDescriptor; 3] = [
    PinDescriptor { port: PortId::B, mask: 1 << 18, function: PeripheralFunction::A },
    PinDescriptor { port: PortId::B, mask: 1 << 17, function: PeripheralFunction::A },
    PinDescriptor { port: PortId::B, mask: 1 << 19, function: PeripheralFunction::A },
];

pub(crate) const TABLES: PinTables = PinTables {
    tx: &TX_PINS,
    rx: &RX_PINS,
};

pub(crate) struct MockSsc {
    pub resets: usize,
    pub tx_config: Option<(ClockConfig, FrameConfig)>,
    pub rx_config: Option<(ClockConfig, FrameConfig)>,
    pub tx_loads: usize,
    pub rx_loads: usize,
    pub tx_ready_armed: bool,
    pub rx_ready_armed: bool,
    pub tx_enabled: bool,
    pub rx_enabled: bool,
    pub pending_status: Status,
    pub status_reads: usize,
    tx_word: UnsafeCell<u32>,
    rx_word: UnsafeCell<u32>,
}

impl MockSsc {
    pub fn new() -> Self {
        MockSsc {
            resets: 0,
            tx_config: None,
            rx_config: None,
            tx_loads: 0,
            rx_loads: 0,
            tx_ready_armed: false,
            rx_ready_armed: false,
            tx_enabled: false,
            rx_enabled: false,
            pending_status: Status::empty(),
            status_reads: 0,
            tx_word: UnsafeCell::new(0),
            rx_word: UnsafeCell::new(0),
        }
    }

    /// The word last written through the TX accessor.
    pub fn tx_word(&self) -> u32 {
        unsafe { *self.tx_word.get() }
    }

    /// Stage the word the next RX accessor read returns.
    pub fn set_rx_word(&mut self, word: u32) {
        *self.rx_word.get_mut() = word;
    }
}

impl SscRegisters for MockSsc {
    fn reset(&mut self) {
        self.resets += 1;
        self.tx_config = None;
        self.rx_config = None;
        self.tx_ready_armed = false;
        self.rx_ready_armed = false;
        self.tx_enabled = false;
        self.rx_enabled = false;
        self.pending_status = Status::empty();
    }

    fn tx_fifo(&self) -> TxFifo {
        unsafe { TxFifo::new(self.tx_word.get()) }
    }

    fn rx_fifo(&self) -> RxFifo {
        unsafe { RxFifo::new(self.rx_word.get()) }
    }

    fn load_tx_config(&mut self, clock: &ClockConfig, frame: &FrameConfig) {
        self.tx_config = Some((*clock, *frame));
        self.tx_loads += 1;
    }

    fn load_rx_config(&mut self, clock: &ClockConfig, frame: &FrameConfig) {
        self.rx_config = Some((*clock, *frame));
        self.rx_loads += 1;
    }

    fn enable_event(&mut self, event: Event) {
        match event {
            Event::TxReady => self.tx_ready_armed = true,
            Event::RxReady => self.rx_ready_armed = true,
        }
    }

    fn set_tx_enabled(&mut self, enabled: bool) {
        self.tx_enabled = enabled;
    }

    fn set_rx_enabled(&mut self, enabled: bool) {
        self.rx_enabled = enabled;
    }

    fn status(&mut self) -> Status {
        self.status_reads += 1;
        // Clear-on-read, like the hardware.
        core::mem::replace(&mut self.pending_status, Status::empty())
    }
}

pub(crate) struct MockPinMux {
    pub connected: [Option<PinDescriptor>; 8],
    pub count: usize,
}

impl MockPinMux {
    pub fn new() -> Self {
        MockPinMux {
            connected: [None; 8],
            count: 0,
        }
    }
}

impl PinMux for MockPinMux {
    fn connect(&mut self, pin: &PinDescriptor) {
        self.connected[self.count] = Some(*pin);
        self.count += 1;
    }
}
