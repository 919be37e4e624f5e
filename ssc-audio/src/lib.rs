//! # ssc-audio
//!
//! A `no_std`, zero-allocation driver core for SSC-style synchronous serial
//! audio peripherals (such as the Atmel SAM3X SSC on the Arduino DUE)
//! exchanging PCM words with an external ADC/DAC/CODEC over an I2S link.
//!
//! The peripheral runs strictly as a **clock slave**: an external converter
//! (or clock master) drives the bit clock and frame clock, and the driver
//! configures the peripheral to follow them. Only I2S framing is supported
//! (MSB-first, one-bit data delay, mono or stereo).
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Config | [`config`] | Clock-mode resolution and frame-format building |
//! | Registers | [`registers`] | [`SscRegisters`](registers::SscRegisters) trait + FIFO accessors |
//! | Pins | [`pins`] | Signal-to-pin binding tables and the [`PinMux`](pins::PinMux) seam |
//! | Driver | [`driver`] | [`SscAudio`](driver::SscAudio): configuration, enable, interrupt dispatch |
//!
//! ## Quick start
//!
//! ```ignore
//! use ssc_audio::config::{AudioMode, ChannelId, ClockMode};
//! use ssc_audio::driver::SscAudio;
//! use ssc_audio::pins::due;
//!
//! // In init: the application owns the one driver instance for the
//! // peripheral and later binds it to the SSC interrupt (e.g. as an
//! // RTIC resource).
//! let mut audio = SscAudio::new(ssc_regs, pio_mux, due::TABLES);
//! audio.begin();
//!
//! fn tx_ready(channel: ChannelId) {
//!     // interrupt context: one FIFO-width write, nothing else
//! }
//!
//! audio.on_tx_ready(tx_ready);
//! audio.configure_tx(AudioMode::Stereo, ClockMode::External, 16)?;
//! audio.enable_tx(true)?;
//!
//! // In the SSC interrupt handler:
//! audio.on_service();
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `due-pins` | yes | SAM3X / Arduino DUE pin binding tables ([`pins::due`]) |
//! | `defmt` | no | `defmt::Format` derives on public types |
//!
//! ## Limitations
//!
//! - Slave mode only; the driver never generates clocks (no MCLK output).
//! - I2S framing only: no TDM (>2 slots), no left/right-justified modes.
//! - No DMA and no buffering: each ready interrupt must be serviced with a
//!   single FIFO access before the next sample boundary, or data is lost.
//!   Underrun/overrun is neither detected nor reported.

#![no_std]

pub mod config;
pub mod driver;
pub mod pins;
pub mod registers;

pub use config::{AudioMode, ChannelId, ClockMode};
pub use driver::SscAudio;

/// Driver error type.
///
/// All failures are caught at configuration or enable time; the interrupt
/// dispatch path is infallible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bits per channel was 0 or above the peripheral's 32-bit word ceiling.
    InvalidBitDepth,
    /// The direction was enabled before it was ever configured.
    NotConfigured,
    /// A peer-synced direction was enabled while the direction it borrows
    /// its clocks from is not running.
    PeerClockInactive,
    /// FIFO access was attempted before [`begin`](driver::SscAudio::begin).
    NotInitialized,
}
