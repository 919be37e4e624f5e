//! The transceiver driver: configuration, enable/disable, and interrupt
//! dispatch.
//!
//! [`SscAudio`] owns the register interface and the pin mux, and tracks each
//! direction through an explicit lifecycle:
//!
//! ```text
//! Unconfigured ──configure──► Configured ──enable(true)──► Enabled
//!      ▲                          ▲                            │
//!      └────────begin()───────────┴───────enable(false)────────┘
//! ```
//!
//! Enabling is fail-fast: a direction that was never configured, or a
//! peer-synced direction whose clock-source direction is not running, is
//! rejected with a typed error instead of silently producing a dead data
//! path.
//!
//! ## Interrupt dispatch
//!
//! [`on_service`](SscAudio::on_service) is the peripheral's interrupt
//! handler body. It samples the status register **once** (some bits clear on
//! read), then fires the transmit callback and the receive callback — in
//! that fixed order — for whichever ready conditions were asserted in that
//! single sample. The sync status bit classifies the event's channel slot:
//! set means [`ChannelId::Channel1`], clear means [`ChannelId::Channel2`].
//!
//! Callbacks run in interrupt context. They must not block or allocate, and
//! should perform exactly one FIFO access — there is no buffering layer, so
//! a callback that misses the sample boundary loses data (undetected, by
//! design). Register callbacks *before* enabling their direction: the store
//! is not synchronized against a concurrently firing interrupt.
//!
//! ## Interrupt binding
//!
//! There is no global instance. The application owns the one `SscAudio` for
//! the peripheral and calls `on_service` from its interrupt handler, e.g. as
//! an RTIC resource:
//!
//! ```ignore
//! #[task(binds = SSC, shared = [audio])]
//! fn ssc(mut cx: ssc::Context) {
//!     cx.shared.audio.lock(|audio| audio.on_service());
//! }
//! ```

use crate::config::{AudioMode, ChannelId, ClockConfig, ClockMode, Direction, FrameConfig};
use crate::pins::{PinMux, PinTables};
use crate::registers::{Event, RxFifo, SscRegisters, TxFifo};
use crate::Error;

#[cfg(test)]
pub(crate) mod mock;


/// Sample-ready callback, invoked from interrupt context with the channel
/// slot the event belongs to.
///
/// Must be short, non-blocking and non-allocating; typically one
/// [`TxFifo::write`] or [`RxFifo::read`].
pub type ReadyCallback = fn(ChannelId);

// ── Per-direction state ────────────────────────────────────────────────────

/// Lifecycle of one direction's data path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkState {
    Unconfigured,
    Configured(ClockMode),
    Enabled(ClockMode),
}

impl LinkState {
    fn is_enabled(self) -> bool {
        matches!(self, LinkState::Enabled(_))
    }
}

/// Runtime state of one direction: lifecycle plus the registered callback.
/// Callback registration is independent of the lifecycle.
struct DirectionState {
    link: LinkState,
    callback: Option<ReadyCallback>,
}

impl DirectionState {
    const fn new() -> Self {
        DirectionState {
            link: LinkState::Unconfigured,
            callback: None,
        }
    }
}

// ── Driver ─────────────────────────────────────────────────────────────────

/// Slave-mode I2S transceiver driver.
///
/// Generic over the register interface `R` and the pin mux `M`, so the core
/// runs against the real peripheral on target and against mocks on the host.
/// Create exactly one instance per peripheral and keep it alive for the
/// process lifetime — interrupt vectors are static, and the instance is what
/// the handler services.
pub struct SscAudio<R, M> {
    regs: R,
    pinmux: M,
    pins: PinTables,
    tx: DirectionState,
    rx: DirectionState,
    tx_fifo: Option<TxFifo>,
    rx_fifo: Option<RxFifo>,
}

impl<R, M> SscAudio<R, M>
where
    R: SscRegisters,
    M: PinMux,
{
    /// Create the driver. Touches no hardware until [`begin`](Self::begin).
    pub const fn new(regs: R, pinmux: M, pins: PinTables) -> Self {
        SscAudio {
            regs,
            pinmux,
            pins,
            tx: DirectionState::new(),
            rx: DirectionState::new(),
            tx_fifo: None,
            rx_fifo: None,
        }
    }

    /// Reset the peripheral and capture the FIFO accessors.
    ///
    /// Idempotent, but destructive: calling it while a direction is active
    /// kills the in-flight transfer and both directions drop back to
    /// unconfigured. Registered callbacks survive.
    pub fn begin(&mut self) {
        self.regs.reset();
        self.tx_fifo = Some(self.regs.tx_fifo());
        self.rx_fifo = Some(self.regs.rx_fifo());
        self.tx.link = LinkState::Unconfigured;
        self.rx.link = LinkState::Unconfigured;
    }

    // ── Transmit ───────────────────────────────────────────────────────

    /// Configure the transmit path.
    ///
    /// Binds the transmit pins (all three for [`ClockMode::External`], data
    /// only for [`ClockMode::PeerSynced`]), loads the resolved clock and
    /// frame descriptors, and arms the transmit-ready interrupt source. The
    /// data path itself stays off until [`enable_tx`](Self::enable_tx).
    ///
    /// Fully replaces any previous transmit configuration and leaves the
    /// receive path untouched. Disable the direction first when
    /// reconfiguring a live output, or the transition glitches.
    pub fn configure_tx(
        &mut self,
        audio_mode: AudioMode,
        clock_mode: ClockMode,
        bits_per_channel: u8,
    ) -> Result<(), Error> {
        let frame = FrameConfig::build(bits_per_channel, audio_mode)?;
        let clock = ClockConfig::resolve(clock_mode, audio_mode, Direction::Transmit);

        for pin in &self.pins.tx[..clock_mode.pin_count()] {
            self.pinmux.connect(pin);
        }

        self.regs.load_tx_config(&clock, &frame);
        self.regs.enable_event(Event::TxReady);
        self.tx.link = LinkState::Configured(clock_mode);
        Ok(())
    }

    /// Enable or disable the transmit data path. Configuration is untouched.
    ///
    /// Enabling fails fast with [`Error::NotConfigured`] before the first
    /// [`configure_tx`](Self::configure_tx), and with
    /// [`Error::PeerClockInactive`] when transmit is peer-synced but receive
    /// is not currently running. Disabling always succeeds; an interrupt
    /// already latched is still delivered once.
    pub fn enable_tx(&mut self, enable: bool) -> Result<(), Error> {
        if !enable {
            self.regs.set_tx_enabled(false);
            if let LinkState::Enabled(mode) = self.tx.link {
                self.tx.link = LinkState::Configured(mode);
            }
            return Ok(());
        }

        match self.tx.link {
            LinkState::Unconfigured => Err(Error::NotConfigured),
            LinkState::Configured(mode) | LinkState::Enabled(mode) => {
                if mode == ClockMode::PeerSynced && !self.rx.link.is_enabled() {
                    return Err(Error::PeerClockInactive);
                }
                self.regs.set_tx_enabled(true);
                self.tx.link = LinkState::Enabled(mode);
                Ok(())
            }
        }
    }

    /// Register the transmit-ready callback.
    ///
    /// Plain pointer store, not synchronized against the interrupt: register
    /// before enabling transmit.
    pub fn on_tx_ready(&mut self, callback: ReadyCallback) {
        self.tx.callback = Some(callback);
    }

    // ── Receive ────────────────────────────────────────────────────────

    /// Configure the receive path. Mirror of
    /// [`configure_tx`](Self::configure_tx).
    pub fn configure_rx(
        &mut self,
        audio_mode: AudioMode,
        clock_mode: ClockMode,
        bits_per_channel: u8,
    ) -> Result<(), Error> {
        let frame = FrameConfig::build(bits_per_channel, audio_mode)?;
        let clock = ClockConfig::resolve(clock_mode, audio_mode, Direction::Receive);

        for pin in &self.pins.rx[..clock_mode.pin_count()] {
            self.pinmux.connect(pin);
        }

        self.regs.load_rx_config(&clock, &frame);
        self.regs.enable_event(Event::RxReady);
        self.rx.link = LinkState::Configured(clock_mode);
        Ok(())
    }

    /// Enable or disable the receive data path. Mirror of
    /// [`enable_tx`](Self::enable_tx).
    pub fn enable_rx(&mut self, enable: bool) -> Result<(), Error> {
        if !enable {
            self.regs.set_rx_enabled(false);
            if let LinkState::Enabled(mode) = self.rx.link {
                self.rx.link = LinkState::Configured(mode);
            }
            return Ok(());
        }

        match self.rx.link {
            LinkState::Unconfigured => Err(Error::NotConfigured),
            LinkState::Configured(mode) | LinkState::Enabled(mode) => {
                if mode == ClockMode::PeerSynced && !self.tx.link.is_enabled() {
                    return Err(Error::PeerClockInactive);
                }
                self.regs.set_rx_enabled(true);
                self.rx.link = LinkState::Enabled(mode);
                Ok(())
            }
        }
    }

    /// Register the receive-ready callback. Same contract as
    /// [`on_tx_ready`](Self::on_tx_ready).
    pub fn on_rx_ready(&mut self, callback: ReadyCallback) {
        self.rx.callback = Some(callback);
    }

    // ── Data access ────────────────────────────────────────────────────

    /// Push one sample word into the transmit FIFO.
    pub fn write(&mut self, word: u32) -> Result<(), Error> {
        let fifo = self.tx_fifo.as_mut().ok_or(Error::NotInitialized)?;
        fifo.write(word);
        Ok(())
    }

    /// Pull one sample word from the receive FIFO.
    pub fn read(&mut self) -> Result<u32, Error> {
        let fifo = self.rx_fifo.as_mut().ok_or(Error::NotInitialized)?;
        Ok(fifo.read())
    }

    /// Copy of the transmit FIFO accessor, for callbacks that service the
    /// FIFO without going back through the driver. `None` before
    /// [`begin`](Self::begin).
    pub fn tx_fifo(&self) -> Option<TxFifo> {
        self.tx_fifo.clone()
    }

    /// Copy of the receive FIFO accessor. `None` before
    /// [`begin`](Self::begin).
    pub fn rx_fifo(&self) -> Option<RxFifo> {
        self.rx_fifo.clone()
    }

    // ── Interrupt dispatch ─────────────────────────────────────────────

    /// Service one peripheral interrupt.
    ///
    /// Call once per interrupt assertion, from the handler. Status is read
    /// exactly once; both directions may fire in the same invocation
    /// (full duplex), transmit first.
    pub fn on_service(&mut self) {
        // Single read: ready/sync bits are cleared by the access, so every
        // decision below works from this one snapshot.
        let status = self.regs.status();

        if status.tx_ready() {
            if let Some(callback) = self.tx.callback {
                // The sync event fires on the configured start condition:
                // the left slot normally, the right slot in mono-right.
                let channel = if status.tx_sync() {
                    ChannelId::Channel1
                } else {
                    ChannelId::Channel2
                };
                callback(channel);
            }
        }

        if status.rx_ready() {
            if let Some(callback) = self.rx.callback {
                let channel = if status.rx_sync() {
                    ChannelId::Channel1
                } else {
                    ChannelId::Channel2
                };
                callback(channel);
            }
        }
    }
}
