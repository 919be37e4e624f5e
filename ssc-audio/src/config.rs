//! Clock-mode resolution and frame-format building.
//!
//! These are the two pure halves of configuration. Given the user's request
//! (audio mode, clock mode, bit depth), they deterministically produce the
//! two descriptors the peripheral needs per direction:
//!
//! - [`ClockConfig`] — where the bit clock comes from, what edge/event starts
//!   a frame, and the fixed slave-mode parameters (one-bit data delay, no
//!   clock output).
//! - [`FrameConfig`] — word length, bit ordering, channel count.
//!
//! Exactly one descriptor pair exists per valid input combination; invalid
//! bit depths are rejected here rather than wrapped into garbage register
//! values.

use crate::Error;

// ── Public enums ───────────────────────────────────────────────────────────

/// Channel layout on the audio bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioMode {
    /// One channel, occupying the left (frame clock low) slot.
    MonoLeft,
    /// One channel, occupying the right (frame clock high) slot.
    MonoRight,
    /// Two channels: left then right.
    Stereo,
}

impl AudioMode {
    /// Number of logical channels carried per frame.
    pub const fn channel_count(self) -> u8 {
        match self {
            AudioMode::Stereo => 2,
            AudioMode::MonoLeft | AudioMode::MonoRight => 1,
        }
    }
}

/// Where a direction takes its bit/frame clocks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    /// Clock and frame signals arrive on this direction's own pins.
    /// All three pins (data, frame, bit clock) are bound.
    External,
    /// Reuse the opposite direction's clock and frame signals and start in
    /// lockstep with it. Only the data pin is bound; the opposite direction
    /// must be configured and running before this one is enabled.
    PeerSynced,
}

impl ClockMode {
    /// How many pins of the direction's binding table to physically connect.
    ///
    /// The data pin is always bound; frame and bit clock pins only when this
    /// direction owns them.
    pub const fn pin_count(self) -> usize {
        match self {
            ClockMode::External => 3,
            ClockMode::PeerSynced => 1,
        }
    }
}

/// Identifies which channel slot a ready event belongs to.
///
/// In mono modes only [`Channel1`](ChannelId::Channel1) is ever reported.
/// In stereo, `Channel1` is the left slot and `Channel2` the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    Channel1,
    Channel2,
}

/// Transfer direction of the serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Transmit,
    Receive,
}

/// Semantic bit-clock source selector.
///
/// Deliberately *not* the register encoding: at least one vendor's header
/// swaps the "own pin" and "peer pin" encodings relative to their documented
/// names, so the mapping lives in the [`SscRegisters`](crate::registers::SscRegisters)
/// implementation where it can be checked against the actual part's manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// This direction's own dedicated clock pin.
    DedicatedPin,
    /// The opposite direction's clock pin.
    PeerPin,
}

/// The condition that starts bit-shifting for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartCondition {
    /// Falling edge of the frame clock (left slot begins; I2S left is low).
    FrameFalling,
    /// Rising edge of the frame clock (right slot begins).
    FrameRising,
    /// The instant the opposite direction's own start condition fires.
    PeerStart,
}

// ── Clock descriptor ───────────────────────────────────────────────────────

/// Per-direction clock descriptor, ready to load into the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Bit clock source.
    pub source: ClockSource,
    /// Frame start condition.
    pub start: StartCondition,
    /// Data delay after the start condition, in bit periods. Always 1:
    /// I2S's defining one-bit-clock data delay.
    pub start_delay_bits: u8,
    /// Latch incoming data on the rising bit-clock edge. Set for receive
    /// (I2S convention); transmit shifts on the complementary edge, which
    /// the peripheral handles implicitly.
    pub sample_on_rising_edge: bool,
    /// Whether this direction drives the clock line. Always `false`: the
    /// peripheral is a slave and never sources clocks.
    pub drives_clock: bool,
    /// Clock divider period. Always 0 in slave mode.
    pub period: u8,
}

impl ClockConfig {
    /// Resolve the clock descriptor for one direction.
    ///
    /// - [`ClockMode::External`]: clock from this direction's own pins.
    ///   Frames start on the falling frame-clock edge, except in
    ///   [`AudioMode::MonoRight`] where only the right (high) slot is used
    ///   and the rising edge starts the frame.
    /// - [`ClockMode::PeerSynced`]: clock from the opposite direction's pin,
    ///   frames start when the opposite direction starts.
    pub fn resolve(clock_mode: ClockMode, audio_mode: AudioMode, direction: Direction) -> Self {
        let (source, start) = match clock_mode {
            ClockMode::External => {
                let start = if audio_mode == AudioMode::MonoRight {
                    StartCondition::FrameRising
                } else {
                    StartCondition::FrameFalling
                };
                (ClockSource::DedicatedPin, start)
            }
            ClockMode::PeerSynced => (ClockSource::PeerPin, StartCondition::PeerStart),
        };

        ClockConfig {
            source,
            start,
            start_delay_bits: 1,
            sample_on_rising_edge: direction == Direction::Receive,
            drives_clock: false,
            period: 0,
        }
    }
}

// ── Frame descriptor ───────────────────────────────────────────────────────

/// Largest word the peripheral's data-length field can express.
pub const MAX_BITS_PER_CHANNEL: u8 = 32;

/// Per-direction frame descriptor, ready to load into the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameConfig {
    /// Word length, zero-based (the peripheral encodes `bits - 1`).
    pub data_bits_minus_one: u8,
    /// Transfer most significant bit first. Always `true` for I2S.
    pub msb_first: bool,
    /// Words per frame beyond the first: 1 for stereo, 0 for mono.
    pub extra_channels: u8,
    /// Whether this direction drives the frame-sync line. Always `false`
    /// in slave mode.
    pub drives_frame_sync: bool,
}

impl FrameConfig {
    /// Build the frame descriptor for a given bit depth and channel layout.
    ///
    /// Rejects `bits_per_channel == 0` (which would underflow the zero-based
    /// length field) and depths beyond [`MAX_BITS_PER_CHANNEL`].
    pub fn build(bits_per_channel: u8, audio_mode: AudioMode) -> Result<Self, Error> {
        if bits_per_channel == 0 || bits_per_channel > MAX_BITS_PER_CHANNEL {
            return Err(Error::InvalidBitDepth);
        }

        Ok(FrameConfig {
            data_bits_minus_one: bits_per_channel - 1,
            msb_first: true,
            extra_channels: if audio_mode == AudioMode::Stereo { 1 } else { 0 },
            drives_frame_sync: false,
        })
    }
}
