//! DHT22 (AM2302) single-wire frame decoding.
//!
//! The bus timing lives in the firmware adapter; this module turns the measured
//! pulse widths into a checked frame so it can be tested on the host.
//!
//! # Wire Format
//!
//! After the start handshake the sensor sends 40 bits, most significant first.
//! Every bit is a ~50us low pulse followed by a high pulse of ~27us (`0`) or
//! ~70us (`1`). A bit is therefore `1` when its high pulse outlasts its low
//! pulse, which holds regardless of the exact clock the adapter measures with.
//!
//! | Byte | Content                                   |
//! |------|-------------------------------------------|
//! | 0-1  | Relative humidity x10                     |
//! | 2-3  | Temperature x10, bit 15 = negative        |
//! | 4    | Low byte of the sum of bytes 0-3          |

use crate::sensor::SensorError;

// =============================================================================
// Protocol Timing
// =============================================================================

/// Host holds the line low this long to request a conversion.
pub const START_LOW_US: u64 = 1100;

/// Host releases the line and waits this long before listening.
pub const START_RELEASE_US: u64 = 55;

/// Longest any single level may last before the read is abandoned.
pub const LEVEL_TIMEOUT_US: u64 = 1000;

// =============================================================================
// Frame
// =============================================================================

/// Number of data bits in one frame.
pub const FRAME_BITS: usize = 40;

/// Measured `(low, high)` pulse widths for every bit, in any consistent unit.
pub type Pulses = [(u32, u32); FRAME_BITS];

/// A raw five-byte DHT22 frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; 5]);

impl Frame {
    pub const fn from_bytes(bytes: [u8; 5]) -> Self { Self(bytes) }

    /// Assemble a frame from pulse widths.
    pub fn from_pulses(pulses: &Pulses) -> Self {
        let mut bytes = [0u8; 5];
        for (i, &(low, high)) in pulses.iter().enumerate() {
            bytes[i / 8] <<= 1;
            if high > low {
                bytes[i / 8] |= 1;
            }
        }
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; 5] { self.0 }

    /// Check the trailing checksum byte.
    pub fn verify(&self) -> Result<(), SensorError> {
        let [a, b, c, d, checksum] = self.0;
        let sum = a.wrapping_add(b).wrapping_add(c).wrapping_add(d);
        if sum == checksum { Ok(()) } else { Err(SensorError::Checksum) }
    }

    /// Temperature in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        let magnitude = u16::from_be_bytes([self.0[2] & 0x7F, self.0[3]]);
        let celsius = f32::from(magnitude) * 0.1;
        if self.0[2] & 0x80 != 0 { -celsius } else { celsius }
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> f32 { f32::from(u16::from_be_bytes([self.0[0], self.0[1]])) * 0.1 }
}

/// Decode pulse widths into a frame whose checksum matched.
pub fn decode_frame(pulses: &Pulses) -> Result<Frame, SensorError> {
    let frame = Frame::from_pulses(pulses);
    frame.verify()?;
    Ok(frame)
}
