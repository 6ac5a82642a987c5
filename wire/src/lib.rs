//! Binary point-frame codec for the shared-canvas realtime transport.
//!
//! This crate owns the wire representation used on the drawing socket: a
//! fixed six-byte frame of three native-endian `u16` words,
//! `[participant, x, y]`. The continuation flag ("connect this point to the
//! previous one with a line") is packed into the two high bits of the x word
//! rather than carried separately, so every bit of masking logic lives here
//! and nowhere else.
//!
//! Because the flag reuses coordinate bits, a true x of `49152` (`0xC000`) or
//! above cannot be represented: it decodes as a continuation-flagged smaller
//! value. That is a structural property of the format, not a defect; callers
//! keep x below [`MAX_PLAIN_X`] (the input boundary validates against canvas
//! bounds long before that). Changing the packing is a wire-breaking,
//! versioned protocol change.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Exact length of an encoded point frame in bytes.
pub const FRAME_LEN: usize = 6;

/// High-two-bits sentinel marking the x word as continuation-flagged.
pub const CONTINUATION_MASK: u16 = 0xC000;

/// Exclusive upper bound on x values the codec can carry without aliasing
/// into [`CONTINUATION_MASK`]. Caller contract; the codec itself only
/// manipulates bits and never range-checks.
pub const MAX_PLAIN_X: u16 = 0x4000;

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The binary payload is not exactly [`FRAME_LEN`] bytes.
    #[error("expected {FRAME_LEN}-byte point frame, got {0} bytes")]
    BadLength(usize),
}

/// A single decoded point sample on the drawing wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointFrame {
    /// Origin participant id; also the color-palette key (`id % palette len`).
    /// Scoped to one canvas session, not globally unique.
    pub participant: u16,
    /// X coordinate in absolute canvas space, `[0, 8192)`.
    pub x: u16,
    /// Y coordinate in absolute canvas space, `[0, 8192)`.
    pub y: u16,
    /// When set, this point extends the previous point's stroke segment;
    /// when unset it starts a new segment (a dot until the next point).
    pub continuation: bool,
}

impl PointFrame {
    #[must_use]
    pub fn new(participant: u16, x: u16, y: u16, continuation: bool) -> Self {
        Self { participant, x, y, continuation }
    }
}

/// Encode a point frame into its six-byte wire form.
///
/// The continuation flag is OR-ed into the high bits of x. The caller
/// guarantees `x < MAX_PLAIN_X`; out-of-contract values are encoded as-is
/// and will alias on decode (see the crate docs).
#[must_use]
pub fn encode_frame(frame: &PointFrame) -> [u8; FRAME_LEN] {
    let x_word = if frame.continuation {
        frame.x | CONTINUATION_MASK
    } else {
        frame.x
    };

    let mut out = [0_u8; FRAME_LEN];
    out[0..2].copy_from_slice(&frame.participant.to_ne_bytes());
    out[2..4].copy_from_slice(&x_word.to_ne_bytes());
    out[4..6].copy_from_slice(&frame.y.to_ne_bytes());
    out
}

/// Decode a six-byte wire frame back into a [`PointFrame`].
///
/// The x word carries continuation iff both high bits are set; they are
/// XOR-ed off to recover the true coordinate.
///
/// # Errors
///
/// Returns [`CodecError::BadLength`] when `bytes` is not exactly
/// [`FRAME_LEN`] bytes long.
pub fn decode_frame(bytes: &[u8]) -> Result<PointFrame, CodecError> {
    if bytes.len() != FRAME_LEN {
        return Err(CodecError::BadLength(bytes.len()));
    }

    // Infallible: the two-byte slices are length-checked above.
    let word = |range: std::ops::Range<usize>| -> u16 {
        let mut raw = [0_u8; 2];
        raw.copy_from_slice(&bytes[range]);
        u16::from_ne_bytes(raw)
    };

    let participant = word(0..2);
    let x_word = word(2..4);
    let y = word(4..6);

    let continuation = x_word & CONTINUATION_MASK == CONTINUATION_MASK;
    let x = if continuation { x_word ^ CONTINUATION_MASK } else { x_word };

    Ok(PointFrame { participant, x, y, continuation })
}

/// Classified inbound socket payload, handled exhaustively by the receive
/// path: text is logged, points are recorded, malformed binary is dropped.
/// None of the three may tear down the connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A text message (the greeting echo, or anything else non-binary).
    Text(String),
    /// A well-formed binary point frame.
    Point(PointFrame),
    /// Binary payload of the wrong length; carries the observed length.
    Malformed { len: usize },
}

impl Payload {
    /// Classify a binary socket message.
    #[must_use]
    pub fn from_binary(bytes: &[u8]) -> Self {
        match decode_frame(bytes) {
            Ok(frame) => Self::Point(frame),
            Err(CodecError::BadLength(len)) => Self::Malformed { len },
        }
    }

    /// Classify a text socket message.
    #[must_use]
    pub fn from_text(text: String) -> Self {
        Self::Text(text)
    }
}
