use heapless::Vec;

use crate::constants::MAX_DIGITS;
use crate::encode::encode_into;

/// Number of physical digit positions a frame spans.
pub const WINDOW: usize = MAX_DIGITS as usize;

/// Sliding-window scroll state over an encoded message, one frame per step.
///
/// The driver's `scroll_text` drives this with a blocking delay between
/// frames; hosts that need cancellation or their own timing can hold a
/// `Scroller` directly and interleave `frame`/`advance` with whatever
/// control flow they like.
pub struct Scroller<const N: usize> {
    buf: Vec<u8, N>,
    remaining: usize,
}

impl<const N: usize> Scroller<N> {
    /// Encodes `lead_in + message + lead_out`. Returns `None` when the
    /// encoded length is shorter than one full window or exceeds the
    /// buffer capacity `N`.
    pub fn new(message: &str, lead_in: &str, lead_out: &str) -> Option<Self> {
        let mut buf = Vec::new();
        let fit = encode_into(lead_in, &mut buf)
            && encode_into(message, &mut buf)
            && encode_into(lead_out, &mut buf);
        if !fit || buf.len() < WINDOW {
            return None;
        }
        let remaining = buf.len() - (WINDOW - 1);
        Some(Self { buf, remaining })
    }

    /// The window currently mapped onto the display, leftmost digit first.
    pub fn frame(&self) -> [u8; WINDOW] {
        let mut frame = [0u8; WINDOW];
        frame.copy_from_slice(&self.buf[..WINDOW]);
        frame
    }

    /// Frames left to show, counting the current one.
    pub fn steps_remaining(&self) -> usize {
        self.remaining
    }

    /// Shifts the window left by one position, dropping the leading element
    /// and feeding a blank in at the tail. Returns whether another frame
    /// remains to be shown.
    pub fn advance(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        self.buf.rotate_left(1);
        if let Some(last) = self.buf.last_mut() {
            *last = 0;
        }
        self.remaining > 0
    }
}
