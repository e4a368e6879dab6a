//! Driver for the Maxim MAX7219 8-digit 7-segment display controller,
//! built on [`embedded-hal`](https://docs.rs/embedded-hal/1.0) traits.

#![no_std]

mod constants;
mod encode;
mod scroll;

pub use constants::*;
pub use encode::{encode_text, parse_decimal, DecimalError};
pub use scroll::{Scroller, WINDOW};

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use heapless::{String, Vec};
use num_traits::ToPrimitive;

/// Decode mode for the digit registers: raw segment patterns or code-B
/// (BCD plus minus/error/blank) decoding, always for all 8 digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecodeMode {
    NoDecode = register::decode_mode::NO_DECODE,
    CodeB = register::decode_mode::DECODE_ALL,
}

impl DecodeMode {
    /// The digit value that leaves all segments off in this mode.
    fn blank(self) -> u8 {
        match self {
            DecodeMode::NoDecode => 0x00,
            DecodeMode::CodeB => code_b::BLANK,
        }
    }
}

pub struct Max7219<SPI> {
    spi: SPI,
}

impl<SPI, E> Max7219<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    /// Wraps an SPI device whose chip select frames each 2-byte register
    /// transaction. Call [`init`](Self::init) before displaying anything.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    pub fn destroy(self) -> SPI {
        self.spi
    }

    /// Bring-up sequence: test mode off, all 8 digits scanned, code-B
    /// decode, default brightness, normal operation.
    pub fn init(&mut self) -> Result<(), Max7219Error<E>> {
        self.write_register(register::DISPLAY_TEST, register::display_test_mode::NORMAL)?;
        self.write_register(register::SCAN_LIMIT, MAX_DIGITS - 1)?;
        self.set_decode_mode(DecodeMode::CodeB)?;
        self.set_intensity(DEFAULT_INTENSITY)?;
        self.write_register(register::SHUTDOWN, register::shutdown_mode::NORMAL_OPERATION)?;
        Ok(())
    }

    /// Decode mode lives in the chip, not the driver, so it is re-asserted
    /// before every write that depends on it rather than cached here.
    pub fn set_decode_mode(&mut self, mode: DecodeMode) -> Result<(), Max7219Error<E>> {
        self.write_register(register::DECODE_MODE, mode as u8)
    }

    /// Blanks all 8 digits and leaves the chip in `mode`. The display is
    /// shut down around the rewrite so the mode switch never flashes
    /// stale segment data.
    pub fn clear(&mut self, mode: DecodeMode) -> Result<(), Max7219Error<E>> {
        self.write_register(register::SHUTDOWN, register::shutdown_mode::SHUTDOWN)?;
        self.set_decode_mode(mode)?;
        for digit in 0..MAX_DIGITS {
            self.write_digit(digit, mode.blank())?;
        }
        self.write_register(register::SHUTDOWN, register::shutdown_mode::NORMAL_OPERATION)?;
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max7219Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max7219Error::InvalidValue);
        }
        self.write_register(register::INTENSITY, intensity)
    }

    pub fn set_display_test(&mut self, on: bool) -> Result<(), Max7219Error<E>> {
        let value = if on {
            register::display_test_mode::TEST
        } else {
            register::display_test_mode::NORMAL
        };
        self.write_register(register::DISPLAY_TEST, value)
    }

    /// Lights every segment for `hold_ms`, then returns to normal operation.
    pub fn lamp_test<D: DelayNs>(
        &mut self,
        delay: &mut D,
        hold_ms: u32,
    ) -> Result<(), Max7219Error<E>> {
        self.set_display_test(true)?;
        delay.delay_ms(hold_ms);
        self.set_display_test(false)
    }

    /// Writes one raw segment byte to digit position 0..=7, switching the
    /// chip to raw mode first.
    pub fn set_digit_data(&mut self, digit: u8, value: u8) -> Result<(), Max7219Error<E>> {
        if digit >= MAX_DIGITS {
            return Err(Max7219Error::InvalidLocation(digit));
        }
        self.set_decode_mode(DecodeMode::NoDecode)?;
        self.write_digit(digit, value)
    }

    /// Displays a signed integer right-aligned in code-B mode, with a
    /// minus sign ahead of the leading digit for negative values. Values
    /// that need more than 8 positions (sign included) leave the error
    /// code on digit 0 and fail.
    pub fn display_value<T>(&mut self, value: T) -> Result<(), Max7219Error<E>>
    where
        T: ToPrimitive,
    {
        self.clear(DecodeMode::CodeB)?;
        let Some(v) = value.to_i64() else {
            self.write_digit(0, code_b::ERROR)?;
            return Err(Max7219Error::InvalidValue);
        };
        self.display_decimal(v.unsigned_abs(), None, v < 0)
    }

    /// Displays a float in code-B mode with the decimal point merged onto
    /// the digit left of the fraction. The value's canonical decimal
    /// rendering, point removed, must fit the 8 positions; anything that
    /// does not leaves the error code on digit 0 and fails.
    pub fn display_number(&mut self, value: f64) -> Result<(), Max7219Error<E>> {
        self.clear(DecodeMode::CodeB)?;
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        let mut repr: String<32> = String::new();
        if write!(repr, "{}", magnitude).is_err() {
            // more fraction digits than the display could ever hold
            self.write_digit(0, code_b::ERROR)?;
            return Err(Max7219Error::InvalidValue);
        }
        match parse_decimal(&repr) {
            Ok((mag, dp)) => self.display_decimal(mag, dp, negative),
            Err(e) => {
                self.write_digit(0, code_b::ERROR)?;
                Err(match e {
                    // a point was present but the remainder was not a
                    // number, e.g. scientific notation
                    DecimalError::NonNumeric if repr.contains('.') => Max7219Error::NonNumeric,
                    _ => Max7219Error::InvalidValue,
                })
            }
        }
    }

    /// Displays an unsigned value in hex, right-aligned in raw mode.
    /// Values outside 0..=0xFFFF_FFFF show "Err" on digits 2..0 and fail.
    pub fn display_hex<T>(&mut self, value: T) -> Result<(), Max7219Error<E>>
    where
        T: ToPrimitive,
    {
        self.clear(DecodeMode::NoDecode)?;
        let Some(mut v) = value.to_u32() else {
            for (i, segments) in ERR_GLYPHS.iter().enumerate() {
                self.write_digit(2 - i as u8, *segments)?;
            }
            return Err(Max7219Error::InvalidValue);
        };
        for digit in 0..MAX_DIGITS {
            self.write_digit(digit, HEX_MAP[(v % 16) as usize])?;
            v /= 16;
            if v == 0 {
                break;
            }
        }
        Ok(())
    }

    /// Writes an encoded message with its first character on digit
    /// position `start_digit` (1..=8) and the rest on descending
    /// positions. Characters past `start_digit` are silently dropped;
    /// `clear` blanks the whole display first, otherwise only raw mode is
    /// asserted and untouched digits keep their content.
    pub fn display_text(
        &mut self,
        message: &str,
        start_digit: u8,
        clear: bool,
    ) -> Result<(), Max7219Error<E>> {
        if start_digit < 1 || start_digit > MAX_DIGITS {
            return Err(Max7219Error::InvalidLocation(start_digit));
        }
        if clear {
            self.clear(DecodeMode::NoDecode)?;
        } else {
            self.set_decode_mode(DecodeMode::NoDecode)?;
        }
        let buf: Vec<u8, { MAX_DIGITS as usize }> = encode_text(message);
        let limit = (start_digit as usize).min(buf.len());
        for (i, segments) in buf.iter().take(limit).enumerate() {
            self.write_digit(start_digit - 1 - i as u8, *segments)?;
        }
        Ok(())
    }

    /// Scrolls `lead_in + message + lead_out` across the display, one
    /// position per `step_delay_ms`. The encoded text must fill at least
    /// one full window and at most `N` bytes; otherwise nothing is
    /// written. Blocks for the whole animation; drive a [`Scroller`]
    /// directly to interleave cancellation checks between frames.
    pub fn scroll_text<const N: usize, D: DelayNs>(
        &mut self,
        message: &str,
        lead_in: &str,
        lead_out: &str,
        step_delay_ms: u32,
        delay: &mut D,
    ) -> Result<(), Max7219Error<E>> {
        let mut scroller =
            Scroller::<N>::new(message, lead_in, lead_out).ok_or(Max7219Error::InvalidValue)?;
        self.set_decode_mode(DecodeMode::NoDecode)?;
        loop {
            let frame = scroller.frame();
            for (i, segments) in frame.iter().enumerate() {
                self.write_digit(MAX_DIGITS - 1 - i as u8, *segments)?;
            }
            delay.delay_ms(step_delay_ms);
            if !scroller.advance() {
                return Ok(());
            }
        }
    }

    /// Emits `magnitude` as code-B digits from digit 0 upward, ORing the
    /// decimal point into position `dp` and following the last digit with
    /// a minus when `negative`. Rejects anything needing more than the 8
    /// available positions before touching the digit registers.
    fn display_decimal(
        &mut self,
        magnitude: u64,
        dp: Option<u8>,
        negative: bool,
    ) -> Result<(), Max7219Error<E>> {
        let places = decimal_digits(magnitude).max(dp.map_or(1, |d| d + 1));
        if places + negative as u8 > MAX_DIGITS {
            self.write_digit(0, code_b::ERROR)?;
            return Err(Max7219Error::InvalidValue);
        }
        let mut value = magnitude;
        for i in 0..MAX_DIGITS {
            let mut code = (value % 10) as u8;
            if dp == Some(i) {
                code |= DOT_MASK;
            }
            self.write_digit(i, code)?;
            value /= 10;
            if value == 0 && dp.map_or(true, |d| i >= d) {
                if negative {
                    self.write_digit(i + 1, code_b::MINUS)?;
                }
                break;
            }
        }
        Ok(())
    }

    /// `digit` is the 0-based physical position, 0 = rightmost.
    fn write_digit(&mut self, digit: u8, value: u8) -> Result<(), Max7219Error<E>> {
        self.write_register(register::DIGIT_OFFSET + digit, value)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Max7219Error<E>> {
        self.spi.write(&[register, value])?;
        Ok(())
    }
}

fn decimal_digits(mut value: u64) -> u8 {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<E> {
    SpiError(E),
    InvalidValue,
    InvalidLocation(u8),
    NonNumeric,
}

impl<E> From<E> for Max7219Error<E> {
    fn from(error: E) -> Self {
        Max7219Error::SpiError(error)
    }
}
