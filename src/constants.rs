pub const MAX_DIGITS: u8 = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const DEFAULT_INTENSITY: u8 = 3;
pub const DOT_MASK: u8 = 0x80; // bit 7 is the decimal point in both decode modes

/// Segment patterns for the sixteen hex digits (bit 6 = A .. bit 0 = G).
pub const HEX_MAP: [u8; 16] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B, 0x77, 0x1F, 0x4E, 0x3D, 0x4F, 0x47,
];

/// Closest 7-segment renderings for a..z; upper case shares the same glyphs.
pub const LETTERS: [u8; 26] = [
    0x77, 0x1F, 0x4E, 0x3D, 0x4F, 0x47, 0x5E, 0x37, 0x30, 0x3C, 0x2F, 0x0E, 0x54, 0x15, 0x1D, 0x67,
    0x73, 0x05, 0x5B, 0x0F, 0x3E, 0x1C, 0x2A, 0x49, 0x3B, 0x25,
];

/// "Err", written to digits 2..0 when a hex value does not fit the display.
pub const ERR_GLYPHS: [u8; 3] = [0x4F, 0x05, 0x05];

#[allow(dead_code)]
pub mod register {
    pub const NOOP: u8 = 0x00; // pass-through for cascaded chips
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw segment data for digits 7:0
        pub const DECODE_ALL: u8 = 0xFF; // code-B decode for digits 7:0
    }

    pub mod shutdown_mode {
        pub const SHUTDOWN: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_test_mode {
        pub const NORMAL: u8 = 0x00;
        pub const TEST: u8 = 0x01; // all segments on at max intensity
    }
}

/// Reserved code-B values understood by the chip when decode is enabled.
pub mod code_b {
    pub const MINUS: u8 = 0x0A;
    pub const ERROR: u8 = 0x0B;
    pub const BLANK: u8 = 0x0F;
}

/// Segment pattern for a printable character, `None` when the character has
/// no usable 7-segment rendering.
pub fn char_map(c: char) -> Option<u8> {
    let segments = match c {
        'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
        'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
        ' ' => 0x00,
        '-' => 0x01,
        '_' => 0x08,
        '=' => 0x09,
        '.' => DOT_MASK,
        '(' | '[' => 0x4E,
        ')' | ']' => 0x78,
        '\'' => 0x02,
        '"' => 0x22,
        '?' => 0x65,
        _ => return None,
    };
    Some(segments)
}

/// Segment pattern for a raw code point, for symbols without a `char_map`
/// entry. 0x01 is kept as the degree sign for legacy message strings.
pub fn symbol_map(code: u32) -> Option<u8> {
    match code {
        0x01 | 0xB0 => Some(0x63), // degree sign
        _ => None,
    }
}
