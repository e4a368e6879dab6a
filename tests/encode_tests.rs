use heapless::Vec;
use max7219::{encode_text, parse_decimal, DecimalError, Scroller};

#[test]
fn point_merges_into_the_previous_character() {
    let buf: Vec<u8, 8> = encode_text("3.14");
    assert_eq!(buf.as_slice(), &[0x79, 0x30 | 0x80, 0x33]);
}

#[test]
fn leading_point_becomes_a_lone_dot() {
    // nothing to merge into, so the point takes a blank digit of its own
    let buf: Vec<u8, 8> = encode_text(".5");
    assert_eq!(buf.as_slice(), &[0x80, 0x5B]);
}

#[test]
fn consecutive_points_stack_on_one_element() {
    let buf: Vec<u8, 8> = encode_text("1..2");
    assert_eq!(buf.as_slice(), &[0x30 | 0x80, 0x6D]);
}

#[test]
fn lookup_falls_back_from_chars_to_symbols_to_code_points() {
    let buf: Vec<u8, 8> = encode_text("Ab #\u{1}");
    assert_eq!(
        buf.as_slice(),
        &[
            0x77, // letter table, upper case
            0x1F, // letter table, lower case
            0x00, // space
            0x23, // '#' has no glyph, raw code point
            0x63, // symbol table, degree sign
        ]
    );
}

#[test]
fn plain_decimal_strings_split_at_the_point() {
    assert_eq!(parse_decimal("3.14"), Ok((314, Some(2))));
    assert_eq!(parse_decimal("120"), Ok((120, None)));
    assert_eq!(parse_decimal("0.001"), Ok((1, Some(3))));
    assert_eq!(parse_decimal("0"), Ok((0, None)));
}

#[test]
fn scientific_notation_is_not_numeric() {
    assert_eq!(parse_decimal("1.5e-7"), Err(DecimalError::NonNumeric));
    assert_eq!(parse_decimal("NaN"), Err(DecimalError::NonNumeric));
}

#[test]
fn twenty_one_digits_overflow() {
    assert_eq!(
        parse_decimal("100000000000000000000"),
        Err(DecimalError::Overflow)
    );
}

#[test]
fn scroller_rejects_less_than_one_window() {
    assert!(Scroller::<32>::new("HI", "  ", "  ").is_none());
    assert!(Scroller::<32>::new("ABCDEFG", "", "").is_none());
}

#[test]
fn scroller_rejects_messages_beyond_capacity() {
    assert!(Scroller::<8>::new("ABCDEFGHI", "", "").is_none());
}

#[test]
fn scroller_steps_through_every_window() {
    let mut scroller = Scroller::<16>::new("ABCDEFGHI", "", "").unwrap();
    assert_eq!(scroller.steps_remaining(), 2);
    assert_eq!(
        scroller.frame(),
        [0x77, 0x1F, 0x4E, 0x3D, 0x4F, 0x47, 0x5E, 0x37]
    );
    assert!(scroller.advance());
    // shifted one position, I now visible on the right
    assert_eq!(
        scroller.frame(),
        [0x1F, 0x4E, 0x3D, 0x4F, 0x47, 0x5E, 0x37, 0x30]
    );
    assert!(!scroller.advance());
    // blanks feed in from the tail once the text is exhausted
    assert_eq!(
        scroller.frame(),
        [0x4E, 0x3D, 0x4F, 0x47, 0x5E, 0x37, 0x30, 0x00]
    );
}

#[test]
fn lead_in_and_out_count_toward_the_window() {
    let scroller = Scroller::<32>::new("AB", "   ", "   ").unwrap();
    assert_eq!(scroller.steps_remaining(), 1);
    assert_eq!(
        scroller.frame(),
        [0x00, 0x00, 0x00, 0x77, 0x1F, 0x00, 0x00, 0x00]
    );
}
