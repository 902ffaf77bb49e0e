//! Recognizers for the leaves of the grammar: numeric literals (`L`) and the variable (`V`).

use crate::tokenizer::{tokenize, TokenKind};
use log::trace;

/// Returns true for the characters that may surround a numeric literal: ASCII control
/// characters and the space.
fn is_padding(c: char) -> bool {
    c <= ' '
}

/// Removes a trailing `f`, `F`, `d`, or `D` type suffix from a numeric literal.
fn strip_suffix(lexeme: &str) -> &str {
    lexeme.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(lexeme)
}

/// Computes the value of a decimal floating-point literal.
fn decimal_value(lexeme: &str) -> Option<f64> {
    strip_suffix(lexeme).parse::<f64>().ok()
}

/// Rounds `digits * 2^exp` to the nearest `f64`, with ties going to the even neighbour.
///
/// `sticky` is set if nonzero digits below `digits` were dropped, so that a value just above a
/// halfway point is not mistaken for the halfway point itself. Values too large for an `f64`
/// become infinite.
fn round_to_f64(digits: u64, exp: i64, sticky: bool) -> f64 {
    if digits == 0 {
        return 0.0;
    }

    let shift = digits.leading_zeros();
    let digits = digits << shift;

    // the value lies in [2^top, 2^(top + 1))
    let top = exp.saturating_add(63 - i64::from(shift));
    if top > 1023 {
        return f64::INFINITY;
    }

    // significant bits available at this magnitude; subnormals have fewer than 53
    let precision = if top >= -1022 { 53 } else { top + 1075 };
    if precision < 0 {
        // below half of the smallest subnormal
        return 0.0;
    }

    let dropped = 64 - precision as u32;
    let (mut kept, rest) = if dropped == 64 {
        (0, digits)
    } else {
        (digits >> dropped, digits & ((1 << dropped) - 1))
    };
    let half = 1u64 << (dropped - 1);
    if rest > half || (rest == half && (sticky || kept & 1 == 1)) {
        kept += 1;
    }

    if top < -1022 {
        // a carry into bit 52 gives the smallest normal number, which has the same encoding
        return f64::from_bits(kept);
    }

    // `kept` is in [2^52, 2^53]; its top bit is implicit in the encoding
    let (kept, top) = if kept >> 53 == 1 { (kept >> 1, top + 1) } else { (kept, top) };
    if top > 1023 {
        return f64::INFINITY;
    }
    f64::from_bits(((top + 1023) as u64) << 52 | (kept & ((1 << 52) - 1)))
}

/// Computes the value of a hexadecimal floating-point literal, such as `-0x1.8p3`.
///
/// The lexeme must already match [`TokenKind::HexFloat`]. The result is correctly rounded, even
/// for subnormal values and for mantissas longer than an `f64` can hold.
fn hex_value(lexeme: &str) -> Option<f64> {
    let lexeme = strip_suffix(lexeme);
    let (negative, unsigned) = match lexeme.as_bytes().first()? {
        b'-' => (true, &lexeme[1..]),
        b'+' => (false, &lexeme[1..]),
        _ => (false, lexeme),
    };

    // skip the `0x` prefix
    let (mantissa, exponent) = unsigned.get(2..)?.split_once(['p', 'P'])?;
    let mut exp = exponent.parse::<i64>().ok()?;
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // value = (digits + dropped digits) * 2^exp
    let mut digits = 0u64;
    let mut sticky = false;
    let all_digits = int_digits
        .chars()
        .map(|c| (c, false))
        .chain(frac_digits.chars().map(|c| (c, true)));
    for (c, fractional) in all_digits {
        let digit = u64::from(c.to_digit(16)?);
        if digits >> 60 == 0 {
            digits = digits << 4 | digit;
            if fractional {
                exp = exp.saturating_sub(4);
            }
        } else {
            sticky |= digit != 0;
            if !fractional {
                exp = exp.saturating_add(4);
            }
        }
    }

    let value = round_to_f64(digits, exp, sticky);
    Some(if negative { -value } else { value })
}

/// Parses the `L` production: the whole string, ignoring surrounding padding, must be a single
/// decimal or hexadecimal floating-point literal.
///
/// Literals that overflow to an infinite value are rejected, as are the words `NaN` and
/// `Infinity`.
pub fn parse_literal(s: &str) -> Option<f64> {
    let trimmed = s.trim_matches(is_padding);
    let mut lexer = tokenize(trimmed);
    let kind = lexer.next()?.ok()?;

    if lexer.span() != (0..trimmed.len()) {
        return None;
    }

    let value = match kind {
        TokenKind::Float => decimal_value(lexer.slice()),
        TokenKind::HexFloat => hex_value(lexer.slice()),
        _ => None,
    }?;

    if value.is_finite() {
        Some(value)
    } else {
        trace!("rejecting non-finite literal `{}`", trimmed);
        None
    }
}

/// Parses the `V` production: the string, ignoring surrounding whitespace, must be exactly `x`.
pub fn parse_variable(s: &str) -> bool {
    s.trim() == "x"
}
