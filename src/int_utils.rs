use thiserror::Error;

use crate::Pos;

#[derive(Error, Debug, Eq, PartialEq, Clone, Copy)]
pub enum ParseINumError {
    #[error("Empty number")]
    Empty,
    #[error("Invalid digit")]
    InvalidDigit,
    #[error("Overflow")]
    Overflow,
    #[error("Trailing garbage")]
    TrailingGarbage,
}

/// Parse an optionally signed decimal number from the start of `s`, returning the value and
/// the unparsed remainder. At least one digit must follow the (optional) sign.
pub(crate) fn parse_i32(s: &[u8]) -> Result<(i32, &[u8]), ParseINumError> {
    let (s, neg) = match s.first() {
        Some(b'-') => (&s[1..], true),
        Some(b'+') => (&s[1..], false),
        _ => (s, false),
    };

    let n = s.iter().take_while(|c| c.is_ascii_digit()).count();
    if n == 0 {
        return Err(if s.is_empty() {
            ParseINumError::Empty
        } else {
            ParseINumError::InvalidDigit
        });
    }

    // Accumulate towards the sign so that i32::MIN is reachable
    let mut x: i32 = 0;
    for c in &s[..n] {
        let y = (c - b'0') as i32;
        x = x
            .checked_mul(10)
            .and_then(|x| if neg { x.checked_sub(y) } else { x.checked_add(y) })
            .ok_or(ParseINumError::Overflow)?;
    }
    Ok((x, &s[n..]))
}

/// Parse a coordinate that must occupy the whole of `s`
pub(crate) fn parse_pos(s: &[u8]) -> Result<Pos, ParseINumError> {
    match parse_i32(s)? {
        (x, &[]) => Ok(x),
        _ => Err(ParseINumError::TrailingGarbage),
    }
}
