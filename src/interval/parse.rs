use log::{debug, trace};

use super::{Interval, IntervalError};
use crate::int_utils::parse_pos;

impl Interval {
    /// Parse an interval from its `chr:start-stop` form.
    ///
    /// The contig ends at the first `:` in the string, and the start coordinate ends at the
    /// first `-` anywhere in the string. The scan is not anchored to the colon, so contig names
    /// containing `-` and negative start coordinates are rejected, while a negative stop is
    /// accepted (`chr1:5--10`). Existing region strings depend on exactly this scan order.
    ///
    /// Coordinates are an optional `+` or `-` followed by ASCII digits only. Other Unicode
    /// decimal digits (`chr1:١-2`) and surrounding whitespace are rejected.
    pub fn parse(s: &str) -> Result<Self, IntervalError> {
        split_fields(s)
            .inspect(|iv| trace!("Parsed interval {iv} from {s:?}"))
            .inspect_err(|e| debug!("Interval parse failed ({e:?})"))
    }
}

fn split_fields(s: &str) -> Result<Interval, IntervalError> {
    let colon = s
        .find(':')
        .ok_or_else(|| IntervalError::MissingColon(s.to_owned()))?;
    let dash = s
        .find('-')
        .ok_or_else(|| IntervalError::MissingDash(s.to_owned()))?;
    if dash < colon {
        return Err(IntervalError::DashBeforeColon(s.to_owned()));
    }

    let coord = |t: &str| {
        parse_pos(t.as_bytes()).map_err(|source| IntervalError::InvalidCoordinate {
            input: s.to_owned(),
            source,
        })
    };
    let start = coord(&s[colon + 1..dash])?;
    let stop = coord(&s[dash + 1..])?;

    Ok(Interval::new(&s[..colon], start, stop))
}
