pub mod interval_error;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod text_format;

use std::{fmt, str::FromStr};

pub use interval_error::IntervalError;
pub use text_format::{FormattedInterval, TextFormat};

use crate::strand::Strand;

/// 1-based genomic coordinate
pub type Pos = i32;

/// A contiguous span on a named contig.
///
/// Both coordinates are 1-based and inclusive. The orientation is carried by their order:
/// `start <= stop` is the Watson strand, `start > stop` the Crick strand. Nothing forces
/// `start <= stop`, and equality is orientation sensitive, so an interval and its flipped
/// counterpart compare unequal.
///
/// Contig names are opaque and compared by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    chr: String,
    start: Pos,
    stop: Pos,
}

impl<C: Into<String>> From<(C, Pos, Pos)> for Interval {
    fn from(value: (C, Pos, Pos)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl Interval {
    #[inline]
    pub fn new<C: Into<String>>(chr: C, start: Pos, stop: Pos) -> Self {
        Self {
            chr: chr.into(),
            start,
            stop,
        }
    }

    #[inline]
    pub fn chr(&self) -> &str {
        &self.chr
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> Pos {
        self.stop
    }

    #[inline]
    pub fn with_chr<C: Into<String>>(self, chr: C) -> Self {
        Self {
            chr: chr.into(),
            ..self
        }
    }

    #[inline]
    pub fn with_start(self, start: Pos) -> Self {
        Self { start, ..self }
    }

    #[inline]
    pub fn with_stop(self, stop: Pos) -> Self {
        Self { stop, ..self }
    }

    /// Same span on the opposite strand
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            start: self.stop,
            stop: self.start,
            ..self
        }
    }

    #[inline]
    pub fn low(&self) -> Pos {
        self.start.min(self.stop)
    }

    #[inline]
    pub fn high(&self) -> Pos {
        self.start.max(self.stop)
    }

    /// Number of bases covered (both ends inclusive), so never less than 1
    #[inline]
    pub fn length(&self) -> u64 {
        u64::from(self.start.abs_diff(self.stop)) + 1
    }

    /// Midpoint of start and stop, rounded towards zero.
    ///
    /// The sum is taken in i64 so this is defined for all coordinates, and the result always
    /// lies between `low()` and `high()`.
    #[inline]
    pub fn center(&self) -> Pos {
        ((i64::from(self.start) + i64::from(self.stop)) / 2) as Pos
    }

    #[inline]
    pub fn is_watson(&self) -> bool {
        self.stop >= self.start
    }

    #[inline]
    pub fn is_crick(&self) -> bool {
        !self.is_watson()
    }

    #[inline]
    pub fn strand(&self) -> Strand {
        if self.is_watson() {
            Strand::Watson
        } else {
            Strand::Crick
        }
    }

    #[inline]
    pub fn includes(&self, pos: Pos) -> bool {
        self.low() <= pos && pos <= self.high()
    }

    /// As [`includes`](Self::includes), but `chr` must also match this interval's contig
    #[inline]
    pub fn includes_on(&self, chr: &str, pos: Pos) -> bool {
        self.chr == chr && self.includes(pos)
    }
}

/// Canonical `chr:start-stop` form, which is accepted by [`Interval::parse`] when the contig
/// has no `:` or `-` and the start is not negative.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.stop)
    }
}

impl FromStr for Interval {
    type Err = IntervalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
