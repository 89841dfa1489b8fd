use std::fmt;

/// Orientation of an interval. Watson (`+`) when the stop coordinate is not less than the
/// start coordinate, Crick (`-`) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strand {
    Watson,
    Crick,
}

impl Strand {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watson => "+",
            Self::Crick => "-",
        }
    }

    #[inline]
    pub fn is_watson(&self) -> bool {
        matches!(self, Self::Watson)
    }

    #[inline]
    pub fn is_crick(&self) -> bool {
        !self.is_watson()
    }

    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Watson => Self::Crick,
            Self::Crick => Self::Watson,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
