pub mod error;
mod int_utils;
pub mod interval;
pub mod strand;

pub use error::*;
pub use interval::{FormattedInterval, Interval, Pos, TextFormat};
pub use strand::Strand;
