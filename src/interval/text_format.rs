use std::fmt;

use super::Interval;

const GFF_SOURCE: &str = "SpotArray";
const GFF_FEATURE: &str = "feature";
const GFF_ATTRIBUTES: &str = "probe_id=no_id;count=1";

/// Plain text layouts an [`Interval`] can be written in. All except `Region` are single
/// tab separated rows without a line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextFormat {
    /// `chr:start-stop`
    #[default]
    Region,
    /// chr, low - 1, high, `.`, `.`, strand
    Bed,
    /// chr, low - 1, high
    BedGraph,
    /// chr, `SpotArray`, `feature`, low, high, `.`, strand, `.`, fixed attributes
    Gff,
}

impl TextFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Bed => "bed",
            Self::BedGraph => "bedgraph",
            Self::Gff => "gff",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display adaptor returned by [`Interval::display_as`]
#[derive(Debug, Clone, Copy)]
pub struct FormattedInterval<'a> {
    interval: &'a Interval,
    format: TextFormat,
}

impl FormattedInterval<'_> {
    // BED style starts are 0-based. Widened so that low() == i32::MIN can be written
    #[inline]
    fn zero_based_start(&self) -> i64 {
        i64::from(self.interval.low()) - 1
    }
}

impl fmt::Display for FormattedInterval<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iv = self.interval;
        match self.format {
            TextFormat::Region => write!(f, "{iv}"),
            TextFormat::Bed => write!(
                f,
                "{}\t{}\t{}\t.\t.\t{}",
                iv.chr(),
                self.zero_based_start(),
                iv.high(),
                iv.strand()
            ),
            TextFormat::BedGraph => write!(
                f,
                "{}\t{}\t{}",
                iv.chr(),
                self.zero_based_start(),
                iv.high()
            ),
            TextFormat::Gff => write!(
                f,
                "{}\t{GFF_SOURCE}\t{GFF_FEATURE}\t{}\t{}\t.\t{}\t.\t{GFF_ATTRIBUTES}",
                iv.chr(),
                iv.low(),
                iv.high(),
                iv.strand()
            ),
        }
    }
}

impl Interval {
    /// Borrow this interval as something that writes itself in `format`, so that rows can be
    /// written straight to an output without building a `String` for each.
    #[inline]
    pub fn display_as(&self, format: TextFormat) -> FormattedInterval<'_> {
        FormattedInterval {
            interval: self,
            format,
        }
    }

    pub fn to_bed(&self) -> String {
        self.display_as(TextFormat::Bed).to_string()
    }

    pub fn to_bed_graph(&self) -> String {
        self.display_as(TextFormat::BedGraph).to_string()
    }

    pub fn to_gff(&self) -> String {
        self.display_as(TextFormat::Gff).to_string()
    }
}
