//! Generated-input checks of the interval invariants and of the region string format

use m_interval::{Interval, IntervalError, Pos};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Contig names that contain neither separator
fn contig() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.]{1,24}"
}

/// Coordinates biased towards the ends of the range as well as ordinary values
fn coord() -> impl Strategy<Value = Pos> {
    prop_oneof![
        any::<Pos>(),
        Just(Pos::MIN),
        Just(Pos::MIN + 1),
        Just(-1),
        Just(0),
        Just(1),
        Just(Pos::MAX - 1),
        Just(Pos::MAX),
    ]
}

fn interval() -> impl Strategy<Value = Interval> {
    (contig(), coord(), coord()).prop_map(|(c, a, b)| Interval::new(c, a, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn parse_fields_match_new(c in contig(), a in 0..=Pos::MAX, b in coord()) {
        let s = format!("{c}:{a}-{b}");
        prop_assert_eq!(Interval::parse(&s), Ok(Interval::new(c, a, b)));
    }

    #[test]
    fn negative_start_is_rejected(c in contig(), a in Pos::MIN..0, b in coord()) {
        let s = format!("{c}:{a}-{b}");
        let is_coord_err = matches!(
            Interval::parse(&s),
            Err(IntervalError::InvalidCoordinate { .. })
        );
        prop_assert!(is_coord_err, "Parsed {}", s);
    }

    #[test]
    fn low_high_and_length(iv in interval()) {
        prop_assert!(iv.low() <= iv.high());
        let span = (i64::from(iv.stop()) - i64::from(iv.start())).unsigned_abs();
        prop_assert_eq!(iv.length(), span + 1);
        prop_assert!(iv.length() >= 1);
    }

    #[test]
    fn strand_is_exclusive(iv in interval()) {
        prop_assert_eq!(iv.is_watson(), !iv.is_crick());
        prop_assert_eq!(iv.strand().is_watson(), iv.is_watson());
    }

    #[test]
    fn center_between_ends(iv in interval()) {
        let c = iv.center();
        prop_assert!(iv.low() <= c && c <= iv.high());
        prop_assert_eq!(i64::from(c), (i64::from(iv.start()) + i64::from(iv.stop())) / 2);
    }

    #[test]
    fn region_string_round_trip(c in contig(), a in 0..=Pos::MAX, b in coord()) {
        let iv = Interval::new(c, a, b);
        prop_assert_eq!(iv.to_string().parse::<Interval>(), Ok(iv));
    }

    #[test]
    fn flipped_keeps_span(iv in interval()) {
        let flipped = iv.clone().flipped();
        prop_assert_eq!(flipped.low(), iv.low());
        prop_assert_eq!(flipped.high(), iv.high());
        prop_assert_eq!(flipped.length(), iv.length());
        prop_assert_eq!(flipped == iv, iv.start() == iv.stop());
    }
}
