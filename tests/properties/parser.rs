//! Property tests for line parsing and clamping.

use proptest::prelude::*;

use stardata::{abc, format_abc, format_xyz, parse_line, xyz, ParseError};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|n| n.to_string()),
        (-1.0e6f64..1.0e6).prop_map(|x| x.to_string()),
        "[A-Za-z.+-]{1,6}",
    ]
}

fn valid_line() -> impl Strategy<Value = String> {
    (
        (-100i32..100, -100i32..100, -100.0f64..100.0),
        (-1000i32..1000, -100i32..100, -100.0f64..100.0),
        -100.0f64..100.0,
        proptest::option::of(-100.0f64..100.0),
        proptest::option::of("[A-Za-z][A-Za-z0-9_-]{0,11}"),
    )
        .prop_map(|((h, m, s), (d, dm, ds), dist, radius, name)| {
            let mut line = format!("{h} {m} {s} {d} {dm} {ds} {dist}");
            if let Some(r) = radius {
                line.push_str(&format!(" {r}"));
                if let Some(n) = name {
                    line.push_str(&format!(" {n}"));
                }
            }
            line
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_line` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(line in "(?s).{0,200}") {
        let _ = parse_line(&line);
    }

    /// PROPERTY: arbitrary token mixes either fail cleanly or yield in-range entries.
    #[test]
    fn property_token_soup_is_in_range_or_rejected(
        tokens in proptest::collection::vec(token(), 0..12)
    ) {
        match parse_line(&tokens.join(" ")) {
            Ok(entry) => {
                prop_assert!((0..=23).contains(&entry.hours_ra()));
                prop_assert!((0.0..=40.0).contains(&entry.distance()));
                prop_assert!((0.0..=30.0).contains(&entry.radius()));
            }
            Err(ParseError::TooFewFields { found, .. }) => prop_assert!(found < 7),
            Err(ParseError::InvalidNumber { .. }) => prop_assert!(tokens.len() >= 7),
        }
    }

    /// PROPERTY: every field of a parsed entry lies within its range.
    #[test]
    fn property_valid_lines_are_clamped(line in valid_line()) {
        let entry = parse_line(&line).expect("generated line should parse");

        prop_assert!((0..=23).contains(&entry.hours_ra()));
        prop_assert!((0..=59).contains(&entry.minutes_ra()));
        prop_assert!((0.0..=59.9999).contains(&entry.seconds_ra()));
        prop_assert!((-360..=360).contains(&entry.degrees_dec()));
        prop_assert!((0..=59).contains(&entry.minutes_dec()));
        prop_assert!((0.0..=59.9999).contains(&entry.seconds_dec()));
        prop_assert!((0.0..=40.0).contains(&entry.distance()));
        prop_assert!((0.0..=30.0).contains(&entry.radius()));
    }

    /// PROPERTY: fewer than seven tokens never parse.
    #[test]
    fn property_short_lines_are_rejected(
        tokens in proptest::collection::vec("[0-9]{1,3}", 0..7)
    ) {
        let is_too_few = matches!(
            parse_line(&tokens.join(" ")),
            Err(ParseError::TooFewFields { .. })
        );
        prop_assert!(is_too_few);
    }

    /// PROPERTY: the canonical line parses back to the same entry.
    #[test]
    fn property_canonical_line_round_trips(line in valid_line()) {
        let entry = parse_line(&line).unwrap();
        let again = parse_line(&entry.to_string()).unwrap();

        prop_assert_eq!(again.hours_ra(), entry.hours_ra());
        prop_assert_eq!(again.minutes_ra(), entry.minutes_ra());
        prop_assert!((again.seconds_ra() - entry.seconds_ra()).abs() < 1e-4);
        prop_assert_eq!(again.degrees_dec(), entry.degrees_dec());
        prop_assert_eq!(again.minutes_dec(), entry.minutes_dec());
        prop_assert_eq!(again.seconds_dec(), entry.seconds_dec());
        prop_assert_eq!(again.distance(), entry.distance());
        prop_assert_eq!(again.radius(), entry.radius());
        prop_assert_eq!(again.name(), entry.name());
    }

    /// PROPERTY: zero degrees of declination always gives b == 0.
    #[test]
    fn property_zero_degrees_collapses_b(m in 0i32..60, s in 0.0f64..60.0) {
        let entry = parse_line(&format!("1 2 3 0 {m} {s} 5")).unwrap();
        prop_assert_eq!(abc(&entry).b, 0.0);
    }

    /// PROPERTY: declination minutes never move b.
    #[test]
    fn property_b_ignores_declination_minutes(
        d in -360i32..=360,
        m in 0i32..60,
        s in 0.0f64..60.0,
    ) {
        let without = parse_line(&format!("1 2 3 {d} 0 {s} 5")).unwrap();
        let with = parse_line(&format!("1 2 3 {d} {m} {s} 5")).unwrap();
        prop_assert_eq!(abc(&with).b, abc(&without).b);
    }

    /// PROPERTY: the Cartesian position stays within the clamped distance.
    #[test]
    fn property_xyz_norm_matches_distance(line in valid_line()) {
        let entry = parse_line(&line).unwrap();
        let row = xyz(&entry);
        let norm = (row.x * row.x + row.y * row.y + row.z * row.z).sqrt();
        prop_assert!((norm - entry.distance()).abs() < 0.01);
    }

    /// PROPERTY: formatting the same entries twice yields the same text.
    #[test]
    fn property_tables_are_pure(lines in proptest::collection::vec(valid_line(), 0..6)) {
        let entries: Vec<_> = lines.iter().map(|l| parse_line(l).unwrap()).collect();
        prop_assert_eq!(format_abc(&entries), format_abc(&entries));
        prop_assert_eq!(format_xyz(&entries), format_xyz(&entries));
        prop_assert_eq!(format_abc(&entries).lines().count(), entries.len() + 1);
    }
}
