//! Property tests for the flat-file repository.

use proptest::prelude::*;

use stardata::{parse_line, EntryRepository, TextFileRepository};

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (0i32..24, 0i32..60, 0.0f64..60.0, -90i32..90, 0.0f64..40.0, "[A-Z][a-z]{0,8}")
            .prop_map(|(h, m, s, d, dist, n)| format!("{h} {m} {s} {d} 0 0 {dist} 0 {n}")),
        1 => "[0-9 ]{0,12}",
        1 => "[a-z ]{1,30}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: load returns exactly the lines that parse, in file order.
    #[test]
    fn property_load_keeps_parseable_lines_in_order(
        lines in proptest::collection::vec(line(), 0..10)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.csv");
        std::fs::write(&path, lines.join("\n")).unwrap();

        let report = TextFileRepository::new().load(&path).unwrap();

        let expected: Vec<_> = lines.iter().filter_map(|l| parse_line(l).ok()).collect();
        let blank = lines.iter().filter(|l| l.trim().is_empty()).count();
        prop_assert_eq!(&report.entries, &expected);
        prop_assert_eq!(report.skipped_count(), lines.len() - expected.len() - blank);
    }
}
