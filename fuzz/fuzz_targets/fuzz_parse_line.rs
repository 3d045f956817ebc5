#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    if let Ok(entry) = stardata::parse_line(&line) {
        // Anything that parses must stay in range and survive its own line format
        assert!((0..=23).contains(&entry.hours_ra()));
        assert!((0.0..=40.0).contains(&entry.distance()));
        let again = stardata::parse_line(&entry.to_string()).expect("canonical line must parse");
        assert_eq!(again.degrees_dec(), entry.degrees_dec());
        let _ = stardata::abc(&entry);
        let _ = stardata::xyz(&entry);
    }
});
