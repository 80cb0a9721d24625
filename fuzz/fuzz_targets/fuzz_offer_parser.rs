#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = compareoffers::is_valid_notation(raw);
        if let Ok(offer) = compareoffers::parse_offer(raw) {
            // Anything that parses must re-parse from its canonical form
            let reparsed = compareoffers::parse_offer(&offer.to_string());
            assert_eq!(reparsed.as_ref(), Ok(&offer));
            let _ = compareoffers::calc_earnings(&offer, 38.0, 100_000);
            let _ = compareoffers::earn_out_copies(&offer, 38.0);
        }
    }
});
