#![no_main]

use libfuzzer_sys::fuzz_target;

use assetkeep::ReferenceEntry;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let entry = ReferenceEntry::parse_line(line);
        // Names never carry the separator, so the stored form reads back the same
        let again = ReferenceEntry::parse_line(&entry.to_line());
        assert_eq!(again.name, entry.name);
    }
});
