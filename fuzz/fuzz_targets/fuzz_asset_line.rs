#![no_main]

use libfuzzer_sys::fuzz_target;

use assetkeep::asset_codec;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Anything the reader accepts must serialize back to a parseable line
        if let Ok(parsed) = asset_codec::parse(line) {
            let again = asset_codec::serialize(&parsed.record);
            assert!(asset_codec::parse(&again).is_ok());
        }
    }
});
