#![no_main]

use libfuzzer_sys::fuzz_target;
use simpleicon::icon_decode;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // The decoder should never panic, regardless of input
    if let Ok(icon) = icon_decode(text) {
        assert_eq!(icon.pixels().len(), icon.width() * icon.height());
        assert_eq!(icon.rows().len(), icon.height());
    }
});
