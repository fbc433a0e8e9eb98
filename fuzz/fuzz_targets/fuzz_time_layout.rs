#![no_main]
use libfuzzer_sys::fuzz_target;
use tmplog::fmt::TimeLayout;

fuzz_target!(|data: &str| {
    let layout = TimeLayout::parse(data);
    if let Some(now) = chrono::DateTime::from_timestamp(-62_000_000_000, 999_999_999) {
        let _ = layout.format(&now.fixed_offset());
    }
});
