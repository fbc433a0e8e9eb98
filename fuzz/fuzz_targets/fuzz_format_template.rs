#![no_main]
use libfuzzer_sys::fuzz_target;
use tmplog::fmt::CompiledFormat;

fuzz_target!(|data: &str| {
    // Must not panic on any format string
    let format = CompiledFormat::compile(data);

    // Also exercise rendering, including the time layout
    let now = chrono::DateTime::from_timestamp(1_700_000_000, 5).map(|t| t.fixed_offset());
    let _ = format.render(data, now);
});
