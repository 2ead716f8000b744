#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Scanning arbitrary text must never panic, and the raw id count must
    // bound the grouped anchor count
    let entry = bapi::manifest::scan::scan_text("fuzz.html", data);
    let grouped: usize = entry.anchors.values().map(Vec::len).sum();
    assert!(entry.id_count >= grouped);
});
