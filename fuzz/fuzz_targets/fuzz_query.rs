#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Build a tiny manifest from the fuzzed text and search it with the
    // fuzzed needle; dedup and limit invariants must hold for any input
    let entries = vec![bapi::manifest::scan::scan_text("bpy.ops.mesh.html", data)];
    let indexes = bapi::manifest::indexes::build_indexes(&entries);
    let manifest = bapi::manifest::Manifest {
        doc_root: String::new(),
        pages_scanned: entries.len(),
        entries,
        indexes,
        notes: Vec::new(),
    };

    let results = bapi::query::search(&manifest, data, 10);
    assert!(results.rows.len() <= 10);
    assert!(results.total >= results.rows.len());
});
