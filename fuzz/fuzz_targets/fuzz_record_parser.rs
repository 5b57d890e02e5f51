#![no_main]

use libfuzzer_sys::fuzz_target;
use massbank::parser::parse_record;
use massbank::serializer::serialize_record;
use massbank::validator::{run_validation_in_memory, RuleOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing and validation must never panic, whatever the input
    let Ok(record) = parse_record(text) else {
        return;
    };
    let _ = run_validation_in_memory(&record, text, &RuleOptions::default());

    // Serialized output must parse back to the same accession
    let serialized = serialize_record(&record);
    match parse_record(&serialized) {
        Ok(reparsed) => assert_eq!(reparsed.accession, record.accession),
        Err(err) => panic!("serialized record failed to parse: {}", err),
    }
});
