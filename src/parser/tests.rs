use super::*;

const TST00001: &str = include_str!("../../tests/data/MSBNK-test-TST00001.txt");
const TST00002: &str = include_str!("../../tests/data/MSBNK-test-TST00002.txt");
const TST00003: &str = include_str!("../../tests/data/MSBNK-test-TST00003.txt");

#[test]
fn test_parse_minimal_record() {
    let record = parse_record("ACCESSION: TEST\n//").unwrap();
    assert_eq!(record.accession, "TEST");
    assert!(record.record_title.is_none());
    assert!(record.peak_data.peaks.is_empty());
}

#[test]
fn test_parse_full_record() {
    let record = parse_record(TST00001).unwrap();

    assert_eq!(record.accession, "MSBNK-test-TST00001");
    assert_eq!(
        record.record_title.as_deref(),
        Some("Fiscalin C; LC-ESI-ITFT; MS2; CE: 30; R=17500; [M+H]+")
    );
    assert_eq!(record.date.as_deref(), Some("2017.07.07"));
    assert_eq!(record.comments.len(), 2);
    assert_eq!(record.compound.names, vec!["Fiscalin C".to_string()]);
    assert_eq!(record.compound.links.len(), 2);
    assert_eq!(record.compound.links[1], "PUBCHEM CID:10433553");
    assert_eq!(record.analytical.mass_spectrometry.len(), 3);
    assert_eq!(record.mass_spectrometry.focused_ion.len(), 3);
    assert_eq!(record.peak_data.num_peak, Some(3));
    assert_eq!(record.peak_data.peaks.len(), 3);
    assert_eq!(record.peak_data.peaks[0].mz, 185.1073);
}

#[test]
fn test_peak_row_keeps_source_tokens() {
    let text = "ACCESSION: TEST\nPK$PEAK: m/z int. rel.int.\n  185.1073 120000 100\n//";
    let record = parse_record(text).unwrap();

    let peak = &record.peak_data.peaks[0];
    assert_eq!(peak.mz, 185.1073);
    assert_eq!(peak.intensity, 120000.0);
    assert_eq!(peak.relative_intensity, 100.0);

    let source = peak.source.as_ref().unwrap();
    assert_eq!(source.mz, "185.1073");
    assert_eq!(source.intensity, "120000");
    assert_eq!(source.relative_intensity, "100");
}

#[test]
fn test_peak_row_without_relative_intensity() {
    let text = "ACCESSION: TEST\nPK$PEAK: m/z int.\n  100.5 2000\n//";
    let record = parse_record(text).unwrap();

    let peak = &record.peak_data.peaks[0];
    assert_eq!(peak.relative_intensity, 0.0);
    assert_eq!(peak.source.as_ref().unwrap().relative_intensity, "0");
}

#[test]
fn test_unparseable_peak_rows_are_dropped() {
    let text = "ACCESSION: TEST\n\
                PK$PEAK: m/z int. rel.int.\n  \
                abc 100 10\n  \
                100.0\n  \
                101.0 xyz 5\n  \
                102.0 300 NaN\n\
                //";
    let record = parse_record(text).unwrap();

    assert_eq!(record.peak_data.peaks.len(), 1);
    assert_eq!(record.peak_data.peaks[0].mz, 102.0);
    assert_eq!(record.peak_data.peaks[0].relative_intensity, 0.0);
    assert_eq!(
        record.peak_data.peaks[0].source.as_ref().unwrap().relative_intensity,
        "NaN"
    );
}

#[test]
fn test_multiple_compound_names() {
    let record = parse_record(TST00002).unwrap();
    assert_eq!(
        record.compound.names,
        vec!["Disialoganglioside GD1a".to_string(), "another name".to_string()]
    );
    assert_eq!(record.species.scientific_name.as_deref(), Some("Bos taurus"));
    assert_eq!(record.species.links, vec!["NCBI-TAXONOMY 9913".to_string()]);
}

#[test]
fn test_annotations_and_deprecated() {
    let record = parse_record(TST00003).unwrap();

    assert_eq!(
        record.deprecated.as_deref(),
        Some("2019-11-25 Wrong MS measurement assigned")
    );
    assert_eq!(record.peak_data.annotations.len(), 3);
    assert_eq!(record.peak_data.annotations[0].mz, 59.013471921284996);
    assert_eq!(
        record.peak_data.annotation_header(),
        Some("m/z tentative_formula formula_count mass error(ppm)")
    );
    assert_eq!(
        record.peak_data.annotations[0].source.as_deref(),
        Some("59.013471921284996 C2H3O2- 1 59.0139 -7.35")
    );
}

#[test]
fn test_annotation_column_disambiguation() {
    let text = "ACCESSION: TEST\n\
                PK$ANNOTATION: m/z annotation exact_mass error(ppm)\n  \
                100.1 frag 100.0 1.5\n  \
                100.2 100.0 2.5\n  \
                100.3 frag 100.0\n  \
                100.4 frag other\n  \
                100.5 frag\n  \
                100.6\n  \
                nope frag\n\
                //";
    let record = parse_record(text).unwrap();
    let rows = &record.peak_data.annotations;
    assert_eq!(rows.len(), 6);

    assert_eq!(rows[0].label.as_deref(), Some("frag"));
    assert_eq!(rows[0].exact_mass, Some(100.0));
    assert_eq!(rows[0].error_ppm, Some(1.5));

    assert_eq!(rows[1].label, None);
    assert_eq!(rows[1].exact_mass, Some(100.0));
    assert_eq!(rows[1].error_ppm, Some(2.5));

    assert_eq!(rows[2].label.as_deref(), Some("frag"));
    assert_eq!(rows[2].exact_mass, Some(100.0));
    assert_eq!(rows[2].error_ppm, None);

    assert_eq!(rows[3].label.as_deref(), Some("frag"));
    assert_eq!(rows[3].exact_mass, None);
    assert_eq!(rows[3].error_ppm, None);

    assert_eq!(rows[4].label.as_deref(), Some("frag"));
    assert_eq!(rows[5].label, None);
}

#[test]
fn test_numeric_looking_label_is_read_as_exact_mass() {
    let text = "ACCESSION: TEST\nPK$ANNOTATION: m/z annotation exact_mass\n  100.1 1 100.0\n//";
    let record = parse_record(text).unwrap();
    let row = &record.peak_data.annotations[0];

    assert_eq!(row.label, None);
    assert_eq!(row.exact_mass, Some(1.0));
    assert_eq!(row.error_ppm, Some(100.0));
}

#[test]
fn test_colon_in_row_ends_table() {
    let text = "ACCESSION: TEST\nPK$PEAK: m/z int. rel.int.\n  100.0 10 1\n  101.0 20 2\nPK$SPLASH: x\n//";
    let record = parse_record(text).unwrap();
    assert_eq!(record.peak_data.peaks.len(), 2);
    assert_eq!(record.peak_data.splash.as_deref(), Some("x"));
}

#[test]
fn test_missing_accession() {
    let err = parse_record("RECORD_TITLE: Test\n//").unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 1);
    assert!(err.message.contains("ACCESSION"));
}

#[test]
fn test_empty_accession_value_is_missing() {
    let err = parse_record("ACCESSION:   \n//").unwrap_err();
    assert_eq!(err.message, MISSING_ACCESSION_MESSAGE);
}

#[test]
fn test_line_without_colon() {
    let err = parse_record("ACCESSION: TEST\nINVALID LINE WITHOUT COLON\n//").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 1);
    assert_eq!(err.offset, "ACCESSION: TEST\n".len());
    assert_eq!(err.message, INVALID_LINE_MESSAGE);
}

#[test]
fn test_line_without_colon_crlf() {
    let err = parse_record("ACCESSION: TEST\r\nBROKEN\r\n//").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 1);
    assert_eq!(err.offset, "ACCESSION: TEST\r\n".len());
}

#[test]
fn test_invalid_num_peak_is_positioned_at_value() {
    let err = parse_record("ACCESSION: TEST\nPK$NUM_PEAK: many\n//").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, "PK$NUM_PEAK: ".len() + 1);
    assert!(err.message.contains("PK$NUM_PEAK"));
}

#[test]
fn test_terminator_stops_scanning() {
    let record = parse_record("ACCESSION: TEST\n//\nno colon here\n").unwrap();
    assert_eq!(record.accession, "TEST");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let record = parse_record("ACCESSION: TEST\nUNKNOWN_FIELD: x\nCH$UNKNOWN: y\n//").unwrap();
    assert_eq!(record, Record::new("TEST"));
}

#[test]
fn test_single_valued_field_is_overwritten() {
    let record = parse_record("ACCESSION: A\nDATE: 1\nDATE: 2\nACCESSION: B\n//").unwrap();
    assert_eq!(record.accession, "B");
    assert_eq!(record.date.as_deref(), Some("2"));
}

#[test]
fn test_missing_terminator_is_accepted() {
    let record = parse_record("ACCESSION: TEST\nDATE: 2024.01.01\n").unwrap();
    assert_eq!(record.date.as_deref(), Some("2024.01.01"));
}

#[test]
fn test_crlf_input() {
    let text = TST00001.replace('\n', "\r\n");
    let record = parse_record(&text).unwrap();
    assert_eq!(record, parse_record(TST00001).unwrap());
}

#[test]
fn test_custom_dispatchers() {
    let parser = RecordParser::with_parsers(vec![Box::new(HeaderFieldParser)], Vec::new());
    let record = parser
        .parse("ACCESSION: TEST\nCH$NAME: ignored\nPK$PEAK: m/z int. rel.int.\n//")
        .unwrap();
    assert!(record.compound.names.is_empty());
    assert!(record.peak_data.peaks.is_empty());
}
