use relato_core::models::extraction::{Category, ExtractedResult, ExtractedScore, ScoreValue};
use relato_engine::validator::validate_extraction;

fn record(instrument: &str, labels: &[&str]) -> ExtractedResult {
    ExtractedResult {
        instrument: instrument.to_string(),
        category: Category::Cognitivo,
        scores: labels
            .iter()
            .map(|l| ExtractedScore {
                label: l.to_string(),
                value: ScoreValue::Number(100.0),
            })
            .collect(),
        classification: None,
        notes: None,
    }
}

#[test]
fn accepts_well_formed_records() {
    let records = vec![
        record("WISC-IV", &["QI Total", "Memória Operacional"]),
        record("RAVLT", &["A1"]),
    ];
    assert!(validate_extraction(&records));
}

#[test]
fn rejects_empty_sequence() {
    assert!(!validate_extraction(&[]));
}

#[test]
fn rejects_blank_instrument_name() {
    assert!(!validate_extraction(&[record("", &["QI Total"])]));
    assert!(!validate_extraction(&[record("   ", &["QI Total"])]));
}

#[test]
fn rejects_record_without_scores() {
    assert!(!validate_extraction(&[record("WISC-IV", &[])]));
}

#[test]
fn rejects_blank_score_label() {
    assert!(!validate_extraction(&[record("WISC-IV", &["QI Total", " "])]));
}

#[test]
fn one_bad_record_rejects_the_whole_batch() {
    let records = vec![record("WISC-IV", &["QI Total"]), record("SON-R", &[])];
    assert!(!validate_extraction(&records));
}

#[test]
fn validation_is_idempotent() {
    let records = vec![record("WISC-IV", &["QI Total"])];
    assert_eq!(validate_extraction(&records), validate_extraction(&records));
}
