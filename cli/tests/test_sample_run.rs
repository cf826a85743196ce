//! End-to-end runs of the sampler through its argument parser

use clap::Parser;
use prng_cli::{run, CliError, SampleArgs, MAX_COUNT};

fn run_with(argv: &[&str]) -> Result<String, CliError> {
    let args = SampleArgs::parse_from(std::iter::once("prng-sample").chain(argv.iter().copied()));
    let mut out = Vec::new();
    run(args, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_default_run_prints_fifty_floats_and_sizes() {
    let text = run_with(&[]).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 52);
    for line in &lines[..50] {
        let v: f32 = line.parse().unwrap();
        assert!((0.0..1.0).contains(&v), "sample {} outside [0, 1)", v);
    }
    assert_eq!(lines[50], "state bytes: 16");
    assert_eq!(lines[51], "result bytes: 8");
}

#[test]
fn test_runs_are_reproducible() {
    let a = run_with(&["--seed", "7", "--format", "f64"]).unwrap();
    let b = run_with(&["--seed", "7", "--format", "f64"]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_first_default_sample_matches_top_bits() {
    let text = run_with(&["-n", "1"]).unwrap();
    let first: f32 = text.lines().next().unwrap().parse().unwrap();
    assert_eq!(first, 15016762.0 / 16_777_216.0);
}

#[test]
fn test_json_report() {
    let text = run_with(&["--seed", "42", "-n", "2", "--format", "raw", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["format"], "raw");
    assert_eq!(value["samples"][0].as_u64(), Some(0xaf1f56fc41a4d2d2));
    assert_eq!(value["samples"][1].as_u64(), Some(0xbd496f01ee605ceb));
}

#[test]
fn test_invalid_shift_is_an_error() {
    let err = run_with(&["--shift", "64"]).unwrap_err();
    assert!(matches!(err, CliError::ShiftOutOfRange { shift: 64, .. }));
}

#[test]
fn test_unbounded_count_is_an_error_not_a_panic() {
    let count = usize::MAX.to_string();
    let err = run_with(&["-n", &count, "--format", "raw"]).unwrap_err();
    assert!(matches!(err, CliError::CountTooLarge { max: MAX_COUNT, .. }));
}

#[test]
fn test_pcg32_run_uses_shift_8_and_reports_32_bit_words() {
    let text = run_with(&["--generator", "pcg32", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["generator"], "pcg32");
    assert_eq!(value["shift"], 8);
    assert_eq!(value["result_bytes"], 4);
    assert_eq!(value["samples"].as_array().unwrap().len(), 50);
}

#[test]
fn test_chacha8_text_run_ends_with_sizes() {
    let text = run_with(&["-g", "chacha8", "-n", "5"]).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[6], "result bytes: 4");
}
