//! Output of the command handlers, captured into a buffer.

use crate::cli::commands::{
    format_result, prompt_loop, run_check, run_complete, run_completions, run_json, run_man,
    write_banner, LoopEnd,
};
use clap_complete::Shell;
use oib_core::config::OibConfig;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn format_result_lines() {
    assert_eq!(format_result("12345678903", true), "OIB 12345678903: Valid");
    assert_eq!(format_result("abc", false), "OIB abc: Invalid");
}

#[test]
fn check_prints_one_line_per_argument_in_order() {
    let mut out = Vec::new();
    let args = strings(&["12345678903", "12345678901", "12345678903", "1234567890A"]);
    run_check(&mut out, &args).unwrap();
    assert_eq!(
        text(out),
        "OIB 12345678903: Valid\n\
         OIB 12345678901: Invalid\n\
         OIB 12345678903: Valid\n\
         OIB 1234567890A: Invalid\n"
    );
}

#[test]
fn json_collapses_duplicates() {
    let mut out = Vec::new();
    let args = strings(&["12345678903", "12345678901", "12345678903"]);
    run_json(&mut out, &args).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"12345678903": true, "12345678901": false})
    );
}

#[test]
fn complete_appends_check_digit() {
    let mut out = Vec::new();
    run_complete(&mut out, &strings(&["1234567890", "6943515153", "12345"])).unwrap();
    assert_eq!(
        text(out),
        "12345678903\n69435151530\nOIB base 12345: Invalid\n"
    );
}

#[test]
fn banner_runs_examples() {
    let mut out = Vec::new();
    write_banner(&OibConfig::default(), &mut out).unwrap();
    let out = text(out);
    assert!(out.contains("Usage:"));
    assert!(out.contains("Valid OIB test (12345678903): Valid"));
    assert!(out.contains("Invalid OIB test (12345678901): Invalid"));
    assert!(out.contains("Interactive mode (type 'exit' to quit):"));
}

#[test]
fn banner_without_examples() {
    let cfg = OibConfig {
        show_examples: false,
        exit_words: Vec::new(),
        ..OibConfig::default()
    };
    let mut out = Vec::new();
    write_banner(&cfg, &mut out).unwrap();
    let out = text(out);
    assert!(!out.contains("Running examples:"));
    assert!(out.contains("Interactive mode (end input to quit):"));
}

fn prompt_cfg() -> OibConfig {
    OibConfig {
        prompt: "> ".into(),
        ..OibConfig::default()
    }
}

#[tokio::test]
async fn prompt_loop_stops_on_exit_word() {
    let input: &[u8] = b"12345678903\n\n12345678901\nQuit\n69435151530\n";
    let mut out = Vec::new();
    let end = prompt_loop(&prompt_cfg(), input, &mut out).await.unwrap();
    assert_eq!(end, LoopEnd::ExitWord);
    assert_eq!(
        text(out),
        "> OIB 12345678903: Valid\n> > OIB 12345678901: Invalid\n> "
    );
}

#[tokio::test]
async fn prompt_loop_stops_at_end_of_input() {
    let input: &[u8] = b"69435151530\r\n";
    let mut out = Vec::new();
    let end = prompt_loop(&prompt_cfg(), input, &mut out).await.unwrap();
    assert_eq!(end, LoopEnd::EndOfInput);
    assert_eq!(text(out), "> OIB 69435151530: Valid\n> \n");
}

#[tokio::test]
async fn prompt_loop_does_not_trim_spaces() {
    let input: &[u8] = b" 12345678903\n exit\nq";
    let mut out = Vec::new();
    let end = prompt_loop(&prompt_cfg(), input, &mut out).await.unwrap();
    assert_eq!(end, LoopEnd::ExitWord);
    assert_eq!(
        text(out),
        "> OIB  12345678903: Invalid\n> OIB  exit: Invalid\n> "
    );
}

#[tokio::test]
async fn prompt_loop_reports_non_utf8_line_and_continues() {
    let input: &[u8] = b"\xff\xfe12345678903\n12345678903\nq\n";
    let mut out = Vec::new();
    let end = prompt_loop(&prompt_cfg(), input, &mut out).await.unwrap();
    assert_eq!(end, LoopEnd::ExitWord);
    assert_eq!(
        text(out),
        "> OIB \u{fffd}\u{fffd}12345678903: Invalid\n> OIB 12345678903: Valid\n> "
    );
}

#[test]
fn completions_and_man_render() {
    let mut out = Vec::new();
    run_completions(Shell::Bash, &mut out);
    assert!(text(out).contains("oib"));

    let mut out = Vec::new();
    run_man(&mut out).unwrap();
    assert!(text(out).contains(".TH"));
}
