// REPL and command-line tests
//
// The Session handler is driven with in-memory writers so the read loop's
// behaviour can be checked without a terminal.

use simplecalc::config::Config;
use simplecalc::repl::{Control, LineEvent, Session};
use tracing::Level;

fn feed(event: LineEvent) -> (Control, String, String) {
    let session = Session::new(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let control = session.handle(event, &mut out, &mut err).unwrap();
    (
        control,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn prints_result_and_continues() {
    let (control, out, err) = feed(LineEvent::Line("1 - 2 - 3".to_string()));
    assert_eq!(control, Control::Continue);
    assert_eq!(out, "2.0\n");
    assert!(err.is_empty());
}

#[test]
fn prints_infinity_for_division_by_zero() {
    let (control, out, _) = feed(LineEvent::Line("1 / 0".to_string()));
    assert_eq!(control, Control::Continue);
    assert_eq!(out, "inf\n");
}

#[test]
fn reports_error_and_continues() {
    let (control, out, err) = feed(LineEvent::Line("2 & 3".to_string()));
    assert_eq!(control, Control::Continue);
    assert!(out.is_empty());
    assert!(err.contains("Tokenization Error"));
    assert!(err.contains("at index 2"));
}

#[test]
fn empty_line_is_reported() {
    let (control, out, err) = feed(LineEvent::Line(String::new()));
    assert_eq!(control, Control::Continue);
    assert!(out.is_empty());
    assert!(err.contains("empty expression not allowed"));
}

#[test]
fn interrupt_and_eof_end_the_session() {
    let (control, out, err) = feed(LineEvent::Interrupted);
    assert_eq!(control, Control::Exit);
    assert!(out.is_empty() && err.is_empty());

    let (control, out, err) = feed(LineEvent::Eof);
    assert_eq!(control, Control::Exit);
    assert!(out.is_empty() && err.is_empty());
}

#[test]
fn session_keeps_no_state_between_lines() {
    let session = Session::new(false);
    let mut outputs = Vec::new();

    for line in ["2 + 3 * 4", "oops", "2 + 3 * 4"] {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session
            .handle(LineEvent::Line(line.to_string()), &mut out, &mut err)
            .unwrap();
        outputs.push(String::from_utf8(out).unwrap());
    }

    assert_eq!(outputs[0], "20.0\n");
    assert_eq!(outputs[1], "");
    assert_eq!(outputs[0], outputs[2]);
}

#[test]
fn config_defaults_to_repl() {
    let config = Config::from_args(["simplecalc"]).unwrap();
    assert_eq!(config.expression, None);
    assert_eq!(config.prompt, "> ");
    assert!(config.color);
    assert_eq!(config.log_level, Level::WARN);
}

#[test]
fn config_joins_expression_words() {
    let config =
        Config::from_args(["simplecalc", "-vv", "--no-color", "1", "+", "2"]).unwrap();
    assert_eq!(config.expression.as_deref(), Some("1 + 2"));
    assert!(!config.color);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn config_accepts_custom_prompt() {
    let config = Config::from_args(["simplecalc", "--prompt", "calc> "]).unwrap();
    assert_eq!(config.prompt, "calc> ");
}

#[test]
fn overlong_line_is_reported_and_session_continues() {
    let session = Session::new(false);
    let long_chain = "1".to_string() + &"+1".repeat(50_000);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let control = session
        .handle(LineEvent::Line(long_chain), &mut out, &mut err)
        .unwrap();
    assert_eq!(control, Control::Continue);
    assert!(out.is_empty());
    assert!(String::from_utf8(err).unwrap().contains("nested too deeply"));

    let (control, out, _) = feed(LineEvent::Line("1+1".to_string()));
    assert_eq!(control, Control::Continue);
    assert_eq!(out, "2.0\n");
}
