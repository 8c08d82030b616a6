use radix_cli::repl::run_session;
use radix_engine::ConverterConfig;

fn drive(script: &str) -> String {
    let mut out = Vec::new();
    run_session(ConverterConfig::default(), script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn commit_line_prints_all_fields() {
    let out = drive("dec 32+53\n");
    assert!(out.contains("decimal  85\n"), "got:\n{out}");
    assert!(out.contains("ascii    U\n"), "got:\n{out}");
}

#[test]
fn edit_without_commit_keeps_expression() {
    let out = drive("edit hex A+F\nshow\nhex A+F\n");
    assert!(out.contains("hex      A+F\n"), "got:\n{out}");
    assert!(out.contains("hex      19\n"), "got:\n{out}");
}

#[test]
fn errors_are_reported_and_session_continues() {
    let out = drive("bin 0102\nb64 !!!\nascii Hi\n");
    assert!(out.contains("error: Only 0, 1, and operators allowed"), "got:\n{out}");
    assert!(out.contains("error: Invalid Base64 encoding"), "got:\n{out}");
    assert!(out.contains("hex      4869\n"), "got:\n{out}");
}

#[test]
fn ascii_keeps_spaces() {
    let out = drive("ascii a b\n");
    assert!(out.contains("hex      612062\n"), "got:\n{out}");
}

#[test]
fn quit_stops_reading() {
    let out = drive("quit\ndec 5\n");
    assert!(!out.contains("decimal  5"), "got:\n{out}");
}

#[test]
fn unknown_command() {
    let out = drive("octal 7\n");
    assert!(out.contains("unknown command `octal`"), "got:\n{out}");
}
