use std::process::{Command, Output};

fn gensamples(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gensamples"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run gensamples")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_samples_and_scale_factor() {
    let output = gensamples(&["4"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[..4].iter().all(|l| l.starts_with("vec3(") && l.ends_with(')')));
    assert!(lines[4].starts_with("scale factor: "));
}

#[test]
fn zero_count_fails_without_scale_factor() {
    let output = gensamples(&["0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("gensamples: division by zero"));
}

#[test]
fn invalid_count_prints_nothing_on_stdout() {
    for arg in ["x", "2.5", "-3"] {
        let output = gensamples(&[arg]);
        assert_eq!(output.status.code(), Some(2), "argument {:?}", arg);
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).starts_with("gensamples: invalid argument"));
    }
}

#[test]
fn missing_count_is_argument_error() {
    let output = gensamples(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(!stderr(&output).is_empty());
}
