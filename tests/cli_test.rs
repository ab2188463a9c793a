use std::process::Command;

fn calculator_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_web_calculator"));
    cmd.env("RUST_LOG", "web_calculator=info");
    cmd
}

#[test]
fn test_eval_prints_only_the_result_on_stdout() {
    let output = calculator_bin()
        .args(["eval", "add", "5", "7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "12\n");
    // The operation is still logged, just not on stdout
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Addition performed"));
}

#[test]
fn test_eval_divide_keeps_float_and_accepts_negatives() {
    let output = calculator_bin()
        .args(["eval", "divide", "-9", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "-4.5\n");
}

#[test]
fn test_eval_division_by_zero_fails() {
    let output = calculator_bin()
        .args(["eval", "divide", "10", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot divide by zero."));
}
