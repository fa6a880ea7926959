use super::*;
use pretty_assertions::assert_eq;

fn options(args: &[&str]) -> Options {
    match parse_args(args.iter().copied()) {
        Ok(Command::Run(options)) => options,
        other => panic!("{args:?}: {other:?}"),
    }
}

/// Run with captured output: (status, stdout, stderr).
fn run_args(args: &[&str]) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(&options(args), &mut out, &mut err).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_defaults() {
    let opts = options(&["1 + 2"]);
    assert_eq!(opts.syntax, Syntax::Infix);
    assert!(opts.optimize);
    assert!(!opts.quiet);
    assert_eq!(opts.source, "1 + 2");
    assert!(opts.bindings.is_empty());
}

#[test]
fn test_flags_and_bindings() {
    let opts = options(&["--rpn", "--no-opt", "--quiet", "(x) (y) +", "x=3/4", "y = -0x10"]);
    assert_eq!(opts.syntax, Syntax::Postfix);
    assert!(!opts.optimize);
    assert!(opts.quiet);
    assert_eq!(opts.bindings.get("x"), Some(&Value::fraction(3, 4).unwrap()));
    assert_eq!(opts.bindings.get("y"), Some(&Value::int(-16)));
}

#[test]
fn test_negative_expression_is_positional() {
    assert_eq!(options(&["-x", "x=2"]).source, "-x");
    assert_eq!(options(&["--", "--x"]).source, "--x");
}

#[test]
fn test_usage_errors() {
    assert_eq!(parse_args(Vec::<String>::new()), Err(UsageError::MissingExpression));
    assert_eq!(
        parse_args(["--fast", "1"]),
        Err(UsageError::UnknownOption("--fast".to_owned()))
    );
    assert_eq!(
        parse_args(["x", "x"]),
        Err(UsageError::BadBinding("x".to_owned()))
    );
    assert_eq!(
        parse_args(["x", "=1"]),
        Err(UsageError::BadBinding("=1".to_owned()))
    );
    assert_eq!(
        parse_args(["x", "x=pi"]),
        Err(UsageError::BadValue {
            name: "x".to_owned(),
            value: "pi".to_owned(),
        })
    );
    assert_eq!(parse_args(["--rpn", "--help"]), Ok(Command::Help));
}

#[test]
fn test_run_full_output() {
    let (status, out, err) = run_args(&["1 * x + 1/2", "x=1/3"]);
    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(
        out,
        "compiled:  1 (x) * 1 2 / +\noptimized: (x) 1/2 +\nresult:    5/6\n"
    );
    assert_eq!(err, "");
}

#[test]
fn test_run_quiet_no_opt() {
    let (status, out, _) = run_args(&["--quiet", "--no-opt", "--rpn", "3 4 +"]);
    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "7\n");
}

#[test]
fn test_run_eval_error() {
    let (status, out, err) = run_args(&["--quiet", "x / 0", "x=1"]);
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(out, "");
    assert_eq!(err, "error[E2004]: division by zero in QUO\n");

    let (status, _, err) = run_args(&["--quiet", "x + y", "x=1"]);
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(err, "error[E2001]: missing var y\n");
}

#[test]
fn test_run_compile_error_has_snippet() {
    let (status, out, err) = run_args(&["--rpn", "1 +"]);
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(out, "");
    assert!(err.contains("E1003"), "{err}");
    assert!(err.contains("insufficient arguments to + before position 2"), "{err}");
    assert!(err.contains("not enough operands"), "{err}");
}

#[test]
fn test_run_trailing_stack_warns() {
    let (status, out, err) = run_args(&["--rpn", "1 2 3"]);
    assert!(err.starts_with("warning[E1004]: expression ends with 3 values on stack\n"), "{err}");
    assert_eq!(out, "compiled:  1 2 3\noptimized: 1 2 3\nresult:    1\n");
    assert_eq!(status, EXIT_SUCCESS);
}

#[test]
fn test_char_offset() {
    assert_eq!(char_offset("abc", 2), 2);
    assert_eq!(char_offset("é+x", 3), 2);
    assert_eq!(char_offset("ab", 10), 2);
}
