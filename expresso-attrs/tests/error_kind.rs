use expresso_attrs::ErrorKind;
use expresso_error::Error;

/// A variable name was not made of letters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid variable `{}`", self.name),
    labels = ["this variable", "and this one"],
    help = "variables can only contain the letters `a` to `z` and `A` to `Z`",
)]
pub struct BadName {
    pub name: String,
}

/// An error with no labels or help.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
pub struct Bare;

/// Renders the error report to a string without ANSI escapes.
fn render(err: &Error, input: &str) -> String {
    let mut out = Vec::new();
    err.write_report("input", input, &mut out).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
}

#[test]
fn derived_report() {
    let err = Error::new(vec![0..2, 5..7], BadName { name: "x1".to_string() });
    let report = render(&err, "x1 + y2");

    assert!(report.contains("invalid variable `x1`"));
    assert!(report.contains("this variable"));
    assert!(report.contains("and this one"));
    assert!(report.contains("variables can only contain"));
}

#[test]
fn extra_labels_are_ignored() {
    let err = Error::new(vec![0..2], BadName { name: "x1".to_string() });
    let report = render(&err, "x1");

    assert!(report.contains("this variable"));
    assert!(!report.contains("and this one"));
}

#[test]
fn bare_report() {
    let err = Error::new(vec![0..1], Bare);
    assert!(render(&err, "x").contains("something went wrong"));
    assert_eq!(err.kind_as::<Bare>(), Some(&Bare));
}
