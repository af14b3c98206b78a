use super::*;

#[test]
fn test_version_string_names_both_crates() {
    let output = get_version_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ago "));
    assert!(lines[1].starts_with("libago "));
}

#[test]
fn test_version_string_contains_version_number() {
    let output = get_version_string();
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
    assert!(output.contains(libago::version()));
}
