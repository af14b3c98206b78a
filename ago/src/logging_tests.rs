use super::*;

#[test]
fn test_level_directive_per_verbosity() {
    assert_eq!(level_directive(VerbosityLevel::Normal), "warn");
    assert_eq!(level_directive(VerbosityLevel::Verbose), "info");
    assert_eq!(level_directive(VerbosityLevel::VeryVerbose), "debug");
    assert_eq!(level_directive(VerbosityLevel::Trace), "trace");
}

#[test]
fn test_verbosity_from_count() {
    assert_eq!(VerbosityLevel::from_count(0), VerbosityLevel::Normal);
    assert_eq!(VerbosityLevel::from_count(1), VerbosityLevel::Verbose);
    assert_eq!(VerbosityLevel::from_count(2), VerbosityLevel::VeryVerbose);
    assert_eq!(VerbosityLevel::from_count(3), VerbosityLevel::Trace);
    assert_eq!(VerbosityLevel::from_count(9), VerbosityLevel::Trace);
}

#[test]
fn test_init_twice_does_not_panic() {
    init(VerbosityLevel::Normal);
    init(VerbosityLevel::Trace);
}
