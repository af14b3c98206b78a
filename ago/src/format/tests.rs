use super::*;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

impl Formattable for TestData {
    fn format_pretty(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

fn data(name: &str, value: i32) -> TestData {
    TestData {
        name: name.to_string(),
        value,
    }
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("YAML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("Never"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::from("sometimes"), ColorChoice::Auto);
}

#[test]
fn test_color_choice_display() {
    assert_eq!(ColorChoice::Auto.to_string(), "auto");
    assert_eq!(ColorChoice::Always.to_string(), "always");
    assert_eq!(ColorChoice::Never.to_string(), "never");
}

#[test]
fn test_plain_formatter_does_not_decorate() {
    assert_eq!(PlainFormatter.highlight("3 days ago"), "3 days ago");
}

#[test]
fn test_tty_formatter_keeps_text() {
    let text = TtyFormatter.highlight("3 days ago");
    assert!(text.contains("3 days ago"));
}

#[test]
fn test_format_pretty() {
    let result = format_output(&data("test", 42), OutputFormat::Pretty);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "test: 42");
}

#[test]
fn test_format_json() {
    let result = format_output(&data("test", 42), OutputFormat::Json);
    assert!(result.is_ok());
    let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert_eq!(json["name"], "test");
    assert_eq!(json["value"], 42);
}

#[test]
fn test_format_yaml() {
    let result = format_output(&data("test", 42), OutputFormat::Yaml).unwrap();
    assert!(result.contains("name: test"));
    assert!(result.contains("value: 42"));
}

#[test]
fn test_format_vec_pretty() {
    let items = vec![data("first", 1), data("second", 2)];
    let result = format_output_vec(&items, OutputFormat::Pretty);
    assert!(result.is_ok());
    let output = result.unwrap();
    assert!(output.contains("first: 1"));
    assert!(output.contains("second: 2"));
}

#[test]
fn test_format_vec_json() {
    let items = vec![data("first", 1), data("second", 2)];
    let result = format_output_vec(&items, OutputFormat::Json);
    assert!(result.is_ok());
    let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_format_empty_vec() {
    let items: Vec<TestData> = vec![];
    let result = format_output_vec(&items, OutputFormat::Pretty);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "");
}
