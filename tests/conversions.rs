use recase::{to_camel_case, to_dot_case, to_kebab_case, CaseError, CaseStyle, Config, Converter};
use serde_json::Value;

const SAMPLES: &[&str] = &[
    "hello world",
    "Hi there ",
    "hello@world#test",
    "  Mixed_CASE-input  with\tTabs ",
    "HTTP2 server v3",
    "42 is_the-ANSWER",
    "über cool!",
    "x",
];

#[test]
fn camel_output_has_no_separators_and_starts_lowercase() {
    for sample in SAMPLES {
        let out = to_camel_case(*sample).unwrap();
        assert!(out.chars().all(|c| c.is_ascii_alphanumeric()), "{out}");
        let first = out.chars().next().unwrap();
        assert!(!first.is_ascii_uppercase(), "{out}");
    }
}

#[test]
fn dot_case_is_idempotent() {
    for sample in SAMPLES {
        let once = to_dot_case(*sample).unwrap();
        assert_eq!(to_dot_case(once.as_str()).unwrap(), once);
    }
}

#[test]
fn kebab_case_is_idempotent() {
    for sample in SAMPLES {
        let once = to_kebab_case(*sample);
        assert_eq!(to_kebab_case(once.as_str()), once);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(to_camel_case("hello world").unwrap(), "helloWorld");
    assert_eq!(to_camel_case("hello-world").unwrap(), "helloWorld");
    assert_eq!(to_camel_case("hello@world#test").unwrap(), "helloWorldTest");
    assert_eq!(to_dot_case("hello world-test_case").unwrap(), "hello.world.test.case");
    assert_eq!(to_kebab_case(""), "");
    assert!(matches!(to_camel_case(&Value::Null), Err(CaseError::InvalidInput(_))));
    assert_eq!(to_camel_case("@@@"), Err(CaseError::NoAlphanumericContent));
}

#[test]
fn styles_agree_on_words() {
    let input = "Parse JSON_payload-fast";
    assert_eq!(to_camel_case(input).unwrap(), "parseJsonPayloadFast");
    assert_eq!(to_kebab_case(input), "parse-json-payload-fast");
    assert_eq!(to_dot_case(input).unwrap(), "parse.json.payload.fast");
}

#[test]
fn configured_converter() {
    let config = Config::from_toml_str(
        r#"
        strictness = "lenient"
        symbols = "strip"
        "#,
    )
    .unwrap();
    let converter = Converter::from_config(&config);

    assert_eq!(converter.convert("don't stop", CaseStyle::Camel).unwrap(), "dontStop");
    assert_eq!(converter.convert("!!!", CaseStyle::Dot).unwrap(), "");
    assert_eq!(config.repository.owner, "Wilcolab");
}
