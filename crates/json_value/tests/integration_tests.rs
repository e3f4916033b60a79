#[cfg(test)]
mod tests {
    use json_value::{JsonParser, JsonValue, UNSERIALIZABLE_MARKER};

    #[test]
    fn test_single_pair() {
        let code = r#"
            {
                "name": "John Doe"
            }
        "#;

        let mut parser = JsonParser::default();
        let json_value = parser.parse(code).unwrap();

        assert_eq!(json_value["name"].as_str(), Some("John Doe"));
    }

    #[test]
    fn test_multiple_pairs_keep_document_order() {
        let code = r#"
            {
                "name": "John Doe",
                "age": 30,
                "is_student": false
            }
        "#;

        let mut parser = JsonParser::default();
        let json_value = parser.parse(code).unwrap();

        let pairs = json_value.as_object().unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "age", "is_student"]);

        assert_eq!(json_value["age"].as_number(), Some(30.0));
        assert_eq!(json_value["is_student"].as_bool(), Some(false));
    }

    #[test]
    fn test_nested_object() {
        let code = r#"
            {
                "name": "John Doe",
                "address": {
                    "street": "123 Main St",
                    "city": "Springfield"
                }
            }
        "#;

        let mut parser = JsonParser::default();
        let json_value = parser.parse(code).unwrap();

        assert_eq!(json_value["address"]["street"].as_str(), Some("123 Main St"));
        assert_eq!(json_value["address"]["city"].as_str(), Some("Springfield"));
        assert_eq!(json_value["address"]["country"], JsonValue::Null);
    }

    #[test]
    fn test_array() {
        let code = r#"
            {
                "children": [
                    "Alice",
                    "Bob"
                ]
            }
        "#;

        let mut parser = JsonParser::default();
        let json_value = parser.parse(code).unwrap();

        assert_eq!(json_value["children"][0].as_str(), Some("Alice"));
        assert_eq!(json_value["children"][1].as_str(), Some("Bob"));
        assert_eq!(json_value["children"][2], JsonValue::Null);
    }

    #[test]
    fn test_escaped_string() {
        let code = r#"{ "path": "C:\\logs", "note": "line\nbreak" }"#;

        let mut parser = JsonParser::default();
        let json_value = parser.parse(code).unwrap();

        assert_eq!(json_value["path"].as_str(), Some("C:\\logs"));
        assert_eq!(json_value["note"].as_str(), Some("line\nbreak"));
    }

    #[test]
    fn test_invalid_json() {
        let code = r#"
            {
                "name": "John Doe",
                "children": [
                    "Alice",
                    "Bob",
                ],
            }
        "#; // Extra comma after "Bob" in array, obvious error

        let mut parser = JsonParser::default();
        assert!(parser.parse(code).is_err());
    }

    #[test]
    fn pretty_is_single_line_and_ordered() {
        let value = JsonValue::Object(vec![
            ("name".to_string(), JsonValue::String("Test".to_string())),
            ("age".to_string(), JsonValue::Number(30.0)),
            (
                "tags".to_string(),
                JsonValue::Array(vec![
                    JsonValue::String("a".to_string()),
                    JsonValue::Bool(true),
                    JsonValue::Null,
                ]),
            ),
        ]);

        let rendered = value.pretty();
        assert_eq!(
            rendered,
            r#"{ "name": "Test", "age": 30, "tags": ["a", true, null] }"#
        );
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn pretty_escapes_strings() {
        let value = JsonValue::Object(vec![(
            "msg".to_string(),
            JsonValue::String("say \"hi\"\nnow".to_string()),
        )]);

        assert_eq!(value.pretty(), r#"{ "msg": "say \"hi\"\nnow" }"#);
    }

    #[test]
    fn pretty_renders_non_finite_numbers_as_null() {
        let value = JsonValue::Array(vec![
            JsonValue::Number(f64::NAN),
            JsonValue::Number(f64::INFINITY),
            JsonValue::Number(1.5),
        ]);

        assert_eq!(value.pretty(), "[null, null, 1.5]");
    }

    #[test]
    fn pretty_degrades_past_depth_cap() {
        let mut value = JsonValue::Number(1.0);
        for _ in 0..200 {
            value = JsonValue::Array(vec![value]);
        }

        assert_eq!(value.pretty(), UNSERIALIZABLE_MARKER);
    }

    #[test]
    fn pretty_empty_containers() {
        assert_eq!(JsonValue::Object(Vec::new()).pretty(), "{}");
        assert_eq!(JsonValue::Array(Vec::new()).pretty(), "[]");
    }
}
