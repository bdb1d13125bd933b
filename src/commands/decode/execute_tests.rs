//! Execute tests for decode command.

#[cfg(test)]
mod tests {
    use super::super::{DecodeCmd, Target};
    use crate::config::Settings;
    use crate::decode::DecodeOptions;
    use crate::value::Value;
    use rstest::rstest;

    fn cmd(text: &str, target: Target) -> DecodeCmd {
        DecodeCmd {
            text: text.to_string(),
            target,
            named_floats: false,
            hex: false,
        }
    }

    fn named_floats() -> Settings {
        Settings {
            decode: DecodeOptions::with_named_floats(true),
            ..Settings::default()
        }
    }

    // =========================================================================
    // Core functionality tests
    // =========================================================================

    crate::execute_test! {
        test_name: test_decode_infers_list,
        cmd: cmd("[1, 5000000000, 2.5, \"x\", null]", Target::Value),
        assertions: |result| {
            assert_eq!(result.target, "value");
            assert_eq!(result.type_name, "list");
            let items = result.value.as_list().unwrap();
            assert_eq!(items[0], Value::Int(1));
            assert_eq!(items[1], Value::Long(5_000_000_000));
            assert_eq!(items[4], Value::Null);
        },
    }

    crate::execute_test! {
        test_name: test_decode_as_long,
        cmd: cmd(" 42 ", Target::Long),
        assertions: |result| {
            assert_eq!(result.value, Value::Long(42));
            assert_eq!(result.rendered, "42");
        },
    }

    crate::execute_test! {
        test_name: test_decode_as_double_named,
        cmd: cmd("-Infinity", Target::Double),
        assertions: |result| {
            assert_eq!(result.value, Value::Double(f64::NEG_INFINITY));
            assert_eq!(result.rendered, "-Infinity");
        },
    }

    crate::execute_test! {
        test_name: test_decode_vertex,
        cmd: cmd(r#"{"id": 3, "label": "City", "properties": {"name": "Oslo"}}::vertex"#, Target::Vertex),
        assertions: |result| {
            assert_eq!(result.type_name, "vertex");
            match result.value {
                Value::Vertex(v) => assert_eq!(v.label, "City"),
                other => panic!("expected vertex, got {:?}", other),
            }
        },
    }

    crate::execute_test! {
        test_name: test_decode_hex_buffer,
        cmd: DecodeCmd {
            text: "0174727565".to_string(),
            target: Target::Boolean,
            named_floats: false,
            hex: true,
        },
        assertions: |result| {
            assert_eq!(result.value, Value::Bool(true));
        },
    }

    // =========================================================================
    // Named float settings
    // =========================================================================

    crate::execute_test! {
        test_name: test_list_keeps_strings_by_default,
        cmd: cmd("[\"NaN\"]", Target::List),
        assertions: |result| {
            assert_eq!(result.value, Value::List(vec![Value::from("NaN")]));
        },
    }

    crate::execute_test! {
        test_name: test_list_promotes_with_setting,
        cmd: cmd("[\"Infinity\"]", Target::List),
        settings: named_floats(),
        assertions: |result| {
            assert_eq!(result.value, Value::List(vec![Value::Double(f64::INFINITY)]));
        },
    }

    crate::execute_test! {
        test_name: test_value_target_honours_setting,
        cmd: cmd("\"Infinity\"", Target::Value),
        settings: named_floats(),
        assertions: |result| {
            assert_eq!(result.type_name, "double");
        },
    }

    // =========================================================================
    // Error handling tests
    // =========================================================================

    crate::execute_error_test! {
        test_name: test_wrong_shape_fails,
        cmd: cmd("[1, 2]", Target::Vertex),
        contains: "invalid vertex",
    }

    crate::execute_error_test! {
        test_name: test_malformed_text_fails,
        cmd: cmd("[1, 2", Target::Value),
        contains: "invalid",
    }

    crate::execute_error_test! {
        test_name: test_bad_hex_fails,
        cmd: DecodeCmd {
            text: "xyz".to_string(),
            target: Target::Value,
            named_floats: false,
            hex: true,
        },
        contains: "Invalid hex input",
    }
}
