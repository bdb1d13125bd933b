//! CLI parsing tests for path command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "path",
        test_name: test_requires_text,
        required_arg: "<TEXT>",
    }

    crate::cli_defaults_test! {
        command: "path",
        variant: Path,
        required_args: ["-"],
        defaults: {
            text: "-",
            hex: false,
        },
    }

    crate::cli_option_test! {
        command: "path",
        variant: Path,
        test_name: test_with_hex,
        args: ["--hex", "01"],
        field: hex,
        expected: true,
    }

    crate::cli_error_test! {
        command: "path",
        test_name: test_named_floats_not_accepted,
        args: ["--named-floats", "[]"],
    }
}
