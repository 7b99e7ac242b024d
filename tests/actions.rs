use dive_action::actions::{error_command, get_input_with, input_variable};

#[test]
fn input_names_are_upper_snake_case() {
    assert_eq!(input_variable("image"), "INPUT_IMAGE");
    assert_eq!(input_variable("config file"), "INPUT_CONFIG_FILE");
}

#[test]
fn inputs_are_trimmed_and_default_to_empty() {
    let lookup = |key: &str| (key == "INPUT_IMAGE").then(|| "  alpine:3.18\n".to_string());
    assert_eq!(get_input_with("image", lookup), "alpine:3.18");
    assert_eq!(get_input_with("config", lookup), "");
}

#[test]
fn error_command_escapes_newlines_and_percent() {
    assert_eq!(error_command("50% done\r\nnext"), "::error::50%25 done%0D%0Anext");
}
