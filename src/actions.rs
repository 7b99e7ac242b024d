//! Minimal bindings to the GitHub Actions runner protocol: reading step
//! inputs from the environment and emitting workflow commands.

/// Name of the environment variable the runner uses for input `name`.
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_ascii_uppercase())
}

/// Read a step input through `lookup`. Unset inputs read as empty.
pub fn get_input_with<F>(name: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&input_variable(name)).map(|value| value.trim().to_string()).unwrap_or_default()
}

/// Read a step input from the process environment.
pub fn get_input(name: &str) -> String {
    get_input_with(name, |key| std::env::var(key).ok())
}

/// Escape a message so it survives as workflow command data.
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Format the `::error::` command that marks the step as failed.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

