use crate::level::LogLevel;
use chrono::{SecondsFormat, Utc};
use json_value::JsonValue;

const EXTRA_SEPARATOR: &str = " | Extra : ";

pub(crate) const RESET_COLOR: &str = "\x1b[0m";

/// Builds one formatted line from a request and the active template. The
/// timestamp is taken at format time, UTC with millisecond precision.
///
/// Substitution fills only the first occurrence of each placeholder; a
/// template that repeats one keeps the later copies verbatim.
pub fn format_message(
    template: &str,
    level: LogLevel,
    message: &str,
    extra: Option<&JsonValue>,
) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut formatted = template
        .replacen("{{timestamp}}", &timestamp, 1)
        .replacen("{{level}}", level.as_str(), 1)
        .replacen("{{message}}", message, 1);

    if let Some(extra) = extra {
        formatted.push_str(EXTRA_SEPARATOR);
        // pretty() is single-line, so the formatted line never embeds a
        // newline even with a structured payload attached.
        formatted.push_str(&extra.pretty());
    }

    formatted.trim().to_string()
}

/// Wraps the message in the level's ANSI color, reset at the end.
pub fn colorize(message: &str, level: LogLevel) -> String {
    format!("{}{}{}", level.color_code(), message, RESET_COLOR)
}
