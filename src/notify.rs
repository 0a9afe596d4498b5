use std::process::{Command, Stdio};

use tracing::{debug, info};

/// Shows a desktop notification. Failures are logged, never returned.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Posts notifications through AppleScript's `display notification`.
pub struct OsaScriptNotifier {
    program: String,
}

impl OsaScriptNotifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Notifier for OsaScriptNotifier {
    fn notify(&self, title: &str, body: &str) {
        let script = display_notification_script(title, body);

        match Command::new(&self.program)
            .args(["-e", &script])
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) if output.status.success() => {
                info!(title = %title, "notification sent");
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!(program = %self.program, status = %output.status, stderr = %stderr.trim(), "notifier failed");
            }
            Err(e) => {
                debug!(program = %self.program, error = %e, "failed to launch notifier");
            }
        }
    }
}

pub fn display_notification_script(title: &str, body: &str) -> String {
    format!(
        "display notification {} with title {}",
        applescript_quote(body),
        applescript_quote(title),
    )
}

/// Wraps `text` in an AppleScript string literal.
pub fn applescript_quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_only_wrapped() {
        assert_eq!(applescript_quote("Plug in your charger"), "\"Plug in your charger\"");
    }

    #[test]
    fn test_quotes_and_backslashes_are_escaped() {
        assert_eq!(applescript_quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(applescript_quote(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn test_shell_metacharacters_pass_through() {
        // No shell is involved, so these need no escaping.
        assert_eq!(applescript_quote("$(rm -rf ~); 'x' `y`"), "\"$(rm -rf ~); 'x' `y`\"");
    }

    #[test]
    fn test_script_puts_body_before_title() {
        assert_eq!(
            display_notification_script("Plug in your charger", "Your laptop battery is below 35%"),
            "display notification \"Your laptop battery is below 35%\" with title \"Plug in your charger\""
        );
    }

    #[test]
    fn test_missing_notifier_is_swallowed() {
        OsaScriptNotifier::new("battery-nag-definitely-missing-notifier").notify("title", "body");
    }
}
