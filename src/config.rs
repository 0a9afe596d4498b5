use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    pub threshold: u32,
    pub status_program: String,
    pub status_args: Vec<String>,
    pub notifier_program: String,
}

fn default_threshold() -> u32 { 35 }
fn default_status_program() -> String { "pmset".to_string() }
fn default_status_args() -> Vec<String> { vec!["-g".to_string(), "batt".to_string()] }
fn default_notifier_program() -> String { "osascript".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            status_program: default_status_program(),
            status_args: default_status_args(),
            notifier_program: default_notifier_program(),
        }
    }
}

impl Config {
    /// Builds the configuration from the program arguments, `argv[0]` excluded.
    /// Only the first argument is looked at; anything after it is ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let arg = args.into_iter().next();
        let threshold = parse_threshold(arg.as_deref());
        debug!(threshold, "using battery threshold");
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn status_command_line(&self) -> String {
        std::iter::once(self.status_program.as_str())
            .chain(self.status_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Missing, malformed, non-positive and out of range values all mean the default.
/// The whole argument must be an integer: `12abc` is malformed and is not read
/// as 12 the way `strtol`-style parsing would.
pub fn parse_threshold(arg: Option<&str>) -> u32 {
    arg.and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|&value| value > 0)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or_else(default_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_argument_uses_default() {
        assert_eq!(Config::from_args(args(&[])).threshold, 35);
    }

    #[test]
    fn test_positive_argument_is_used() {
        assert_eq!(Config::from_args(args(&["20"])).threshold, 20);
        assert_eq!(Config::from_args(args(&[" 50 "])).threshold, 50);
    }

    #[test]
    fn test_invalid_arguments_fall_back_to_default() {
        for raw in ["abc", "0", "-5", "", "12abc", "99999999999"] {
            assert_eq!(parse_threshold(Some(raw)), 35, "argument {raw:?}");
        }
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let config = Config::from_args(args(&["10", "80", "--verbose"]));
        assert_eq!(config.threshold, 10);
    }

    #[test]
    fn test_status_command_line() {
        assert_eq!(Config::default().status_command_line(), "pmset -g batt");
    }
}
