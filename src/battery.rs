use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Config;
use crate::error::{BatteryError, ParseFailure};
use crate::types::{BatteryStatus, ChargeState};

impl BatteryStatus {
    pub fn read_from_pmset(config: &Config) -> Result<Self, BatteryError> {
        let blob = read_status_blob(config)?;
        debug!(line = %blob.trim_end(), "battery status line");
        let status = Self::parse(&blob)?;
        debug!(level = status.level, state = ?status.state, "parsed battery status");
        Ok(status)
    }

    /// Parses a line shaped like `87%; discharging;`.
    ///
    /// Leading spaces and line breaks are skipped. A missing percentage reads
    /// as level 0, and the state keyword runs up to the first `;` or the end of
    /// input. Only empty input and input without any alphanumeric character
    /// after the digits are errors.
    pub fn parse(blob: &str) -> Result<Self, ParseFailure> {
        let bytes = blob.as_bytes();

        let mut pos = bytes
            .iter()
            .position(|&b| !matches!(b, b' ' | b'\n' | b'\r'))
            .ok_or(ParseFailure::NoContent)?;

        let digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
        let level = bytes[pos..pos + digits].iter().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        pos += digits;

        let start = bytes[pos..]
            .iter()
            .position(u8::is_ascii_alphanumeric)
            .map(|offset| pos + offset)
            .ok_or(ParseFailure::MissingChargeState)?;
        let end = bytes[start..]
            .iter()
            .position(|&b| b == b';')
            .map_or(bytes.len(), |offset| start + offset);

        Ok(Self {
            level,
            state: ChargeState::from_keyword(&blob[start..end]),
        })
    }
}

/// Runs the status command and returns the projected status line. A non-zero
/// exit or empty output is left for the parser to reject.
pub fn read_status_blob(config: &Config) -> Result<String, BatteryError> {
    let output = Command::new(&config.status_program)
        .args(&config.status_args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| BatteryError::Reader {
            command: config.status_command_line(),
            source,
        })?;

    if !output.status.success() {
        debug!(status = %output.status, "status command exited unsuccessfully");
    }

    Ok(status_line(&String::from_utf8_lossy(&output.stdout)))
}

/// Picks the third and fourth blank-separated fields of the second line of
/// `pmset -g batt` output, e.g. ` -InternalBattery-0 (id=42)\t87%; discharging; ...`
/// becomes `87%; discharging;`.
pub fn status_line(stdout: &str) -> String {
    let Some(line) = stdout.lines().nth(1) else {
        return String::new();
    };
    let mut fields = line.split([' ', '\t']).filter(|field| !field.is_empty());
    let third = fields.nth(2).unwrap_or("");
    let fourth = fields.next().unwrap_or("");
    format!("{third} {fourth}\n")
}
