use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("failed to run `{command}`: {source}")]
    Reader {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("no content in battery status output")]
    NoContent,
    #[error("cannot parse charging state from battery status output")]
    MissingChargeState,
}
