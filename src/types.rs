#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    Unknown,
    Discharging,
    Charging,
}

impl ChargeState {
    /// Maps the keyword reported by `pmset`. Matching is case-sensitive;
    /// anything unrecognised is `Unknown` rather than an error.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "discharging" => ChargeState::Discharging,
            "charging" => ChargeState::Charging,
            _ => ChargeState::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryStatus {
    pub level: u32,
    pub state: ChargeState,
}
