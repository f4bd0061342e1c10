use neowatch_core::NeoRecord;

/// Record filters for the chat context, matching the dashboard's filter
/// choices. Thresholds line up with the risk-level boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFilter {
    All,
    /// Risk score >= 40.
    ModeratePlus,
    /// Risk score >= 60.
    HighPlus,
    HazardousOnly,
}

impl RiskFilter {
    pub fn keeps(self, record: &NeoRecord) -> bool {
        match self {
            Self::All => true,
            Self::ModeratePlus => record.risk_score >= 40.0,
            Self::HighPlus => record.risk_score >= 60.0,
            Self::HazardousOnly => record.is_potentially_hazardous,
        }
    }
}
