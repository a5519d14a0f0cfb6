//! Variant tags.

use serde::{Deserialize, Serialize};

/// Which kind of service a value is. Packages hold at most one service per kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Data,
    Voice,
    Sms,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Data, ServiceKind::Voice, ServiceKind::Sms];

    /// Name shown next to the price in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            ServiceKind::Data => "DataService",
            ServiceKind::Voice => "VoiceService",
            ServiceKind::Sms => "SmsService",
        }
    }
}

impl core::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}
