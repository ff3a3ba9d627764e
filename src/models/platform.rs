//! Stock platform tabs.

use serde::{Deserialize, Serialize};

/// Target stock platform selected in the upload surface. The active
/// platform's label is recorded in each history record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockPlatform {
    #[default]
    General,
    Adobe,
    Shutterstock,
    Freepik,
    Getty,
    Istock,
    Dreamstime,
    Vecteezy,
}

impl StockPlatform {
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Adobe,
        Self::Shutterstock,
        Self::Freepik,
        Self::Getty,
        Self::Istock,
        Self::Dreamstime,
        Self::Vecteezy,
    ];

    /// Stable identifier used over the UI boundary.
    pub fn id(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Adobe => "adobe",
            Self::Shutterstock => "shutterstock",
            Self::Freepik => "freepik",
            Self::Getty => "getty",
            Self::Istock => "istock",
            Self::Dreamstime => "dreamstime",
            Self::Vecteezy => "vecteezy",
        }
    }

    /// Human-readable label shown in the tab strip and history entries.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Adobe => "Adobe Stock",
            Self::Shutterstock => "Shutterstock",
            Self::Freepik => "Freepik",
            Self::Getty => "Getty Images",
            Self::Istock => "iStock",
            Self::Dreamstime => "Dreamstime",
            Self::Vecteezy => "Vecteezy",
        }
    }
}
