use serde::{Deserialize, Serialize};

/// Language choice shown in the chat header. Replies stay in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
    Ta,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Te, Language::Ta];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Te => "తెలుగు",
            Language::Ta => "தமிழ்",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Type your message in {}...", self.native_name())
    }

    pub fn next(&self) -> Language {
        let index = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
