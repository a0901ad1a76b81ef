use serde::{Deserialize, Serialize};
use std::fmt;

/// Store(s) the app ships to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Both,
}

impl Platform {
    pub const fn ordered() -> [Self; 3] {
        [Self::Ios, Self::Android, Self::Both]
    }

    pub const fn targets_ios(self) -> bool {
        matches!(self, Self::Ios | Self::Both)
    }

    pub const fn targets_android(self) -> bool {
        matches!(self, Self::Android | Self::Both)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ios => "iOS only",
            Self::Android => "Android only",
            Self::Both => "Both iOS & Android",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Revenue model declared for the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Monetization {
    Free,
    Paid,
    Iap,
    Sub,
}

impl Monetization {
    pub const fn ordered() -> [Self; 4] {
        [Self::Free, Self::Paid, Self::Iap, Self::Sub]
    }

    /// In-app purchases or subscriptions, both billed through the store.
    pub const fn sells_in_app(self) -> bool {
        matches!(self, Self::Iap | Self::Sub)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free - No monetization",
            Self::Paid => "Paid - Upfront purchase only",
            Self::Iap => "In-App Purchases (one-time)",
            Self::Sub => "Subscriptions (recurring)",
        }
    }
}

/// When runtime permissions are first requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionTiming {
    Launch,
    Context,
}

impl PermissionTiming {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Launch => "At app launch",
            Self::Context => "In context, at the point of use",
        }
    }
}

/// Issue severity band. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Minor,
}

impl Severity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::High, Self::Minor]
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Minor => 2,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Minor => "minor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High Risk",
            Self::Minor => "Minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
