// ============================================================
// SELECTION VIEW-MODEL
// ============================================================
// What the dashboard has active: one group plus display toggles.
// Fed into the analyzer as a plain value; every change re-runs the
// engine against the resolved subset.

use serde::{Deserialize, Serialize};

/// Label of the synthetic selector that resolves to the full dataset
pub const ALL_COMPANIES: &str = "All Companies";

/// The active group choice. Round-trips through its display string so
/// the frontend can send either the synthetic label or a company key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupSelector {
    AllCompanies,
    Company(String),
}

impl GroupSelector {
    pub fn label(&self) -> &str {
        match self {
            GroupSelector::AllCompanies => ALL_COMPANIES,
            GroupSelector::Company(name) => name,
        }
    }
}

impl From<String> for GroupSelector {
    fn from(value: String) -> Self {
        if value == ALL_COMPANIES {
            GroupSelector::AllCompanies
        } else {
            GroupSelector::Company(value)
        }
    }
}

impl From<GroupSelector> for String {
    fn from(selector: GroupSelector) -> Self {
        selector.label().to_string()
    }
}

impl std::fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One dashboard state snapshot: which rows to analyze and which
/// result blocks to compute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub group: GroupSelector,
    #[serde(default = "enabled")]
    pub show_statistics: bool,
    #[serde(default = "enabled")]
    pub show_correlation: bool,
    #[serde(default = "enabled")]
    pub show_trends: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            group: GroupSelector::AllCompanies,
            show_statistics: true,
            show_correlation: true,
            show_trends: true,
        }
    }
}

impl Selection {
    pub fn for_group(group: GroupSelector) -> Self {
        Self {
            group,
            ..Default::default()
        }
    }

    pub fn for_company(name: impl Into<String>) -> Self {
        Self::for_group(GroupSelector::Company(name.into()))
    }
}
