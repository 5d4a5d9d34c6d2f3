use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    En,
    Ja,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadKind {
    Contact,
    LeadMagnet,
    ScopeReport,
}

impl LeadKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "contact" => Some(LeadKind::Contact),
            "lead_magnet" => Some(LeadKind::LeadMagnet),
            "scope_report" => Some(LeadKind::ScopeReport),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeadKind::Contact => "contact",
            LeadKind::LeadMagnet => "lead_magnet",
            LeadKind::ScopeReport => "scope_report",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDto {
    pub min_price: u32,
    pub max_price: u32,
    pub min_weeks: u32,
    pub max_weeks: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub current_website: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Question id to answer; a string or a list of strings.
    #[serde(default)]
    pub answers: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub estimate: Option<EstimateDto>,
}

/// `type` stays a string so an unknown lead type is a 400, not a
/// deserialization rejection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeadRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub lang: Lang,
    pub data: LeadData,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub message: &'static str,
}
