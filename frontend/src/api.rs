use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;

use crate::config;
use crate::error::SiteError;
use crate::i18n::Lang;
use crate::scope::answers::AnswerMap;
use crate::scope::estimate::Estimate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    Contact,
    LeadMagnet,
    ScopeReport,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    pub name: String,
    pub email: String,
    pub current_website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<AnswerMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Estimate>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadSubmission {
    #[serde(rename = "type")]
    pub kind: LeadKind,
    pub lang: Lang,
    pub data: LeadData,
}

pub fn send_email_url() -> String {
    format!("{}/api/send-email", config::get_backend_url())
}

/// One attempt, no retry.
pub async fn submit_lead(submission: &LeadSubmission) -> Result<(), SiteError> {
    let response = Request::post(&send_email_url())
        .json(submission)?
        .send()
        .await?;

    if response.ok() {
        info!("Lead submitted ({:?})", submission.kind);
        Ok(())
    } else {
        Err(SiteError::Network(format!(
            "send-email returned status {}",
            response.status()
        )))
    }
}

/// Fire-and-forget variant for call sites that do not surface failures.
pub fn submit_lead_in_background(submission: LeadSubmission) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = submit_lead(&submission).await {
            error!("Lead submission failed: {}", e);
        }
    });
}
