use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::handlers::lead_dtos::{LeadKind, LeadRequest, LeadResponse};
use crate::mail::mailer::MailError;
use crate::mail::templates::{confirmation_email, notification_email};
use crate::AppState;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Unknown lead type: {0}")]
    UnknownType(String),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Too many requests, try again in a minute")]
    RateLimited,
    #[error("Failed to send email")]
    Mail(#[from] MailError),
}

impl LeadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::UnknownType(_) | LeadError::InvalidEmail => StatusCode::BAD_REQUEST,
            LeadError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            LeadError::Mail(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<LeadError> for (StatusCode, Json<Value>) {
    fn from(err: LeadError) -> Self {
        (err.status(), Json(json!({ "error": err.to_string() })))
    }
}

/// Same light check as the client-side gate.
pub fn looks_like_email(email: &str) -> bool {
    email.contains('@')
}

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LeadRequest>,
) -> Result<Json<LeadResponse>, (StatusCode, Json<Value>)> {
    let kind = LeadKind::parse(&request.kind)
        .ok_or_else(|| LeadError::UnknownType(request.kind.clone()))?;
    if !looks_like_email(request.data.email.trim()) {
        return Err(LeadError::InvalidEmail.into());
    }

    let notification = notification_email(&request, kind, &state.config.lead_inbox, chrono::Utc::now());
    state.mailer.send(notification).await.map_err(|e| {
        error!("Failed to deliver {} lead notification: {}", kind.as_str(), e);
        LeadError::Mail(e)
    })?;

    // The lead is already in the inbox; a bounced confirmation is not
    // worth failing the request over.
    if let Err(e) = state.mailer.send(confirmation_email(&request, kind)).await {
        warn!("Failed to send confirmation for {} lead: {}", kind.as_str(), e);
    }

    info!("Handled {} lead ({:?})", kind.as_str(), request.lang);
    Ok(Json(LeadResponse { message: "sent" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::Request,
        Router,
    };
    use http_body_util::BodyExt;
    use mockall::predicate;
    use tower::ServiceExt;

    use crate::config::app_config::Config;
    use crate::handlers::rate_limit::lead_rate_limiter;
    use crate::mail::mailer::{build_message, MockMailer, OutgoingEmail};
    use lettre::message::Mailbox;

    fn test_config() -> Config {
        Config {
            smtp_host: "smtp.example.com".into(),
            smtp_username: "mailer".into(),
            smtp_password: "secret".into(),
            mail_from: "hallo@kobalt.studio".into(),
            lead_inbox: "leads@kobalt.studio".into(),
            frontend_url: "http://localhost:8080".into(),
            port: 3001,
            content_dir: "content".into(),
            sentry_dsn: None,
        }
    }

    fn app(mailer: MockMailer) -> Router {
        let state = Arc::new(AppState {
            config: test_config(),
            mailer: Arc::new(mailer),
            limiter: Arc::new(lead_rate_limiter()),
        });
        crate::build_router(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/send-email")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact(email: &str) -> Value {
        json!({
            "type": "contact",
            "lang": "de",
            "data": { "name": "Mia", "email": email, "currentWebsite": "", "message": "Hallo" }
        })
    }

    #[tokio::test]
    async fn health_check_says_ok() {
        let resp = app(MockMailer::new())
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn sends_notification_then_confirmation() {
        let mut mailer = MockMailer::new();
        let mut seq = mockall::Sequence::new();
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| e.to == "leads@kobalt.studio"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| {
                e.to == "mia@example.de" && e.subject == "Danke für Ihre Nachricht"
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let resp = app(mailer).oneshot(post(contact("mia@example.de"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "message": "sent" }));
    }

    #[tokio::test]
    async fn unknown_type_is_a_bad_request() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();
        let mut body = contact("mia@example.de");
        body["type"] = json!("newsletter");

        let resp = app(mailer).oneshot(post(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "Unknown lead type: newsletter");
    }

    #[tokio::test]
    async fn email_without_at_is_a_bad_request() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();
        let resp = app(mailer).oneshot(post(contact("mia.example.de"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_lang_is_unprocessable() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();
        let mut body = contact("mia@example.de");
        body["lang"] = json!("fr");

        let resp = app(mailer).oneshot(post(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn failed_notification_is_a_bad_gateway() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Transport("connection refused".into())));

        let resp = app(mailer).oneshot(post(contact("mia@example.de"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(resp).await["error"], "Failed to send email");
    }

    #[tokio::test]
    async fn failed_confirmation_still_succeeds() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| e.to == "leads@kobalt.studio"))
            .returning(|_| Ok(()));
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| e.to == "mia@example.de"))
            .returning(|_| Err(MailError::Address("mia@example.de".into())));

        let resp = app(mailer).oneshot(post(contact("mia@example.de"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn sixth_request_in_a_minute_is_rate_limited() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(10).returning(|_| Ok(()));
        let app = app(mailer);

        for _ in 0..5 {
            let resp = app.clone().oneshot(post(contact("mia@example.de"))).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = app.clone().oneshot(post(contact("mia@example.de"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn rotating_forwarded_hops_do_not_escape_the_limit() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(10).returning(|_| Ok(()));
        let app = app(mailer);

        for i in 0..6 {
            let mut request = post(contact("mia@example.de"));
            request.headers_mut().insert(
                "x-forwarded-for",
                format!("10.9.9.{}, 127.0.0.1", i).parse().unwrap(),
            );
            let resp = app.clone().oneshot(request).await.unwrap();
            let expected = if i < 5 { StatusCode::OK } else { StatusCode::TOO_MANY_REQUESTS };
            assert_eq!(resp.status(), expected);
        }
    }

    #[tokio::test]
    async fn loose_email_still_reaches_the_inbox() {
        let from: Mailbox = "hallo@kobalt.studio".parse().unwrap();
        let mut mailer = MockMailer::new();
        let inbox_from = from.clone();
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| e.to == "leads@kobalt.studio"))
            .times(1)
            .returning(move |e| build_message(&inbox_from, &e).map(|_| ()));
        mailer
            .expect_send()
            .with(predicate::function(|e: &OutgoingEmail| e.to == "mia@"))
            .times(1)
            .returning(move |e| build_message(&from, &e).map(|_| ()));

        let resp = app(mailer).oneshot(post(contact("mia@"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "message": "sent" }));
    }

    #[test]
    fn error_statuses() {
        assert_eq!(LeadError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(LeadError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            LeadError::Mail(MailError::Build("x".into())).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
