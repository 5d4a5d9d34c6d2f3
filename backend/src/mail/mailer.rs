use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::app_config::Config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address {0}")]
    Address(String),
    #[error("could not build message: {0}")]
    Build(String),
    #[error("smtp: {0}")]
    Transport(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.mail_from)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        Ok(Self { transport, from })
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse::<Mailbox>()
        .map_err(|_| MailError::Address(raw.to_string()))
}

pub fn build_message(from: &Mailbox, email: &OutgoingEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN);
    // Lead addresses only pass the `@` check; a bad Reply-To never blocks the message.
    if let Some(reply_to) = &email.reply_to {
        match parse_mailbox(reply_to) {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(_) => warn!("Dropping unparseable Reply-To {:?}", reply_to),
        }
    }
    builder
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(&self.from, &email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        info!("Sent email \"{}\"", email.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            reply_to: Some("lead@example.com".to_string()),
            subject: "Neue Anfrage".to_string(),
            body: "Hallo".to_string(),
        }
    }

    #[test]
    fn builds_plain_text_message_with_reply_to() {
        let from = parse_mailbox("Kobalt Studio <hallo@kobalt.studio>").unwrap();
        let message = build_message(&from, &email("leads@kobalt.studio")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: leads@kobalt.studio"));
        assert!(raw.contains("Reply-To: lead@example.com"));
        assert!(raw.contains("Content-Type: text/plain"));
    }

    #[test]
    fn drops_unparseable_reply_to() {
        let from = parse_mailbox("hallo@kobalt.studio").unwrap();
        for loose in ["mia@", "mia @example.de", "@"] {
            let mut notice = email("leads@kobalt.studio");
            notice.reply_to = Some(loose.to_string());
            let message = build_message(&from, &notice).unwrap();
            let raw = String::from_utf8(message.formatted()).unwrap();
            assert!(raw.contains("To: leads@kobalt.studio"));
            assert!(!raw.contains("Reply-To"));
        }
    }

    #[test]
    fn rejects_unparseable_recipient() {
        let from = parse_mailbox("hallo@kobalt.studio").unwrap();
        let err = build_message(&from, &email("not an address")).unwrap_err();
        assert!(matches!(err, MailError::Address(_)));
    }
}
