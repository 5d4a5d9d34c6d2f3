use anyhow::{anyhow, Result};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CONTENT_DIR: &str = "content";

#[derive(Clone, Debug)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub lead_inbox: String,
    pub frontend_url: String,
    pub port: u16,
    pub content_dir: String,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{} must be set", key))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT is not a valid port ({}): {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            smtp_host: required("SMTP_HOST")?,
            smtp_username: required("SMTP_USERNAME")?,
            smtp_password: required("SMTP_PASSWORD")?,
            mail_from: required("MAIL_FROM")?,
            lead_inbox: required("LEAD_INBOX")?,
            frontend_url: required("FRONTEND_URL")?,
            port,
            content_dir: lookup("CONTENT_DIR").unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string()),
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn complete() -> HashMap<String, String> {
        env(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "secret"),
            ("MAIL_FROM", "Kobalt Studio <hallo@kobalt.studio>"),
            ("LEAD_INBOX", "leads@kobalt.studio"),
            ("FRONTEND_URL", "https://kobalt.studio"),
        ])
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let vars = complete();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.sentry_dsn, None);
        assert_eq!(config.lead_inbox, "leads@kobalt.studio");
    }

    #[test]
    fn names_the_missing_variable() {
        let mut vars = complete();
        vars.remove("LEAD_INBOX");
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err.to_string(), "LEAD_INBOX must be set");
    }

    #[test]
    fn blank_required_value_counts_as_missing() {
        let mut vars = complete();
        vars.insert("SMTP_HOST".into(), "  ".into());
        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        let mut vars = complete();
        vars.insert("PORT".into(), "eighty".into());
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().starts_with("PORT is not a valid port"));
    }

    #[test]
    fn reads_overrides() {
        let mut vars = complete();
        vars.insert("PORT".into(), "8080".into());
        vars.insert("CONTENT_DIR".into(), "/srv/content".into());
        vars.insert("SENTRY_DSN".into(), "https://key@sentry.example/1".into());
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.content_dir, "/srv/content");
        assert!(config.sentry_dsn.is_some());
    }
}
