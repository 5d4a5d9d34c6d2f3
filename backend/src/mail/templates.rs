use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::handlers::lead_dtos::{EstimateDto, Lang, LeadKind, LeadRequest};
use crate::mail::mailer::OutgoingEmail;

/// `18125` -> `18.125 €`
pub fn format_price(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out.push_str(" €");
    out
}

fn answer_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(answer_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn estimate_text(estimate: &EstimateDto, weeks: &str) -> String {
    format!(
        "{} - {}, {}-{} {}",
        format_price(estimate.min_price),
        format_price(estimate.max_price),
        estimate.min_weeks,
        estimate.max_weeks,
        weeks
    )
}

/// Internal notice for the agency inbox. Always English.
pub fn notification_email(
    request: &LeadRequest,
    kind: LeadKind,
    inbox: &str,
    received_at: DateTime<Utc>,
) -> OutgoingEmail {
    let data = &request.data;
    let who = if data.name.trim().is_empty() { &data.email } else { &data.name };

    let mut body = String::new();
    let _ = writeln!(body, "Type: {}", kind.as_str());
    let _ = writeln!(body, "Language: {:?}", request.lang);
    let _ = writeln!(body, "Received: {}", received_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(body, "Name: {}", data.name);
    let _ = writeln!(body, "Email: {}", data.email);
    let _ = writeln!(body, "Website: {}", data.current_website);
    if let Some(message) = data.message.as_deref().filter(|m| !m.trim().is_empty()) {
        let _ = writeln!(body, "\nMessage:\n{}", message);
    }
    if let Some(answers) = data.answers.as_ref().filter(|a| !a.is_empty()) {
        let _ = writeln!(body, "\nAnswers:");
        for (question, answer) in answers {
            let _ = writeln!(body, "- {}: {}", question, answer_text(answer));
        }
    }
    if let Some(estimate) = &data.estimate {
        let _ = writeln!(body, "\nEstimate: {}", estimate_text(estimate, "weeks"));
    }

    OutgoingEmail {
        to: inbox.to_string(),
        reply_to: Some(data.email.clone()),
        subject: format!("[Kobalt] New {} lead from {}", kind.as_str(), who),
        body,
    }
}

struct ConfirmationCopy {
    greeting: &'static str,
    subject: &'static str,
    intro: &'static str,
    estimate_label: &'static str,
    weeks: &'static str,
    sign_off: &'static str,
}

fn confirmation_copy(lang: Lang, kind: LeadKind) -> ConfirmationCopy {
    match (lang, kind) {
        (Lang::De, LeadKind::Contact) => ConfirmationCopy {
            greeting: "Hallo",
            subject: "Danke für Ihre Nachricht",
            intro: "wir haben Ihre Nachricht erhalten und melden uns innerhalb von 24 Stunden.",
            estimate_label: "Ihre Einschätzung",
            weeks: "Wochen",
            sign_off: "Viele Grüße\nKobalt Studio",
        },
        (Lang::De, LeadKind::LeadMagnet) => ConfirmationCopy {
            greeting: "Hallo",
            subject: "Ihre Website-Checkliste",
            intro: "danke für Ihr Interesse. Die Checkliste wurde in Ihrem Browser heruntergeladen. Bei Fragen antworten Sie einfach auf diese E-Mail.",
            estimate_label: "Ihre Einschätzung",
            weeks: "Wochen",
            sign_off: "Viele Grüße\nKobalt Studio",
        },
        (Lang::De, LeadKind::ScopeReport) => ConfirmationCopy {
            greeting: "Hallo",
            subject: "Ihre Projekteinschätzung",
            intro: "danke für Ihre Angaben. Wir sehen uns Ihr Projekt an und melden uns mit einem konkreten Angebot.",
            estimate_label: "Ihre Einschätzung",
            weeks: "Wochen",
            sign_off: "Viele Grüße\nKobalt Studio",
        },
        (Lang::En, LeadKind::Contact) => ConfirmationCopy {
            greeting: "Hi",
            subject: "Thanks for your message",
            intro: "we received your message and will get back to you within 24 hours.",
            estimate_label: "Your estimate",
            weeks: "weeks",
            sign_off: "Best regards\nKobalt Studio",
        },
        (Lang::En, LeadKind::LeadMagnet) => ConfirmationCopy {
            greeting: "Hi",
            subject: "Your website checklist",
            intro: "thanks for your interest. The checklist was downloaded in your browser. Just reply to this email if you have questions.",
            estimate_label: "Your estimate",
            weeks: "weeks",
            sign_off: "Best regards\nKobalt Studio",
        },
        (Lang::En, LeadKind::ScopeReport) => ConfirmationCopy {
            greeting: "Hi",
            subject: "Your project estimate",
            intro: "thanks for your answers. We will review your project and follow up with a concrete proposal.",
            estimate_label: "Your estimate",
            weeks: "weeks",
            sign_off: "Best regards\nKobalt Studio",
        },
        (Lang::Ja, LeadKind::Contact) => ConfirmationCopy {
            greeting: "こんにちは",
            subject: "お問い合わせありがとうございます",
            intro: "メッセージを受け取りました。24時間以内にご連絡いたします。",
            estimate_label: "お見積もり",
            weeks: "週間",
            sign_off: "Kobalt Studio",
        },
        (Lang::Ja, LeadKind::LeadMagnet) => ConfirmationCopy {
            greeting: "こんにちは",
            subject: "ウェブサイトチェックリスト",
            intro: "ご関心をお寄せいただきありがとうございます。チェックリストはブラウザでダウンロードされました。",
            estimate_label: "お見積もり",
            weeks: "週間",
            sign_off: "Kobalt Studio",
        },
        (Lang::Ja, LeadKind::ScopeReport) => ConfirmationCopy {
            greeting: "こんにちは",
            subject: "プロジェクトのお見積もり",
            intro: "ご回答ありがとうございます。内容を確認のうえ、具体的なご提案をお送りします。",
            estimate_label: "お見積もり",
            weeks: "週間",
            sign_off: "Kobalt Studio",
        },
    }
}

/// Localized acknowledgement sent to the lead.
pub fn confirmation_email(request: &LeadRequest, kind: LeadKind) -> OutgoingEmail {
    let copy = confirmation_copy(request.lang, kind);
    let data = &request.data;

    let mut body = String::new();
    if data.name.trim().is_empty() {
        let _ = writeln!(body, "{},\n", copy.greeting);
    } else {
        let _ = writeln!(body, "{} {},\n", copy.greeting, data.name.trim());
    }
    let _ = writeln!(body, "{}", copy.intro);
    if let (LeadKind::ScopeReport, Some(estimate)) = (kind, &data.estimate) {
        let _ = writeln!(body, "\n{}: {}", copy.estimate_label, estimate_text(estimate, copy.weeks));
    }
    let _ = write!(body, "\n{}\n", copy.sign_off);

    OutgoingEmail {
        to: data.email.clone(),
        reply_to: None,
        subject: copy.subject.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::lead_dtos::LeadData;
    use chrono::TimeZone;
    use serde_json::json;

    fn request(lang: Lang, kind: &str) -> LeadRequest {
        LeadRequest {
            kind: kind.to_string(),
            lang,
            data: LeadData {
                name: "Mia".to_string(),
                email: "mia@example.de".to_string(),
                current_website: "mia-zahnarzt.de".to_string(),
                message: Some("Neue Website bitte".to_string()),
                answers: Some(
                    [
                        ("content".to_string(), json!(["Team", "Blog / News"])),
                        ("size".to_string(), json!("Small (up to 5 pages)")),
                    ]
                    .into_iter()
                    .collect(),
                ),
                estimate: Some(EstimateDto { min_price: 18125, max_price: 22656, min_weeks: 6, max_weeks: 7 }),
            },
        }
    }

    #[test]
    fn formats_prices_with_thousands_dots() {
        assert_eq!(format_price(0), "0 €");
        assert_eq!(format_price(999), "999 €");
        assert_eq!(format_price(2500), "2.500 €");
        assert_eq!(format_price(1_250_000), "1.250.000 €");
    }

    #[test]
    fn notification_lists_everything_the_lead_sent() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let email = notification_email(&request(Lang::De, "scope_report"), LeadKind::ScopeReport, "leads@kobalt.studio", at);
        assert_eq!(email.to, "leads@kobalt.studio");
        assert_eq!(email.reply_to.as_deref(), Some("mia@example.de"));
        assert_eq!(email.subject, "[Kobalt] New scope_report lead from Mia");
        assert!(email.body.contains("Received: 2026-03-01 09:30 UTC"));
        assert!(email.body.contains("- content: Team, Blog / News"));
        assert!(email.body.contains("- size: Small (up to 5 pages)"));
        assert!(email.body.contains("Estimate: 18.125 € - 22.656 €, 6-7 weeks"));
        assert!(email.body.contains("Neue Website bitte"));
    }

    #[test]
    fn notification_falls_back_to_email_when_name_is_blank() {
        let mut req = request(Lang::En, "lead_magnet");
        req.data.name = " ".to_string();
        let email = notification_email(&req, LeadKind::LeadMagnet, "leads@kobalt.studio", Utc::now());
        assert_eq!(email.subject, "[Kobalt] New lead_magnet lead from mia@example.de");
    }

    #[test]
    fn confirmation_is_localized() {
        let de = confirmation_email(&request(Lang::De, "contact"), LeadKind::Contact);
        assert_eq!(de.to, "mia@example.de");
        assert_eq!(de.subject, "Danke für Ihre Nachricht");
        assert!(de.body.starts_with("Hallo Mia,"));

        let ja = confirmation_email(&request(Lang::Ja, "contact"), LeadKind::Contact);
        assert_eq!(ja.subject, "お問い合わせありがとうございます");
    }

    #[test]
    fn only_scope_report_confirmation_carries_the_estimate() {
        let report = confirmation_email(&request(Lang::En, "scope_report"), LeadKind::ScopeReport);
        assert!(report.body.contains("Your estimate: 18.125 € - 22.656 €, 6-7 weeks"));

        let contact = confirmation_email(&request(Lang::En, "contact"), LeadKind::Contact);
        assert!(!contact.body.contains("Your estimate"));
    }
}
