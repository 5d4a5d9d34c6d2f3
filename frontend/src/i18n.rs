use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    En,
    Ja,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::De, Lang::En, Lang::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
            Lang::Ja => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "de" => Some(Lang::De),
            "en" => Some(Lang::En),
            "ja" => Some(Lang::Ja),
            _ => None,
        }
    }

    /// Maps a browser language tag like `de-AT` or `ja` onto a site language.
    pub fn from_browser_tag(tag: &str) -> Lang {
        let primary = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        Lang::from_code(&primary).unwrap_or(Lang::En)
    }

    pub fn og_locale(self) -> &'static str {
        match self {
            Lang::De => "de_DE",
            Lang::En => "en_US",
            Lang::Ja => "ja_JP",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::De => &DE,
            Lang::En => &EN,
            Lang::Ja => &JA,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn detect_browser_lang() -> Lang {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|tag| Lang::from_browser_tag(&tag))
        .unwrap_or(Lang::En)
}

/// Static text with one variant per site language.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Localized {
    pub de: &'static str,
    pub en: &'static str,
    pub ja: &'static str,
}

impl Localized {
    pub const fn new(de: &'static str, en: &'static str, ja: &'static str) -> Self {
        Self { de, en, ja }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::De => self.de,
            Lang::En => self.en,
            Lang::Ja => self.ja,
        }
    }
}

pub struct Strings {
    pub nav_scope: &'static str,
    pub nav_calculator: &'static str,
    pub nav_checklist: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub home_description: &'static str,
    pub compare_title: &'static str,
    pub contact_title: &'static str,
    pub contact_message: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub current_website: &'static str,
    pub send: &'static str,
    pub sent: &'static str,
    pub send_failed: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub restart: &'static str,
    pub step_of: &'static str,
    pub generating: &'static str,
    pub report_title: &'static str,
    pub price_range: &'static str,
    pub timeline: &'static str,
    pub weeks: &'static str,
    pub sitemap_title: &'static str,
    pub answers_title: &'static str,
    pub gate_title: &'static str,
    pub gate_button: &'static str,
    pub gate_invalid: &'static str,
    pub download_pdf: &'static str,
    pub pdf_failed: &'static str,
    pub calculator_title: &'static str,
    pub monthly_visitors: &'static str,
    pub current_conversion: &'static str,
    pub target_conversion: &'static str,
    pub deal_value: &'static str,
    pub monthly_gap: &'static str,
    pub yearly_gap: &'static str,
    pub monthly_revenue: &'static str,
    pub load_seconds: &'static str,
    pub load_loss: &'static str,
    pub checklist_title: &'static str,
    pub checklist_intro: &'static str,
    pub checklist_button: &'static str,
    pub checklist_done: &'static str,
    pub exit_title: &'static str,
    pub exit_body: &'static str,
    pub close: &'static str,
    pub imprint: &'static str,
    pub privacy: &'static str,
    pub not_found: &'static str,
    pub loading: &'static str,
}

static DE: Strings = Strings {
    nav_scope: "Projekt-Check",
    nav_calculator: "Rechner",
    nav_checklist: "Checkliste",
    hero_title: "Websites, die Kunden gewinnen.",
    hero_subtitle: "Design, Entwicklung und SEO aus einer Hand für Unternehmen im DACH-Raum.",
    hero_cta: "Projekt in 2 Minuten einschätzen",
    home_description: "Kobalt Studio gestaltet und entwickelt schnelle, suchmaschinenoptimierte Websites.",
    compare_title: "Agentur, Freelancer oder Baukasten?",
    contact_title: "Kontakt",
    contact_message: "Nachricht",
    name: "Name",
    email: "E-Mail",
    current_website: "Aktuelle Website",
    send: "Senden",
    sent: "Danke! Wir melden uns innerhalb von 24 Stunden.",
    send_failed: "Senden fehlgeschlagen. Bitte schreiben Sie uns direkt.",
    next: "Weiter",
    back: "Zurück",
    restart: "Neu starten",
    step_of: "von",
    generating: "Ihr Bericht wird erstellt...",
    report_title: "Ihre Projekteinschätzung",
    price_range: "Budget",
    timeline: "Zeitrahmen",
    weeks: "Wochen",
    sitemap_title: "Sitemap",
    answers_title: "Ihre Angaben",
    gate_title: "E-Mail eingeben, um den Bericht freizuschalten",
    gate_button: "Bericht anzeigen",
    gate_invalid: "Bitte eine gültige E-Mail-Adresse eingeben.",
    download_pdf: "Als PDF herunterladen",
    pdf_failed: "Das PDF konnte nicht erstellt werden.",
    calculator_title: "Was kostet Sie Ihre aktuelle Website?",
    monthly_visitors: "Besucher pro Monat",
    current_conversion: "Aktuelle Conversion-Rate (%)",
    target_conversion: "Ziel-Conversion-Rate (%)",
    deal_value: "Durchschnittlicher Auftragswert (€)",
    monthly_gap: "Entgangener Umsatz pro Monat",
    yearly_gap: "Entgangener Umsatz pro Jahr",
    monthly_revenue: "Online-Umsatz pro Monat (€)",
    load_seconds: "Ladezeit (Sekunden)",
    load_loss: "Geschätzter Verlust durch Ladezeit",
    checklist_title: "Die Website-Checkliste",
    checklist_intro: "24 Punkte, die jede Unternehmenswebsite erfüllen sollte. Kostenlos als PDF.",
    checklist_button: "Checkliste herunterladen",
    checklist_done: "Ihr Download wurde gestartet.",
    exit_title: "Bevor Sie gehen...",
    exit_body: "Holen Sie sich unsere kostenlose Website-Checkliste.",
    close: "Schließen",
    imprint: "Impressum",
    privacy: "Datenschutz",
    not_found: "Diese Seite gibt es nicht.",
    loading: "Lädt...",
};

static EN: Strings = Strings {
    nav_scope: "Project check",
    nav_calculator: "Calculator",
    nav_checklist: "Checklist",
    hero_title: "Websites that win clients.",
    hero_subtitle: "Design, development and SEO from one studio.",
    hero_cta: "Scope your project in 2 minutes",
    home_description: "Kobalt Studio designs and builds fast, search-optimised websites.",
    compare_title: "Agency, freelancer or site builder?",
    contact_title: "Contact",
    contact_message: "Message",
    name: "Name",
    email: "Email",
    current_website: "Current website",
    send: "Send",
    sent: "Thanks! We will get back to you within 24 hours.",
    send_failed: "Sending failed. Please email us directly.",
    next: "Next",
    back: "Back",
    restart: "Start over",
    step_of: "of",
    generating: "Generating your report...",
    report_title: "Your project estimate",
    price_range: "Budget",
    timeline: "Timeline",
    weeks: "weeks",
    sitemap_title: "Sitemap",
    answers_title: "Your answers",
    gate_title: "Enter your email to unlock the report",
    gate_button: "Show report",
    gate_invalid: "Please enter a valid email address.",
    download_pdf: "Download as PDF",
    pdf_failed: "The PDF could not be created.",
    calculator_title: "What is your current website costing you?",
    monthly_visitors: "Visitors per month",
    current_conversion: "Current conversion rate (%)",
    target_conversion: "Target conversion rate (%)",
    deal_value: "Average deal value (€)",
    monthly_gap: "Revenue gap per month",
    yearly_gap: "Revenue gap per year",
    monthly_revenue: "Online revenue per month (€)",
    load_seconds: "Load time (seconds)",
    load_loss: "Estimated loss from load time",
    checklist_title: "The website checklist",
    checklist_intro: "24 points every business website should cover. Free as a PDF.",
    checklist_button: "Download checklist",
    checklist_done: "Your download has started.",
    exit_title: "Before you go...",
    exit_body: "Grab our free website checklist.",
    close: "Close",
    imprint: "Imprint",
    privacy: "Privacy",
    not_found: "This page does not exist.",
    loading: "Loading...",
};

static JA: Strings = Strings {
    nav_scope: "プロジェクト診断",
    nav_calculator: "計算ツール",
    nav_checklist: "チェックリスト",
    hero_title: "顧客を呼び込むウェブサイトを。",
    hero_subtitle: "デザイン、開発、SEOをワンストップで。",
    hero_cta: "2分でプロジェクトを見積もる",
    home_description: "Kobalt Studioは高速でSEOに強いウェブサイトを制作します。",
    compare_title: "制作会社、フリーランス、それともサイトビルダー？",
    contact_title: "お問い合わせ",
    contact_message: "メッセージ",
    name: "お名前",
    email: "メールアドレス",
    current_website: "現在のウェブサイト",
    send: "送信",
    sent: "ありがとうございます。24時間以内にご連絡します。",
    send_failed: "送信に失敗しました。直接メールでご連絡ください。",
    next: "次へ",
    back: "戻る",
    restart: "最初から",
    step_of: "/",
    generating: "レポートを作成しています...",
    report_title: "プロジェクト見積もり",
    price_range: "予算",
    timeline: "期間",
    weeks: "週",
    sitemap_title: "サイトマップ",
    answers_title: "ご回答",
    gate_title: "メールアドレスを入力してレポートを表示",
    gate_button: "レポートを表示",
    gate_invalid: "有効なメールアドレスを入力してください。",
    download_pdf: "PDFでダウンロード",
    pdf_failed: "PDFを作成できませんでした。",
    calculator_title: "現在のサイトはどれだけ損をしていますか？",
    monthly_visitors: "月間訪問者数",
    current_conversion: "現在のコンバージョン率 (%)",
    target_conversion: "目標コンバージョン率 (%)",
    deal_value: "平均取引額 (€)",
    monthly_gap: "月間の機会損失",
    yearly_gap: "年間の機会損失",
    monthly_revenue: "月間オンライン売上 (€)",
    load_seconds: "読み込み時間 (秒)",
    load_loss: "読み込み時間による推定損失",
    checklist_title: "ウェブサイト・チェックリスト",
    checklist_intro: "企業サイトが満たすべき24項目。PDFで無料配布中。",
    checklist_button: "チェックリストをダウンロード",
    checklist_done: "ダウンロードを開始しました。",
    exit_title: "お帰りの前に...",
    exit_body: "無料のウェブサイト・チェックリストをどうぞ。",
    close: "閉じる",
    imprint: "運営者情報",
    privacy: "プライバシー",
    not_found: "ページが見つかりません。",
    loading: "読み込み中...",
};
