use crate::i18n::{Lang, Localized};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Single,
    Multi,
    Text,
}

/// One selectable answer. `value` is what lands in the answer map, `label`
/// is what the visitor sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: Localized,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub phase: Localized,
    pub prompt: Localized,
    pub help_text: Localized,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option_label(&self, value: &str, lang: Lang) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.get(lang))
    }
}

const fn opt(value: &'static str, de: &'static str, en: &'static str, ja: &'static str) -> QuestionOption {
    QuestionOption { value, label: Localized::new(de, en, ja) }
}

pub static QUESTIONS: [Question; 7] = [
    Question {
        id: "goal",
        phase: Localized::new("Vision", "Vision", "ビジョン"),
        prompt: Localized::new(
            "Was soll Ihre Website vor allem leisten?",
            "What should your website achieve first?",
            "ウェブサイトの一番の目的は何ですか？",
        ),
        help_text: Localized::new(
            "Wählen Sie das wichtigste Ziel.",
            "Pick the one goal that matters most.",
            "最も重要な目的を1つ選んでください。",
        ),
        kind: QuestionKind::Single,
        options: &[
            opt("Generate Leads", "Anfragen gewinnen", "Generate Leads", "問い合わせを増やす"),
            opt("Build Brand Trust", "Vertrauen aufbauen", "Build Brand Trust", "ブランドの信頼を築く"),
            opt("Sell Online", "Online verkaufen", "Sell Online", "オンラインで販売する"),
            opt("Recruit Talent", "Mitarbeiter finden", "Recruit Talent", "人材を採用する"),
        ],
    },
    Question {
        id: "size",
        phase: Localized::new("Struktur", "Structure", "構成"),
        prompt: Localized::new(
            "Wie umfangreich wird die Website?",
            "How big will the site be?",
            "サイトの規模はどれくらいですか？",
        ),
        help_text: Localized::new(
            "Eine grobe Schätzung genügt.",
            "A rough guess is fine.",
            "おおよそで構いません。",
        ),
        kind: QuestionKind::Single,
        options: &[
            opt("One Page (Landing)", "Eine Seite (Landingpage)", "One Page (Landing)", "1ページ（ランディング）"),
            opt("Small (up to 5 pages)", "Klein (bis 5 Seiten)", "Small (up to 5 pages)", "小規模（5ページまで）"),
            opt("Standard (5-15 pages)", "Standard (5-15 Seiten)", "Standard (5-15 pages)", "標準（5〜15ページ）"),
            opt("Large (15+ pages)", "Groß (15+ Seiten)", "Large (15+ pages)", "大規模（15ページ以上）"),
        ],
    },
    Question {
        id: "content",
        phase: Localized::new("Struktur", "Structure", "構成"),
        prompt: Localized::new(
            "Welche Inhalte möchten Sie regelmäßig zeigen?",
            "Which content do you want to show regularly?",
            "定期的に掲載したいコンテンツは？",
        ),
        help_text: Localized::new(
            "Mehrfachauswahl möglich.",
            "Select all that apply.",
            "複数選択できます。",
        ),
        kind: QuestionKind::Multi,
        options: &[
            opt("Projects / Portfolio", "Projekte / Referenzen", "Projects / Portfolio", "実績 / ポートフォリオ"),
            opt("Blog / News", "Blog / News", "Blog / News", "ブログ / ニュース"),
            opt("Team", "Team", "Team", "チーム紹介"),
            opt("Testimonials", "Kundenstimmen", "Testimonials", "お客様の声"),
        ],
    },
    Question {
        id: "engine",
        phase: Localized::new("Technik", "Engine", "エンジン"),
        prompt: Localized::new(
            "Was muss die Website technisch können?",
            "What does the site need to do?",
            "サイトに必要な機能は？",
        ),
        help_text: Localized::new(
            "Bestimmt die technische Basis.",
            "This decides the technical foundation.",
            "技術的な基盤が決まります。",
        ),
        kind: QuestionKind::Single,
        options: &[
            opt("Content Showcase (CMS)", "Inhalte präsentieren (CMS)", "Content Showcase (CMS)", "コンテンツ紹介（CMS）"),
            opt("Sell Products (E-comm)", "Produkte verkaufen (Shop)", "Sell Products (E-comm)", "商品販売（EC）"),
            opt("Bookings & Appointments", "Buchungen & Termine", "Bookings & Appointments", "予約・アポイント"),
        ],
    },
    Question {
        id: "ai",
        phase: Localized::new("Intelligenz", "Intelligence", "AI機能"),
        prompt: Localized::new(
            "Welche KI-Funktionen interessieren Sie?",
            "Which AI features interest you?",
            "興味のあるAI機能は？",
        ),
        help_text: Localized::new(
            "Mehrfachauswahl möglich.",
            "Select all that apply.",
            "複数選択できます。",
        ),
        kind: QuestionKind::Multi,
        options: &[
            opt("Smart Search", "Intelligente Suche", "Smart Search", "スマート検索"),
            opt("Chat Assistant", "Chat-Assistent", "Chat Assistant", "チャットアシスタント"),
            opt("Auto Translation", "Automatische Übersetzung", "Auto Translation", "自動翻訳"),
            opt("None", "Keine", "None", "不要"),
        ],
    },
    Question {
        id: "magnet",
        phase: Localized::new("Wachstum", "Growth", "成長"),
        prompt: Localized::new(
            "Haben Sie eine Idee für einen Lead-Magneten?",
            "Do you have an idea for a lead magnet?",
            "リードマグネットのアイデアはありますか？",
        ),
        help_text: Localized::new(
            "Z. B. ein E-Book, ein Rechner oder eine Checkliste. Leer lassen, wenn nicht.",
            "E.g. an e-book, a calculator or a checklist. Leave empty if not.",
            "例：電子書籍、計算ツール、チェックリスト。なければ空欄で。",
        ),
        kind: QuestionKind::Text,
        options: &[],
    },
    Question {
        id: "timeline",
        phase: Localized::new("Zeitplan", "Timing", "スケジュール"),
        prompt: Localized::new(
            "Wann soll es losgehen?",
            "When do you want to start?",
            "いつ開始したいですか？",
        ),
        help_text: Localized::new(
            "Hilft uns bei der Planung.",
            "Helps us plan capacity.",
            "計画の参考にします。",
        ),
        kind: QuestionKind::Single,
        options: &[
            opt("ASAP", "So schnell wie möglich", "ASAP", "できるだけ早く"),
            opt("Within 3 months", "Innerhalb von 3 Monaten", "Within 3 months", "3か月以内"),
            opt("Flexible", "Flexibel", "Flexible", "柔軟に"),
        ],
    },
];

pub fn find(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn choice_questions_have_options_and_text_questions_do_not() {
        for q in QUESTIONS.iter() {
            match q.kind {
                QuestionKind::Text => assert!(q.options.is_empty(), "{}", q.id),
                _ => assert!(!q.options.is_empty(), "{}", q.id),
            }
        }
    }

    #[test]
    fn canonical_values_carry_the_keywords_the_rules_match_on() {
        let size = find("size").unwrap();
        assert!(size.options.iter().any(|o| o.value.contains("Small")));
        assert!(size.options.iter().any(|o| o.value.contains("Standard")));
        assert!(size.options.iter().any(|o| o.value.contains("Large")));
        assert!(find("engine").unwrap().options.iter().any(|o| o.value.contains("Sell")));
        assert!(find("ai").unwrap().options.iter().any(|o| o.value == "Smart Search"));
    }

    #[test]
    fn option_labels_are_localized() {
        let engine = find("engine").unwrap();
        assert_eq!(
            engine.option_label("Sell Products (E-comm)", Lang::De),
            Some("Produkte verkaufen (Shop)")
        );
        assert_eq!(engine.option_label("Nope", Lang::De), None);
    }
}
