use serde::Serialize;

use super::answers::AnswerMap;

const BASE_PRICE: f64 = 2500.0;
const BASE_WEEKS: f64 = 1.0;
const MAX_PRICE_FACTOR: f64 = 1.25;
const MAX_WEEKS_OFFSET: f64 = 1.0;
const MAGNET_MIN_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub min_price: u32,
    pub max_price: u32,
    pub min_weeks: u32,
    pub max_weeks: u32,
}

/// A single additive pricing rule.
struct Rule {
    applies: fn(&AnswerMap) -> bool,
    price: f64,
    weeks: f64,
}

fn small_site(a: &AnswerMap) -> bool {
    a.mentions("size", "Small")
}

fn standard_site(a: &AnswerMap) -> bool {
    a.mentions("size", "Standard")
}

fn large_site(a: &AnswerMap) -> bool {
    a.mentions("size", "Large")
}

fn sells_online(a: &AnswerMap) -> bool {
    a.mentions("engine", "Sell")
}

fn smart_search(a: &AnswerMap) -> bool {
    a.mentions("ai", "Smart Search")
}

fn has_lead_magnet(a: &AnswerMap) -> bool {
    a.text("magnet").map_or(false, |t| t.chars().count() > MAGNET_MIN_CHARS)
}

static RULES: [Rule; 6] = [
    Rule { applies: small_site, price: 1500.0, weeks: 1.0 },
    Rule { applies: standard_site, price: 3500.0, weeks: 2.0 },
    Rule { applies: large_site, price: 8000.0, weeks: 4.0 },
    Rule { applies: sells_online, price: 4000.0, weeks: 2.0 },
    Rule { applies: smart_search, price: 2000.0, weeks: 1.0 },
    Rule { applies: has_lead_magnet, price: 2500.0, weeks: 1.5 },
];

/// Upper bounds are derived from the lower bounds, never from the answers.
pub fn compute_estimate(answers: &AnswerMap) -> Estimate {
    let (price, weeks) = RULES
        .iter()
        .filter(|rule| (rule.applies)(answers))
        .fold((BASE_PRICE, BASE_WEEKS), |(p, w), rule| (p + rule.price, w + rule.weeks));

    Estimate {
        min_price: price.round() as u32,
        max_price: (price * MAX_PRICE_FACTOR).round() as u32,
        min_weeks: weeks.ceil() as u32,
        max_weeks: (weeks + MAX_WEEKS_OFFSET).ceil() as u32,
    }
}

pub fn format_price(amount: u32) -> String {
    format_amount(u64::from(amount))
}

/// Euro amount with German thousands grouping.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    format!("{} €", out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::answers::Answer;
    use crate::scope::questions::{QuestionKind, QUESTIONS};

    #[test]
    fn empty_answers_yield_the_base_estimate() {
        assert_eq!(
            compute_estimate(&AnswerMap::new()),
            Estimate { min_price: 2500, max_price: 3125, min_weeks: 1, max_weeks: 2 }
        );
    }

    #[test]
    fn large_shop_adds_size_and_commerce() {
        let answers = AnswerMap::from([
            ("size", Answer::Single("Large".into())),
            ("engine", Answer::Single("Sell Products (E-comm)".into())),
        ]);
        assert_eq!(
            compute_estimate(&answers),
            Estimate { min_price: 14500, max_price: 18125, min_weeks: 7, max_weeks: 8 }
        );
    }

    #[test]
    fn fractional_weeks_round_up_independently() {
        let answers = AnswerMap::from([("magnet", Answer::Text("Pricing e-book".into()))]);
        // 1 + 1.5 weeks
        assert_eq!(
            compute_estimate(&answers),
            Estimate { min_price: 5000, max_price: 6250, min_weeks: 3, max_weeks: 4 }
        );
    }

    #[test]
    fn short_magnet_text_does_not_count() {
        let answers = AnswerMap::from([("magnet", Answer::Text("pdf".into()))]);
        assert_eq!(compute_estimate(&answers).min_price, 2500);
    }

    #[test]
    fn smart_search_is_matched_inside_a_multi_selection() {
        let answers = AnswerMap::from([(
            "ai",
            Answer::Multi(vec!["Chat Assistant".into(), "Smart Search".into()]),
        )]);
        let estimate = compute_estimate(&answers);
        assert_eq!(estimate.min_price, 4500);
        assert_eq!(estimate.min_weeks, 2);
    }

    #[test]
    fn bounds_are_ordered_for_every_option_combination() {
        let size = &QUESTIONS[1];
        let engine = &QUESTIONS[3];
        let ai = &QUESTIONS[4];
        assert_eq!(size.kind, QuestionKind::Single);

        for s in size.options {
            for e in engine.options {
                for mask in 0..(1u32 << ai.options.len()) {
                    for magnet in ["", "ebook"] {
                        let mut answers = AnswerMap::new();
                        answers.set("size", Answer::Single(s.value.into()));
                        answers.set("engine", Answer::Single(e.value.into()));
                        for (i, o) in ai.options.iter().enumerate() {
                            if mask & (1 << i) != 0 {
                                answers.toggle("ai", o.value);
                            }
                        }
                        answers.set("magnet", Answer::Text(magnet.into()));

                        let est = compute_estimate(&answers);
                        assert!(est.min_price <= est.max_price);
                        assert!(est.min_weeks <= est.max_weeks);
                        assert!(est.min_price >= 2500);
                    }
                }
            }
        }
    }

    #[test]
    fn prices_format_with_thousands_separator() {
        assert_eq!(format_price(18125), "18.125 €");
        assert_eq!(format_price(950), "950 €");
        assert_eq!(format_price(1000000), "1.000.000 €");
    }
}
