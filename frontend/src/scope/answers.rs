use serde::Serialize;
use std::collections::BTreeMap;

use crate::scope::questions::QUESTIONS;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    /// Selected options in the order they were picked.
    Multi(Vec<String>),
    Text(String),
}

impl Answer {
    /// Substring match against the stored value, or against any selected
    /// option for multi-select answers.
    pub fn mentions(&self, needle: &str) -> bool {
        match self {
            Answer::Single(v) | Answer::Text(v) => v.contains(needle),
            Answer::Multi(items) => items.iter().any(|v| v.contains(needle)),
        }
    }

    pub fn mentions_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        match self {
            Answer::Single(v) | Answer::Text(v) => v.to_lowercase().contains(&needle),
            Answer::Multi(items) => items.iter().any(|v| v.to_lowercase().contains(&needle)),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Answer::Single(v) | Answer::Text(v) => v.clone(),
            Answer::Multi(items) => items.join(", "),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, Answer>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.0.get(id)
    }

    pub fn set(&mut self, id: &str, answer: Answer) {
        self.0.insert(id.to_string(), answer);
    }

    /// Adds `option` to the multi-select set under `id`, or removes it if
    /// already present. A non-multi value under `id` is replaced.
    pub fn toggle(&mut self, id: &str, option: &str) {
        let entry = self
            .0
            .entry(id.to_string())
            .or_insert_with(|| Answer::Multi(Vec::new()));
        match entry {
            Answer::Multi(items) => {
                if let Some(pos) = items.iter().position(|v| v == option) {
                    items.remove(pos);
                } else {
                    items.push(option.to_string());
                }
            }
            other => *other = Answer::Multi(vec![option.to_string()]),
        }
    }

    pub fn is_selected(&self, id: &str, option: &str) -> bool {
        match self.0.get(id) {
            Some(Answer::Multi(items)) => items.iter().any(|v| v == option),
            Some(Answer::Single(v)) => v == option,
            _ => false,
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        match self.0.get(id) {
            Some(Answer::Single(v)) | Some(Answer::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn mentions(&self, id: &str, needle: &str) -> bool {
        self.0.get(id).map_or(false, |a| a.mentions(needle))
    }

    pub fn mentions_ignore_case(&self, id: &str, needle: &str) -> bool {
        self.0.get(id).map_or(false, |a| a.mentions_ignore_case(needle))
    }

    /// Answered questions in the order the flow asks them.
    pub fn in_flow_order(&self) -> impl Iterator<Item = (&'static str, &Answer)> + '_ {
        QUESTIONS
            .iter()
            .filter_map(move |q| self.0.get(q.id).map(|answer| (q.id, answer)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, Answer); N]> for AnswerMap {
    fn from(entries: [(&str, Answer); N]) -> Self {
        let mut map = AnswerMap::new();
        for (id, answer) in entries {
            map.set(id, answer);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_order_follows_the_question_catalogue() {
        let answers = AnswerMap::from([
            ("ai", Answer::Multi(vec!["Smart Search".into()])),
            ("size", Answer::Single("Small (1-5 pages)".into())),
            ("goal", Answer::Single("Generate Leads".into())),
        ]);
        let ids: Vec<_> = answers.in_flow_order().map(|(id, _)| id).collect();
        let expected: Vec<_> = QUESTIONS
            .iter()
            .map(|q| q.id)
            .filter(|id| ["ai", "size", "goal"].contains(id))
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(ids[0], "goal");
    }

    #[test]
    fn double_toggle_restores_previous_selection() {
        let mut answers = AnswerMap::new();
        answers.toggle("ai", "Smart Search");
        let before = answers.clone();

        answers.toggle("ai", "Chat Assistant");
        answers.toggle("ai", "Chat Assistant");

        assert_eq!(answers, before);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut answers = AnswerMap::new();
        answers.toggle("content", "Team");
        answers.toggle("content", "Blog / News");
        answers.toggle("content", "Projects / Portfolio");
        answers.toggle("content", "Blog / News");
        assert_eq!(
            answers.get("content"),
            Some(&Answer::Multi(vec!["Team".into(), "Projects / Portfolio".into()]))
        );
    }

    #[test]
    fn deselecting_everything_leaves_an_empty_set_not_a_missing_key() {
        let mut answers = AnswerMap::new();
        answers.toggle("ai", "None");
        answers.toggle("ai", "None");
        assert_eq!(answers.get("ai"), Some(&Answer::Multi(vec![])));
    }

    #[test]
    fn mentions_checks_every_selected_option() {
        let answers = AnswerMap::from([(
            "content",
            Answer::Multi(vec!["Team".into(), "Blog / News".into()]),
        )]);
        assert!(answers.mentions("content", "Blog"));
        assert!(!answers.mentions("content", "blog"));
        assert!(answers.mentions_ignore_case("content", "blog"));
        assert!(!answers.mentions("missing", "Blog"));
    }

    #[test]
    fn serializes_by_answer_shape() {
        let answers = AnswerMap::from([
            ("size", Answer::Single("Large (15+ pages)".into())),
            ("ai", Answer::Multi(vec!["Smart Search".into()])),
        ]);
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["size"], "Large (15+ pages)");
        assert_eq!(json["ai"][0], "Smart Search");
    }
}
