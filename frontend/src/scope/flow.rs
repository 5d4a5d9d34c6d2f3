use super::answers::{Answer, AnswerMap};
use super::questions::{self, Question, QuestionKind, QUESTIONS};

pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 350;

/// What the caller has to do after an input was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing moves; the visitor stays on the current question.
    Stay,
    /// A single-select answer was stored. Call `advance_from(step)` once the
    /// UI delay has elapsed.
    AdvancePending { step: usize },
    Advanced,
    Completed,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScopeFlow {
    questions: &'static [Question],
    step: usize,
    answers: AnswerMap,
    complete: bool,
}

impl Default for ScopeFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeFlow {
    pub fn new() -> Self {
        Self::with_questions(&QUESTIONS)
    }

    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            step: 0,
            answers: AnswerMap::new(),
            complete: false,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current(&self) -> Option<&'static Question> {
        if self.complete {
            None
        } else {
            self.questions.get(self.step)
        }
    }

    fn lookup(&self, id: &str) -> Option<&'static Question> {
        let questions: &'static [Question] = self.questions;
        questions.iter().find(|q| q.id == id)
    }

    pub fn select_option(&mut self, id: &str, option: &str) -> Transition {
        let Some(question) = self.lookup(id) else {
            log::warn!("select_option for unknown question {}", id);
            return Transition::Ignored;
        };
        match question.kind {
            QuestionKind::Single => {
                self.answers.set(id, Answer::Single(option.to_string()));
                Transition::AdvancePending { step: self.step }
            }
            QuestionKind::Multi => {
                self.answers.toggle(id, option);
                Transition::Stay
            }
            QuestionKind::Text => {
                self.answers.set(id, Answer::Text(option.to_string()));
                Transition::Stay
            }
        }
    }

    pub fn submit_text(&mut self, id: &str, text: &str) -> Transition {
        if self.lookup(id).is_none() {
            log::warn!("submit_text for unknown question {}", id);
            return Transition::Ignored;
        }
        self.answers.set(id, Answer::Text(text.to_string()));
        self.advance()
    }

    pub fn advance(&mut self) -> Transition {
        if self.complete {
            return Transition::Ignored;
        }
        if self.step + 1 >= self.questions.len() {
            self.complete = true;
            Transition::Completed
        } else {
            self.step += 1;
            Transition::Advanced
        }
    }

    /// Delayed advance scheduled by a single-select answer. Does nothing if
    /// the visitor already moved away from `step`.
    pub fn advance_from(&mut self, step: usize) -> Transition {
        if self.complete || self.step != step {
            return Transition::Ignored;
        }
        self.advance()
    }

    pub fn back(&mut self) -> Transition {
        if self.complete {
            self.complete = false;
            return Transition::Stay;
        }
        if self.step == 0 {
            return Transition::Ignored;
        }
        self.step -= 1;
        Transition::Stay
    }

    pub fn restart(&mut self) {
        *self = Self::with_questions(self.questions);
    }

    pub fn progress_percent(&self) -> u32 {
        if self.complete || self.questions.is_empty() {
            return 100;
        }
        ((self.step as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }
}

/// Convenience for labels in summaries.
pub fn question_prompt(id: &str, lang: crate::i18n::Lang) -> &'static str {
    questions::find(id).map_or("", |q| q.prompt.get(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_step(id: &str) -> ScopeFlow {
        let mut flow = ScopeFlow::new();
        while flow.current().map(|q| q.id) != Some(id) {
            assert_ne!(flow.advance(), Transition::Ignored);
        }
        flow
    }

    #[test]
    fn starts_at_first_question_with_no_answers() {
        let flow = ScopeFlow::new();
        assert_eq!(flow.step(), 0);
        assert!(flow.answers().is_empty());
        assert!(!flow.is_complete());
        assert_eq!(flow.current().unwrap().id, "goal");
    }

    #[test]
    fn single_select_stores_answer_and_schedules_advance() {
        let mut flow = ScopeFlow::new();
        let t = flow.select_option("goal", "Sell Online");
        assert_eq!(t, Transition::AdvancePending { step: 0 });
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.answers().text("goal"), Some("Sell Online"));

        assert_eq!(flow.advance_from(0), Transition::Advanced);
        assert_eq!(flow.step(), 1);
    }

    #[test]
    fn stale_delayed_advance_is_dropped() {
        let mut flow = ScopeFlow::new();
        flow.select_option("goal", "Generate Leads");
        flow.select_option("goal", "Sell Online");
        assert_eq!(flow.advance_from(0), Transition::Advanced);
        // second timer from the double click
        assert_eq!(flow.advance_from(0), Transition::Ignored);
        assert_eq!(flow.step(), 1);
        assert_eq!(flow.answers().text("goal"), Some("Sell Online"));
    }

    #[test]
    fn multi_select_toggles_without_advancing() {
        let mut flow = at_step("content");
        let step = flow.step();
        assert_eq!(flow.select_option("content", "Team"), Transition::Stay);
        assert_eq!(flow.select_option("content", "Blog / News"), Transition::Stay);
        assert_eq!(flow.step(), step);
        assert!(flow.answers().is_selected("content", "Team"));

        flow.select_option("content", "Team");
        assert!(!flow.answers().is_selected("content", "Team"));
        assert!(flow.answers().is_selected("content", "Blog / News"));
    }

    #[test]
    fn text_submission_accepts_empty_input_and_advances() {
        let mut flow = at_step("magnet");
        let step = flow.step();
        assert_eq!(flow.submit_text("magnet", ""), Transition::Advanced);
        assert_eq!(flow.step(), step + 1);
        assert_eq!(flow.answers().text("magnet"), Some(""));
    }

    #[test]
    fn last_advance_completes_and_further_advances_are_noops() {
        let mut flow = ScopeFlow::new();
        for _ in 0..flow.len() - 1 {
            assert_eq!(flow.advance(), Transition::Advanced);
        }
        assert_eq!(flow.advance(), Transition::Completed);
        assert!(flow.is_complete());
        let snapshot = flow.clone();

        assert_eq!(flow.advance(), Transition::Ignored);
        assert_eq!(flow.advance_from(flow.len() - 1), Transition::Ignored);
        assert_eq!(flow, snapshot);
        assert!(flow.current().is_none());
    }

    #[test]
    fn step_never_decreases_through_advance() {
        let mut flow = ScopeFlow::new();
        let mut last = flow.step();
        for _ in 0..flow.len() + 3 {
            flow.advance();
            assert!(flow.step() >= last);
            last = flow.step();
        }
        assert!(flow.step() < flow.len());
    }

    #[test]
    fn back_stops_at_the_first_question_and_leaves_completion() {
        let mut flow = ScopeFlow::new();
        assert_eq!(flow.back(), Transition::Ignored);

        while flow.advance() != Transition::Completed {}
        let last = flow.step();
        flow.back();
        assert!(!flow.is_complete());
        assert_eq!(flow.step(), last);
        flow.back();
        assert_eq!(flow.step(), last - 1);
    }

    #[test]
    fn answers_survive_back_navigation() {
        let mut flow = ScopeFlow::new();
        flow.select_option("goal", "Recruit Talent");
        flow.advance_from(0);
        flow.back();
        assert_eq!(flow.answers().text("goal"), Some("Recruit Talent"));
    }

    #[test]
    fn restart_resets_everything_in_memory() {
        let mut flow = ScopeFlow::new();
        flow.select_option("goal", "Sell Online");
        while flow.advance() != Transition::Completed {}

        flow.restart();
        assert_eq!(flow, ScopeFlow::new());
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let mut flow = ScopeFlow::new();
        assert_eq!(flow.select_option("budget", "lots"), Transition::Ignored);
        assert_eq!(flow.submit_text("budget", "lots"), Transition::Ignored);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.step(), 0);
    }

    #[test]
    fn progress_reaches_one_hundred_on_completion() {
        let mut flow = ScopeFlow::new();
        assert_eq!(flow.progress_percent(), 0);
        while flow.advance() != Transition::Completed {}
        assert_eq!(flow.progress_percent(), 100);
    }
}
