use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{self, LeadData, LeadKind, LeadSubmission};
use crate::head::{use_head, HeadTags};
use crate::i18n::Lang;
use crate::pdf;
use crate::scope::answers::{Answer, AnswerMap};
use crate::scope::estimate::{compute_estimate, format_price, Estimate};
use crate::scope::flow::{question_prompt, ScopeFlow, Transition, DEFAULT_AUTO_ADVANCE_MS};
use crate::scope::gate::LeadGate;
use crate::scope::questions::{self, QuestionKind};
use crate::scope::sitemap::{derive_sitemap, SitemapNode};

const GENERATING_MS: u32 = 1800;

pub enum FlowAction {
    Select { id: &'static str, option: &'static str },
    SubmitText { id: &'static str, text: String },
    Next,
    AdvanceFrom(usize),
    Back,
    Restart,
}

/// Reducer wrapper so delayed timers always act on the latest state.
#[derive(Clone, PartialEq, Default)]
pub struct FlowState {
    pub flow: ScopeFlow,
    pub last: Option<Transition>,
}

impl Reducible for FlowState {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let transition = match action {
            FlowAction::Select { id, option } => next.flow.select_option(id, option),
            FlowAction::SubmitText { id, text } => next.flow.submit_text(id, &text),
            FlowAction::Next => next.flow.advance(),
            FlowAction::AdvanceFrom(step) => next.flow.advance_from(step),
            FlowAction::Back => next.flow.back(),
            FlowAction::Restart => {
                next.flow.restart();
                Transition::Stay
            }
        };
        next.last = Some(transition);
        Rc::new(next)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ReportPhase {
    Asking,
    Generating,
    Ready,
}

/// Numbers each completion so a generating timer only finishes the
/// completion that started it.
#[derive(Clone, Default)]
struct CompletionTicket(Rc<Cell<u32>>);

impl CompletionTicket {
    fn issue(&self) -> u32 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.0.get() == ticket
    }
}

#[derive(Properties, PartialEq)]
pub struct ScopeToolProps {
    pub lang: Lang,
    #[prop_or(DEFAULT_AUTO_ADVANCE_MS)]
    pub auto_advance_ms: u32,
}

#[function_component(ScopeTool)]
pub fn scope_tool(props: &ScopeToolProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/scope", s.nav_scope, s.hero_cta));

    let state = use_reducer(FlowState::default);
    let phase = use_state(|| ReportPhase::Asking);
    let gate = use_state(LeadGate::new);
    let gate_email = use_state(String::new);
    let gate_error = use_state(|| false);
    let pdf_error = use_state(|| false);

    // Single-select answers advance after a short delay.
    {
        let dispatcher = state.dispatcher();
        let delay = props.auto_advance_ms;
        use_effect_with_deps(
            move |last| {
                if let Some(Transition::AdvancePending { step }) = *last {
                    if delay == 0 {
                        dispatcher.dispatch(FlowAction::AdvanceFrom(step));
                    } else {
                        Timeout::new(delay, move || dispatcher.dispatch(FlowAction::AdvanceFrom(step)))
                            .forget();
                    }
                }
                || ()
            },
            state.last,
        );
    }

    // Completion shows the artificial generating phase first.
    let completions = use_state(CompletionTicket::default);
    {
        let phase = phase.clone();
        let completions = (*completions).clone();
        use_effect_with_deps(
            move |complete| {
                let ticket = completions.issue();
                if *complete {
                    phase.set(ReportPhase::Generating);
                    let phase = phase.clone();
                    Timeout::new(GENERATING_MS, move || {
                        if completions.is_current(ticket) {
                            phase.set(ReportPhase::Ready);
                        }
                    })
                    .forget();
                } else {
                    phase.set(ReportPhase::Asking);
                }
                || ()
            },
            state.flow.is_complete(),
        );
    }

    let restart = {
        let state = state.clone();
        let gate = gate.clone();
        let gate_email = gate_email.clone();
        let gate_error = gate_error.clone();
        let pdf_error = pdf_error.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Restarting scope tool");
            state.dispatch(FlowAction::Restart);
            gate.set(LeadGate::new());
            gate_email.set(String::new());
            gate_error.set(false);
            pdf_error.set(false);
        })
    };

    let body = match (state.flow.is_complete(), *phase) {
        (false, _) => render_question(lang, &state),
        (true, ReportPhase::Asking | ReportPhase::Generating) => html! {
            <div class="scope-generating">
                <div class="spinner"></div>
                <p>{s.generating}</p>
            </div>
        },
        (true, ReportPhase::Ready) => {
            let answers = state.flow.answers().clone();
            let estimate = compute_estimate(&answers);
            let sitemap = derive_sitemap(&answers);

            let on_email = {
                let gate_email = gate_email.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    gate_email.set(input.value());
                })
            };

            let on_unlock = {
                let gate = gate.clone();
                let gate_email = gate_email.clone();
                let gate_error = gate_error.clone();
                let answers = answers.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    let mut next = (*gate).clone();
                    if next.unlock(&gate_email) {
                        gate_error.set(false);
                        api::submit_lead_in_background(LeadSubmission {
                            kind: LeadKind::ScopeReport,
                            lang,
                            data: LeadData {
                                email: next.email().unwrap_or_default().to_string(),
                                answers: Some(answers.clone()),
                                estimate: Some(estimate),
                                ..Default::default()
                            },
                        });
                        gate.set(next);
                    } else {
                        gate_error.set(true);
                    }
                })
            };

            let on_download = {
                let answers = answers.clone();
                let sitemap = sitemap.clone();
                let pdf_error = pdf_error.clone();
                Callback::from(move |_: MouseEvent| {
                    let document = pdf::scope_report_document(lang, &answers, &estimate, &sitemap);
                    if let Err(e) = pdf::render_and_download(&document) {
                        error!("Report PDF failed: {}", e);
                        pdf_error.set(true);
                    }
                })
            };

            let locked = gate.is_locked();
            html! {
                <div class="scope-report">
                    <div class={classes!("report-body", locked.then(|| "blurred"))}>
                        <h2>{s.report_title}</h2>
                        { render_estimate(lang, &estimate) }
                        { render_sitemap(lang, &sitemap) }
                        { render_summary(lang, &answers) }
                        if !locked {
                            <button class="cta-button" onclick={on_download}>{s.download_pdf}</button>
                            if *pdf_error {
                                <p class="form-error">{s.pdf_failed}</p>
                            }
                        }
                    </div>
                    if locked {
                        <form class="report-gate" onsubmit={on_unlock}>
                            <h3>{s.gate_title}</h3>
                            <input type="email" placeholder={s.email} value={(*gate_email).clone()} oninput={on_email} />
                            <button type="submit" class="cta-button">{s.gate_button}</button>
                            if *gate_error {
                                <p class="form-error">{s.gate_invalid}</p>
                            }
                        </form>
                    }
                </div>
            }
        }
    };

    html! {
        <div class="scope-page">
            <div class="scope-progress">
                <div class="scope-progress-bar" style={format!("width: {}%;", state.flow.progress_percent())}></div>
            </div>
            { body }
            <button class="scope-restart" onclick={restart}>{s.restart}</button>
            <style>
                {r#"
                .scope-page {
                    padding: 6rem 1.5rem 4rem;
                    max-width: 760px;
                    margin: 0 auto;
                    color: #fff;
                }
                .scope-progress {
                    height: 4px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 2px;
                    margin-bottom: 2rem;
                }
                .scope-progress-bar {
                    height: 100%;
                    background: #4070ff;
                    border-radius: 2px;
                    transition: width 0.3s ease;
                }
                .scope-phase {
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #8aa4ff;
                    font-size: 0.8rem;
                }
                .scope-options {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                    margin: 1.5rem 0;
                }
                .scope-option {
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(64, 112, 255, 0.3);
                    background: rgba(16, 24, 40, 0.8);
                    color: #fff;
                    cursor: pointer;
                    text-align: left;
                }
                .scope-option.selected {
                    border-color: #4070ff;
                    background: rgba(64, 112, 255, 0.2);
                }
                .scope-generating {
                    text-align: center;
                    padding: 4rem 0;
                }
                .report-body.blurred {
                    filter: blur(6px);
                    pointer-events: none;
                    user-select: none;
                }
                .report-gate {
                    margin-top: -8rem;
                    position: relative;
                    background: #101828;
                    padding: 2rem;
                    border-radius: 16px;
                }
                .sitemap {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    align-items: center;
                }
                .sitemap-node {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #4070ff;
                }
                .node-root { background: #4070ff; }
                .node-dynamic { border-style: dashed; }
                .node-commerce { border-color: #ffb340; }
                .scope-restart {
                    margin-top: 2rem;
                    background: none;
                    border: none;
                    color: #8aa4ff;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

fn render_question(lang: Lang, state: &UseReducerHandle<FlowState>) -> Html {
    let s = lang.strings();
    let Some(question) = state.flow.current() else {
        return html! {};
    };
    let answers = state.flow.answers();

    let back = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FlowAction::Back))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FlowAction::Next))
    };

    let input = match question.kind {
        QuestionKind::Single | QuestionKind::Multi => {
            let options = question.options.iter().map(|option| {
                let selected = answers.is_selected(question.id, option.value);
                let onclick = {
                    let state = state.clone();
                    let id = question.id;
                    let value = option.value;
                    Callback::from(move |_: MouseEvent| {
                        state.dispatch(FlowAction::Select { id, option: value })
                    })
                };
                html! {
                    <button class={classes!("scope-option", selected.then(|| "selected"))} {onclick}>
                        {option.label.get(lang)}
                    </button>
                }
            });
            html! {
                <>
                    <div class="scope-options">{ for options }</div>
                    if question.kind == QuestionKind::Multi {
                        <button class="cta-button" onclick={next}>{s.next}</button>
                    }
                </>
            }
        }
        QuestionKind::Text => {
            let id = question.id;
            let initial = answers.text(id).unwrap_or_default().to_string();
            let onsubmit = {
                let state = state.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    let text = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id("scope-text"))
                        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
                        .map(|ta| ta.value())
                        .unwrap_or_default();
                    state.dispatch(FlowAction::SubmitText { id, text });
                })
            };
            html! {
                <form class="scope-text" {onsubmit}>
                    <textarea id="scope-text" rows="4" value={initial}></textarea>
                    <button type="submit" class="cta-button">{s.next}</button>
                </form>
            }
        }
    };

    html! {
        <div class="scope-question" key={question.id}>
            <span class="scope-phase">
                {format!("{} · {} {} {}", question.phase.get(lang), state.flow.step() + 1, s.step_of, state.flow.len())}
            </span>
            <h2>{question.prompt.get(lang)}</h2>
            <p class="scope-help">{question.help_text.get(lang)}</p>
            { input }
            if state.flow.step() > 0 {
                <button class="scope-back" onclick={back}>{s.back}</button>
            }
        </div>
    }
}

fn render_estimate(lang: Lang, estimate: &Estimate) -> Html {
    let s = lang.strings();
    html! {
        <div class="report-estimate">
            <div>
                <h4>{s.price_range}</h4>
                <p>{format!("{} - {}", format_price(estimate.min_price), format_price(estimate.max_price))}</p>
            </div>
            <div>
                <h4>{s.timeline}</h4>
                <p>{format!("{} - {} {}", estimate.min_weeks, estimate.max_weeks, s.weeks)}</p>
            </div>
        </div>
    }
}

fn render_sitemap(lang: Lang, nodes: &[SitemapNode]) -> Html {
    html! {
        <div class="report-sitemap">
            <h4>{lang.strings().sitemap_title}</h4>
            <div class="sitemap">
                { for nodes.iter().map(|n| html! {
                    <span class={classes!("sitemap-node", n.kind.css_class())}>{&n.label}</span>
                }) }
            </div>
        </div>
    }
}

fn render_summary(lang: Lang, answers: &AnswerMap) -> Html {
    html! {
        <div class="report-answers">
            <h4>{lang.strings().answers_title}</h4>
            <dl>
                { for answers.in_flow_order().map(|(id, answer)| {
                    let shown = match answer {
                        Answer::Multi(items) => items
                            .iter()
                            .map(|v| {
                                questions::find(id)
                                    .and_then(|q| q.option_label(v, lang))
                                    .map(str::to_string)
                                    .unwrap_or_else(|| v.clone())
                            })
                            .collect::<Vec<String>>()
                            .join(", "),
                        other => {
                            let v = other.display();
                            questions::find(id)
                                .and_then(|q| q.option_label(&v, lang))
                                .map(str::to_string)
                                .unwrap_or(v)
                        }
                    };
                    html! {
                        <>
                            <dt>{question_prompt(id, lang)}</dt>
                            <dd>{shown}</dd>
                        </>
                    }
                }) }
            </dl>
        </div>
    }
}
