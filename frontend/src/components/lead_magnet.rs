use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{self, LeadData, LeadKind, LeadSubmission};
use crate::i18n::Lang;
use crate::pdf;
use crate::scope::gate::looks_like_email;

#[derive(Clone, Copy, PartialEq)]
enum Status {
    Idle,
    Invalid,
    Done,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct LeadMagnetProps {
    pub lang: Lang,
}

#[function_component(LeadMagnetForm)]
pub fn lead_magnet_form(props: &LeadMagnetProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let website = use_state(String::new);
    let status = use_state(|| Status::Idle);

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let website = website.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !looks_like_email(email.trim()) {
                status.set(Status::Invalid);
                return;
            }

            api::submit_lead_in_background(LeadSubmission {
                kind: LeadKind::LeadMagnet,
                lang,
                data: LeadData {
                    name: (*name).clone(),
                    email: email.trim().to_string(),
                    current_website: (*website).clone(),
                    ..Default::default()
                },
            });

            let document = pdf::checklist_document(lang, &name, &website);
            match pdf::render_and_download(&document) {
                Ok(()) => {
                    info!("Checklist downloaded");
                    status.set(Status::Done);
                }
                Err(e) => {
                    error!("Checklist generation failed: {}", e);
                    status.set(Status::Failed);
                }
            }
        })
    };

    html! {
        <form class="lead-magnet-form" {onsubmit}>
            <input type="text" placeholder={s.name} value={(*name).clone()} oninput={bind(&name)} />
            <input type="email" placeholder={s.email} value={(*email).clone()} oninput={bind(&email)} required=true />
            <input type="url" placeholder={s.current_website} value={(*website).clone()} oninput={bind(&website)} />
            <button type="submit" class="cta-button">{s.checklist_button}</button>
            {
                match *status {
                    Status::Idle => html! {},
                    Status::Invalid => html! { <p class="form-error">{s.gate_invalid}</p> },
                    Status::Done => html! { <p class="form-success">{s.checklist_done}</p> },
                    Status::Failed => html! { <p class="form-error">{s.pdf_failed}</p> },
                }
            }
        </form>
    }
}
