use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{submit_lead, LeadData, LeadKind, LeadSubmission};
use crate::i18n::Lang;
use crate::scope::gate::looks_like_email;

#[derive(Clone, Copy, PartialEq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Invalid,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub lang: Lang,
}

/// The only lead form that reports delivery failure back to the visitor.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let website = use_state(String::new);
    let message = use_state(String::new);
    let send_state = use_state(|| SendState::Idle);

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let website = website.clone();
        let message = message.clone();
        let send_state = send_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *send_state == SendState::Sending {
                return;
            }
            if !looks_like_email(email.trim()) {
                send_state.set(SendState::Invalid);
                return;
            }
            send_state.set(SendState::Sending);

            let submission = LeadSubmission {
                kind: LeadKind::Contact,
                lang,
                data: LeadData {
                    name: (*name).clone(),
                    email: email.trim().to_string(),
                    current_website: (*website).clone(),
                    message: Some((*message).clone()),
                    ..Default::default()
                },
            };
            let send_state = send_state.clone();
            spawn_local(async move {
                match submit_lead(&submission).await {
                    Ok(()) => send_state.set(SendState::Sent),
                    Err(e) => {
                        error!("Contact form failed: {}", e);
                        send_state.set(SendState::Failed);
                    }
                }
            });
        })
    };

    if *send_state == SendState::Sent {
        return html! { <p class="form-success">{s.sent}</p> };
    }

    html! {
        <form class="contact-form" {onsubmit}>
            <input type="text" placeholder={s.name} value={(*name).clone()} oninput={bind_input(&name)} />
            <input type="email" placeholder={s.email} value={(*email).clone()} oninput={bind_input(&email)} />
            <input type="url" placeholder={s.current_website} value={(*website).clone()} oninput={bind_input(&website)} />
            <textarea placeholder={s.contact_message} rows="5" value={(*message).clone()} oninput={on_message}></textarea>
            <button type="submit" class="cta-button" disabled={*send_state == SendState::Sending}>
                { if *send_state == SendState::Sending { s.loading } else { s.send } }
            </button>
            if *send_state == SendState::Invalid {
                <p class="form-error">{s.gate_invalid}</p>
            }
            if *send_state == SendState::Failed {
                <p class="form-error">{s.send_failed}</p>
            }
        </form>
    }
}
