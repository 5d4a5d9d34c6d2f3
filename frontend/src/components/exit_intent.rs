use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lead_magnet::LeadMagnetForm;
use crate::i18n::Lang;

const SESSION_KEY: &str = "exit_intent_shown";
const TOP_EDGE_PX: i32 = 10;
const MIN_DWELL_MS: f64 = 8000.0;

/// Fires at most once, when the pointer leaves through the top edge after
/// the visitor has been on the site for a while.
#[derive(Clone, Debug, PartialEq)]
pub struct ExitIntent {
    armed_at_ms: f64,
    fired: bool,
}

impl ExitIntent {
    pub fn new(now_ms: f64, already_shown: bool) -> Self {
        Self { armed_at_ms: now_ms, fired: already_shown }
    }

    /// `client_y` of the mouseout event, `leaving_window` whether the pointer
    /// left the document rather than moving onto another element.
    pub fn on_mouse_out(&mut self, client_y: i32, leaving_window: bool, now_ms: f64) -> bool {
        if self.fired || !leaving_window || client_y > TOP_EDGE_PX {
            return false;
        }
        if now_ms - self.armed_at_ms < MIN_DWELL_MS {
            return false;
        }
        self.fired = true;
        true
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn already_shown() -> bool {
    session_storage()
        .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
        .is_some()
}

fn remember_shown() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SESSION_KEY, "1");
    }
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

#[derive(Properties, PartialEq)]
pub struct ExitIntentProps {
    pub lang: Lang,
}

#[function_component(ExitIntentPopup)]
pub fn exit_intent_popup(props: &ExitIntentProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let mut trigger = ExitIntent::new(now_ms(), already_shown());

                let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let leaving_window = e.related_target().is_none();
                    if trigger.on_mouse_out(e.client_y(), leaving_window, now_ms()) {
                        info!("Exit intent detected");
                        remember_shown();
                        visible.set(true);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document.add_event_listener_with_callback("mouseout", listener.as_ref().unchecked_ref()) {
                        warn!("Could not watch for exit intent: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback("mouseout", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    let s = props.lang.strings();
    let close = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div class="exit-overlay">
            <div class="exit-popup">
                <button class="exit-close" onclick={close} aria-label={s.close}>{"✕"}</button>
                <h2>{s.exit_title}</h2>
                <p>{s.exit_body}</p>
                <LeadMagnetForm lang={props.lang} />
            </div>
            <style>
                {r#"
                .exit-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 16, 32, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .exit-popup {
                    position: relative;
                    max-width: 460px;
                    width: 90%;
                    background: #101828;
                    border: 1px solid rgba(64, 112, 255, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    color: #fff;
                }
                .exit-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #aaa;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
