use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::calculators::{format_euros, load_time_loss, lost_revenue, parse_field, LostRevenueInput};
use crate::head::{use_head, HeadTags};
use crate::i18n::Lang;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub lang: Lang,
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    label: &'static str,
    value: f64,
    step: &'static str,
    on_change: Callback<f64>,
}

/// Unparseable input keeps the last valid value.
#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(value) = parse_field(&input.value()) {
                on_change.emit(value);
            }
        })
    };
    html! {
        <label class="calc-field">
            <span>{props.label}</span>
            <input type="number" min="0" step={props.step} value={props.value.to_string()} {oninput} />
        </label>
    }
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/calculator", s.calculator_title, s.calculator_title));

    let input = use_state(LostRevenueInput::default);
    let monthly_revenue = use_state(|| 10_000.0_f64);
    let load_seconds = use_state(|| 4.0_f64);

    let gap = lost_revenue(&input);
    let load_loss = load_time_loss(*monthly_revenue, *load_seconds);

    let update = |apply: fn(&mut LostRevenueInput, f64)| {
        let input = input.clone();
        Callback::from(move |value: f64| {
            let mut next = *input;
            apply(&mut next, value);
            input.set(next);
        })
    };
    let set_revenue = {
        let monthly_revenue = monthly_revenue.clone();
        Callback::from(move |v: f64| monthly_revenue.set(v))
    };
    let set_seconds = {
        let load_seconds = load_seconds.clone();
        Callback::from(move |v: f64| load_seconds.set(v))
    };

    html! {
        <div class="calculator-page">
            <h1>{s.calculator_title}</h1>

            <section class="calc-card">
                <NumberField label={s.monthly_visitors} value={input.monthly_visitors} step="100"
                    on_change={update(|i, v| i.monthly_visitors = v)} />
                <NumberField label={s.current_conversion} value={input.current_conversion_pct} step="0.1"
                    on_change={update(|i, v| i.current_conversion_pct = v)} />
                <NumberField label={s.target_conversion} value={input.target_conversion_pct} step="0.1"
                    on_change={update(|i, v| i.target_conversion_pct = v)} />
                <NumberField label={s.deal_value} value={input.average_deal_value} step="10"
                    on_change={update(|i, v| i.average_deal_value = v)} />
                <div class="calc-result">
                    <p>{s.monthly_gap}{": "}<strong>{format_euros(gap.monthly)}</strong></p>
                    <p>{s.yearly_gap}{": "}<strong>{format_euros(gap.yearly)}</strong></p>
                </div>
            </section>

            <section class="calc-card">
                <NumberField label={s.monthly_revenue} value={*monthly_revenue} step="500" on_change={set_revenue} />
                <NumberField label={s.load_seconds} value={*load_seconds} step="0.1" on_change={set_seconds} />
                <div class="calc-result">
                    <p>{s.load_loss}{": "}<strong>{format_euros(load_loss)}</strong></p>
                </div>
            </section>

            <Link<Route> to={Route::Scope { lang: lang.code().to_string() }} classes="cta-button">
                {s.hero_cta}
            </Link<Route>>

            <style>
                {r#"
                .calculator-page {
                    padding: 120px 1.5rem 4rem;
                    max-width: 720px;
                    margin: 0 auto;
                    color: #ffffff;
                }
                .calc-card {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    border-radius: 16px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(64, 112, 255, 0.2);
                }
                .calc-field {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .calc-field input {
                    width: 140px;
                    padding: 0.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: #111;
                    color: #fff;
                }
                .calc-result strong {
                    color: #7eb2ff;
                }
                "#}
            </style>
        </div>
    }
}
