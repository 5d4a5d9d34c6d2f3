use yew::prelude::*;
use yew_router::prelude::*;

use crate::head::{use_head, HeadTags};
use crate::i18n::Lang;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub lang: Lang,
}

fn legal_links(lang: Lang) -> Html {
    let s = lang.strings();
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Imprint { lang: lang.code().to_string() }}>{s.imprint}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy { lang: lang.code().to_string() }}>{s.privacy}</Link<Route>>
        </div>
    }
}

// Legal texts are authored in German; the other languages get a short
// notice above them.
fn german_only_notice(lang: Lang) -> Html {
    match lang {
        Lang::De => html! {},
        Lang::En => html! { <p class="legal-notice">{"The legally binding version of this page is German."}</p> },
        Lang::Ja => html! { <p class="legal-notice">{"このページの法的拘束力のある版はドイツ語です。"}</p> },
    }
}

#[function_component(Imprint)]
pub fn imprint(props: &LegalProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/imprint", s.imprint, s.imprint));

    html! {
        <div class="legal-content">
            <div>
                <h1>{s.imprint}</h1>
                {german_only_notice(lang)}
                <section>
                    <h2>{"Angaben gemäß § 5 DDG"}</h2>
                    <p>{"Kobalt Studio"}</p>
                    <p>{"Inhaber: Jonas Brandt"}</p>
                    <p>{"Schanzenstraße 12, 20357 Hamburg"}</p>
                </section>
                <section>
                    <h2>{"Kontakt"}</h2>
                    <p>{"E-Mail: hallo@kobalt.studio"}</p>
                </section>
                <section>
                    <h2>{"Umsatzsteuer"}</h2>
                    <p>{"Umsatzsteuer-Identifikationsnummer gemäß § 27a UStG: DE000000000"}</p>
                </section>
                <section>
                    <h2>{"Verbraucherstreitbeilegung"}</h2>
                    <p>{"Wir sind nicht bereit oder verpflichtet, an Streitbeilegungsverfahren vor einer Verbraucherschlichtungsstelle teilzunehmen."}</p>
                </section>
                {legal_links(lang)}
            </div>
            {legal_style()}
        </div>
    }
}

#[function_component(Privacy)]
pub fn privacy(props: &LegalProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/privacy", s.privacy, s.privacy));

    html! {
        <div class="legal-content">
            <div>
                <h1>{s.privacy}</h1>
                {german_only_notice(lang)}
                <section>
                    <h2>{"1. Verantwortlicher"}</h2>
                    <p>{"Kobalt Studio, Schanzenstraße 12, 20357 Hamburg, hallo@kobalt.studio"}</p>
                </section>
                <section>
                    <h2>{"2. Welche Daten wir verarbeiten"}</h2>
                    <ul>
                        <li>{"Angaben aus dem Kontaktformular (Name, E-Mail, Website, Nachricht)"}</li>
                        <li>{"Ihre Antworten im Projekt-Check sowie die daraus berechnete Einschätzung"}</li>
                        <li>{"Ihre E-Mail-Adresse beim Download der Checkliste"}</li>
                    </ul>
                </section>
                <section>
                    <h2>{"3. Zweck und Rechtsgrundlage"}</h2>
                    <p>{"Wir verwenden die Daten ausschließlich zur Beantwortung Ihrer Anfrage (Art. 6 Abs. 1 lit. b DSGVO). Eine Weitergabe an Dritte erfolgt nicht."}</p>
                </section>
                <section>
                    <h2>{"4. Speicher im Browser"}</h2>
                    <p>{"Wir setzen keine Cookies. Im Session-Speicher Ihres Browsers wird lediglich vermerkt, ob ein Hinweisfenster bereits angezeigt wurde."}</p>
                </section>
                <section>
                    <h2>{"5. Ihre Rechte"}</h2>
                    <p>{"Sie haben das Recht auf Auskunft, Berichtigung, Löschung und Einschränkung der Verarbeitung sowie auf Beschwerde bei einer Aufsichtsbehörde."}</p>
                </section>
                {legal_links(lang)}
            </div>
            {legal_style()}
        </div>
    }
}

fn legal_style() -> Html {
    html! {
        <style>
            {r#"
            .legal-content {
                min-height: 100vh;
                padding: 120px 2rem 4rem;
                color: #fff;
            }
            .legal-content > div {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(64, 112, 255, 0.1);
                border-radius: 16px;
                padding: 3rem;
                max-width: 800px;
                margin: 0 auto;
            }
            .legal-content h2 {
                color: #7EB2FF;
                font-size: 1.3rem;
                margin: 1.5rem 0 0.75rem;
            }
            .legal-notice {
                font-style: italic;
                color: #999;
            }
            .legal-links {
                margin-top: 2rem;
                text-align: center;
            }
            "#}
        </style>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub lang: Lang,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/404", s.not_found, ""));
    html! {
        <div class="legal-content">
            <div>
                <h1>{"404"}</h1>
                <p>{s.not_found}</p>
                <Link<Route> to={Route::Home { lang: lang.code().to_string() }} classes="cta-button">
                    {"Kobalt Studio"}
                </Link<Route>>
            </div>
            {legal_style()}
        </div>
    }
}
