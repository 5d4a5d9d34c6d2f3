use yew::prelude::*;
use yew_router::components::Link;

use crate::components::contact_form::ContactForm;
use crate::head::{use_head, HeadTags};
use crate::i18n::{Lang, Localized};
use crate::Route;

struct ComparisonRow {
    label: Localized,
    agency: Localized,
    freelancer: Localized,
    builder: Localized,
}

const YES: Localized = Localized::new("Ja", "Yes", "あり");
const NO: Localized = Localized::new("Nein", "No", "なし");

static COMPARISON: [ComparisonRow; 5] = [
    ComparisonRow {
        label: Localized::new("Individuelles Design", "Custom design", "オリジナルデザイン"),
        agency: YES,
        freelancer: YES,
        builder: NO,
    },
    ComparisonRow {
        label: Localized::new("Technisches SEO", "Technical SEO", "テクニカルSEO"),
        agency: YES,
        freelancer: Localized::new("Teilweise", "Partly", "一部"),
        builder: NO,
    },
    ComparisonRow {
        label: Localized::new("Ladezeit unter 1 s", "Load time under 1 s", "1秒未満の表示速度"),
        agency: YES,
        freelancer: Localized::new("Teilweise", "Partly", "一部"),
        builder: NO,
    },
    ComparisonRow {
        label: Localized::new("Wartung & Support", "Care & support", "保守・サポート"),
        agency: YES,
        freelancer: Localized::new("Je nach Verfügbarkeit", "When available", "状況次第"),
        builder: Localized::new("Nur Hosting", "Hosting only", "ホスティングのみ"),
    },
    ComparisonRow {
        label: Localized::new("Startpreis", "Starting price", "開始価格"),
        agency: Localized::new("ab 2.500 €", "from €2,500", "2,500ユーロ〜"),
        freelancer: Localized::new("ab 1.200 €", "from €1,200", "1,200ユーロ〜"),
        builder: Localized::new("ab 15 €/Monat", "from €15/month", "月15ユーロ〜"),
    },
];

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub lang: Lang,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    let lang = props.lang;
    html! {
        <table class="comparison-table">
            <thead>
                <tr>
                    <th></th>
                    <th class="highlight">{"Kobalt Studio"}</th>
                    <th>{Localized::new("Freelancer", "Freelancer", "フリーランス").get(lang)}</th>
                    <th>{Localized::new("Baukasten", "Site builder", "サイトビルダー").get(lang)}</th>
                </tr>
            </thead>
            <tbody>
                { for COMPARISON.iter().map(|row| html! {
                    <tr>
                        <td>{row.label.get(lang)}</td>
                        <td class="highlight">{row.agency.get(lang)}</td>
                        <td>{row.freelancer.get(lang)}</td>
                        <td>{row.builder.get(lang)}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Lang,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "", s.hero_title, s.home_description));

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{s.hero_title}</h1>
                <p>{s.hero_subtitle}</p>
                <Link<Route> to={Route::Scope { lang: lang.code().to_string() }} classes="cta-button">
                    {s.hero_cta}
                </Link<Route>>
            </section>

            <section class="home-tools">
                <Link<Route> to={Route::Calculator { lang: lang.code().to_string() }} classes="tool-card">
                    <h3>{s.nav_calculator}</h3>
                    <p>{s.calculator_title}</p>
                </Link<Route>>
                <Link<Route> to={Route::Checklist { lang: lang.code().to_string() }} classes="tool-card">
                    <h3>{s.nav_checklist}</h3>
                    <p>{s.checklist_intro}</p>
                </Link<Route>>
            </section>

            <section class="home-compare">
                <h2>{s.compare_title}</h2>
                <ComparisonTable lang={lang} />
            </section>

            <section class="home-contact" id="contact">
                <h2>{s.contact_title}</h2>
                <ContactForm lang={lang} />
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: radial-gradient(circle at top, rgba(64, 112, 255, 0.25), transparent 60%);
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1rem;
                }
                .home-tools {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    max-width: 900px;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                }
                .tool-card {
                    display: block;
                    padding: 1.5rem;
                    border-radius: 16px;
                    border: 1px solid rgba(64, 112, 255, 0.3);
                    color: inherit;
                    text-decoration: none;
                }
                .home-compare, .home-contact {
                    max-width: 900px;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                }
                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .comparison-table th, .comparison-table td {
                    padding: 0.75rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: left;
                }
                .comparison-table .highlight {
                    background: rgba(64, 112, 255, 0.12);
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
