use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::{self, Block, ContentSource, PageContent};
use crate::head::{use_head, HeadTags};
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct BlockViewProps {
    pub block: Block,
}

#[function_component(BlockView)]
pub fn block_view(props: &BlockViewProps) -> Html {
    match &props.block {
        Block::Hero { title, subtitle, cta } => html! {
            <section class="cms-hero">
                <h1>{title}</h1>
                if let Some(subtitle) = subtitle {
                    <p>{subtitle}</p>
                }
                if let Some(cta) = cta {
                    <a class="cta-button" href={cta.href.clone()}>{&cta.label}</a>
                }
            </section>
        },
        Block::RichText { heading, paragraphs } => html! {
            <section class="cms-text">
                if let Some(heading) = heading {
                    <h2>{heading}</h2>
                }
                { for paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
            </section>
        },
        Block::FeatureGrid { heading, items } => html! {
            <section class="cms-features">
                if let Some(heading) = heading {
                    <h2>{heading}</h2>
                }
                <div class="cms-feature-grid">
                    { for items.iter().map(|f| html! {
                        <div class="cms-feature">
                            if let Some(icon) = &f.icon {
                                <span class="cms-feature-icon">{icon}</span>
                            }
                            <h3>{&f.title}</h3>
                            <p>{&f.text}</p>
                        </div>
                    }) }
                </div>
            </section>
        },
        Block::Faq { heading, items } => html! {
            <section class="cms-faq">
                if let Some(heading) = heading {
                    <h2>{heading}</h2>
                }
                { for items.iter().map(|item| html! {
                    <details class="faq-item">
                        <summary>{&item.question}</summary>
                        <p>{&item.answer}</p>
                    </details>
                }) }
            </section>
        },
        Block::Comparison { heading, columns, rows } => html! {
            <section class="cms-comparison">
                if let Some(heading) = heading {
                    <h2>{heading}</h2>
                }
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th></th>
                            { for columns.iter().map(|c| html! { <th>{c}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr>
                                <td>{&row.label}</td>
                                { for row.values.iter().map(|v| html! { <td>{v}</td> }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        },
        Block::Quote { text, author } => html! {
            <blockquote class="cms-quote">
                <p>{text}</p>
                if let Some(author) = author {
                    <cite>{author}</cite>
                }
            </blockquote>
        },
        Block::Cta { title, text, button } => html! {
            <section class="cms-cta">
                <h2>{title}</h2>
                if let Some(text) = text {
                    <p>{text}</p>
                }
                <a class="cta-button" href={button.href.clone()}>{&button.label}</a>
            </section>
        },
        Block::Unknown => html! {},
    }
}

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded(PageContent),
    Missing,
}

#[derive(Properties, PartialEq)]
pub struct CmsPageProps {
    pub lang: Lang,
    pub source: ContentSource,
}

/// Renders a content page; industry pages never show the missing state
/// because `content::load` substitutes the built-in page.
#[function_component(CmsPage)]
pub fn cms_page(props: &CmsPageProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |source: &ContentSource| {
                state.set(LoadState::Loading);
                let source = source.clone();
                spawn_local(async move {
                    match content::load(source).await {
                        Ok(page) => state.set(LoadState::Loaded(page)),
                        Err(e) => {
                            warn!("Content unavailable: {}", e);
                            state.set(LoadState::Missing);
                        }
                    }
                });
                || ()
            },
            props.source.clone(),
        );
    }

    let path = match &props.source {
        ContentSource::Page { slug, .. } => format!("/p/{}", slug),
        ContentSource::Industry { slug } => format!("/industry/{}", slug),
    };
    let head = match &*state {
        LoadState::Loaded(page) => {
            HeadTags::for_page(lang, &path, &page.seo.title, &page.seo.description)
        }
        LoadState::Loading => HeadTags::for_page(lang, &path, "", ""),
        LoadState::Missing => HeadTags::for_page(lang, &path, s.not_found, ""),
    };
    use_head(head);

    html! {
        <div class="cms-page">
            {
                match &*state {
                    LoadState::Loading => html! { <p class="cms-loading">{s.loading}</p> },
                    LoadState::Missing => html! { <h1 class="cms-missing">{s.not_found}</h1> },
                    LoadState::Loaded(page) => html! {
                        <>
                            { for page.blocks.iter().map(|block| html! { <BlockView block={block.clone()} /> }) }
                        </>
                    },
                }
            }
            <style>
                {r#"
                .cms-page {
                    padding: 120px 1.5rem 4rem;
                    max-width: 960px;
                    margin: 0 auto;
                    color: #ffffff;
                }
                .cms-page section {
                    margin-bottom: 3rem;
                }
                .cms-feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                }
                .cms-feature {
                    padding: 1.25rem;
                    border-radius: 12px;
                    background: rgba(30, 30, 30, 0.7);
                }
                .faq-item {
                    padding: 1rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .cms-quote {
                    font-style: italic;
                    border-left: 3px solid #4070ff;
                    padding-left: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
