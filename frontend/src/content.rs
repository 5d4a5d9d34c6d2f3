use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;

use crate::error::SiteError;
use crate::i18n::Lang;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

/// A typed unit of page content. Unknown block types deserialize to
/// `Unknown` and render nothing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Hero {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        cta: Option<CallToAction>,
    },
    RichText {
        #[serde(default)]
        heading: Option<String>,
        paragraphs: Vec<String>,
    },
    FeatureGrid {
        #[serde(default)]
        heading: Option<String>,
        items: Vec<Feature>,
    },
    Faq {
        #[serde(default)]
        heading: Option<String>,
        items: Vec<FaqEntry>,
    },
    Comparison {
        #[serde(default)]
        heading: Option<String>,
        columns: Vec<String>,
        rows: Vec<ComparisonRow>,
    },
    Quote {
        text: String,
        #[serde(default)]
        author: Option<String>,
    },
    Cta {
        title: String,
        #[serde(default)]
        text: Option<String>,
        button: CallToAction,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageContent {
    pub slug: String,
    #[serde(default)]
    pub seo: SeoMeta,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Page { slug: String, lang: Lang },
    /// Industry landing pages are only authored in German.
    Industry { slug: String },
}

impl ContentSource {
    pub fn url(&self) -> String {
        match self {
            ContentSource::Page { slug, lang } => {
                format!("/content/pages/{}-{}.json", urlencoding::encode(slug), lang.code())
            }
            ContentSource::Industry { slug } => {
                format!("/content/industry/{}-de.json", urlencoding::encode(slug))
            }
        }
    }
}

pub fn parse_page(raw: &str) -> Result<PageContent, SiteError> {
    serde_json::from_str(raw).map_err(|e| SiteError::MissingContent(e.to_string()))
}

pub async fn fetch_page(source: &ContentSource) -> Result<PageContent, SiteError> {
    let url = source.url();
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(SiteError::MissingContent(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }
    let body = response.text().await?;
    let page = parse_page(&body)?;
    info!("Loaded content {}", url);
    Ok(page)
}

/// Loads the content and applies the fallback policy: industry pages fall
/// back to the built-in dataset, regular pages surface the error so the
/// caller can show a not-found message.
pub async fn load(source: ContentSource) -> Result<PageContent, SiteError> {
    match fetch_page(&source).await {
        Ok(page) => Ok(page),
        Err(e) => match &source {
            ContentSource::Industry { slug } => {
                warn!("Industry content {} unavailable ({}), using default", slug, e);
                Ok(default_industry_page(slug))
            }
            ContentSource::Page { .. } => Err(e),
        },
    }
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn default_industry_page(slug: &str) -> PageContent {
    let industry = title_case(slug);
    PageContent {
        slug: slug.to_string(),
        seo: SeoMeta {
            title: format!("Webdesign für {} | Kobalt Studio", industry),
            description: format!(
                "Websites für {}: schnell, auffindbar und auf Anfragen optimiert.",
                industry
            ),
        },
        blocks: vec![
            Block::Hero {
                title: format!("Webdesign für {}", industry),
                subtitle: Some("Mehr Anfragen aus Ihrer Region, ohne Agentur-Overhead.".into()),
                cta: Some(CallToAction {
                    label: "Projekt einschätzen".into(),
                    href: "/de/scope".into(),
                }),
            },
            Block::FeatureGrid {
                heading: Some("Was Sie bekommen".into()),
                items: vec![
                    Feature {
                        title: "Lokale SEO".into(),
                        text: "Gefunden werden, wenn Kunden in Ihrer Nähe suchen.".into(),
                        icon: None,
                    },
                    Feature {
                        title: "Ladezeit unter 1 Sekunde".into(),
                        text: "Schnelle Seiten halten Besucher auf der Seite.".into(),
                        icon: None,
                    },
                    Feature {
                        title: "Anfrage-Formulare".into(),
                        text: "Anfragen landen direkt in Ihrem Postfach.".into(),
                        icon: None,
                    },
                ],
            },
            Block::Cta {
                title: "Bereit für mehr Anfragen?".into(),
                text: None,
                button: CallToAction {
                    label: "Kostenlose Einschätzung".into(),
                    href: "/de/scope".into(),
                },
            },
        ],
    }
}
