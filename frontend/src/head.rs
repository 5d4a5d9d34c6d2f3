use log::warn;
use yew::prelude::*;

use crate::config::SITE_ORIGIN;
use crate::i18n::Lang;

const MANAGED_ATTR: &str = "data-head-managed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Meta { name: &'static str, content: String },
    Property { property: &'static str, content: String },
    Link { rel: &'static str, href: String, hreflang: Option<&'static str> },
}

/// Everything a page wants in `<head>`, built without touching the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTags {
    pub title: String,
    pub lang: Lang,
    pub tags: Vec<HeadTag>,
}

impl HeadTags {
    /// `path` is the page path without the language prefix, e.g. `/scope`
    /// or `""` for the home page.
    pub fn for_page(lang: Lang, path: &str, title: &str, description: &str) -> Self {
        let full_title = if title.is_empty() {
            "Kobalt Studio".to_string()
        } else if title.contains("Kobalt Studio") {
            title.to_string()
        } else {
            format!("{} | Kobalt Studio", title)
        };

        let mut tags = vec![
            HeadTag::Meta { name: "description", content: description.to_string() },
            HeadTag::Property { property: "og:title", content: full_title.clone() },
            HeadTag::Property { property: "og:description", content: description.to_string() },
            HeadTag::Property { property: "og:locale", content: lang.og_locale().to_string() },
            HeadTag::Property { property: "og:url", content: page_url(lang, path) },
            HeadTag::Link { rel: "canonical", href: page_url(lang, path), hreflang: None },
        ];
        for alt in Lang::ALL {
            tags.push(HeadTag::Link {
                rel: "alternate",
                href: page_url(alt, path),
                hreflang: Some(alt.code()),
            });
        }
        tags.push(HeadTag::Link {
            rel: "alternate",
            href: page_url(Lang::De, path),
            hreflang: Some("x-default"),
        });

        Self { title: full_title, lang, tags }
    }
}

pub fn page_url(lang: Lang, path: &str) -> String {
    format!("{}/{}{}", SITE_ORIGIN, lang.code(), path)
}

pub trait HeadManager {
    fn apply(&self, head: &HeadTags);
}

/// The only code that writes to `document.head`.
pub struct DomHeadManager;

impl DomHeadManager {
    fn try_apply(&self, head: &HeadTags) -> Result<(), wasm_bindgen::JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let head_el = document.head().ok_or("no head")?;

        document.set_title(&head.title);
        if let Some(html) = document.document_element() {
            html.set_attribute("lang", head.lang.code())?;
        }

        let stale = document.query_selector_all(&format!("[{}]", MANAGED_ATTR))?;
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                head_el.remove_child(&node)?;
            }
        }

        for tag in &head.tags {
            let el = match tag {
                HeadTag::Meta { name, content } => {
                    let el = document.create_element("meta")?;
                    el.set_attribute("name", name)?;
                    el.set_attribute("content", content)?;
                    el
                }
                HeadTag::Property { property, content } => {
                    let el = document.create_element("meta")?;
                    el.set_attribute("property", property)?;
                    el.set_attribute("content", content)?;
                    el
                }
                HeadTag::Link { rel, href, hreflang } => {
                    let el = document.create_element("link")?;
                    el.set_attribute("rel", rel)?;
                    el.set_attribute("href", href)?;
                    if let Some(h) = hreflang {
                        el.set_attribute("hreflang", h)?;
                    }
                    el
                }
            };
            el.set_attribute(MANAGED_ATTR, "")?;
            head_el.append_child(&el)?;
        }
        Ok(())
    }
}

impl HeadManager for DomHeadManager {
    fn apply(&self, head: &HeadTags) {
        if let Err(e) = self.try_apply(head) {
            warn!("Failed to update head tags: {:?}", e);
        }
    }
}

#[hook]
pub fn use_head(head: HeadTags) {
    use_effect_with_deps(
        move |head| {
            DomHeadManager.apply(head);
            || ()
        },
        head,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_get_the_brand_suffix_once() {
        assert_eq!(HeadTags::for_page(Lang::En, "", "Services", "").title, "Services | Kobalt Studio");
        assert_eq!(
            HeadTags::for_page(Lang::En, "", "Services | Kobalt Studio", "").title,
            "Services | Kobalt Studio"
        );
        assert_eq!(HeadTags::for_page(Lang::En, "", "", "").title, "Kobalt Studio");
    }

    #[test]
    fn canonical_points_at_the_current_language() {
        let head = HeadTags::for_page(Lang::Ja, "/scope", "Scope", "d");
        assert!(head.tags.contains(&HeadTag::Link {
            rel: "canonical",
            href: "https://kobalt.studio/ja/scope".into(),
            hreflang: None,
        }));
    }

    #[test]
    fn every_language_has_an_alternate_plus_x_default() {
        let head = HeadTags::for_page(Lang::En, "/calculator", "Calc", "d");
        let alternates: Vec<_> = head
            .tags
            .iter()
            .filter_map(|t| match t {
                HeadTag::Link { rel: "alternate", hreflang, .. } => *hreflang,
                _ => None,
            })
            .collect();
        assert_eq!(alternates, ["de", "en", "ja", "x-default"]);
    }

    #[test]
    fn og_locale_follows_language() {
        let head = HeadTags::for_page(Lang::De, "", "Start", "d");
        assert!(head.tags.contains(&HeadTag::Property {
            property: "og:locale",
            content: "de_DE".into(),
        }));
    }
}
