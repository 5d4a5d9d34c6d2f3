use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod error;
mod i18n;
mod api;
mod calculators;
mod content;
mod head;
mod pdf;
mod scope {
    pub mod questions;
    pub mod answers;
    pub mod flow;
    pub mod estimate;
    pub mod sitemap;
    pub mod gate;
}
mod pages {
    pub mod home;
    pub mod scope_tool;
    pub mod calculator;
    pub mod checklist;
    pub mod cms_page;
    pub mod legal;
}
mod components {
    pub mod contact_form;
    pub mod exit_intent;
    pub mod footer;
    pub mod lead_magnet;
}

use components::{exit_intent::ExitIntentPopup, footer::Footer};
use content::ContentSource;
use i18n::{detect_browser_lang, Lang};
use pages::{
    calculator::Calculator,
    checklist::Checklist,
    cms_page::CmsPage,
    home::Home,
    legal::{Imprint, NotFound, Privacy},
    scope_tool::ScopeTool,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Home { lang: String },
    #[at("/:lang/scope")]
    Scope { lang: String },
    #[at("/:lang/calculator")]
    Calculator { lang: String },
    #[at("/:lang/checklist")]
    Checklist { lang: String },
    #[at("/:lang/industry/:slug")]
    Industry { lang: String, slug: String },
    #[at("/:lang/imprint")]
    Imprint { lang: String },
    #[at("/:lang/privacy")]
    Privacy { lang: String },
    #[at("/:lang/p/:slug")]
    Page { lang: String, slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn lang(&self) -> Option<Lang> {
        match self {
            Route::Root | Route::NotFound => None,
            Route::Home { lang }
            | Route::Scope { lang }
            | Route::Calculator { lang }
            | Route::Checklist { lang }
            | Route::Industry { lang, .. }
            | Route::Imprint { lang }
            | Route::Privacy { lang }
            | Route::Page { lang, .. } => Lang::from_code(lang),
        }
    }

    /// The same page in another language. Routes without a language go to
    /// that language's home page.
    pub fn with_lang(&self, target: Lang) -> Route {
        let lang = target.code().to_string();
        match self {
            Route::Root | Route::NotFound | Route::Home { .. } => Route::Home { lang },
            Route::Scope { .. } => Route::Scope { lang },
            Route::Calculator { .. } => Route::Calculator { lang },
            Route::Checklist { .. } => Route::Checklist { lang },
            Route::Industry { slug, .. } => Route::Industry { lang, slug: slug.clone() },
            Route::Imprint { .. } => Route::Imprint { lang },
            Route::Privacy { .. } => Route::Privacy { lang },
            Route::Page { slug, .. } => Route::Page { lang, slug: slug.clone() },
        }
    }
}

fn switch(routes: Route) -> Html {
    let Some(lang) = routes.lang() else {
        return match routes {
            Route::Root => {
                let lang = detect_browser_lang();
                info!("Redirecting to detected language {}", lang);
                html! { <Redirect<Route> to={Route::Home { lang: lang.code().to_string() }} /> }
            }
            _ => {
                info!("Rendering NotFound page for {:?}", routes);
                html! { <NotFound lang={detect_browser_lang()} /> }
            }
        };
    };

    match routes {
        Route::Home { .. } => {
            info!("Rendering Home page");
            html! { <Home lang={lang} /> }
        }
        Route::Scope { .. } => {
            info!("Rendering Scope tool");
            html! { <ScopeTool lang={lang} /> }
        }
        Route::Calculator { .. } => {
            info!("Rendering Calculator page");
            html! { <Calculator lang={lang} /> }
        }
        Route::Checklist { .. } => {
            info!("Rendering Checklist page");
            html! { <Checklist lang={lang} /> }
        }
        Route::Industry { slug, .. } => {
            info!("Rendering Industry page {}", slug);
            html! { <CmsPage lang={lang} source={ContentSource::Industry { slug }} /> }
        }
        Route::Imprint { .. } => {
            info!("Rendering Imprint page");
            html! { <Imprint lang={lang} /> }
        }
        Route::Privacy { .. } => {
            info!("Rendering Privacy page");
            html! { <Privacy lang={lang} /> }
        }
        Route::Page { slug, .. } => {
            info!("Rendering CMS page {}", slug);
            html! { <CmsPage lang={lang} source={ContentSource::Page { slug, lang }} /> }
        }
        Route::Root | Route::NotFound => html! { <NotFound lang={lang} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    let code = lang.code().to_string();
    let route = use_route::<Route>().unwrap_or(Route::Home { lang: code.clone() });
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home { lang: code.clone() }} classes="nav-logo">
                    {"Kobalt Studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Calculator { lang: code.clone() }} classes="nav-link">
                            {s.nav_calculator}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Checklist { lang: code.clone() }} classes="nav-link">
                            {s.nav_checklist}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Scope { lang: code.clone() }} classes="nav-cta-button">
                            {s.nav_scope}
                        </Link<Route>>
                    </div>
                    <div class="lang-switch" onclick={close_menu.clone()}>
                        { for Lang::ALL.iter().map(|alt| html! {
                            <Link<Route>
                                to={route.with_lang(*alt)}
                                classes={classes!("lang-link", (*alt == lang).then(|| "active"))}
                            >
                                {alt.code().to_uppercase()}
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    let lang = use_route::<Route>()
        .and_then(|r| r.lang())
        .unwrap_or_else(detect_browser_lang);

    html! {
        <>
            <Nav lang={lang} />
            <Switch<Route> render={switch} />
            <Footer lang={lang} />
            <ExitIntentPopup lang={lang} />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Kobalt Studio site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_lang_prefixed_routes() {
        assert_eq!(
            Route::recognize("/de/scope"),
            Some(Route::Scope { lang: "de".into() })
        );
        assert_eq!(
            Route::recognize("/ja/industry/dentists"),
            Some(Route::Industry { lang: "ja".into(), slug: "dentists".into() })
        );
        assert_eq!(Route::recognize("/"), Some(Route::Root));
    }

    #[test]
    fn unknown_lang_has_no_lang() {
        assert_eq!(Route::Home { lang: "fr".into() }.lang(), None);
        assert_eq!(Route::Scope { lang: "en".into() }.lang(), Some(Lang::En));
    }

    #[test]
    fn with_lang_keeps_page_and_slug() {
        let route = Route::Page { lang: "de".into(), slug: "services".into() };
        assert_eq!(
            route.with_lang(Lang::En),
            Route::Page { lang: "en".into(), slug: "services".into() }
        );
        assert_eq!(
            Route::Calculator { lang: "en".into() }.with_lang(Lang::Ja),
            Route::Calculator { lang: "ja".into() }
        );
    }

    #[test]
    fn with_lang_sends_langless_routes_home() {
        assert_eq!(Route::NotFound.with_lang(Lang::De), Route::Home { lang: "de".into() });
        assert_eq!(Route::Root.with_lang(Lang::Ja), Route::Home { lang: "ja".into() });
    }
}
