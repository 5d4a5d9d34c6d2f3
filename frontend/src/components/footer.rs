use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::Lang;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub lang: Lang,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    let code = lang.code().to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span>{"© Kobalt Studio"}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Imprint { lang: code.clone() }} classes="footer-link">
                        {s.imprint}
                    </Link<Route>>
                    <Link<Route> to={Route::Privacy { lang: code.clone() }} classes="footer-link">
                        {s.privacy}
                    </Link<Route>>
                    <Link<Route> to={Route::Industry { lang: code, slug: "dentists".to_string() }} classes="footer-link">
                        {"Zahnarztpraxen"}
                    </Link<Route>>
                </div>
            </div>
        </footer>
    }
}
