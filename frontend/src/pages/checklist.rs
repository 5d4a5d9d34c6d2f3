use yew::prelude::*;

use crate::components::lead_magnet::LeadMagnetForm;
use crate::head::{use_head, HeadTags};
use crate::i18n::Lang;
use crate::pdf;

#[derive(Properties, PartialEq)]
pub struct ChecklistProps {
    pub lang: Lang,
}

#[function_component(Checklist)]
pub fn checklist(props: &ChecklistProps) -> Html {
    let lang = props.lang;
    let s = lang.strings();
    use_head(HeadTags::for_page(lang, "/checklist", s.checklist_title, s.checklist_intro));

    // Preview only the group headings; the items are in the download.
    let preview = pdf::checklist_document(lang, "", "");

    html! {
        <div class="checklist-page">
            <h1>{s.checklist_title}</h1>
            <p>{s.checklist_intro}</p>
            <ul class="checklist-preview">
                { for preview.sections.iter().map(|section| html! {
                    <li>{&section.heading}{format!(" ({})", section.lines.len())}</li>
                }) }
            </ul>
            <LeadMagnetForm lang={lang} />
            <style>
                {r#"
                .checklist-page {
                    padding: 120px 1.5rem 4rem;
                    max-width: 640px;
                    margin: 0 auto;
                    color: #ffffff;
                }
                .checklist-preview {
                    margin: 2rem 0;
                    line-height: 1.8;
                }
                .lead-magnet-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
