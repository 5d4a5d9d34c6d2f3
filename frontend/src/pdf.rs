use log::info;
use once_cell::unsync::OnceCell;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use wasm_bindgen::JsCast;

use crate::error::SiteError;
use crate::i18n::Lang;
use crate::scope::answers::AnswerMap;
use crate::scope::estimate::{format_price, Estimate};
use crate::scope::flow::question_prompt;
use crate::scope::questions;
use crate::scope::sitemap::SitemapNode;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Layout-free description of a downloadable document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    pub file_name: String,
}

pub trait DocumentRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, SiteError>;
}

/// Built-in PDF fonts only cover Latin text, so Japanese documents are
/// produced in English.
fn document_lang(lang: Lang) -> Lang {
    match lang {
        Lang::Ja => Lang::En,
        other => other,
    }
}

pub fn scope_report_document(
    lang: Lang,
    answers: &AnswerMap,
    estimate: &Estimate,
    sitemap: &[SitemapNode],
) -> Document {
    let lang = document_lang(lang);
    let s = lang.strings();

    let answer_lines = answers
        .in_flow_order()
        .map(|(id, answer)| {
            let shown = match (questions::find(id), answer.display()) {
                (Some(q), value) if !q.options.is_empty() => value
                    .split(", ")
                    .map(|v| q.option_label(v, lang).unwrap_or(v))
                    .collect::<Vec<_>>()
                    .join(", "),
                (_, value) => value,
            };
            format!("{}: {}", question_prompt(id, lang), if shown.is_empty() { "-".into() } else { shown })
        })
        .collect();

    Document {
        title: s.report_title.to_string(),
        subtitle: "Kobalt Studio".to_string(),
        sections: vec![
            Section {
                heading: s.price_range.to_string(),
                lines: vec![format!(
                    "{} - {}",
                    format_price(estimate.min_price),
                    format_price(estimate.max_price)
                )],
            },
            Section {
                heading: s.timeline.to_string(),
                lines: vec![format!("{} - {} {}", estimate.min_weeks, estimate.max_weeks, s.weeks)],
            },
            Section {
                heading: s.sitemap_title.to_string(),
                lines: vec![sitemap
                    .iter()
                    .map(|n| n.label.as_str())
                    .collect::<Vec<_>>()
                    .join(" > ")],
            },
            Section {
                heading: s.answers_title.to_string(),
                lines: answer_lines,
            },
        ],
        file_name: "kobalt-project-estimate.pdf".to_string(),
    }
}

const CHECKLIST_EN: [(&str, [&str; 4]); 6] = [
    ("Speed", [
        "Largest content paint under 2.5 seconds on mobile",
        "Images served as WebP or AVIF in the right size",
        "No render-blocking third-party scripts",
        "Fonts preloaded and subset",
    ]),
    ("Findability", [
        "Unique title and description on every page",
        "hreflang tags for every language version",
        "Structured data for your business and services",
        "XML sitemap submitted to Search Console",
    ]),
    ("Trust", [
        "Real photos of your team and work",
        "Client testimonials with names",
        "Imprint and privacy policy one click away",
        "HTTPS everywhere",
    ]),
    ("Conversion", [
        "One clear call to action per page",
        "Contact form with three fields or fewer",
        "Phone number clickable on mobile",
        "A lead magnet for visitors not ready to buy",
    ]),
    ("Content", [
        "Services described in your clients' words",
        "Case studies with measurable results",
        "A page per location or industry you serve",
        "Content updated at least quarterly",
    ]),
    ("Care", [
        "Automatic backups you have tested",
        "Uptime monitoring with alerts",
        "CMS and plugins updated monthly",
        "Analytics that respect consent",
    ]),
];

const CHECKLIST_DE: [(&str, [&str; 4]); 6] = [
    ("Geschwindigkeit", [
        "Largest Contentful Paint unter 2,5 Sekunden mobil",
        "Bilder als WebP oder AVIF in passender Größe",
        "Keine blockierenden Drittanbieter-Skripte",
        "Schriften vorgeladen und reduziert",
    ]),
    ("Auffindbarkeit", [
        "Eigener Title und Description auf jeder Seite",
        "hreflang-Tags für jede Sprachversion",
        "Strukturierte Daten für Unternehmen und Leistungen",
        "XML-Sitemap in der Search Console eingereicht",
    ]),
    ("Vertrauen", [
        "Echte Fotos von Team und Arbeit",
        "Kundenstimmen mit Namen",
        "Impressum und Datenschutz mit einem Klick erreichbar",
        "Durchgehend HTTPS",
    ]),
    ("Conversion", [
        "Ein klarer Call-to-Action pro Seite",
        "Kontaktformular mit höchstens drei Feldern",
        "Telefonnummer mobil anklickbar",
        "Ein Lead-Magnet für Besucher, die noch nicht kaufen",
    ]),
    ("Inhalte", [
        "Leistungen in den Worten Ihrer Kunden beschrieben",
        "Referenzen mit messbaren Ergebnissen",
        "Eine Seite pro Standort oder Branche",
        "Inhalte mindestens quartalsweise aktualisiert",
    ]),
    ("Pflege", [
        "Automatische, getestete Backups",
        "Uptime-Monitoring mit Benachrichtigung",
        "CMS und Plugins monatlich aktualisiert",
        "Einwilligungskonforme Analyse",
    ]),
];

pub fn checklist_document(lang: Lang, name: &str, website: &str) -> Document {
    let lang = document_lang(lang);
    let s = lang.strings();
    let groups = match lang {
        Lang::De => &CHECKLIST_DE,
        _ => &CHECKLIST_EN,
    };

    let subtitle = match (name.trim(), website.trim()) {
        ("", "") => "Kobalt Studio".to_string(),
        (name, "") => format!("{} - Kobalt Studio", name),
        ("", site) => format!("{} - Kobalt Studio", site),
        (name, site) => format!("{} ({}) - Kobalt Studio", name, site),
    };

    Document {
        title: s.checklist_title.to_string(),
        subtitle,
        sections: groups
            .iter()
            .map(|(heading, items)| Section {
                heading: heading.to_string(),
                lines: items.iter().map(|i| format!("[ ] {}", i)).collect(),
            })
            .collect(),
        file_name: "kobalt-website-checklist.pdf".to_string(),
    }
}

const PAGE_W: f64 = 210.0;
const PAGE_H: f64 = 297.0;
const MARGIN: f64 = 20.0;
const LINE_MM: f64 = 6.5;
const WRAP_CHARS: usize = 88;

fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// A4 text layout on top of printpdf's built-in Helvetica.
pub struct PrintPdfRenderer;

struct Cursor {
    layer: PdfLayerReference,
    y: f64,
}

impl Cursor {
    fn line(&mut self, doc: &PdfDocumentReference, text: &str, size: f64, font: &IndirectFontRef) {
        if self.y < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_W as f32), Mm(PAGE_H as f32), "Layer 1");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = PAGE_H - MARGIN;
        }
        self.layer.use_text(text, size as f32, Mm(MARGIN as f32), Mm(self.y as f32), font);
        self.y -= LINE_MM * (size / 11.0).max(1.0);
    }
}

impl DocumentRenderer for PrintPdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, SiteError> {
        let gen_err = |e: printpdf::Error| SiteError::Generation(e.to_string());

        let (doc, page, layer) =
            PdfDocument::new(&document.title, Mm(PAGE_W as f32), Mm(PAGE_H as f32), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(gen_err)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(gen_err)?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_H - MARGIN,
        };

        cursor.line(&doc, &document.title, 22.0, &bold);
        cursor.line(&doc, &document.subtitle, 11.0, &regular);
        cursor.y -= LINE_MM;

        for section in &document.sections {
            cursor.line(&doc, &section.heading, 14.0, &bold);
            for line in &section.lines {
                for wrapped in wrap(line, WRAP_CHARS) {
                    cursor.line(&doc, &wrapped, 11.0, &regular);
                }
            }
            cursor.y -= LINE_MM / 2.0;
        }

        doc.save_to_bytes().map_err(gen_err)
    }
}

/// Resolves the renderer on first use so pages that never download a
/// document never construct one.
pub struct LazyRenderer {
    cell: OnceCell<Box<dyn DocumentRenderer>>,
    init: fn() -> Box<dyn DocumentRenderer>,
}

impl LazyRenderer {
    pub const fn new(init: fn() -> Box<dyn DocumentRenderer>) -> Self {
        Self { cell: OnceCell::new(), init }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn render(&self, document: &Document) -> Result<Vec<u8>, SiteError> {
        let renderer = self.cell.get_or_init(|| {
            info!("Loading document renderer");
            (self.init)()
        });
        renderer.render(document)
    }
}

fn default_renderer() -> Box<dyn DocumentRenderer> {
    Box::new(PrintPdfRenderer)
}

thread_local! {
    static RENDERER: LazyRenderer = LazyRenderer::new(default_renderer);
}

pub fn render(document: &Document) -> Result<Vec<u8>, SiteError> {
    RENDERER.with(|r| r.render(document))
}

/// Hands the bytes to the browser as a file download.
pub fn download(bytes: &[u8], file_name: &str) -> Result<(), SiteError> {
    use web_sys::js_sys::{Array, Uint8Array};

    let window = web_sys::window().ok_or_else(|| SiteError::Generation("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteError::Generation("no document".into()))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes).buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SiteError::Generation("anchor element".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

pub fn render_and_download(document: &Document) -> Result<(), SiteError> {
    let bytes = render(document)?;
    download(&bytes, &document.file_name)
}
