//! Deterministic template fallback.
//!
//! Used whenever the inference provider is unreachable or returns an
//! incomplete result. Pure and total: any `SiteSpec`, including one with
//! all-empty fields, renders to a non-empty document. This path must
//! never fail a request.

use maud::{html, Markup, DOCTYPE};

use super::spec::SiteSpec;

/// Shown when the spec carries no description.
const DEFAULT_DESC: &str = "وصف الموقع";
const CTA_LABEL: &str = "اتصل الآن";
const FOOTER_LINE: &str = "مولد المواقع بالذكاء الاصطناعي - Demo";

/// Render the fallback single-page document for a spec.
pub fn fallback_html(spec: &SiteSpec) -> String {
    let accent = spec.accent();
    let bg = spec.background();
    let desc = if spec.desc.is_empty() {
        DEFAULT_DESC
    } else {
        spec.desc.as_str()
    };

    let document: Markup = html! {
        (DOCTYPE)
        html lang="ar" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (spec.title) }
                link rel="stylesheet" href="styles.css";
            }
            body style={ "background:" (bg) ";" } {
                header style={ "background:" (accent) ";padding:24px;color:#fff" } {
                    h1 { (spec.title) }
                }
                main style="padding:24px" {
                    p { (desc) }
                    a href="#" style="display:inline-block;margin-top:12px;padding:8px 12px;background:#111;color:#fff;border-radius:8px" {
                        (CTA_LABEL)
                    }
                }
                footer style="padding:12px;text-align:center;border-top:1px solid #eee" {
                    (FOOTER_LINE)
                }
            }
        }
    };

    document.into_string()
}

/// Render the fallback stylesheet for a spec.
pub fn fallback_css(_spec: &SiteSpec) -> String {
    concat!(
        "body{font-family:system-ui,Segoe UI,Roboto,\"Noto Sans\",sans-serif;margin:0}",
        "header{box-shadow:0 4px 20px rgba(0,0,0,0.06)}",
        "a{text-decoration:none}",
    )
    .to_string()
}
