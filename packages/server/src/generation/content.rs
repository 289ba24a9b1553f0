//! Generation content: the HTML/CSS/assets triple handed to the archive.

use inference_client::{Asset, SiteDraft};

use super::fallback::{fallback_css, fallback_html};
use super::spec::SiteSpec;

/// Content set produced by either provider draft repair or the fallback,
/// never both. Owned by the orchestrator for one request and handed to
/// the archive builder by value.
#[derive(Debug, Clone)]
pub struct GenerationContent {
    pub html: String,
    pub css: String,
    pub assets: Vec<Asset>,
}

impl GenerationContent {
    /// Repair a provider draft field-by-field.
    ///
    /// A missing `html` or `css` degrades to the deterministic fallback
    /// for the same spec instead of failing the request.
    pub fn from_draft(draft: SiteDraft, spec: &SiteSpec) -> Self {
        Self {
            html: draft.html.unwrap_or_else(|| fallback_html(spec)),
            css: draft.css.unwrap_or_else(|| fallback_css(spec)),
            assets: draft.assets,
        }
    }

    /// Full fallback content for a spec.
    pub fn fallback_for(spec: &SiteSpec) -> Self {
        Self {
            html: fallback_html(spec),
            css: fallback_css(spec),
            assets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::spec::SiteSpecInput;

    fn spec() -> SiteSpec {
        SiteSpec::normalize(SiteSpecInput {
            title: Some("Café Noss".to_string()),
            colors: Some("#ff6600,#111111".to_string()),
            desc: Some("Best coffee".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn missing_css_degrades_to_fallback() {
        let spec = spec();
        let draft = SiteDraft {
            html: Some("<html>provider</html>".to_string()),
            css: None,
            assets: Vec::new(),
        };

        let content = GenerationContent::from_draft(draft, &spec);

        assert_eq!(content.html, "<html>provider</html>");
        assert_eq!(content.css, fallback_css(&spec));
    }

    #[test]
    fn missing_html_degrades_to_fallback() {
        let spec = spec();
        let draft = SiteDraft {
            html: None,
            css: Some("body{}".to_string()),
            assets: Vec::new(),
        };

        let content = GenerationContent::from_draft(draft, &spec);

        assert_eq!(content.html, fallback_html(&spec));
        assert_eq!(content.css, "body{}");
    }

    #[test]
    fn complete_draft_is_kept_verbatim() {
        let draft = SiteDraft {
            html: Some("<html></html>".to_string()),
            css: Some("body{}".to_string()),
            assets: vec![Asset {
                path: "images/logo.png".to_string(),
                bytes: vec![1, 2, 3],
            }],
        };

        let content = GenerationContent::from_draft(draft, &spec());

        assert_eq!(content.html, "<html></html>");
        assert_eq!(content.css, "body{}");
        assert_eq!(content.assets.len(), 1);
    }

    #[test]
    fn fallback_content_carries_no_assets() {
        let spec = spec();
        let content = GenerationContent::fallback_for(&spec);

        assert_eq!(content.html, fallback_html(&spec));
        assert_eq!(content.css, fallback_css(&spec));
        assert!(content.assets.is_empty());
    }
}
