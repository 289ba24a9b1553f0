//! Prompt rendering for the inference request.

use super::spec::SiteSpec;

/// Render the textual generation request for a spec.
///
/// Total over any `SiteSpec`. The trailing instruction block pins the
/// response contract the inference client validates against; changing one
/// without the other breaks shape validation.
pub fn build_prompt(spec: &SiteSpec) -> String {
    format!(
        "Create a complete static website project (HTML,CSS, optionally JS) for the following spec:\n\
         Title: {}\n\
         Type: {}\n\
         Colors: {}\n\
         Description: {}\n\
         \n\
         Provide the result as JSON with fields: html (main HTML), css (styles), assets (list of {{path, data_base64}}).\n\
         Only return JSON.",
        spec.title,
        spec.site_type,
        spec.colors.join(","),
        spec.desc
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::spec::SiteSpecInput;

    #[test]
    fn embeds_title_and_description() {
        let spec = SiteSpec::normalize(SiteSpecInput {
            title: Some("Café Noss".to_string()),
            site_type: Some("business".to_string()),
            colors: Some("#ff6600,#111111".to_string()),
            desc: Some("Best coffee".to_string()),
        });

        let prompt = build_prompt(&spec);

        assert!(prompt.contains("Café Noss"));
        assert!(prompt.contains("Best coffee"));
        assert!(prompt.contains("Type: business"));
        assert!(prompt.contains("Colors: #ff6600,#111111"));
    }

    #[test]
    fn pins_the_response_contract() {
        let spec = SiteSpec::normalize(SiteSpecInput::default());
        let prompt = build_prompt(&spec);

        assert!(prompt.contains("html"));
        assert!(prompt.contains("css"));
        assert!(prompt.contains("data_base64"));
        assert!(prompt.contains("Only return JSON."));
    }

    #[test]
    fn total_over_empty_spec() {
        let prompt = build_prompt(&SiteSpec::normalize(SiteSpecInput::default()));
        assert!(prompt.contains("Title: \n"));
    }
}
