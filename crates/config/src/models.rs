use mindsum_core::ProviderKind;

/// Models selectable per vendor, newest first.
pub fn available_models(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::OpenAi => &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"],
        ProviderKind::Anthropic => &[
            "claude-3-5-sonnet-20241022",
            "claude-3-5-haiku-20241022",
            "claude-3-opus-20240229",
        ],
        ProviderKind::Gemini => &[
            "gemini-2.0-flash",
            "gemini-2.5-flash-preview-05-20",
            "gemini-2.5-pro-preview-06-05",
            "gemini-1.5-pro",
            "gemini-1.5-flash",
        ],
        ProviderKind::Grok => &["grok-2-latest", "grok-2", "grok-beta"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_provider_lists_its_default_model() {
        let defaults = crate::Settings::default();
        for kind in ProviderKind::ALL {
            let model = &defaults.vendor(kind).model;
            assert!(
                available_models(kind).contains(&model.as_str()),
                "{kind} default {model} missing from its model list"
            );
        }
    }
}
