use phuket_condo_core::{CONTACTS, SITE};

/// Where leads are posted. Build-time env wins over the listing catalog.
pub(crate) fn form_endpoint() -> String {
    resolve(
        option_env!("PHUKET_FORM_ENDPOINT").or(option_env!("TRUNK_PUBLIC_FORM_ENDPOINT")),
        Some(CONTACTS.form_endpoint),
    )
    .unwrap_or(CONTACTS.form_endpoint)
    .to_string()
}

/// Tag-manager container id, if analytics is enabled for this build.
pub(crate) fn gtm_id() -> Option<String> {
    resolve(
        option_env!("PHUKET_GTM_ID").or(option_env!("TRUNK_PUBLIC_GTM_ID")),
        SITE.gtm_id,
    )
    .map(str::to_string)
}

fn resolve(raw: Option<&'static str>, fallback: Option<&'static str>) -> Option<&'static str> {
    non_empty(raw).or_else(|| non_empty(fallback))
}

fn non_empty(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn blank_overrides_fall_back() {
        assert_eq!(resolve(Some("  "), Some("https://a.example")), Some("https://a.example"));
        assert_eq!(resolve(None, Some(" ")), None);
        assert_eq!(resolve(Some(" GTM-1 "), None), Some("GTM-1"));
    }

    #[wasm_bindgen_test]
    fn endpoint_is_https() {
        assert!(form_endpoint().starts_with("https://"));
    }
}
