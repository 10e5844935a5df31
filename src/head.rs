use js_sys::{Array, Date, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlHeadElement, HtmlScriptElement};

use phuket_condo_core::meta::{HeadLink, MetaTag, JSON_LD_SCRIPT_ID};
use phuket_condo_core::PageMeta;

const GTM_SCRIPT_ID: &str = "gtm-loader";
const GTM_SRC: &str = "https://www.googletagmanager.com/gtm.js?id=";

fn document_and_head() -> Result<(Document, HtmlHeadElement), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("head unavailable"))?;
    Ok((document, head))
}

/// Finds the element matching `selector` in `<head>` or appends a new `tag`.
fn upsert(
    document: &Document,
    head: &HtmlHeadElement,
    selector: &str,
    tag: &str,
) -> Result<Element, JsValue> {
    if let Some(existing) = head.query_selector(selector)? {
        return Ok(existing);
    }
    let element = document.create_element(tag)?;
    head.append_child(&element)?;
    Ok(element)
}

fn apply_meta_tag(
    document: &Document,
    head: &HtmlHeadElement,
    tag: &MetaTag,
) -> Result<(), JsValue> {
    let attr = tag.attr.as_str();
    let selector = format!("meta[{attr}=\"{}\"]", tag.key);
    let element = upsert(document, head, &selector, "meta")?;
    element.set_attribute(attr, tag.key)?;
    element.set_attribute("content", &tag.content)
}

fn apply_link(document: &Document, head: &HtmlHeadElement, link: &HeadLink) -> Result<(), JsValue> {
    let selector = format!("link[rel=\"{}\"]", link.rel);
    let element = upsert(document, head, &selector, "link")?;
    element.set_attribute("rel", link.rel)?;
    element.set_attribute("href", &link.href)
}

pub(crate) fn apply_page_meta(meta: &PageMeta) -> Result<(), JsValue> {
    let (document, head) = document_and_head()?;
    document.set_title(&meta.title);
    if let Some(root) = document.document_element() {
        root.set_attribute("lang", &meta.lang)?;
    }
    for tag in &meta.tags {
        apply_meta_tag(&document, &head, tag)?;
    }
    for link in &meta.links {
        apply_link(&document, &head, link)?;
    }
    Ok(())
}

pub(crate) fn install_json_ld(doc: &serde_json::Value) -> Result<(), JsValue> {
    let (document, head) = document_and_head()?;
    let selector = format!("script#{JSON_LD_SCRIPT_ID}");
    let script = upsert(&document, &head, &selector, "script")?;
    script.set_id(JSON_LD_SCRIPT_ID);
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&doc.to_string()));
    Ok(())
}

/// Queues the `gtm.js` start event and loads the container once.
pub(crate) fn install_tag_manager(container_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let (document, head) = document_and_head()?;
    if document.get_element_by_id(GTM_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let key = JsValue::from_str("dataLayer");
    let existing = Reflect::get(&window, &key)?;
    let data_layer = if Array::is_array(&existing) {
        existing.unchecked_into::<Array>()
    } else {
        let fresh = Array::new();
        Reflect::set(&window, &key, &fresh)?;
        fresh
    };
    let start = Object::new();
    Reflect::set(&start, &JsValue::from_str("gtm.start"), &JsValue::from_f64(Date::now()))?;
    Reflect::set(&start, &JsValue::from_str("event"), &JsValue::from_str("gtm.js"))?;
    data_layer.push(&start);

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_id(GTM_SCRIPT_ID);
    script.set_async(true);
    let container_id = String::from(js_sys::encode_uri_component(container_id));
    script.set_src(&format!("{GTM_SRC}{container_id}"));
    head.append_child(&script)?;
    Ok(())
}
