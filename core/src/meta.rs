//! Page-level metadata for crawlers and social previews.

use maud::{html, PreEscaped};
use serde::Serialize;
use url::Url;

use crate::listing::{PhotoAsset, PropertyListing, SiteInfo};

pub const JSON_LD_SCRIPT_ID: &str = "listing-jsonld";
const SCHEMA_CONTEXT: &str = "https://schema.org";
const IN_STOCK: &str = "https://schema.org/InStock";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadLink {
    pub rel: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub lang: String,
    pub tags: Vec<MetaTag>,
    pub links: Vec<HeadLink>,
}

/// Joins a site-relative path onto the canonical origin. Absolute URLs and
/// unparseable bases come back as given.
pub fn absolute_url(base: &str, path: &str) -> String {
    if Url::parse(path).is_ok() {
        return path.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(path))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| path.to_string())
}

pub fn page_meta(site: &SiteInfo) -> PageMeta {
    let canonical = absolute_url(site.canonical_url, "/");
    let image = absolute_url(site.canonical_url, site.og_image);
    let tag = |attr, key, content: &str| MetaTag {
        attr,
        key,
        content: content.to_string(),
    };
    PageMeta {
        title: site.title.to_string(),
        lang: site.lang.to_string(),
        tags: vec![
            tag(MetaAttr::Name, "description", site.description),
            tag(MetaAttr::Property, "og:title", site.og_title),
            tag(MetaAttr::Property, "og:description", site.og_description),
            tag(MetaAttr::Property, "og:image", &image),
            tag(MetaAttr::Property, "og:type", "website"),
            tag(MetaAttr::Property, "og:url", &canonical),
        ],
        links: vec![
            HeadLink {
                rel: "canonical",
                href: canonical.clone(),
            },
            HeadLink {
                rel: "icon",
                href: site.favicon.to_string(),
            },
            HeadLink {
                rel: "apple-touch-icon",
                href: site.apple_touch_icon.to_string(),
            },
        ],
    }
}

#[derive(Serialize)]
struct Brand<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    price_currency: &'a str,
    availability: &'static str,
    url: String,
}

#[derive(Serialize)]
struct Product<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    brand: Brand<'a>,
    image: Vec<String>,
    offers: Offer<'a>,
}

/// schema.org `Product` with a single `Offer` for the listing.
pub fn product_json_ld(
    listing: &PropertyListing,
    site: &SiteInfo,
    photos: &[PhotoAsset],
) -> serde_json::Value {
    let canonical = absolute_url(site.canonical_url, "/");
    let product = Product {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: site.og_title,
        description: site.description,
        brand: Brand {
            kind: "Brand",
            name: listing.project,
        },
        image: photos
            .iter()
            .map(|photo| absolute_url(site.canonical_url, photo.src))
            .collect(),
        offers: Offer {
            kind: "Offer",
            price: listing.price_value().map(|value| value.to_string()),
            price_currency: listing.currency,
            availability: IN_STOCK,
            url: canonical,
        },
    };
    serde_json::to_value(product).unwrap_or(serde_json::Value::Null)
}

/// Static `<head>` markup for hosts that serve the page without running wasm.
pub fn head_html(page: &PageMeta, json_ld: &serde_json::Value) -> String {
    // `</` inside a script body would end the element early.
    let script = json_ld.to_string().replace("</", "<\\/");
    let markup = html! {
        title { (page.title) }
        @for tag in &page.tags {
            @match tag.attr {
                MetaAttr::Name => { meta name=(tag.key) content=(tag.content); }
                MetaAttr::Property => { meta property=(tag.key) content=(tag.content); }
            }
        }
        @for link in &page.links {
            link rel=(link.rel) href=(link.href);
        }
        script type="application/ld+json" id=(JSON_LD_SCRIPT_ID) { (PreEscaped(script)) }
    };
    markup.into_string()
}
