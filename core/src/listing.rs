//! Static listing data, generated at build time from `listing/listing.toml`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyListing {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub old_price: &'static str,
    pub price: &'static str,
    pub currency: &'static str,
    pub size: &'static str,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub floor: i16,
    pub view: &'static str,
    pub project: &'static str,
    pub handover: &'static str,
    pub ownership: &'static str,
    pub special_offer_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoAsset {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannels {
    pub whatsapp: &'static str,
    pub telegram: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub form_endpoint: &'static str,
    /// Sent as the hidden `_subject` field with every lead.
    pub form_subject: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoSource {
    pub url: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub canonical_url: &'static str,
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_image: &'static str,
    pub favicon: &'static str,
    pub apple_touch_icon: &'static str,
    pub gtm_id: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    WhatsApp,
    Telegram,
    Phone,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Web links open in a new tab; `tel:` and `mailto:` hand off to the OS.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("https://")
    }
}

include!(concat!(env!("OUT_DIR"), "/listing_generated.rs"));

impl PropertyListing {
    pub fn price_value(&self) -> Option<u64> {
        parse_price(self.price)
    }

    pub fn old_price_value(&self) -> Option<u64> {
        parse_price(self.old_price)
    }

    pub fn has_special_offer(&self) -> bool {
        has_special_offer(self.old_price, self.price)
    }

    pub fn special_offer_badge(&self) -> Option<&'static str> {
        self.has_special_offer().then_some(self.special_offer_label)
    }
}

impl ContactChannels {
    pub fn links(&self) -> [ContactLink; 4] {
        [
            ContactLink {
                kind: ContactKind::WhatsApp,
                label: "WhatsApp",
                href: self.whatsapp,
            },
            ContactLink {
                kind: ContactKind::Telegram,
                label: "Telegram",
                href: self.telegram,
            },
            ContactLink {
                kind: ContactKind::Phone,
                label: "Позвонить",
                href: self.phone,
            },
            ContactLink {
                kind: ContactKind::Email,
                label: "E-mail",
                href: self.email,
            },
        ]
    }
}

/// Reads the digits out of a display price such as `"฿ 4,330,000"`.
///
/// Returns `None` when there are no digits, the value is zero, or it does not
/// fit in a `u64`.
pub fn parse_price(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok().filter(|value| *value > 0)
}

pub fn has_special_offer(old_price: &str, price: &str) -> bool {
    match (parse_price(old_price), parse_price(price)) {
        (Some(old), Some(new)) => old > new,
        _ => false,
    }
}
