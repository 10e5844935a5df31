pub mod lightbox;
pub mod listing;
pub mod meta;
pub mod scroll_lock;
pub mod submission;
pub mod video;
pub mod viewport;

pub use lightbox::{Lightbox, LightboxAction};
pub use listing::{
    has_special_offer, parse_price, ContactChannels, ContactKind, ContactLink, PhotoAsset,
    PropertyListing, SiteInfo, VideoSource, CONTACTS, FEATURES, LISTING, PHOTOS, SITE, VIDEO,
};
pub use meta::{head_html, page_meta, product_json_ld, PageMeta};
pub use scroll_lock::{InlineDecl, ScrollHost, ScrollLock, LOCKED_OVERFLOW, OVERFLOW_PROPERTIES};
pub use submission::{
    check_status, ContactField, ContactFields, ContactForm, LeadPayload, SubmitError,
    SubmitStatus,
};
pub use video::{
    canonical_embed, classify_video_url, normalize_embed_url, player_src, PlaybackOptions,
    PlayerView, VideoLink,
};
pub use viewport::{ViewportClass, DESKTOP_MIN_WIDTH};
