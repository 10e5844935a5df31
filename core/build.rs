use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const MIN_PHOTOS: usize = 3;

#[derive(Deserialize)]
struct ListingFile {
    listing: ListingEntry,
    video: VideoEntry,
    contacts: ContactsEntry,
    photos: Vec<PhotoEntry>,
    site: SiteEntry,
}

#[derive(Deserialize)]
struct ListingEntry {
    title: String,
    subtitle: String,
    location: String,
    old_price: String,
    price: String,
    currency: String,
    size: String,
    bedrooms: u8,
    bathrooms: u8,
    floor: i16,
    view: String,
    project: String,
    handover: String,
    ownership: String,
    special_offer_label: String,
    #[serde(default)]
    features: Vec<String>,
}

#[derive(Deserialize)]
struct VideoEntry {
    url: String,
    title: Option<String>,
}

#[derive(Deserialize)]
struct ContactsEntry {
    whatsapp: String,
    telegram: String,
    phone: String,
    email: String,
    form_endpoint: String,
    form_subject: String,
}

#[derive(Deserialize)]
struct PhotoEntry {
    src: String,
    alt: String,
}

#[derive(Deserialize)]
struct SiteEntry {
    canonical_url: String,
    lang: String,
    title: String,
    description: String,
    og_title: String,
    og_description: String,
    og_image: String,
    favicon: String,
    apple_touch_icon: String,
    gtm_id: Option<String>,
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=LISTING_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let listing_path = resolve_listing_path(workspace_root);
    println!("cargo:rerun-if-changed={}", listing_path.display());

    let contents = fs::read_to_string(&listing_path).unwrap_or_else(|err| {
        panic!(
            "failed to read listing at {}: {err}",
            listing_path.display()
        )
    });

    let file: ListingFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse listing at {}: {err}",
            listing_path.display()
        )
    });

    validate_listing(&file.listing, &listing_path);
    validate_video(&file.video, &listing_path);
    validate_contacts(&file.contacts, &listing_path);
    validate_photos(&file.photos, &listing_path);
    validate_site(&file.site, &listing_path);

    let mut output = String::new();
    write_listing(&mut output, &file.listing);
    write_video(&mut output, &file.video);
    write_contacts(&mut output, &file.contacts);
    write_photos(&mut output, &file.photos);
    write_site(&mut output, &file.site);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("listing_generated.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_listing_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("LISTING_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("listing/listing.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_option(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn require_non_empty(field: &str, value: &str, listing_path: &Path) {
    if value.trim().is_empty() {
        panic!("{field} cannot be empty in {}", listing_path.display());
    }
}

fn require_prefix(field: &str, value: &str, prefix: &str, listing_path: &Path) {
    if !value.starts_with(prefix) {
        panic!(
            "{field} '{value}' must start with '{prefix}' in {}",
            listing_path.display()
        );
    }
}

fn validate_listing(listing: &ListingEntry, listing_path: &Path) {
    require_non_empty("listing.title", &listing.title, listing_path);
    require_non_empty("listing.currency", &listing.currency, listing_path);
    require_non_empty("listing.project", &listing.project, listing_path);
    let prices = [
        ("listing.price", &listing.price),
        ("listing.old_price", &listing.old_price),
    ];
    for (field, value) in prices {
        if !value.chars().any(|ch| ch.is_ascii_digit()) {
            panic!(
                "{field} '{value}' has no digits in {}",
                listing_path.display()
            );
        }
    }
    if listing.currency.len() != 3 || !listing.currency.chars().all(|ch| ch.is_ascii_uppercase()) {
        panic!(
            "listing.currency '{}' must be a three-letter code in {}",
            listing.currency,
            listing_path.display()
        );
    }
    if listing.features.iter().any(|feature| feature.trim().is_empty()) {
        panic!("listing.features has an empty entry in {}", listing_path.display());
    }
}

fn validate_video(video: &VideoEntry, listing_path: &Path) {
    require_non_empty("video.url", &video.url, listing_path);
}

fn validate_contacts(contacts: &ContactsEntry, listing_path: &Path) {
    require_prefix("contacts.whatsapp", &contacts.whatsapp, "https://wa.me/", listing_path);
    require_prefix("contacts.telegram", &contacts.telegram, "https://t.me/", listing_path);
    require_prefix("contacts.phone", &contacts.phone, "tel:", listing_path);
    require_prefix("contacts.email", &contacts.email, "mailto:", listing_path);
    require_prefix(
        "contacts.form_endpoint",
        &contacts.form_endpoint,
        "https://",
        listing_path,
    );
    require_non_empty("contacts.form_subject", &contacts.form_subject, listing_path);
}

fn validate_photos(photos: &[PhotoEntry], listing_path: &Path) {
    if photos.len() < MIN_PHOTOS {
        panic!(
            "listing needs at least {MIN_PHOTOS} photos, found {} in {}",
            photos.len(),
            listing_path.display()
        );
    }
    let mut srcs = HashSet::new();
    for photo in photos {
        require_non_empty("photo src", &photo.src, listing_path);
        if photo.alt.trim().is_empty() {
            panic!(
                "photo '{}' needs alt text in {}",
                photo.src,
                listing_path.display()
            );
        }
        if !srcs.insert(photo.src.clone()) {
            panic!(
                "duplicate photo src '{}' in {}",
                photo.src,
                listing_path.display()
            );
        }
    }
}

fn validate_site(site: &SiteEntry, listing_path: &Path) {
    require_prefix("site.canonical_url", &site.canonical_url, "https://", listing_path);
    require_non_empty("site.lang", &site.lang, listing_path);
    require_non_empty("site.title", &site.title, listing_path);
    require_non_empty("site.description", &site.description, listing_path);
    require_non_empty("site.og_image", &site.og_image, listing_path);
}

fn write_listing(output: &mut String, listing: &ListingEntry) {
    writeln!(output, "pub const LISTING: PropertyListing = PropertyListing {{").unwrap();
    for (field, value) in [
        ("title", &listing.title),
        ("subtitle", &listing.subtitle),
        ("location", &listing.location),
        ("old_price", &listing.old_price),
        ("price", &listing.price),
        ("currency", &listing.currency),
        ("size", &listing.size),
        ("view", &listing.view),
        ("project", &listing.project),
        ("handover", &listing.handover),
        ("ownership", &listing.ownership),
        ("special_offer_label", &listing.special_offer_label),
    ] {
        writeln!(output, "    {field}: {},", rust_string(value)).unwrap();
    }
    writeln!(output, "    bedrooms: {},", listing.bedrooms).unwrap();
    writeln!(output, "    bathrooms: {},", listing.bathrooms).unwrap();
    writeln!(output, "    floor: {},", listing.floor).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "pub const FEATURES: &[&str] = &[").unwrap();
    for feature in &listing.features {
        writeln!(output, "    {},", rust_string(feature)).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_video(output: &mut String, video: &VideoEntry) {
    let title = video.title.as_deref().unwrap_or("Video");
    writeln!(output, "pub const VIDEO: VideoSource = VideoSource {{").unwrap();
    writeln!(output, "    url: {},", rust_string(video.url.trim())).unwrap();
    writeln!(output, "    title: {},", rust_string(title)).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_contacts(output: &mut String, contacts: &ContactsEntry) {
    writeln!(output, "pub const CONTACTS: ContactChannels = ContactChannels {{").unwrap();
    for (field, value) in [
        ("whatsapp", &contacts.whatsapp),
        ("telegram", &contacts.telegram),
        ("phone", &contacts.phone),
        ("email", &contacts.email),
        ("form_endpoint", &contacts.form_endpoint),
        ("form_subject", &contacts.form_subject),
    ] {
        writeln!(output, "    {field}: {},", rust_string(value)).unwrap();
    }
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_photos(output: &mut String, photos: &[PhotoEntry]) {
    writeln!(output, "pub const PHOTOS: &[PhotoAsset] = &[").unwrap();
    for photo in photos {
        writeln!(output, "    PhotoAsset {{").unwrap();
        writeln!(output, "        src: {},", rust_string(&photo.src)).unwrap();
        writeln!(output, "        alt: {},", rust_string(&photo.alt)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_site(output: &mut String, site: &SiteEntry) {
    writeln!(output, "pub const SITE: SiteInfo = SiteInfo {{").unwrap();
    for (field, value) in [
        ("canonical_url", &site.canonical_url),
        ("lang", &site.lang),
        ("title", &site.title),
        ("description", &site.description),
        ("og_title", &site.og_title),
        ("og_description", &site.og_description),
        ("og_image", &site.og_image),
        ("favicon", &site.favicon),
        ("apple_touch_icon", &site.apple_touch_icon),
    ] {
        writeln!(output, "    {field}: {},", rust_string(value)).unwrap();
    }
    writeln!(output, "    gtm_id: {},", rust_option(site.gtm_id.as_deref())).unwrap();
    writeln!(output, "}};").unwrap();
}
