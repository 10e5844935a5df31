use url::Url;

use crate::viewport::ViewportClass;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

const PLATFORM_HOST: &str = "youtube.com";
const SHORT_LINK_HOST: &str = "youtu.be";
const WATCH_PATH: &str = "/watch";
const SHORTS_PREFIX: &str = "/shorts/";
const EMBED_PREFIX: &str = "/embed/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoLink {
    Watch { id: String },
    ShortLink { id: String },
    Shorts { id: String },
    Embed,
}

impl VideoLink {
    pub fn id(&self) -> Option<&str> {
        match self {
            VideoLink::Watch { id } | VideoLink::ShortLink { id } | VideoLink::Shorts { id } => {
                Some(id)
            }
            VideoLink::Embed => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            VideoLink::Watch { .. } => "watch",
            VideoLink::ShortLink { .. } => "short-link",
            VideoLink::Shorts { .. } => "shorts",
            VideoLink::Embed => "embed",
        }
    }
}

pub fn canonical_embed(id: &str) -> String {
    format!("{EMBED_BASE}{id}")
}

/// Recognizes the URL shapes the video platform hands out.
///
/// Returns `None` for anything unparseable, off-platform, or missing an id.
pub fn classify_video_url(input: &str) -> Option<VideoLink> {
    let url = Url::parse(input.trim()).ok()?;
    let host = url.host_str()?;
    let on_platform = host.contains(PLATFORM_HOST);
    let path = url.path();

    if on_platform && path == WATCH_PATH {
        let id = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())?;
        return Some(VideoLink::Watch { id });
    }
    if host == SHORT_LINK_HOST {
        let id = url.path_segments()?.next().filter(|id| !id.is_empty())?;
        return Some(VideoLink::ShortLink { id: id.to_string() });
    }
    if on_platform && path.starts_with(SHORTS_PREFIX) {
        let id = url.path_segments()?.nth(1).filter(|id| !id.is_empty())?;
        return Some(VideoLink::Shorts { id: id.to_string() });
    }
    if on_platform && path.starts_with(EMBED_PREFIX) {
        return Some(VideoLink::Embed);
    }
    None
}

/// Converts any recognized video URL into `https://www.youtube.com/embed/<id>`.
///
/// Unrecognized or unparseable input comes back unchanged, as do URLs that are
/// already embeddable. No playback parameters are added here.
pub fn normalize_embed_url(input: &str) -> String {
    match classify_video_url(input) {
        Some(link) => match link.id() {
            Some(id) => canonical_embed(id),
            None => input.to_string(),
        },
        None => input.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackOptions {
    pub desktop: bool,
    pub muted: bool,
}

impl PlaybackOptions {
    pub fn new(viewport: ViewportClass, muted: bool) -> Self {
        Self {
            desktop: viewport.is_desktop(),
            muted,
        }
    }
}

/// Builds the iframe `src`: autoplay and mute only on desktop, inline play,
/// minimal branding and no related videos always.
pub fn player_src(source: &str, options: PlaybackOptions) -> String {
    let embed = normalize_embed_url(source);
    let Ok(mut url) = Url::parse(&embed) else {
        return embed;
    };
    let mut params: Vec<(&str, &str)> = Vec::with_capacity(5);
    if options.desktop {
        params.push(("autoplay", "1"));
        params.push(("mute", if options.muted { "1" } else { "0" }));
    }
    params.push(("playsinline", "1"));
    params.push(("modestbranding", "1"));
    params.push(("rel", "0"));
    set_query_params(&mut url, &params);
    url.to_string()
}

fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| key == name))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &retained {
        pairs.append_pair(key, value);
    }
    for (key, value) in params {
        pairs.append_pair(key, value);
    }
}

/// Everything the media panel renders, derived from its inputs in one place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub src: String,
    pub show_mute_toggle: bool,
    pub muted: bool,
}

impl PlayerView {
    pub fn derive(source: &str, viewport: ViewportClass, muted: bool) -> Self {
        let options = PlaybackOptions::new(viewport, muted);
        Self {
            src: player_src(source, options),
            show_mute_toggle: options.desktop,
            muted,
        }
    }

    pub fn mute_label(&self) -> &'static str {
        if self.muted {
            "Включить звук"
        } else {
            "Выключить звук"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_query_params_are_replaced_not_duplicated() {
        let src = player_src(
            "https://www.youtube.com/embed/abc?rel=1&start=30",
            PlaybackOptions {
                desktop: false,
                muted: true,
            },
        );
        assert_eq!(
            src,
            "https://www.youtube.com/embed/abc?start=30&playsinline=1&modestbranding=1&rel=0"
        );
    }

    #[test]
    fn unparseable_source_passes_through_player_src() {
        let options = PlaybackOptions {
            desktop: true,
            muted: true,
        };
        assert_eq!(player_src("not a url", options), "not a url");
    }
}
