use phuket_condo_core::{
    canonical_embed, classify_video_url, normalize_embed_url, player_src, PlaybackOptions,
    PlayerView, VideoLink, ViewportClass, VIDEO,
};

const ID: &str = "j7AxX7XKyHc";

#[test]
fn already_embedded_urls_are_left_alone() {
    for url in [
        "https://www.youtube.com/embed/j7AxX7XKyHc",
        "https://www.youtube.com/embed/j7AxX7XKyHc?start=10",
        "https://youtube.com/embed/abc_DEF-123",
    ] {
        assert_eq!(normalize_embed_url(url), url);
        assert_eq!(normalize_embed_url(&normalize_embed_url(url)), url);
    }
}

#[test]
fn every_url_shape_maps_to_the_same_embed() {
    let expected = canonical_embed(ID);
    assert_eq!(expected, "https://www.youtube.com/embed/j7AxX7XKyHc");
    for url in [
        "https://www.youtube.com/watch?v=j7AxX7XKyHc",
        "https://m.youtube.com/watch?feature=share&v=j7AxX7XKyHc&t=42",
        "https://youtu.be/j7AxX7XKyHc",
        "https://youtu.be/j7AxX7XKyHc?si=qKClSOcUg0gj8oRS",
        "https://www.youtube.com/shorts/j7AxX7XKyHc",
        "https://youtube.com/shorts/j7AxX7XKyHc?feature=share",
    ] {
        assert_eq!(normalize_embed_url(url), expected, "{url}");
    }
}

#[test]
fn non_urls_come_back_unchanged() {
    for input in ["", "   ", "not a url", "youtu.be/j7AxX7XKyHc", "/videos/tour.mp4"] {
        assert_eq!(normalize_embed_url(input), input);
    }
}

#[test]
fn unrecognized_or_idless_urls_come_back_unchanged() {
    for input in [
        "https://vimeo.com/123456",
        "https://www.youtube.com/watch",
        "https://www.youtube.com/watch?v=",
        "https://youtu.be/",
        "https://www.youtube.com/shorts/",
        "https://www.youtube.com/channel/UC123",
    ] {
        assert_eq!(normalize_embed_url(input), input);
    }
}

#[test]
fn classify_reports_the_link_shape() {
    assert_eq!(
        classify_video_url("https://youtu.be/abc"),
        Some(VideoLink::ShortLink {
            id: "abc".to_string()
        })
    );
    assert_eq!(
        classify_video_url("https://www.youtube.com/shorts/abc"),
        Some(VideoLink::Shorts {
            id: "abc".to_string()
        })
    );
    assert_eq!(
        classify_video_url("https://www.youtube.com/embed/abc"),
        Some(VideoLink::Embed)
    );
    assert_eq!(classify_video_url("https://example.com/watch?v=abc"), None);
}

#[test]
fn mobile_src_has_no_autoplay_or_mute() {
    let src = player_src(
        VIDEO.url,
        PlaybackOptions {
            desktop: false,
            muted: true,
        },
    );
    assert_eq!(
        src,
        "https://www.youtube.com/embed/j7AxX7XKyHc?playsinline=1&modestbranding=1&rel=0"
    );
}

#[test]
fn desktop_src_autoplays_with_mute_flag() {
    let muted = player_src(
        VIDEO.url,
        PlaybackOptions {
            desktop: true,
            muted: true,
        },
    );
    assert_eq!(
        muted,
        "https://www.youtube.com/embed/j7AxX7XKyHc?autoplay=1&mute=1&playsinline=1&modestbranding=1&rel=0"
    );
    let unmuted = player_src(
        VIDEO.url,
        PlaybackOptions {
            desktop: true,
            muted: false,
        },
    );
    assert!(unmuted.contains("autoplay=1&mute=0"));
}

#[test]
fn resizing_from_phone_to_desktop_enables_the_mute_toggle() {
    let phone = PlayerView::derive(VIDEO.url, ViewportClass::from_width(375.0), true);
    assert!(!phone.show_mute_toggle);
    assert!(!phone.src.contains("autoplay"));
    assert!(!phone.src.contains("mute="));

    let desktop = PlayerView::derive(VIDEO.url, ViewportClass::from_width(1024.0), true);
    assert!(desktop.show_mute_toggle);
    assert!(desktop.src.contains("autoplay=1&mute=1"));
    assert_eq!(desktop.mute_label(), "Включить звук");

    let toggled = PlayerView::derive(VIDEO.url, ViewportClass::from_width(1024.0), false);
    assert!(toggled.src.contains("mute=0"));
    assert_ne!(toggled.src, desktop.src);
    assert_eq!(toggled.mute_label(), "Выключить звук");
}
