use phuket_condo_core::{Lightbox, LightboxAction};

#[test]
fn next_wraps_back_to_the_start() {
    for len in 1..=5usize {
        for start in 0..len {
            let mut lightbox = Lightbox::new(len);
            lightbox.open(start);
            for _ in 0..len {
                lightbox.next();
            }
            assert_eq!(lightbox.index(), start, "len {len} start {start}");
            assert!(lightbox.is_open());
        }
    }
}

#[test]
fn previous_from_first_goes_to_last() {
    let mut lightbox = Lightbox::new(3);
    lightbox.open(0);
    lightbox.previous();
    assert_eq!(lightbox.current(), Some(2));
    lightbox.next();
    assert_eq!(lightbox.current(), Some(0));
}

#[test]
fn single_photo_stays_put() {
    let mut lightbox = Lightbox::new(1);
    lightbox.open(0);
    lightbox.next();
    lightbox.previous();
    assert_eq!(lightbox.current(), Some(0));
}

#[test]
fn empty_gallery_ignores_everything() {
    let mut lightbox = Lightbox::new(0);
    lightbox.open(0);
    lightbox.next();
    lightbox.previous();
    for action in [
        LightboxAction::Open(0),
        LightboxAction::Next,
        LightboxAction::Previous,
        LightboxAction::Close,
    ] {
        lightbox.apply(action);
    }
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.index(), 0);
    assert_eq!(lightbox.current(), None);
}

#[test]
fn open_out_of_range_is_ignored() {
    let mut lightbox = Lightbox::new(3);
    lightbox.open(3);
    assert!(!lightbox.is_open());
    lightbox.open(1);
    lightbox.open(7);
    assert_eq!(lightbox.current(), Some(1));
}

#[test]
fn close_keeps_index_for_next_open() {
    let mut lightbox = Lightbox::new(3);
    lightbox.apply(LightboxAction::Open(2));
    assert_eq!(lightbox.position_label().as_deref(), Some("3 / 3"));
    lightbox.apply(LightboxAction::Close);
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.position_label(), None);
    lightbox.apply(LightboxAction::Open(0));
    assert_eq!(lightbox.current(), Some(0));
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
    assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
    assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Previous));
    assert_eq!(LightboxAction::from_key("Enter"), None);
    assert_eq!(LightboxAction::from_key("a"), None);
}
