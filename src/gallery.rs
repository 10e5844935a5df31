use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

use phuket_condo_core::{InlineDecl, Lightbox, LightboxAction, PhotoAsset, ScrollHost, ScrollLock};

/// `document.body` as a scroll host.
pub(crate) struct BodyScroll {
    body: HtmlElement,
}

impl BodyScroll {
    pub(crate) fn current() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self { body })
    }
}

impl ScrollHost for BodyScroll {
    fn declaration(&self, property: &str) -> InlineDecl {
        let style = self.body.style();
        InlineDecl::new(
            style.get_property_value(property).unwrap_or_default(),
            style.get_property_priority(property),
        )
    }

    fn set_declaration(&self, property: &str, decl: &InlineDecl) {
        let style = self.body.style();
        if decl.is_unset() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property_with_priority(property, &decl.value, &decl.priority);
        }
    }
}

#[derive(Clone, PartialEq)]
struct LightboxStore(Lightbox);

impl Reducible for LightboxStore {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        next.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryProps {
    pub(crate) photos: &'static [PhotoAsset],
}

#[function_component(Gallery)]
pub(crate) fn gallery(props: &GalleryProps) -> Html {
    let photos = props.photos;
    let lightbox = use_reducer(|| LightboxStore(Lightbox::new(photos.len())));
    let is_open = lightbox.0.is_open();
    let backdrop = use_node_ref();

    {
        // Body scroll lock and arrow/escape keys live exactly as long as the
        // viewer is open; cleanup also runs if the gallery unmounts.
        let dispatcher = lightbox.dispatcher();
        use_effect_with(is_open, move |open| {
            let mut scroll_lock = None;
            let mut key_listener = None;
            if *open {
                gloo::console::log!("lightbox: open");
                scroll_lock = BodyScroll::current().map(ScrollLock::acquire);
                let on_key = move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if let Some(action) = LightboxAction::from_key(&event.key()) {
                        event.prevent_default();
                        dispatcher.dispatch(action);
                    }
                };
                // Non-passive, otherwise `prevent_default` is ignored.
                let options = EventListenerOptions::enable_prevent_default();
                key_listener = web_sys::window().map(|window| {
                    EventListener::new_with_options(&window, "keydown", options, on_key)
                });
            }
            move || {
                drop(key_listener);
                if scroll_lock.take().is_some() {
                    gloo::console::log!("lightbox: closed");
                }
            }
        });
    }

    let thumbnails: Html = photos
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let onclick = {
                let dispatcher = lightbox.dispatcher();
                Callback::from(move |_: MouseEvent| {
                    dispatcher.dispatch(LightboxAction::Open(index));
                })
            };
            html! {
                <button type="button" class="gallery-thumb" {onclick}>
                    <img src={photo.src} alt={photo.alt} loading="lazy" />
                </button>
            }
        })
        .collect();

    let viewer = match lightbox.0.current().and_then(|index| photos.get(index)) {
        Some(photo) => {
            let dispatch = |action: LightboxAction| {
                let dispatcher = lightbox.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
            };
            let on_backdrop = {
                let dispatcher = lightbox.dispatcher();
                let backdrop = backdrop.clone();
                Callback::from(move |event: MouseEvent| {
                    // Only the dimmed backdrop itself closes. Yew delegates
                    // events, so `current_target` is the app root, not this div.
                    let target = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok());
                    if target.is_some() && target == backdrop.get() {
                        dispatcher.dispatch(LightboxAction::Close);
                    }
                })
            };
            let position = lightbox.0.position_label().unwrap_or_default();
            html! {
                <div
                    ref={backdrop.clone()}
                    class="lightbox"
                    role="dialog"
                    aria-modal="true"
                    aria-label={photo.alt}
                    onclick={on_backdrop}
                >
                    <button
                        type="button"
                        class="lightbox-close"
                        aria-label="Закрыть"
                        onclick={dispatch(LightboxAction::Close)}
                    >
                        { "×" }
                    </button>
                    <button
                        type="button"
                        class="lightbox-nav lightbox-prev"
                        aria-label="Предыдущее фото"
                        onclick={dispatch(LightboxAction::Previous)}
                    >
                        { "‹" }
                    </button>
                    <img class="lightbox-image" src={photo.src} alt={photo.alt} />
                    <button
                        type="button"
                        class="lightbox-nav lightbox-next"
                        aria-label="Следующее фото"
                        onclick={dispatch(LightboxAction::Next)}
                    >
                        { "›" }
                    </button>
                    <div class="lightbox-position">{ position }</div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <section class="gallery" id="photos">
            <h2>{ "Фото" }</h2>
            <div class="gallery-grid">{ thumbnails }</div>
            { viewer }
        </section>
    }
}
