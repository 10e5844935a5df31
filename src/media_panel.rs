use yew::prelude::*;

use phuket_condo_core::video::EMBED_ALLOW;
use phuket_condo_core::PlayerView;

use crate::viewport::use_viewport_class;

#[derive(Properties, PartialEq)]
pub(crate) struct MediaPanelProps {
    pub(crate) source: AttrValue,
    pub(crate) title: AttrValue,
}

/// Video embed with a sound toggle on desktop.
///
/// The embed has no scripting API here, so toggling sound rebuilds the `src`
/// and the player reloads with the new `mute` flag.
#[function_component(MediaPanel)]
pub(crate) fn media_panel(props: &MediaPanelProps) -> Html {
    let viewport = use_viewport_class();
    let muted = use_state(|| true);
    let view = PlayerView::derive(&props.source, viewport, *muted);

    let on_toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| {
            muted.set(!*muted);
        })
    };
    let mute_toggle = if view.show_mute_toggle {
        html! {
            <button
                type="button"
                class="media-mute"
                aria-pressed={(!view.muted).to_string()}
                onclick={on_toggle_mute}
            >
                { view.mute_label() }
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <div class="card media-panel">
            <div class="media-frame">
                <iframe
                    src={view.src.clone()}
                    title={props.title.clone()}
                    allow={EMBED_ALLOW}
                    allowfullscreen=true
                    class="media-embed"
                />
                {mute_toggle}
            </div>
        </div>
    }
}
