use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Event;
use yew::prelude::*;

use phuket_condo_core::ViewportClass;

pub(crate) fn current_viewport_class() -> ViewportClass {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    ViewportClass::from_width(width)
}

/// Desktop/mobile class of the window, refreshed on every `resize`.
#[hook]
pub(crate) fn use_viewport_class() -> ViewportClass {
    let class = use_state_eq(current_viewport_class);
    {
        let class = class.clone();
        use_effect_with((), move |_| {
            let last = Rc::new(Cell::new(current_viewport_class()));
            class.set(last.get());
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_event: &Event| {
                    let next = current_viewport_class();
                    if last.replace(next) != next {
                        gloo::console::log!("viewport", next.label());
                    }
                    class.set(next);
                })
            });
            move || drop(listener)
        });
    }
    *class
}
