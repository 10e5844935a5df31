use std::cell::RefCell;
use std::rc::Rc;

use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use phuket_condo_core::submission::{ACCEPT_JSON, FORM_CONTENT_TYPE};
use phuket_condo_core::{
    check_status, ContactField, ContactForm, LeadPayload, SubmitError, SubmitStatus,
};

/// Render state plus a live copy that async callbacks and rapid repeat
/// events read, so a second submit sees `Sending` before the re-render.
#[derive(Clone)]
struct FormStore {
    state: UseStateHandle<ContactForm>,
    live: Rc<RefCell<ContactForm>>,
}

impl FormStore {
    fn new(state: UseStateHandle<ContactForm>, live: Rc<RefCell<ContactForm>>) -> Self {
        Self { state, live }
    }

    fn update<R>(&self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        let (result, snapshot) = {
            let mut form = self.live.borrow_mut();
            let result = apply(&mut form);
            (result, form.clone())
        };
        self.state.set(snapshot);
        result
    }
}

async fn send_lead(endpoint: &str, payload: &LeadPayload) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Accept", ACCEPT_JSON)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(payload.to_form_body())
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    check_status(response.status())
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactFormProps {
    pub(crate) endpoint: AttrValue,
    pub(crate) subject: AttrValue,
}

#[function_component(ContactFormPanel)]
pub(crate) fn contact_form_panel(props: &ContactFormProps) -> Html {
    let subject = props.subject.to_string();
    let state = {
        let subject = subject.clone();
        use_state(move || ContactForm::new(subject))
    };
    let live = use_mut_ref(move || ContactForm::new(subject));
    let store = FormStore::new(state.clone(), live);
    let form = (*state).clone();

    let on_field = |field: ContactField| {
        let store = store.clone();
        Callback::from(move |event: InputEvent| {
            let value = if field == ContactField::Message {
                event.target_unchecked_into::<HtmlTextAreaElement>().value()
            } else {
                event.target_unchecked_into::<HtmlInputElement>().value()
            };
            store.update(|form| form.set_field(field, value));
        })
    };

    let on_submit = {
        let store = store.clone();
        let endpoint = props.endpoint.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(payload) = store.update(ContactForm::begin_submit) else {
                if let Some(field) = store.live.borrow().missing() {
                    gloo::console::log!("contact form: missing", field.key());
                }
                return;
            };
            gloo::console::log!("contact form: sending");
            let store = store.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let outcome = send_lead(&endpoint, &payload).await;
                match &outcome {
                    Ok(()) => {
                        gloo::console::log!("contact form: delivered");
                    }
                    Err(err) => {
                        gloo::console::warn!("contact form: failed", err.to_string());
                    }
                }
                store.update(|form| form.finish(outcome));
            });
        })
    };

    if form.status() == SubmitStatus::Success {
        return html! {
            <section class="card contact" id="contact">
                <h2>{ "Спасибо!" }</h2>
                <p class="contact-success">
                    { "Заявка отправлена. Мы свяжемся с вами в ближайшее время." }
                </p>
            </section>
        };
    }

    let sending = form.is_sending();
    let fields = form.fields();
    let error_note = match (form.missing(), form.status()) {
        (Some(field), _) => html! {
            <p class="contact-error contact-missing" role="alert">
                { format!("Заполните поле «{}».", field.label()) }
            </p>
        },
        (None, SubmitStatus::Error) => html! {
            <p class="contact-error" role="alert">
                { "Не удалось отправить заявку. Проверьте соединение и попробуйте ещё раз." }
            </p>
        },
        _ => html! {},
    };

    html! {
        <section class="card contact" id="contact">
            <h2>{ "Оставить заявку" }</h2>
            <form class="contact-form" onsubmit={on_submit}>
                <label for="contact-name">{ ContactField::Name.label() }</label>
                <input
                    id="contact-name"
                    name={ContactField::Name.key()}
                    type="text"
                    autocomplete="name"
                    required=true
                    value={fields.name.clone()}
                    oninput={on_field(ContactField::Name)}
                />
                <label for="contact-method">{ ContactField::Contact.label() }</label>
                <input
                    id="contact-method"
                    name={ContactField::Contact.key()}
                    type="text"
                    required=true
                    value={fields.contact.clone()}
                    oninput={on_field(ContactField::Contact)}
                />
                <label for="contact-message">{ ContactField::Message.label() }</label>
                <textarea
                    id="contact-message"
                    name={ContactField::Message.key()}
                    rows="4"
                    required=true
                    value={fields.message.clone()}
                    oninput={on_field(ContactField::Message)}
                />
                { error_note }
                <button type="submit" class="button-primary" disabled={sending}>
                    { if sending { "Отправка…" } else { "Отправить" } }
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlFormElement};
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn settle() {
        sleep(Duration::from_millis(20)).await;
    }

    fn type_into(root: &Element, selector: &str, value: &str) {
        let node = root.query_selector(selector).expect("selector").expect("field");
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else {
            node.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
        }
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).expect("event");
        node.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test(async)]
    async fn blank_field_shows_inline_note() {
        let root = gloo::utils::document().create_element("div").expect("root");
        gloo::utils::body().append_child(&root).expect("append root");
        let props = ContactFormProps {
            endpoint: "https://relay.invalid/f/none".into(),
            subject: "Lead".into(),
        };
        let handle =
            yew::Renderer::<ContactFormPanel>::with_root_and_props(root.clone(), props).render();
        settle().await;

        type_into(&root, "#contact-name", "Ivan");
        type_into(&root, "#contact-method", "   ");
        type_into(&root, "#contact-message", "hi");
        settle().await;
        assert!(root.query_selector(".contact-missing").expect("selector").is_none());

        let form = root.query_selector("form").expect("selector").expect("form");
        form.unchecked_into::<HtmlFormElement>().request_submit().expect("submit");
        settle().await;

        let note = root
            .query_selector(".contact-missing")
            .expect("selector")
            .and_then(|node| node.text_content())
            .expect("missing-field note");
        assert!(note.contains(ContactField::Contact.label()));
        let button = root.query_selector("button").expect("selector").expect("button");
        assert!(!button.has_attribute("disabled"));

        type_into(&root, "#contact-method", "@ivan");
        settle().await;
        assert!(root.query_selector(".contact-missing").expect("selector").is_none());

        handle.destroy();
        root.remove();
    }
}
