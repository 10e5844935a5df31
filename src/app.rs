use yew::prelude::*;

use phuket_condo_core::{CONTACTS, FEATURES, LISTING, PHOTOS, VIDEO};

use crate::boot;
use crate::config;
use crate::contact_form::ContactFormPanel;
use crate::details::{ContactLinks, DetailsPanel};
use crate::gallery::Gallery;
use crate::media_panel::MediaPanel;

#[function_component(App)]
pub(crate) fn app() -> Html {
    use_effect_with((), |_| {
        boot::ready();
        || ()
    });
    let endpoint = use_memo((), |_| AttrValue::from(config::form_endpoint()));

    html! {
        <main class="page">
            <header class="hero">
                <h1>{ LISTING.title }</h1>
                <p class="hero-subtitle">{ LISTING.subtitle }</p>
            </header>
            <section class="hero-grid">
                <MediaPanel source={VIDEO.url} title={VIDEO.title} />
                <DetailsPanel listing={LISTING} features={FEATURES} />
            </section>
            <Gallery photos={PHOTOS} />
            <section class="contact-grid">
                <ContactFormPanel endpoint={(*endpoint).clone()} subject={CONTACTS.form_subject} />
                <aside class="card contact-direct">
                    <h2>{ "Связаться напрямую" }</h2>
                    <ContactLinks contacts={CONTACTS} />
                </aside>
            </section>
            <footer class="footer">
                <span>{ LISTING.project }</span>
                <span>{ LISTING.location }</span>
            </footer>
        </main>
    }
}
