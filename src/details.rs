use yew::prelude::*;

use phuket_condo_core::{ContactChannels, PropertyListing};

#[derive(Properties, PartialEq)]
pub(crate) struct DetailsProps {
    pub(crate) listing: PropertyListing,
    pub(crate) features: &'static [&'static str],
}

#[function_component(DetailsPanel)]
pub(crate) fn details_panel(props: &DetailsProps) -> Html {
    let listing = &props.listing;
    let badge = match listing.special_offer_badge() {
        Some(label) => html! {
            <div class="offer-badge">
                <span>{ label }</span>
            </div>
        },
        None => html! {},
    };
    let facts = [
        ("Площадь", listing.size.to_string()),
        ("Спальни", listing.bedrooms.to_string()),
        ("Санузлы", listing.bathrooms.to_string()),
        ("Этаж", listing.floor.to_string()),
        ("Вид", listing.view.to_string()),
        ("Проект", listing.project.to_string()),
        ("Сдача", listing.handover.to_string()),
        ("Собственность", listing.ownership.to_string()),
    ];
    let facts: Html = facts
        .into_iter()
        .map(|(label, value)| {
            html! {
                <div class="fact">
                    <dt>{ label }</dt>
                    <dd>{ value }</dd>
                </div>
            }
        })
        .collect();
    let features: Html = props
        .features
        .iter()
        .map(|feature| html! { <li>{ *feature }</li> })
        .collect();

    html! {
        <div class="card details-panel">
            { badge }
            <div class="details-head">
                <div>
                    <div class="details-location">{ listing.location }</div>
                    <div class="details-prices">
                        <span class="price-old">{ listing.old_price }</span>
                        <span class="price-new">{ listing.price }</span>
                    </div>
                </div>
                <a href="#contact" class="button-primary">{ "Забронировать просмотр" }</a>
            </div>
            <dl class="facts">{ facts }</dl>
            <ul class="features">{ features }</ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactLinksProps {
    pub(crate) contacts: ContactChannels,
}

#[function_component(ContactLinks)]
pub(crate) fn contact_links(props: &ContactLinksProps) -> Html {
    let links: Html = props
        .contacts
        .links()
        .into_iter()
        .map(|link| {
            let (target, rel) = if link.opens_new_tab() {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a class="contact-link" href={link.href} {target} {rel}>{ link.label }</a>
            }
        })
        .collect();
    html! {
        <nav class="contact-links" aria-label="Связаться">{ links }</nav>
    }
}
