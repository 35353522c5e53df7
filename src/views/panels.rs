//! Jobs and products tool panels, shown as modals over the chat view.
//!
//! The original search backends are out of scope here; the panels filter a
//! small static catalog client-side so the modal flow stays exercisable.

use crate::session::Dashboard;
use dioxus::prelude::*;

struct JobListing {
    title: &'static str,
    company: &'static str,
    location: &'static str,
}

const JOB_LISTINGS: &[JobListing] = &[
    JobListing {
        title: "Software Developer",
        company: "Northwind Systems",
        location: "Remote",
    },
    JobListing {
        title: "Data Engineer",
        company: "Lakeshore Analytics",
        location: "Chicago, IL",
    },
    JobListing {
        title: "Frontend Engineer",
        company: "Brightline Labs",
        location: "Austin, TX",
    },
    JobListing {
        title: "Site Reliability Engineer",
        company: "Quayside Cloud",
        location: "Remote",
    },
    JobListing {
        title: "Product Designer",
        company: "Fieldnote",
        location: "Portland, OR",
    },
];

struct ProductEntry {
    name: &'static str,
    price: &'static str,
    vendor: &'static str,
}

const PRODUCT_CATALOG: &[ProductEntry] = &[
    ProductEntry {
        name: "Mechanical Keyboard, 65%",
        price: "$89",
        vendor: "Keyline",
    },
    ProductEntry {
        name: "USB-C Dock, 11-port",
        price: "$129",
        vendor: "Portmaster",
    },
    ProductEntry {
        name: "27\" 4K Monitor",
        price: "$349",
        vendor: "ViewPeak",
    },
    ProductEntry {
        name: "Noise-cancelling Headset",
        price: "$199",
        vendor: "Quietude",
    },
    ProductEntry {
        name: "Ergonomic Desk Chair",
        price: "$420",
        vendor: "Sitwell",
    },
];

fn matches_query(haystack: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystack
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[component]
pub fn JobsPanel(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let mut title_filter = use_signal(String::new);
    let mut location_filter = use_signal(String::new);

    let title_query = title_filter();
    let location_query = location_filter();
    let listings: Vec<&JobListing> = JOB_LISTINGS
        .iter()
        .filter(|job| matches_query(&[job.title, job.company], &title_query))
        .filter(|job| matches_query(&[job.location], &location_query))
        .collect();

    rsx! {
        div { class: "modal-overlay",
            div { id: "jobs-modal", class: "modal-panel",
                div { class: "modal-header",
                    h2 { "Job Search" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        // Closing a tool returns to the base chat view.
                        onclick: move |_| {
                            dashboard.with_mut(|dash| { dash.show_tool("chat"); });
                        },
                        "Close"
                    }
                }
                div { class: "panel-filters",
                    input {
                        r#type: "text",
                        placeholder: "Title or company",
                        value: "{title_filter}",
                        oninput: move |ev| title_filter.set(ev.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Location",
                        value: "{location_filter}",
                        oninput: move |ev| location_filter.set(ev.value()),
                    }
                }
                div { class: "panel-list",
                    if listings.is_empty() {
                        p { class: "text-muted", "No jobs match your search." }
                    }
                    for job in listings {
                        div { class: "panel-card",
                            h3 { "{job.title}" }
                            p { "{job.company}" }
                            span { class: "text-muted", "{job.location}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProductsPanel(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let mut query = use_signal(String::new);

    let current_query = query();
    let products: Vec<&ProductEntry> = PRODUCT_CATALOG
        .iter()
        .filter(|product| matches_query(&[product.name, product.vendor], &current_query))
        .collect();

    rsx! {
        div { class: "modal-overlay",
            div { id: "products-modal", class: "modal-panel",
                div { class: "modal-header",
                    h2 { "Product Search" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            dashboard.with_mut(|dash| { dash.show_tool("chat"); });
                        },
                        "Close"
                    }
                }
                div { class: "panel-filters",
                    input {
                        r#type: "text",
                        placeholder: "Search products",
                        value: "{query}",
                        oninput: move |ev| query.set(ev.value()),
                    }
                }
                div { class: "panel-list",
                    if products.is_empty() {
                        p { class: "text-muted", "No products match your search." }
                    }
                    for product in products {
                        div { class: "panel-card",
                            h3 { "{product.name}" }
                            p { "{product.vendor}" }
                            span { class: "text-muted", "{product.price}" }
                        }
                    }
                }
            }
        }
    }
}
