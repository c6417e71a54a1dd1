use crate::domain::{DateGroup, Record};
use crate::templates::{desktop_layout, or_placeholder, post_button};
use crate::view::ListingsVm;
use maud::{html, Markup};
use url::form_urlencoded;

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "SchoolProp Listings",
        html! {
            h1 { "SchoolProp Listings" }

            (setup_panel(vm))

            @if let Some(at) = vm.last_synced_at {
                p class="synced" { "Last synced " (at.format("%Y-%m-%d %H:%M:%S UTC")) }
            }

            div class="data-container" {
                @for group in vm.groups() {
                    (date_group(vm, &group))
                }
            }
        },
    )
}

fn setup_panel(vm: &ListingsVm) -> Markup {
    html! {
        div class="header-container" {
            div class="setup-header" {
                h2 style="color: white;" { "Setup Details" }
                @if vm.show_setup {
                    div class="scrape-form" {
                        form action="/scrape" method="post" {
                            input type="text" name="username" placeholder="Username" value=(vm.username);
                            input type="password" name="password" placeholder="Password";
                            button type="submit" disabled[vm.scraping] {
                                @if vm.scraping { "Scraping..." } @else { "Run Scrape" }
                            }
                        }
                        form action="/city" method="post" {
                            input type="text" name="city" placeholder="City" value=(vm.city);
                            button type="submit" { "Filter" }
                        }
                    }
                }
            }
            (post_button(
                "/setup/toggle",
                if vm.show_setup { "Hide Setup" } else { "Show Setup" },
                &[],
                false,
            ))
        }
    }
}

fn date_group(vm: &ListingsVm, group: &DateGroup<'_>) -> Markup {
    let export_query = form_urlencoded::Serializer::new(String::new())
        .append_pair("date", group.date_key)
        .finish();

    html! {
        div class="date-group" {
            ul class="listings" {
                @for record in &group.records {
                    (listing_item(vm, record))
                }
            }
            a class="download" href=(format!("/export?{export_query}")) {
                "Download Excel for " (group.date_key)
            }
        }
    }
}

fn listing_item(vm: &ListingsVm, record: &Record) -> Markup {
    let expanded = vm.is_expanded(&record.id);

    html! {
        li class="listing-item" id=(format!("listing-{}", record.id)) {
            div class="listing-content" {
                div class="listing-date" { (record.date_key()) }
                div class="listing-title" { strong { (record.city) } }
            }
            (post_button(
                "/listings/toggle",
                if expanded { "Hide Details" } else { "View Details" },
                &[("id", record.id.as_str())],
                false,
            ))
            @if expanded {
                (listing_details(record))
            }
        }
    }
}

fn listing_details(record: &Record) -> Markup {
    html! {
        div class="listing-details" {
            table {
                thead {
                    tr {
                        th { "S.No." }
                        th { "Name" }
                        th { "Title" }
                        th { "Phone" }
                        th { "Email" }
                        th { "Location" }
                        th { "Details" }
                    }
                }
                tbody {
                    tr {
                        td { "1" }
                        td { (or_placeholder(None)) }
                        td { (record.city) }
                        td { (or_placeholder(record.phone.as_deref())) }
                        td { (or_placeholder(record.email.as_deref())) }
                        td { (or_placeholder(record.location.as_deref())) }
                        td { (or_placeholder(record.details.as_deref())) }
                    }
                }
            }
        }
    }
}
