use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub const PLACEHOLDER: &str = "-";

/// On-screen value for an optional field. Empty strings count as missing.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// A single-button POST form, optionally carrying hidden fields.
pub fn post_button(action: &str, label: &str, hidden: &[(&str, &str)], disabled: bool) -> Markup {
    html! {
        form class="inline" action=(action) method="post" {
            @for (name, value) in hidden {
                input type="hidden" name=(name) value=(value);
            }
            button type="submit" disabled[disabled] { (label) }
        }
    }
}
