use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                main class="container" {
                    (content)
                }
            }
        }
    }
}

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6fa; color: #222; }
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.header-container { display: flex; justify-content: space-between; align-items: flex-start; background: #2d3a6b; padding: 1rem; border-radius: 8px; }
.scrape-form { display: flex; flex-wrap: wrap; gap: 8px; }
.date-group { background: white; margin-top: 1.5rem; padding: 1rem; border-radius: 8px; }
.listings { list-style: none; padding: 0; }
.listing-item { border-bottom: 1px solid #eee; padding: 0.5rem 0; }
.listing-details table { width: 100%; border-collapse: collapse; margin-top: 0.5rem; }
.listing-details th, .listing-details td { padding: 4px 8px; text-align: left; }
.synced { color: #666; font-size: 0.85em; }
form.inline { display: inline; }
"#;
