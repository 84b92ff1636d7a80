use chrono::{Datelike, Local};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn site_layout(title: &str, content: Markup) -> Markup {
    let year = Local::now().year();

    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                div class="app-container" {
                    header {
                        h1 { "Tanah Bali" span { "." } }
                    }
                    main {
                        (content)
                    }
                    footer {
                        p { "© " (year) " Tanah Bali. Dibuat dengan ❤️ di Bali." }
                    }
                }
            }
        }
    }
}
