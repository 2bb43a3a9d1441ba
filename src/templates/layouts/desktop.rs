use crate::templates::components::search_box;
use maud::{html, Markup, DOCTYPE};

/// Page shell: head, header with the search box, then `content`.
/// `query` pre-fills the search box on result pages.
pub fn desktop_layout(title: &str, query: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | REBA" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#524ed2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                          class="icon icon-tabler icon-tabler-home"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      h3 { "REBA" }
                  }
                  (search_box(query))
              }
              main id="results" class="container" {
                  (content)
              }
            }
        }
    }
}
