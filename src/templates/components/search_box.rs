use maud::{html, Markup};

pub fn search_box(query: &str) -> Markup {
    html! {
        form class="search-box" method="get" action="/search" role="search" {
            label class="sr-only" for="searchInput" { "Search" }
            input
                type="search"
                id="searchInput"
                name="q"
                value=(query)
                placeholder="Search an address or \"homes for sale in ...\""
                autocomplete="off"
                required;
            button type="submit" id="searchBtn" class="primary" { "Search" }
        }
    }
}
