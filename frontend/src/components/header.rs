use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-magnifying-glass-chart"></i> {" Fake Product Review Dashboard"}</h1>
            <p class="subtitle">{"Check whether a product review looks genuine"}</p>
        </header>
    }
}
