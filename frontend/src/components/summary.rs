use super::super::Model;
use yew::prelude::*;

pub fn render_summary(model: &Model) -> Html {
    let aggregate = model.controller.aggregate();

    html! {
        <section class="summary-cards">
            { render_card("Total Analyzed", aggregate.total, "total") }
            { render_card("Fake Reviews", aggregate.fake, "fake") }
            { render_card("Genuine Reviews", aggregate.genuine, "genuine") }
        </section>
    }
}

fn render_card(title: &str, count: usize, kind: &'static str) -> Html {
    html! {
        <div class={classes!("summary-card", kind)}>
            <div class="summary-title">{ title }</div>
            <div class="summary-count">{ count.to_string() }</div>
        </div>
    }
}
