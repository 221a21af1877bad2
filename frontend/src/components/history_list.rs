use super::super::Model;
use super::confidence_bar::render_confidence;
use super::utils::preview_text;
use shared::HistoryEntry;
use yew::prelude::*;

pub fn render_history(model: &Model) -> Html {
    let history = model.controller.history();

    html! {
        <section class="history">
            <h3>{"Recent Analyzed Reviews"}</h3>
            {
                if history.is_empty() {
                    html! { <p class="no-results-message">{"No reviews analyzed yet."}</p> }
                } else {
                    html! {
                        <div class="history-list">
                            { for history.list().map(render_entry) }
                        </div>
                    }
                }
            }
        </section>
    }
}

fn render_entry(entry: &HistoryEntry) -> Html {
    let verdict = entry.result.verdict();

    html! {
        <div
            class={classes!("history-item", verdict.to_string().to_lowercase())}
            key={entry.id.to_string()}
        >
            <div class="history-meta">
                { format!(
                    "{} | {} | {} stars",
                    entry.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    entry.input.category.label(),
                    entry.input.rating
                ) }
            </div>
            <div class="history-text">
                <strong>{"Review: "}</strong>{ preview_text(&entry.input.text, 200) }
            </div>
            <div class="history-verdict">{ verdict.to_string() }</div>
            {
                match entry.result.error_message() {
                    Some(message) => html! { <div class="history-error">{ message }</div> },
                    None => html! {},
                }
            }
            {
                if entry.result.is_failure() {
                    html! {}
                } else {
                    render_confidence(&entry.result)
                }
            }
        </div>
    }
}
