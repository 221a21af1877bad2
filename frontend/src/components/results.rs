use super::super::Model;
use super::confidence_bar::render_confidence;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    if model.controller.is_busy() {
        return html! {
            <p class="pending-message">
                <i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing review..."}
            </p>
        };
    }

    let Some(result) = model.controller.last_result() else {
        return html! {};
    };

    if let Some(message) = result.error_message() {
        return html! {
            <div class="results-container analysis-error">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <span>{ message }</span>
            </div>
        };
    }

    let is_fake = result.is_fake().unwrap_or(false);

    html! {
        <div class={classes!("results-container", if is_fake { "fake-detected" } else { "genuine" })}>
            <div class="result-header">
                <h2>
                    {
                        if is_fake {
                            html! { <><i class="fa-solid fa-user-secret"></i>{" Fake Review Detected"}</> }
                        } else {
                            html! { <><i class="fa-solid fa-circle-check"></i>{" Review Seems Genuine"}</> }
                        }
                    }
                </h2>
                {
                    match result.predicted_label() {
                        Some(label) => html! { <span class="predicted-label">{ format!("Label: {}", label) }</span> },
                        None => html! {},
                    }
                }
            </div>
            { render_confidence(result) }
        </div>
    }
}
