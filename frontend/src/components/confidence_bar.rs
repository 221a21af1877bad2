use shared::AnalysisResult;
use yew::prelude::*;

/// Bar for results that carry a numeric confidence, `N/A` otherwise.
pub fn render_confidence(result: &AnalysisResult) -> Html {
    match result.confidence_bar() {
        Some(bar) => html! {
            <div class="confidence-meter">
                <div class="meter">
                    <div
                        class={classes!("meter-fill", bar.tier.to_string())}
                        style={format!("width: {}%", bar.fill_width())}
                    ></div>
                </div>
                <div class="meter-value">{ format!("{}% confidence", bar.percent) }</div>
            </div>
        },
        None => html! {
            <div class="confidence-meter">
                <div class="meter-value">{"Confidence: N/A"}</div>
            </div>
        },
    }
}
