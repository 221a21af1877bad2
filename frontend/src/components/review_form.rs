use super::super::{Model, Msg};
use shared::ProductCategory;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn render_review_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let busy = model.controller.is_busy();
    let can_submit = model.controller.can_submit(&model.text);

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let handle_text = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetText(input.value())
    });

    let handle_rating = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetRating(input.value())
    });

    let handle_category = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match select.value().parse::<ProductCategory>() {
            Ok(category) => Some(Msg::SetCategory(category)),
            Err(_) => {
                log::warn!("Unknown category selected: {}", select.value());
                None
            }
        }
    });

    html! {
        <form class="review-form" onsubmit={handle_submit}>
            <div class="form-row">
                <label for="category">{"Category"}</label>
                <select id="category" onchange={handle_category} disabled={busy}>
                    { for ProductCategory::all().map(|category| html! {
                        <option
                            value={category.to_string()}
                            selected={category == model.category}
                        >
                            { category.label() }
                        </option>
                    })}
                </select>

                <label for="rating">{"Rating"}</label>
                <input
                    id="rating"
                    type="number"
                    min="1"
                    max="5"
                    step="0.1"
                    value={model.rating.clone()}
                    oninput={handle_rating}
                    disabled={busy}
                />
            </div>

            <textarea
                id="review-text"
                rows="5"
                placeholder="Paste or type a product review here..."
                value={model.text.clone()}
                oninput={handle_text}
            />

            <button type="submit" class="analyze-btn" disabled={!can_submit}>
                {
                    if busy {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Checking..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Review"}</> }
                    }
                }
            </button>
        </form>
    }
}
