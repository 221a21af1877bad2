mod api;
mod components;

use api::PredictClient;
use components::header::render_header;
use components::history_list::render_history;
use components::results::render_results;
use components::review_form::render_review_form;
use components::summary::render_summary;
use components::utils::render_error_message;
use serde_json::Value;
use shared::{
    ClassificationClient, ClientError, ProductCategory, Rating, ReviewInput, Submission,
    SubmissionController,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Form input
    SetText(String),
    SetCategory(ProductCategory),
    SetRating(String),

    // Analysis
    Submit,
    Completed(Submission, Result<Value, ClientError>),
}

// Main component
pub struct Model {
    controller: SubmissionController,
    client: PredictClient,
    text: String,
    category: ProductCategory,
    rating: String,
    error: Option<String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = api::load_config();
        log::info!("Using classification service at {}", config.predict_url);

        Self {
            controller: SubmissionController::new(&config),
            client: PredictClient::new(&config),
            text: String::new(),
            category: ProductCategory::default(),
            rating: Rating::default().to_string(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetText(text) => {
                self.text = text;
                true
            }
            Msg::SetCategory(category) => {
                self.category = category;
                true
            }
            Msg::SetRating(rating) => {
                self.rating = rating;
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::Completed(submission, outcome) => self.handle_completed(submission, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_summary(self) }
                    { render_review_form(self, ctx) }
                    { render_error_message(self) }
                    { render_results(self) }
                    { render_history(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Fake Product Review System"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn parse_input(&self) -> Result<ReviewInput, String> {
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Rating \"{}\" is not a number", self.rating))
            .and_then(|value| Rating::new(value).map_err(|e| e.to_string()))?;

        Ok(ReviewInput::new(self.text.clone())
            .with_category(self.category)
            .with_rating(rating))
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        let input = match self.parse_input() {
            Ok(input) => input,
            Err(e) => {
                self.error = Some(e);
                return true;
            }
        };

        match self.controller.begin(input) {
            Ok(submission) => {
                self.error = None;
                self.send_analysis_request(ctx, submission);
            }
            Err(e) => {
                log::warn!("Submission rejected: {}", e);
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn handle_completed(
        &mut self,
        submission: Submission,
        outcome: Result<Value, ClientError>,
    ) -> bool {
        if let Err(e) = self.controller.complete(submission, outcome) {
            log::error!("Dropped analysis result: {}", e);
        }
        true
    }

    fn send_analysis_request(&self, ctx: &Context<Self>, submission: Submission) {
        spawn_local({
            let link = ctx.link().clone();
            let client = self.client.clone();

            async move {
                let outcome = client.predict(submission.request()).await;
                link.send_message(Msg::Completed(submission, outcome));
            }
        });
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
