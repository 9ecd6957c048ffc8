use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use humanizer_core::{Metrics, Options, ProcessResponse, Style};
use reqwest::blocking::Client;
use reqwest::Result;
use serde::Serialize;

const PROCESS_URL: &str = "http://127.0.0.1:5000/api/process-text";

/// JSON body of `/api/process-text`.
#[derive(Serialize)]
struct ProcessBody<'a> {
    text: &'a str,
    options: &'a Options,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a POST request to `/api/process-text`.
    ///
    /// Validation failures come back as a `ProcessResponse` with
    /// `success: false`, so the status code is not checked here.
    fn post_process(&self, text: &str, options: &Options) -> Result<ProcessResponse> {
        self.client
            .post(PROCESS_URL)
            .json(&ProcessBody { text, options })
            .send()?
            .json()
    }
}

/// Global UI state (MUST persist between frames in egui).
struct HumanizerUI {
    rest: RESTContext,
    input: String,
    options: Options,

    output: Option<String>,
    metrics: Option<Metrics>,
}

impl HumanizerUI {
    /// Initializes the UI with the default options.
    fn new() -> Result<Self> {
        Ok(Self {
            rest: RESTContext::new()?,
            input: String::new(),
            options: Options::default(),
            output: None,
            metrics: None,
        })
    }

    /// Performs the processing request.
    fn post_process(&mut self) {
        match self.rest.post_process(&self.input, &self.options) {
            Ok(response) if response.success => {
                self.output = response.modified_text;
                self.metrics = response.metrics;
            }
            Ok(response) => {
                self.output = Some(format!("Error: {}", response.error.unwrap_or_default()));
                self.metrics = None;
            }
            Err(e) => {
                self.output = Some(format!("Error: {e}"));
                self.metrics = None;
            }
        }
    }
}

impl eframe::App for HumanizerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Text");
            ui.add(
                egui::TextEdit::multiline(&mut self.input)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            egui::Grid::new("options_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    // vocabulary level
                    ui.label("Vocabulary level");
                    ui.add(
                        egui::DragValue::new(&mut self.options.vocabulary_level)
                            .range(1..=20)
                            .speed(1),
                    );
                    ui.end_row();

                    ui.label("Add errors");
                    ui.checkbox(&mut self.options.add_errors, "");
                    ui.end_row();

                    ui.label("Keep professional");
                    ui.checkbox(&mut self.options.keep_professional, "");
                    ui.end_row();

                    // style
                    ui.label("Style");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.options.style, Style::Casual, "Casual");
                        ui.radio_value(&mut self.options.style, Style::Formal, "Formal");
                    });
                    ui.end_row();

                    // creativity
                    ui.label("Creativity");
                    ui.add(egui::Slider::new(&mut self.options.creativity, 0.0..=1.0));
                    ui.end_row();
                });

            ui.separator();

            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Humanize"))
                .clicked()
            {
                self.post_process();
            }

            // Output
            match &self.output {
                Some(text) => {
                    ui.label(text);
                }
                None => {
                    ui.label("Click Humanize to start");
                }
            }

            if let Some(metrics) = &self.metrics {
                ui.label(format!(
                    "Naturalness: {:.2}   Similarity: {:.2}",
                    metrics.naturalness_score, metrics.semantic_similarity
                ));
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "humanizer",
        options,
        Box::new(|_| Ok(Box::new(HumanizerUI::new()?))),
    )
}
