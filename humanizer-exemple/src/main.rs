use std::sync::Arc;

use humanizer_core::{Lexicons, Options, ProcessRequest, Style, TextHumanizer};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the built-in synonym table
    // Pass a path instead of None to load a .dat file (its .bin cache is reused when fresh)
    let lexicons = Lexicons::load(None::<&str>)?;

    // The humanizer is read-only and can be shared between threads
    let humanizer = TextHumanizer::new(Arc::new(lexicons)).with_error_rate(0.05)?;

    // A seeded generator makes every run print the same results
    let mut rng = StdRng::seed_from_u64(2024);

    let text = "I cannot believe you're gonna do that!!! The weather is wonderful today. \
                We are happy to help with anything important.";

    // Start from the defaults and adjust each option
    let mut options = Options::default();

    // Reading-grade level; below 10, synonyms longer than 8 characters are rejected
    options.vocabulary_level = 8;

    // Enable the typo stage (uses the error rate set above)
    options.add_errors = true;

    // 'true' cleans up slang and shouting, 'false' adds filler phrases
    options.keep_professional = true;

    // Casual contracts, formal expands
    options.style = Style::Formal;

    // Above 0.5, fillers and emphasis may be inserted
    options.creativity = 0.8;

    // Attempting invalid values
    match humanizer.clone().with_error_rate(1.5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Error rate 1.5 is invalid: {e}"),
    }
    match "poetic".parse::<Style>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Style 'poetic' is invalid: {e}"),
    }
    let invalid = Options { creativity: 2.0, ..options.clone() };
    match humanizer.process(text, &invalid, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Creativity 2.0 is invalid: {e}"),
    }

    // The same pipeline, one run per style
    for style in [Style::Formal, Style::Casual] {
        options.style = style;
        let result = humanizer.process(text, &options, &mut rng)?;
        println!("[{style}] {}", result.humanized_text);
        println!(
            "  naturalness: {:.2}, similarity: {:.2}",
            result.metrics.naturalness_score, result.metrics.semantic_similarity
        );
    }

    // Requests coming from a transport layer are validated first
    let body = r#"{"text": "Hello there", "options": {"vocabularyLevel": "12", "addErrors": false,
        "keepProfessional": false, "creativity": 0.5}}"#;
    match humanizer.process_request(&ProcessRequest::from_json(body)?, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Request rejected: {e}"),
    }

    Ok(())
}
