use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info, warn};

use humanizer_core::pipeline::typo::DEFAULT_ERROR_RATE;
use humanizer_core::{Lexicons, ProcessRequest, ProcessResponse, TextHumanizer};
use serde::Serialize;

/// Command-line and environment configuration of the server
#[derive(Debug, Parser)]
#[command(name = "humanizer-server")]
#[command(about = "HTTP front-end of the text humanizer")]
struct Args {
	/// Address to bind
	#[arg(long, env = "HUMANIZER_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(short, long, env = "HUMANIZER_PORT", default_value_t = 5000)]
	port: u16,

	/// Synonym source file (.dat); the built-in table is used when absent
	#[arg(short, long, env = "HUMANIZER_SYNONYMS")]
	synonyms: Option<PathBuf>,

	/// Per-word typo probability used when a request asks for errors
	#[arg(long, env = "HUMANIZER_ERROR_RATE", default_value_t = DEFAULT_ERROR_RATE)]
	error_rate: f64,
}

#[derive(Serialize)]
struct Health {
	status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LexiconSummary {
	synonym_entries: usize,
	error_patterns: usize,
}

/// HTTP POST endpoint `/api/process-text`
///
/// Validates the JSON body and runs the whole pipeline on it.
/// Returns `200` with the result, `400` for invalid input and `500` when a
/// stage fails. The body is always a `ProcessResponse`.
#[post("/api/process-text")]
async fn process_text(data: web::Data<TextHumanizer>, body: String) -> impl Responder {
	let result = ProcessRequest::from_json(&body)
		.and_then(|request| data.process_request(&request, &mut rand::rng()));

	match result {
		Ok(humanized) => HttpResponse::Ok().json(ProcessResponse::success(humanized)),
		Err(e) if e.is_client_error() => {
			warn!("Rejected request: {e}");
			HttpResponse::BadRequest().json(ProcessResponse::failure(&e))
		}
		Err(e) => {
			error!("Processing failed: {e}");
			HttpResponse::InternalServerError().json(ProcessResponse::failure(&e))
		}
	}
}

#[get("/api/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().json(Health { status: "ok" })
}

#[get("/api/lexicon")]
async fn get_lexicon(data: web::Data<TextHumanizer>) -> impl Responder {
	let lexicons = data.lexicons();
	HttpResponse::Ok().json(LexiconSummary {
		synonym_entries: lexicons.synonyms.len(),
		error_patterns: lexicons.errors.patterns().count(),
	})
}

/// Main entry point for the server.
///
/// Loads the lexicons once, shares a single `TextHumanizer` between workers
/// (it is read-only, no lock needed) and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let lexicons = Lexicons::load(args.synonyms.as_ref()).map_err(io::Error::other)?;
	let humanizer = TextHumanizer::new(Arc::new(lexicons))
		.with_error_rate(args.error_rate)
		.map_err(io::Error::other)?;
	let shared_humanizer = web::Data::new(humanizer);

	info!("Listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_humanizer.clone())
			.service(process_text)
			.service(get_health)
			.service(get_lexicon)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use humanizer_core::lexicon::synonyms::SynonymTable;

	fn humanizer() -> web::Data<TextHumanizer> {
		let lexicons = Lexicons::with_synonyms(SynonymTable::default());
		web::Data::new(TextHumanizer::new(Arc::new(lexicons)))
	}

	async fn post(body: &str) -> (StatusCode, ProcessResponse) {
		let app = test::init_service(App::new().app_data(humanizer()).service(process_text)).await;
		let request = test::TestRequest::post()
			.uri("/api/process-text")
			.insert_header(("content-type", "application/json"))
			.set_payload(body.to_owned())
			.to_request();
		let response = test::call_service(&app, request).await;
		let status = response.status();
		(status, test::read_body_json(response).await)
	}

	#[actix_web::test]
	async fn test_process_text_ok() {
		let (status, body) = post(
			r#"{"text": "We gotta leave!!", "options": {"vocabularyLevel": 12, "addErrors": false,
				"keepProfessional": true, "style": "formal", "creativity": 0.0}}"#,
		)
		.await;

		assert_eq!(status, StatusCode::OK);
		assert!(body.success);
		assert_eq!(body.modified_text.as_deref(), Some("We have to leave !"));
		let metrics = body.metrics.unwrap();
		assert_eq!(metrics.naturalness_score, 0.5);
		assert!(body.error.is_none());
	}

	#[actix_web::test]
	async fn test_process_text_missing_style() {
		let (status, body) = post(
			r#"{"text": "Hello", "options": {"vocabularyLevel": 12, "addErrors": false,
				"keepProfessional": true, "creativity": 0.5}}"#,
		)
		.await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(!body.success);
		assert!(body.modified_text.is_none());
		assert_eq!(body.error.as_deref(), Some("missing required field: options.style"));
	}

	#[actix_web::test]
	async fn test_process_text_malformed_body() {
		let (status, body) = post("{not json").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(!body.success);
	}

	#[actix_web::test]
	async fn test_health_and_lexicon() {
		let app = test::init_service(
			App::new()
				.app_data(humanizer())
				.service(get_health)
				.service(get_lexicon),
		)
		.await;

		let health = test::TestRequest::get().uri("/api/health").to_request();
		let response = test::call_service(&app, health).await;
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(test::read_body(response).await, r#"{"status":"ok"}"#);

		let lexicon = test::TestRequest::get().uri("/api/lexicon").to_request();
		let response = test::call_service(&app, lexicon).await;
		assert_eq!(test::read_body(response).await, r#"{"synonymEntries":0,"errorPatterns":6}"#);
	}
}
