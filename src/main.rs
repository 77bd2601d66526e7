use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use std::env;

mod domain;
mod models;

use crate::domain::solve::{solve_problem, SolveError};
use crate::domain::solver::SolverEngine;
use crate::domain::solver_factory::{create_solver, SolverType};
use crate::models::LpProblem;

// ---------- Route handlers ----------

/// POST /solve/lp
pub async fn solve_lp(
    problem: web::Json<LpProblem>,
    engine: web::Data<Box<dyn SolverEngine>>,
) -> impl Responder {
    let problem = problem.into_inner();
    log::debug!(
        "solving problem with {} variables and {} constraints using {}",
        problem.num_variables(),
        problem.num_constraints(),
        engine.name()
    );

    // Simplex iterations are CPU-bound; run them on the blocking pool so
    // event-loop workers keep serving other requests.
    let result = web::block(move || solve_problem(engine.get_ref().as_ref(), &problem)).await;

    match result {
        Ok(Ok(solution)) => HttpResponse::Ok().json(solution),
        Ok(Err(SolveError::Validation(err))) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }))
        }
        Ok(Err(SolveError::Internal(detail))) => {
            log::error!("solver engine failure: {}", detail);
            sentry::capture_message(&detail, sentry::Level::Error);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "internal solver failure" }))
        }
        Err(err) => {
            log::error!("blocking pool failure: {}", err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "internal solver failure" }))
        }
    }
}

/// GET / - Service identity
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "description": "Solve linear programming problems easily via API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
    }))
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Reads SENTRY_DSN from the environment; a missing DSN disables reporting.
    let _sentry = sentry::init(sentry::ClientOptions {
        release: sentry::release_name!(),
        ..Default::default()
    });

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(9000);

    let json_limit = env::var("JSON_PAYLOAD_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(2 * 1024 * 1024); // default 2 MB

    let solver_type = env::var("SOLVER_ENGINE")
        .ok()
        .and_then(|name| {
            let parsed = SolverType::from_str(&name);
            if parsed.is_none() {
                log::warn!("unknown solver engine '{}', falling back to microlp", name);
            }
            parsed
        })
        .unwrap_or(SolverType::Microlp);

    let engine = web::Data::new(create_solver(solver_type));
    log::info!("using {} solver engine", engine.name());
    log::info!("Starting server on http://127.0.0.1:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .app_data(engine.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(|err, _| {
                        let err_string = err.to_string();
                        actix_web::error::InternalError::from_response(
                            err,
                            HttpResponse::BadRequest()
                                .json(serde_json::json!({ "error": err_string })),
                        )
                        .into()
                    }),
            )
            .route("/", web::get().to(index))
            .route("/solve/lp", web::post().to(solve_lp))
            .route("/health", web::get().to(health_check))
            .route("/docs", web::get().to(docs))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
