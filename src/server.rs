use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::io_struct::{ChatRequest, ChatResponse, ErrorResponse};
use crate::middleware::Cors;
use crate::relay_state::RelayState;
use actix_web::{HttpRequest, HttpResponse, HttpServer, error, get, post, web};
use std::io::Write;

const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

#[get("/health")]
pub async fn health(req: HttpRequest, app_state: web::Data<RelayState>) -> HttpResponse {
    log::debug!("Received {} request to {}", req.method(), req.path());
    HttpResponse::Ok().json(app_state.health_check())
}

#[post("/reset")]
pub async fn reset(req: HttpRequest, app_state: web::Data<RelayState>) -> HttpResponse {
    log::info!("Received {} request to {}", req.method(), req.path());
    HttpResponse::Ok().json(app_state.reset().await)
}

#[post("/chat")]
pub async fn chat(
    req: HttpRequest,
    body: web::Json<ChatRequest>,
    app_state: web::Data<RelayState>,
) -> Result<HttpResponse, RelayError> {
    log::info!("Received {} request to {}", req.method(), req.path());
    match app_state.submit(&body.message).await {
        Ok(reply) => Ok(HttpResponse::Ok().json(ChatResponse {
            time: reply.elapsed_display(),
            response: reply.content,
        })),
        Err(e) => {
            log::error!("{} {} failed: {}", req.method(), req.path(), e);
            Err(e)
        }
    }
}

// Bad JSON bodies get the same `{"error": ...}` shape as every other failure.
fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("{} {}: JSON payload error: {}", req.method(), req.path(), err);
    let response = match &err {
        error::JsonPayloadError::OverflowKnownLength { .. }
        | error::JsonPayloadError::Overflow { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorResponse {
                error: "Payload too large".to_string(),
            })
        }
        _ => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid JSON payload".to_string(),
        }),
    };
    error::InternalError::from_response(err, response).into()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(reset).service(chat);
}

/// Registers the relay endpoints under `/api` and, for older clients, at the root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_PAYLOAD_SIZE)
            .error_handler(json_error_handler),
    )
    .service(web::scope("/api").configure(routes))
    .configure(routes);
}

pub fn init_logging(filters: &str) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_filters(filters)
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

pub async fn startup(config: RelayConfig, relay_state: RelayState) -> std::io::Result<()> {
    let app_state = web::Data::new(relay_state);

    log::info!("Starting server at {}:{}", config.host, config.port);
    log::info!(
        "Upstream: {} (model {}, timeout {}s)",
        config.upstream_url,
        config.model,
        config.timeout
    );
    log::info!("Endpoints: POST /api/chat, POST /api/reset, GET /api/health");

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(Cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
