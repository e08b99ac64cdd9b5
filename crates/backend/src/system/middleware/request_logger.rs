use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use contracts::shared::format::format_thousands;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос: время, длительность, размер ответа, статус,
/// метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы узнать реальный размер
    let (body, size) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = format_thousands(bytes.len() as i64);
            (Body::from(bytes), size)
        }
        Err(_) => (Body::default(), "error".to_string()),
    };

    // голубой для 2xx, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}
