use axum::http::{header, HeaderMap};

/// Значение cookie `name` из заголовков запроса. Пустое значение
/// считается отсутствующим.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value)
}

/// `Set-Cookie` для новой сессии
pub fn session_cookie(name: &str, token: &str, max_age_days: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        name,
        token,
        max_age_days * 24 * 60 * 60
    )
}

/// `Set-Cookie`, который удаляет сессию в браузере
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; auth-token=abc123; lang=en"),
        );
        assert_eq!(read_cookie(&headers, "auth-token"), Some("abc123"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn empty_cookie_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("auth-token="));
        assert_eq!(read_cookie(&headers, "auth-token"), None);
    }

    #[test]
    fn cookie_headers() {
        assert_eq!(
            session_cookie("auth-token", "t", 7),
            "auth-token=t; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800"
        );
        assert!(expired_cookie("auth-token").ends_with("Max-Age=0"));
    }
}
