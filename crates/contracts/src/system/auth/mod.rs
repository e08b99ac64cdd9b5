use serde::{Deserialize, Serialize};

/// Имя cookie с токеном сессии
pub const SESSION_COOKIE: &str = "auth-token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
}

impl UserInfo {
    /// Две буквы для аватара в сайдбаре
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let user = UserInfo {
            id: "usr-001".into(),
            username: "john".into(),
            full_name: "john smith jr".into(),
            email: "john@example.com".into(),
        };
        assert_eq!(user.initials(), "JS");
    }

    #[test]
    fn login_requires_both_fields() {
        let req = LoginRequest {
            username: " ".into(),
            password: "x".into(),
        };
        assert!(!req.is_complete());
    }
}
