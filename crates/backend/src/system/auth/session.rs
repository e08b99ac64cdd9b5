use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

use contracts::system::auth::UserInfo;

/// Активные сессии в памяти процесса: token -> пользователь.
/// После перезапуска сервера всем нужно войти заново.
static SESSIONS: Lazy<RwLock<HashMap<String, UserInfo>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn create(user: UserInfo) -> anyhow::Result<String> {
    let token = uuid::Uuid::new_v4().to_string();
    SESSIONS
        .write()
        .map_err(|_| anyhow::anyhow!("session store poisoned"))?
        .insert(token.clone(), user);
    Ok(token)
}

pub fn lookup(token: &str) -> Option<UserInfo> {
    SESSIONS.read().ok()?.get(token).cloned()
}

pub fn revoke(token: &str) -> bool {
    SESSIONS
        .write()
        .map(|mut sessions| sessions.remove(token).is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "usr-001".into(),
            username: "john.smith".into(),
            full_name: "John Smith".into(),
            email: "john.smith@techsolutions.com".into(),
        }
    }

    #[test]
    fn session_lifecycle() {
        let token = create(user()).unwrap();
        assert_eq!(lookup(&token), Some(user()));
        assert!(revoke(&token));
        assert_eq!(lookup(&token), None);
        assert!(!revoke(&token));
    }
}
