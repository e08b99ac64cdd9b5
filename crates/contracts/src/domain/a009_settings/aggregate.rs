use serde::{Deserialize, Serialize};

crate::string_enum! {
    pub enum AuthProvider {
        Credentials => "credentials",
        Google => "google",
        Microsoft => "microsoft",
    }
}

impl AuthProvider {
    /// Пароль меняется только у локальных учётных записей
    pub fn manages_password(&self) -> bool {
        matches!(self, AuthProvider::Credentials)
    }

    pub fn display_label(&self) -> &str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::Microsoft => "Microsoft",
            AuthProvider::Credentials => "Email & Password",
            AuthProvider::Other(value) => value.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub timezone: String,
    pub language: String,
    pub auth_provider: AuthProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub deal_updates: bool,
    pub conflict_alerts: bool,
    pub quote_approvals: bool,
    pub commission_updates: bool,
    pub support_tickets: bool,
    /// all | important | none
    pub announcements: String,
    /// immediate | daily | weekly | none
    pub email_digest: String,
}

impl NotificationSettings {
    pub const ANNOUNCEMENT_LEVELS: &'static [(&'static str, &'static str)] = &[
        ("all", "All announcements"),
        ("important", "Important only"),
        ("none", "None"),
    ];

    pub const DIGEST_OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("immediate", "Immediate"),
        ("daily", "Daily digest"),
        ("weekly", "Weekly digest"),
        ("none", "No emails"),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Admin | Sales | Finance | Technical
    pub role: String,
    /// Active | Invited | Inactive
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    pub company_name: String,
    pub tier: String,
    pub partner_id: String,
    pub regions: Vec<String>,
    pub is_admin: bool,
    pub users: Vec<OrganizationUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub device: String,
    pub location: String,
    pub last_active: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub mfa_enabled: bool,
    pub last_login: String,
    pub active_sessions: Vec<SessionInfo>,
}

impl SecuritySettings {
    /// Сессии, которые можно отозвать (все, кроме текущей)
    pub fn revocable_sessions(&self) -> impl Iterator<Item = &SessionInfo> {
        self.active_sessions.iter().filter(|s| !s.current)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    pub user: UserSettings,
    pub notifications: NotificationSettings,
    pub organization: OrganizationSettings,
    pub security: SecuritySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mock_shape() {
        let json = r#"{
            "user": {"name": "John Doe", "email": "john@x.com", "phone": "+1", "timezone": "America/New_York", "language": "en", "authProvider": "google"},
            "notifications": {"dealUpdates": true, "conflictAlerts": true, "quoteApprovals": false, "commissionUpdates": true, "supportTickets": false, "announcements": "important", "emailDigest": "daily"},
            "organization": {"companyName": "Tech", "tier": "Gold", "partnerId": "PTR-1", "regions": ["EMEA"], "isAdmin": false, "users": []},
            "security": {"mfaEnabled": false, "lastLogin": "2025-01-07T09:30:00Z", "activeSessions": [
                {"id": "s1", "device": "Chrome", "location": "NY", "lastActive": "2025-01-07T09:30:00Z", "current": true},
                {"id": "s2", "device": "Safari", "location": "NY", "lastActive": "2025-01-06T18:45:00Z", "current": false}
            ]}
        }"#;
        let data: SettingsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.user.auth_provider, AuthProvider::Google);
        assert!(!data.user.auth_provider.manages_password());
        assert_eq!(data.user.avatar, None);
        let ids: Vec<_> = data.security.revocable_sessions().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s2"]);
    }
}
