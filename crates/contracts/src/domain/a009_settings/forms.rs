use serde::{Deserialize, Serialize};

use super::aggregate::{AuthProvider, OrganizationSettings, UserSettings};
use crate::shared::actions::ValidationErrors;

pub const TIMEZONES: &[(&str, &str)] = &[
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
    ("America/Anchorage", "Alaska Time (AKT)"),
    ("Pacific/Honolulu", "Hawaii Time (HT)"),
    ("Europe/London", "Greenwich Mean Time (GMT)"),
    ("Europe/Paris", "Central European Time (CET)"),
    ("Europe/Berlin", "Central European Time (CET)"),
    ("Asia/Dubai", "Gulf Standard Time (GST)"),
    ("Asia/Kolkata", "India Standard Time (IST)"),
    ("Asia/Singapore", "Singapore Time (SGT)"),
    ("Asia/Tokyo", "Japan Standard Time (JST)"),
    ("Australia/Sydney", "Australian Eastern Time (AET)"),
];

pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("ja", "Japanese"),
    ("zh", "Chinese (Simplified)"),
];

/// Вкладки страницы настроек
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Account,
    Notifications,
    Security,
    Organization,
}

impl SettingsTab {
    pub fn key(self) -> &'static str {
        match self {
            SettingsTab::Account => "account",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Security => "security",
            SettingsTab::Organization => "organization",
        }
    }

    /// Tabs the user may open. Organization is admin-only.
    pub fn available(organization: &OrganizationSettings) -> Vec<SettingsTab> {
        let mut tabs = vec![
            SettingsTab::Account,
            SettingsTab::Notifications,
            SettingsTab::Security,
        ];
        if organization.is_admin {
            tabs.push(SettingsTab::Organization);
        }
        tabs
    }

    /// Resolves a `?tab=` value, falling back to Account for unknown
    /// keys and for Organization when the user is not an admin.
    pub fn resolve(key: Option<&str>, organization: &OrganizationSettings) -> SettingsTab {
        Self::available(organization)
            .into_iter()
            .find(|tab| Some(tab.key()) == key)
            .unwrap_or(SettingsTab::Account)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timezone: String,
    pub language: String,
}

impl AccountForm {
    pub fn from_user(user: &UserSettings) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            timezone: user.timezone.clone(),
            language: user.language.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(&self.name, "Name");
        errors.require(&self.email, "Email");
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push("Email is invalid");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub mfa_enabled: bool,
}

impl SecurityForm {
    /// Пароли сверяются только для локальных учётных записей и только
    /// если новый пароль введён.
    pub fn validate(&self, provider: &AuthProvider) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if provider.manages_password()
            && !self.new_password.is_empty()
            && self.new_password != self.confirm_password
        {
            errors.push("Passwords do not match");
        }
        errors.into_result()
    }

    /// Поля паролей очищаются после сохранения, флаг MFA остаётся.
    pub fn cleared(&self) -> Self {
        Self {
            mfa_enabled: self.mfa_enabled,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(is_admin: bool) -> OrganizationSettings {
        OrganizationSettings {
            company_name: "Tech".into(),
            tier: "Gold".into(),
            partner_id: "PTR-1".into(),
            regions: vec![],
            is_admin,
            users: vec![],
        }
    }

    #[test]
    fn password_mismatch_only_for_credentials() {
        let form = SecurityForm {
            new_password: "secret1".into(),
            confirm_password: "secret2".into(),
            ..Default::default()
        };
        let err = form.validate(&AuthProvider::Credentials).unwrap_err();
        assert_eq!(err.errors, ["Passwords do not match"]);
        assert!(form.validate(&AuthProvider::Google).is_ok());

        let empty = SecurityForm::default();
        assert!(empty.validate(&AuthProvider::Credentials).is_ok());
    }

    #[test]
    fn cleared_keeps_mfa() {
        let form = SecurityForm {
            current_password: "a".into(),
            new_password: "b".into(),
            confirm_password: "b".into(),
            mfa_enabled: true,
        };
        let cleared = form.cleared();
        assert!(cleared.mfa_enabled);
        assert!(cleared.new_password.is_empty());
    }

    #[test]
    fn organization_tab_requires_admin() {
        assert_eq!(
            SettingsTab::resolve(Some("organization"), &org(false)),
            SettingsTab::Account
        );
        assert_eq!(
            SettingsTab::resolve(Some("organization"), &org(true)),
            SettingsTab::Organization
        );
        assert_eq!(SettingsTab::resolve(Some("bogus"), &org(true)), SettingsTab::Account);
        assert_eq!(SettingsTab::resolve(None, &org(true)), SettingsTab::Account);
        assert_eq!(SettingsTab::available(&org(false)).len(), 3);
    }

    #[test]
    fn account_form_requires_name_and_email() {
        let form = AccountForm {
            email: "nope".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.errors, ["Name is required", "Email is invalid"]);
    }
}
