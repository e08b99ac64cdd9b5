pub mod aggregate;
pub mod forms;

pub use aggregate::{
    AuthProvider, NotificationSettings, OrganizationSettings, OrganizationUser, SecuritySettings,
    SessionInfo, SettingsData, UserSettings,
};
pub use forms::{AccountForm, SecurityForm, SettingsTab, LANGUAGES, TIMEZONES};
