use serde::{Deserialize, Serialize};

/// Ответ сервера на действие, которое только подтверждается (без сохранения).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAck {
    pub ok: bool,
    pub message: String,
}

impl ActionAck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

/// Список ошибок валидации формы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn require(&mut self, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.errors.push(format!("{} is required", label));
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn joined(&self) -> String {
        self.errors.join("; ")
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}
