pub mod ask;
pub mod config;
pub mod doctor;
pub mod recommend;
pub mod routine;

use serde::Serialize;
use skincircuit_core::config::{AppConfig, LoadOptions};
use skincircuit_core::{Advisor, ApplicationError};

pub const EXIT_OK: u8 = 0;
pub const EXIT_LOAD_FAILURE: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome<'a, T: Serialize> {
    command: &'a str,
    status: &'a str,
    error_class: Option<&'a str>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
}

impl CommandResult {
    pub fn success_with_data<T: Serialize>(
        command: &str,
        message: impl Into<String>,
        data: &T,
    ) -> Self {
        Self::render(command, "ok", None, message.into(), Some(data), EXIT_OK)
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self::render::<()>(command, "error", Some(error_class), message.into(), None, exit_code)
    }

    /// Input problems exit with the validation code; load problems with the
    /// load-failure code.
    pub fn from_error(command: &str, error: impl Into<ApplicationError>) -> Self {
        let error = error.into();
        let exit_code =
            if error.is_client_error() { EXIT_INVALID_INPUT } else { EXIT_LOAD_FAILURE };
        Self::failure(command, error.error_class(), error.to_string(), exit_code)
    }

    fn render<T: Serialize>(
        command: &str,
        status: &str,
        error_class: Option<&str>,
        message: String,
        data: Option<&T>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome { command, status, error_class, message, data };
        Self { exit_code, output: serialize_payload(&payload) }
    }
}

/// Loads config and the reference tables the same way the server does.
pub(crate) fn load_advisor(command: &str) -> Result<Advisor, CommandResult> {
    AppConfig::load(LoadOptions::default())
        .map_err(ApplicationError::from)
        .and_then(|config| Advisor::load(&config.catalog).map_err(ApplicationError::from))
        .map_err(|error| CommandResult::from_error(command, error))
}

fn serialize_payload<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
