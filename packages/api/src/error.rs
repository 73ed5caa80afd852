//! Client-side API error.

/// Everything that can go wrong talking to the remote API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a server-side rejection, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Não foi possível conectar ao servidor".to_string(),
            ApiError::Server { status: 401, .. } => "Sessão inválida, faça login novamente".to_string(),
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Server { status, .. } => format!("Erro inesperado do servidor ({status})"),
            ApiError::Decode(_) => "Resposta inesperada do servidor".to_string(),
        }
    }
}
