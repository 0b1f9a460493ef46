use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillUpError {
    #[error("Validation error on '{campo}': {mensagem}")]
    Validation { campo: String, mensagem: String },

    #[error("{entidade} não encontrado(a) (id {id})")]
    NotFound { entidade: &'static str, id: u64 },

    #[error("Conflict: {mensagem}")]
    Conflict { mensagem: String },

    #[error("Invalid transition: {mensagem}")]
    InvalidTransition { mensagem: String },

    #[error("Permission denied: {mensagem}")]
    Permission { mensagem: String },

    #[error("O campo '{campo}' não existe em {entidade}")]
    UnknownField { entidade: &'static str, campo: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {mensagem}")]
    Config { mensagem: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    State,
    Permission,
    Storage,
    Config,
}

impl SkillUpError {
    pub fn validation(campo: impl Into<String>, mensagem: impl Into<String>) -> Self {
        Self::Validation {
            campo: campo.into(),
            mensagem: mensagem.into(),
        }
    }

    pub fn conflict(mensagem: impl Into<String>) -> Self {
        Self::Conflict {
            mensagem: mensagem.into(),
        }
    }

    pub fn invalid_transition(mensagem: impl Into<String>) -> Self {
        Self::InvalidTransition {
            mensagem: mensagem.into(),
        }
    }

    pub fn permission(mensagem: impl Into<String>) -> Self {
        Self::Permission {
            mensagem: mensagem.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::UnknownField { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::InvalidTransition { .. } => ErrorCategory::State,
            Self::Permission { .. } => ErrorCategory::Permission,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Storage,
            Self::Config { .. } => ErrorCategory::Config,
        }
    }

    /// Mensagem curta para o usuário final, sem o prefixo técnico.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { mensagem, .. }
            | Self::Conflict { mensagem }
            | Self::InvalidTransition { mensagem }
            | Self::Permission { mensagem } => mensagem.clone(),
            Self::NotFound { entidade, .. } => {
                format!("{} não encontrado(a)", capitalizar(&entidade.replace('_', " ")))
            }
            Self::UnknownField { .. } => self.to_string(),
            Self::Io(e) => format!("Falha ao acessar os arquivos de dados: {}", e),
            Self::Serialization(e) => format!("Arquivo de dados corrompido: {}", e),
            Self::Config { mensagem } => format!("Configuração inválida: {}", mensagem),
        }
    }
}

fn capitalizar(texto: &str) -> String {
    let mut chars = texto.chars();
    match chars.next() {
        Some(primeiro) => primeiro.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SkillUpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message_strips_prefix() {
        let err = SkillUpError::conflict("Já existe candidato com este CPF");
        assert_eq!(err.user_friendly_message(), "Já existe candidato com este CPF");
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn test_not_found_message() {
        let err = SkillUpError::NotFound {
            entidade: "candidato",
            id: 7,
        };
        assert_eq!(err.user_friendly_message(), "Candidato não encontrado(a)");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
