use crate::utils::error::{Result, SkillUpError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nível de domínio de uma competência. Persistido como inteiro (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Nivel {
    Iniciante,
    Intermediario,
    Avancado,
}

impl Nivel {
    pub fn como_inteiro(self) -> u8 {
        match self {
            Nivel::Iniciante => 0,
            Nivel::Intermediario => 1,
            Nivel::Avancado => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Nivel::Iniciante => "iniciante",
            Nivel::Intermediario => "intermediario",
            Nivel::Avancado => "avancado",
        }
    }
}

impl From<Nivel> for u8 {
    fn from(nivel: Nivel) -> Self {
        nivel.como_inteiro()
    }
}

impl TryFrom<u8> for Nivel {
    type Error = SkillUpError;

    fn try_from(valor: u8) -> Result<Self> {
        match valor {
            0 => Ok(Nivel::Iniciante),
            1 => Ok(Nivel::Intermediario),
            2 => Ok(Nivel::Avancado),
            outro => Err(SkillUpError::validation(
                "nivel",
                format!("Nível {} inválido. Use 0, 1 ou 2", outro),
            )),
        }
    }
}

impl FromStr for Nivel {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "iniciante" => Ok(Nivel::Iniciante),
            "intermediario" => Ok(Nivel::Intermediario),
            "avancado" => Ok(Nivel::Avancado),
            _ => Err(SkillUpError::validation(
                "nivel",
                "Nível inválido. Use: iniciante, intermediario ou avancado",
            )),
        }
    }
}

impl fmt::Display for Nivel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
