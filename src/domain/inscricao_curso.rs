use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_campo, status_por_acao};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{IdValidador, Validate, Validador};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persistido como inteiro: Deferido = 0, Indeferido = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StatusInscricao {
    #[default]
    Deferido,
    Indeferido,
}

impl From<StatusInscricao> for u8 {
    fn from(status: StatusInscricao) -> Self {
        match status {
            StatusInscricao::Deferido => 0,
            StatusInscricao::Indeferido => 1,
        }
    }
}

impl TryFrom<u8> for StatusInscricao {
    type Error = SkillUpError;

    fn try_from(valor: u8) -> Result<Self> {
        match valor {
            0 => Ok(Self::Deferido),
            1 => Ok(Self::Indeferido),
            _ => Err(SkillUpError::validation(
                "status",
                "Status deve ser 0 (deferido) ou 1 (indeferido)",
            )),
        }
    }
}

impl FromStr for StatusInscricao {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "deferido" | "0" => Ok(Self::Deferido),
            "indeferido" | "1" => Ok(Self::Indeferido),
            _ => Err(SkillUpError::validation("status", "Status de inscrição inválido")),
        }
    }
}

impl fmt::Display for StatusInscricao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deferido => f.write_str("DEFERIDO"),
            Self::Indeferido => f.write_str("INDEFERIDO"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscricaoCurso {
    id: u64,
    #[serde(rename = "curso_id")]
    id_curso: u64,
    #[serde(rename = "aluno_id")]
    id_aluno: u64,
    data_inscricao: NaiveDate,
    #[serde(default)]
    status: StatusInscricao,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroInscricao {
    Curso(u64),
    Aluno(u64),
    Status(StatusInscricao),
}

impl InscricaoCurso {
    pub fn new(id: u64, id_curso: u64, id_aluno: u64, data_inscricao: NaiveDate) -> Result<Self> {
        let inscricao = Self {
            id,
            id_curso,
            id_aluno,
            data_inscricao,
            status: StatusInscricao::Deferido,
        };
        inscricao.validate()?;
        Ok(inscricao)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn id_curso(&self) -> u64 {
        self.id_curso
    }

    pub fn id_aluno(&self) -> u64 {
        self.id_aluno
    }

    pub fn data_inscricao(&self) -> NaiveDate {
        self.data_inscricao
    }

    pub fn status(&self) -> StatusInscricao {
        self.status
    }

    pub fn deferir(&mut self) {
        self.status = StatusInscricao::Deferido;
    }

    pub fn indeferir(&mut self) {
        self.status = StatusInscricao::Indeferido;
    }
}

impl Validate for InscricaoCurso {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        IdValidador.validar("id_curso", &self.id_curso)?;
        IdValidador.validar("id_aluno", &self.id_aluno)
    }
}

impl Entidade for InscricaoCurso {
    const NOME: &'static str = "inscricao_curso";
    const ARQUIVO: &'static str = "inscricao_curso.json";

    type Filtro = FiltroInscricao;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroInscricao) -> bool {
        match filtro {
            FiltroInscricao::Curso(id) => self.id_curso == *id,
            FiltroInscricao::Aluno(id) => self.id_aluno == *id,
            FiltroInscricao::Status(status) => self.status == *status,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroInscricao> {
        match campo {
            "id_curso" | "curso_id" => Ok(FiltroInscricao::Curso(parse_campo(campo, valor)?)),
            "id_aluno" | "aluno_id" => Ok(FiltroInscricao::Aluno(parse_campo(campo, valor)?)),
            "status" => Ok(FiltroInscricao::Status(valor.parse()?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "id_curso" | "id_aluno" => Err(campo_imutavel(campo)),
            "data_inscricao" => {
                self.data_inscricao = parse_campo(campo, valor)?;
                Ok(())
            }
            "status" => Err(status_por_acao("deferir ou indeferir")),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for InscricaoCurso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Curso ID: {}", self.id_curso)?;
        writeln!(f, "Aluno ID: {}", self.id_aluno)?;
        writeln!(f, "Data Inscrição: {}", self.data_inscricao)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "-------------------------")
    }
}
