use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_campo, status_por_acao};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{IdValidador, Validate, Validador};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCandidatura {
    Enviado,
    #[serde(rename = "Em analise")]
    EmAnalise,
    Aceito,
    Recusado,
    Cancelado,
}

impl StatusCandidatura {
    pub fn label(self) -> &'static str {
        match self {
            Self::Enviado => "Enviado",
            Self::EmAnalise => "Em analise",
            Self::Aceito => "Aceito",
            Self::Recusado => "Recusado",
            Self::Cancelado => "Cancelado",
        }
    }

    /// Aceito e Recusado encerram o processo.
    pub fn finalizado(self) -> bool {
        matches!(self, Self::Aceito | Self::Recusado)
    }

    /// Ainda conta como candidatura ativa para o par vaga/candidato.
    pub fn em_aberto(self) -> bool {
        matches!(self, Self::Enviado | Self::EmAnalise | Self::Aceito)
    }
}

impl FromStr for StatusCandidatura {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "enviado" => Ok(Self::Enviado),
            "em analise" | "em análise" | "em_analise" => Ok(Self::EmAnalise),
            "aceito" => Ok(Self::Aceito),
            "recusado" => Ok(Self::Recusado),
            "cancelado" => Ok(Self::Cancelado),
            _ => Err(SkillUpError::validation("status", "Status de candidatura inválido")),
        }
    }
}

impl fmt::Display for StatusCandidatura {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn hoje() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidatura {
    #[serde(rename = "id_candidatura")]
    id: u64,
    id_vaga: u64,
    id_candidato: u64,
    #[serde(default = "status_inicial")]
    status: StatusCandidatura,
    #[serde(default = "hoje")]
    data_candidatura: NaiveDate,
}

fn status_inicial() -> StatusCandidatura {
    StatusCandidatura::Enviado
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCandidatura {
    Vaga(u64),
    Candidato(u64),
    Status(StatusCandidatura),
    Data(NaiveDate),
}

impl Candidatura {
    /// Nova candidatura com status Enviado, datada de hoje.
    pub fn new(id: u64, id_vaga: u64, id_candidato: u64) -> Result<Self> {
        let candidatura = Self {
            id,
            id_vaga,
            id_candidato,
            status: StatusCandidatura::Enviado,
            data_candidatura: hoje(),
        };
        candidatura.validate()?;
        Ok(candidatura)
    }

    pub fn com_data(mut self, data: NaiveDate) -> Self {
        self.data_candidatura = data;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn id_vaga(&self) -> u64 {
        self.id_vaga
    }

    pub fn id_candidato(&self) -> u64 {
        self.id_candidato
    }

    pub fn status(&self) -> StatusCandidatura {
        self.status
    }

    pub fn data_candidatura(&self) -> NaiveDate {
        self.data_candidatura
    }

    pub fn analisar(&mut self) {
        self.status = StatusCandidatura::EmAnalise;
    }

    pub fn aprovar(&mut self) {
        self.status = StatusCandidatura::Aceito;
    }

    pub fn reprovar(&mut self) {
        self.status = StatusCandidatura::Recusado;
    }

    pub fn cancelar(&mut self) -> Result<()> {
        if self.status.finalizado() {
            return Err(SkillUpError::invalid_transition(
                "Não é possível cancelar uma candidatura já finalizada.",
            ));
        }
        self.status = StatusCandidatura::Cancelado;
        Ok(())
    }
}

impl Validate for Candidatura {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        IdValidador.validar("id_vaga", &self.id_vaga)?;
        IdValidador.validar("id_candidato", &self.id_candidato)
    }
}

impl Entidade for Candidatura {
    const NOME: &'static str = "candidatura";
    const ARQUIVO: &'static str = "candidatura.json";

    type Filtro = FiltroCandidatura;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCandidatura) -> bool {
        match filtro {
            FiltroCandidatura::Vaga(id) => self.id_vaga == *id,
            FiltroCandidatura::Candidato(id) => self.id_candidato == *id,
            FiltroCandidatura::Status(status) => self.status == *status,
            FiltroCandidatura::Data(data) => self.data_candidatura == *data,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCandidatura> {
        match campo {
            "id_vaga" => Ok(FiltroCandidatura::Vaga(parse_campo(campo, valor)?)),
            "id_candidato" => Ok(FiltroCandidatura::Candidato(parse_campo(campo, valor)?)),
            "status" => Ok(FiltroCandidatura::Status(valor.parse()?)),
            "data_candidatura" => Ok(FiltroCandidatura::Data(parse_campo(campo, valor)?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "id_candidatura" | "id_vaga" | "id_candidato" => Err(campo_imutavel(campo)),
            "status" => Err(status_por_acao("analisar, aprovar, reprovar ou cancelar")),
            "data_candidatura" => {
                self.data_candidatura = parse_campo(campo, valor)?;
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for Candidatura {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Candidatura #{}", self.id)?;
        writeln!(f, "Vaga ID: {}", self.id_vaga)?;
        writeln!(f, "Candidato ID: {}", self.id_candidato)?;
        writeln!(f, "Data: {}", self.data_candidatura)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelar_antes_de_finalizar() {
        let mut candidatura = Candidatura::new(1, 2, 3).unwrap();
        candidatura.analisar();
        assert!(candidatura.cancelar().is_ok());
        assert_eq!(candidatura.status(), StatusCandidatura::Cancelado);
    }

    #[test]
    fn test_cancelar_finalizada_falha() {
        for finalizar in [Candidatura::aprovar, Candidatura::reprovar] {
            let mut candidatura = Candidatura::new(1, 2, 3).unwrap();
            finalizar(&mut candidatura);
            let status = candidatura.status();
            let err = candidatura.cancelar().unwrap_err();
            assert!(matches!(err, SkillUpError::InvalidTransition { .. }));
            assert_eq!(
                err.user_friendly_message(),
                "Não é possível cancelar uma candidatura já finalizada."
            );
            assert_eq!(candidatura.status(), status);
        }
    }

    #[test]
    fn test_formato_persistido() {
        let candidatura = Candidatura::new(9, 2, 3)
            .unwrap()
            .com_data(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let dict = candidatura.to_dict().unwrap();
        assert_eq!(
            dict,
            serde_json::json!({
                "id_candidatura": 9,
                "id_vaga": 2,
                "id_candidato": 3,
                "status": "Enviado",
                "data_candidatura": "2024-03-01"
            })
        );
        assert_eq!(Candidatura::from_dict(dict).unwrap(), candidatura);
    }

    #[test]
    fn test_data_padrao_hoje() {
        let dict = serde_json::json!({"id_candidatura": 1, "id_vaga": 2, "id_candidato": 3});
        let candidatura = Candidatura::from_dict(dict).unwrap();
        assert_eq!(candidatura.data_candidatura(), Local::now().date_naive());
        assert_eq!(candidatura.status(), StatusCandidatura::Enviado);
    }

    #[test]
    fn test_status_em_analise_serializado_com_espaco() {
        let mut candidatura = Candidatura::new(1, 2, 3).unwrap();
        candidatura.analisar();
        assert_eq!(candidatura.to_dict().unwrap()["status"], "Em analise");
    }

    #[test]
    fn test_status_nao_muda_por_campo() {
        let mut candidatura = Candidatura::new(1, 2, 3).unwrap();
        candidatura.aprovar();
        let err = candidatura.atualizar_campo("status", "Enviado").unwrap_err();
        assert!(matches!(err, SkillUpError::InvalidTransition { .. }));
        assert_eq!(candidatura.status(), StatusCandidatura::Aceito);
        assert!(candidatura.cancelar().is_err());
    }
}
