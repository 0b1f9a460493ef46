//! Vínculos de competência com nível: o que um candidato domina e o que um
//! curso confere. Mesma forma, chaves estrangeiras diferentes.

use crate::domain::nivel::Nivel;
use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_campo};
use crate::utils::error::Result;
use crate::utils::validation::{IdValidador, Validate, Validador};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetenciaCandidato {
    id: u64,
    #[serde(rename = "candidato_id")]
    id_candidato: u64,
    #[serde(rename = "competencia_id")]
    id_competencia: u64,
    #[serde(rename = "nivel")]
    nivel_atual: Nivel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCompetenciaCandidato {
    Candidato(u64),
    Competencia(u64),
    Nivel(Nivel),
}

impl CompetenciaCandidato {
    pub fn new(id: u64, id_candidato: u64, id_competencia: u64, nivel_atual: Nivel) -> Result<Self> {
        let vinculo = Self {
            id,
            id_candidato,
            id_competencia,
            nivel_atual,
        };
        vinculo.validate()?;
        Ok(vinculo)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn id_candidato(&self) -> u64 {
        self.id_candidato
    }

    pub fn id_competencia(&self) -> u64 {
        self.id_competencia
    }

    pub fn nivel_atual(&self) -> Nivel {
        self.nivel_atual
    }

    pub fn atualizar_nivel(&mut self, novo_nivel: &str) -> Result<()> {
        self.nivel_atual = novo_nivel.parse()?;
        Ok(())
    }

    pub fn nivel_como_inteiro(&self) -> u8 {
        self.nivel_atual.como_inteiro()
    }
}

impl Validate for CompetenciaCandidato {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        IdValidador.validar("id_candidato", &self.id_candidato)?;
        IdValidador.validar("id_competencia", &self.id_competencia)
    }
}

impl Entidade for CompetenciaCandidato {
    const NOME: &'static str = "competencia_candidato";
    const ARQUIVO: &'static str = "competencia_candidato.json";

    type Filtro = FiltroCompetenciaCandidato;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCompetenciaCandidato) -> bool {
        match filtro {
            FiltroCompetenciaCandidato::Candidato(id) => self.id_candidato == *id,
            FiltroCompetenciaCandidato::Competencia(id) => self.id_competencia == *id,
            FiltroCompetenciaCandidato::Nivel(nivel) => self.nivel_atual == *nivel,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCompetenciaCandidato> {
        match campo {
            "id_candidato" | "candidato_id" => Ok(FiltroCompetenciaCandidato::Candidato(
                parse_campo(campo, valor)?,
            )),
            "id_competencia" | "competencia_id" => Ok(FiltroCompetenciaCandidato::Competencia(
                parse_campo(campo, valor)?,
            )),
            "nivel" | "nivel_atual" => Ok(FiltroCompetenciaCandidato::Nivel(valor.parse()?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "id_candidato" | "id_competencia" => Err(campo_imutavel(campo)),
            "nivel" | "nivel_atual" => self.atualizar_nivel(valor),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for CompetenciaCandidato {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Candidato ID: {}", self.id_candidato)?;
        writeln!(f, "Competência ID: {}", self.id_competencia)?;
        writeln!(f, "Nível Atual: {}", self.nivel_atual)?;
        write!(f, "-------------------------")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursoCompetencia {
    id: u64,
    #[serde(rename = "curso_id")]
    id_curso: u64,
    #[serde(rename = "competencia_id")]
    id_competencia: u64,
    #[serde(rename = "nivel")]
    nivel_conferido: Nivel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCursoCompetencia {
    Curso(u64),
    Competencia(u64),
    Nivel(Nivel),
}

impl CursoCompetencia {
    pub fn new(id: u64, id_curso: u64, id_competencia: u64, nivel_conferido: Nivel) -> Result<Self> {
        let vinculo = Self {
            id,
            id_curso,
            id_competencia,
            nivel_conferido,
        };
        vinculo.validate()?;
        Ok(vinculo)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn id_curso(&self) -> u64 {
        self.id_curso
    }

    pub fn id_competencia(&self) -> u64 {
        self.id_competencia
    }

    pub fn nivel_conferido(&self) -> Nivel {
        self.nivel_conferido
    }

    pub fn atualizar_nivel(&mut self, novo_nivel: &str) -> Result<()> {
        self.nivel_conferido = novo_nivel.parse()?;
        Ok(())
    }

    pub fn nivel_como_inteiro(&self) -> u8 {
        self.nivel_conferido.como_inteiro()
    }
}

impl Validate for CursoCompetencia {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        IdValidador.validar("id_curso", &self.id_curso)?;
        IdValidador.validar("id_competencia", &self.id_competencia)
    }
}

impl Entidade for CursoCompetencia {
    const NOME: &'static str = "curso_competencia";
    const ARQUIVO: &'static str = "curso_competencia.json";

    type Filtro = FiltroCursoCompetencia;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCursoCompetencia) -> bool {
        match filtro {
            FiltroCursoCompetencia::Curso(id) => self.id_curso == *id,
            FiltroCursoCompetencia::Competencia(id) => self.id_competencia == *id,
            FiltroCursoCompetencia::Nivel(nivel) => self.nivel_conferido == *nivel,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCursoCompetencia> {
        match campo {
            "id_curso" | "curso_id" => Ok(FiltroCursoCompetencia::Curso(parse_campo(campo, valor)?)),
            "id_competencia" | "competencia_id" => Ok(FiltroCursoCompetencia::Competencia(
                parse_campo(campo, valor)?,
            )),
            "nivel" | "nivel_conferido" => Ok(FiltroCursoCompetencia::Nivel(valor.parse()?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "id_curso" | "id_competencia" => Err(campo_imutavel(campo)),
            "nivel" | "nivel_conferido" => self.atualizar_nivel(valor),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for CursoCompetencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Curso ID: {}", self.id_curso)?;
        writeln!(f, "Competência ID: {}", self.id_competencia)?;
        writeln!(f, "Nível Conferido: {}", self.nivel_conferido)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competencia_candidato_persistida_com_nivel_inteiro() {
        let vinculo = CompetenciaCandidato::new(1, 2, 3, Nivel::Intermediario).unwrap();
        let dict = vinculo.to_dict().unwrap();
        assert_eq!(
            dict,
            serde_json::json!({"id": 1, "candidato_id": 2, "competencia_id": 3, "nivel": 1})
        );
        assert_eq!(CompetenciaCandidato::from_dict(dict).unwrap(), vinculo);
    }

    #[test]
    fn test_atualizar_nivel() {
        let mut vinculo = CursoCompetencia::new(1, 5, 7, Nivel::Iniciante).unwrap();
        vinculo.atualizar_nivel("AVANCADO").unwrap();
        assert_eq!(vinculo.nivel_conferido(), Nivel::Avancado);
        assert_eq!(vinculo.nivel_como_inteiro(), 2);
        assert!(vinculo.atualizar_nivel("mestre").is_err());
        assert_eq!(vinculo.nivel_conferido(), Nivel::Avancado);
    }

    #[test]
    fn test_ids_estrangeiros_validados() {
        assert!(CursoCompetencia::new(1, 0, 7, Nivel::Iniciante).is_err());
        assert!(CompetenciaCandidato::new(1, 2, 0, Nivel::Iniciante).is_err());
        let dict = serde_json::json!({"id": 1, "curso_id": 2, "competencia_id": 3, "nivel": 5});
        assert!(CursoCompetencia::from_dict(dict).is_err());
    }
}
