use crate::domain::nivel::Nivel;
use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_bool, parse_campo};
use crate::utils::error::Result;
use crate::utils::validation::{IdValidador, Validate, Validador};
use serde::{Deserialize, Serialize};
use std::fmt;

fn obrigatorio_padrao() -> bool {
    true
}

/// Competência exigida por uma vaga, com nível mínimo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitoVaga {
    id: u64,
    #[serde(rename = "vaga_id")]
    id_vaga: u64,
    #[serde(rename = "competencia_id")]
    id_competencia: u64,
    #[serde(rename = "nivel")]
    nivel_minimo: Nivel,
    #[serde(default = "obrigatorio_padrao")]
    obrigatorio: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroRequisito {
    Vaga(u64),
    Competencia(u64),
    NivelMinimo(Nivel),
    Obrigatorio(bool),
}

impl RequisitoVaga {
    pub fn new(
        id: u64,
        id_vaga: u64,
        id_competencia: u64,
        nivel_minimo: Nivel,
        obrigatorio: bool,
    ) -> Result<Self> {
        let requisito = Self {
            id,
            id_vaga,
            id_competencia,
            nivel_minimo,
            obrigatorio,
        };
        requisito.validate()?;
        Ok(requisito)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn id_vaga(&self) -> u64 {
        self.id_vaga
    }

    pub fn id_competencia(&self) -> u64 {
        self.id_competencia
    }

    pub fn nivel_minimo(&self) -> Nivel {
        self.nivel_minimo
    }

    pub fn obrigatorio(&self) -> bool {
        self.obrigatorio
    }

    pub fn atualizar_nivel(&mut self, novo_nivel: &str) -> Result<()> {
        self.nivel_minimo = novo_nivel.parse()?;
        Ok(())
    }

    pub fn tornar_opcional(&mut self) {
        self.obrigatorio = false;
    }

    pub fn tornar_obrigatorio(&mut self) {
        self.obrigatorio = true;
    }

    pub fn nivel_como_inteiro(&self) -> u8 {
        self.nivel_minimo.como_inteiro()
    }
}

impl Validate for RequisitoVaga {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        IdValidador.validar("id_vaga", &self.id_vaga)?;
        IdValidador.validar("id_competencia", &self.id_competencia)
    }
}

impl Entidade for RequisitoVaga {
    const NOME: &'static str = "requisito_vaga";
    const ARQUIVO: &'static str = "requisito_vaga.json";

    type Filtro = FiltroRequisito;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroRequisito) -> bool {
        match filtro {
            FiltroRequisito::Vaga(id) => self.id_vaga == *id,
            FiltroRequisito::Competencia(id) => self.id_competencia == *id,
            FiltroRequisito::NivelMinimo(nivel) => self.nivel_minimo == *nivel,
            FiltroRequisito::Obrigatorio(obrigatorio) => self.obrigatorio == *obrigatorio,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroRequisito> {
        match campo {
            "id_vaga" | "vaga_id" => Ok(FiltroRequisito::Vaga(parse_campo(campo, valor)?)),
            "id_competencia" | "competencia_id" => {
                Ok(FiltroRequisito::Competencia(parse_campo(campo, valor)?))
            }
            "nivel" | "nivel_minimo" => Ok(FiltroRequisito::NivelMinimo(valor.parse()?)),
            "obrigatorio" => Ok(FiltroRequisito::Obrigatorio(parse_bool(campo, valor)?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "id_vaga" | "id_competencia" => Err(campo_imutavel(campo)),
            "nivel" | "nivel_minimo" => self.atualizar_nivel(valor),
            "obrigatorio" => {
                if parse_bool(campo, valor)? {
                    self.tornar_obrigatorio();
                } else {
                    self.tornar_opcional();
                }
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for RequisitoVaga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Vaga ID: {}", self.id_vaga)?;
        writeln!(f, "Competência ID: {}", self.id_competencia)?;
        writeln!(f, "Nível Mínimo: {}", self.nivel_minimo)?;
        writeln!(
            f,
            "Obrigatório: {}",
            if self.obrigatorio { "Sim" } else { "Não" }
        )?;
        write!(f, "-------------------------")
    }
}
