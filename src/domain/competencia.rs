use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel};
use crate::utils::error::Result;
use crate::utils::validation::{
    IdValidador, TamanhoMaximoValidador, TextoValidador, Validate, Validador,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const NOME_MAX: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competencia {
    id: u64,
    nome: String,
    descricao: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCompetencia {
    Nome(String),
    /// Trecho do nome, sem diferenciar maiúsculas.
    NomeParcial(String),
}

impl Competencia {
    pub fn new(id: u64, nome: impl Into<String>, descricao: impl Into<String>) -> Result<Self> {
        let competencia = Self {
            id,
            nome: nome.into(),
            descricao: descricao.into(),
        };
        competencia.validate()?;
        Ok(competencia)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) -> Result<()> {
        let nome = nome.into();
        validar_nome(&nome)?;
        self.nome = nome;
        Ok(())
    }

    pub fn set_descricao(&mut self, descricao: impl Into<String>) {
        self.descricao = descricao.into();
    }
}

fn validar_nome(nome: &str) -> Result<()> {
    TextoValidador.validar("nome", nome)?;
    TamanhoMaximoValidador(NOME_MAX).validar("nome", nome)
}

impl Validate for Competencia {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        validar_nome(&self.nome)
    }
}

impl Entidade for Competencia {
    const NOME: &'static str = "competencia";
    const ARQUIVO: &'static str = "competencia.json";

    type Filtro = FiltroCompetencia;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCompetencia) -> bool {
        match filtro {
            FiltroCompetencia::Nome(nome) => &self.nome == nome,
            FiltroCompetencia::NomeParcial(trecho) => self
                .nome
                .to_lowercase()
                .contains(&trecho.to_lowercase()),
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCompetencia> {
        match campo {
            "nome" => Ok(FiltroCompetencia::Nome(valor.to_string())),
            "nome_parcial" => Ok(FiltroCompetencia::NomeParcial(valor.to_string())),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" => Err(campo_imutavel(campo)),
            "nome" => self.set_nome(valor),
            "descricao" => {
                self.set_descricao(valor);
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for Competencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nome: {}", self.nome)?;
        writeln!(f, "Descrição: {}", self.descricao)?;
        write!(f, "-------------------------")
    }
}
