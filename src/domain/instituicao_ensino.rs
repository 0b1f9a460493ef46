use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, lista_de_texto, parse_bool};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{CnpjValidador, IdValidador, TextoValidador, Validate, Validador};
use serde::{Deserialize, Serialize};
use std::fmt;

fn credenciada_padrao() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstituicaoEnsino {
    id: u64,
    razao_social: String,
    /// Registros antigos gravavam só `nome`.
    #[serde(alias = "nome")]
    nome_fantasia: String,
    cnpj: String,
    registro_educacional: String,
    tipo: String,
    #[serde(default)]
    modalidades: Vec<String>,
    #[serde(default = "credenciada_padrao")]
    credenciada: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroInstituicao {
    RazaoSocial(String),
    NomeFantasia(String),
    Cnpj(String),
    Tipo(String),
    Modalidade(String),
    Credenciada(bool),
}

impl InstituicaoEnsino {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        razao_social: impl Into<String>,
        nome_fantasia: impl Into<String>,
        cnpj: impl Into<String>,
        registro_educacional: impl Into<String>,
        tipo: impl Into<String>,
        modalidades: Vec<String>,
        credenciada: bool,
    ) -> Result<Self> {
        let instituicao = Self {
            id,
            razao_social: razao_social.into(),
            nome_fantasia: nome_fantasia.into(),
            cnpj: cnpj.into(),
            registro_educacional: registro_educacional.into(),
            tipo: tipo.into(),
            modalidades,
            credenciada,
        };
        instituicao.validate()?;
        Ok(instituicao)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn razao_social(&self) -> &str {
        &self.razao_social
    }

    pub fn nome_fantasia(&self) -> &str {
        &self.nome_fantasia
    }

    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    pub fn registro_educacional(&self) -> &str {
        &self.registro_educacional
    }

    pub fn tipo(&self) -> &str {
        &self.tipo
    }

    pub fn modalidades(&self) -> &[String] {
        &self.modalidades
    }

    pub fn credenciada(&self) -> bool {
        self.credenciada
    }

    pub fn credenciar(&mut self) {
        self.credenciada = true;
    }

    pub fn descredenciar(&mut self) {
        self.credenciada = false;
    }

    pub fn validar_publicacao(&self) -> Result<()> {
        if !self.credenciada {
            return Err(SkillUpError::permission(
                "Instituição não credenciada não pode publicar cursos",
            ));
        }
        Ok(())
    }

    fn set_texto(campo: &str, destino: &mut String, valor: &str) -> Result<()> {
        TextoValidador.validar(campo, valor)?;
        *destino = valor.to_string();
        Ok(())
    }
}

impl Validate for InstituicaoEnsino {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        TextoValidador.validar("razao_social", self.razao_social.as_str())?;
        TextoValidador.validar("nome_fantasia", self.nome_fantasia.as_str())?;
        CnpjValidador.validar("cnpj", self.cnpj.as_str())?;
        TextoValidador.validar("registro_educacional", self.registro_educacional.as_str())?;
        Ok(())
    }
}

impl Entidade for InstituicaoEnsino {
    const NOME: &'static str = "instituicao_ensino";
    const ARQUIVO: &'static str = "instituicao_ensino.json";

    type Filtro = FiltroInstituicao;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroInstituicao) -> bool {
        match filtro {
            FiltroInstituicao::RazaoSocial(valor) => &self.razao_social == valor,
            FiltroInstituicao::NomeFantasia(valor) => &self.nome_fantasia == valor,
            FiltroInstituicao::Cnpj(valor) => &self.cnpj == valor,
            FiltroInstituicao::Tipo(valor) => &self.tipo == valor,
            FiltroInstituicao::Modalidade(valor) => self.modalidades.contains(valor),
            FiltroInstituicao::Credenciada(valor) => self.credenciada == *valor,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroInstituicao> {
        match campo {
            "razao_social" => Ok(FiltroInstituicao::RazaoSocial(valor.to_string())),
            "nome_fantasia" | "nome" => Ok(FiltroInstituicao::NomeFantasia(valor.to_string())),
            "cnpj" => Ok(FiltroInstituicao::Cnpj(valor.to_string())),
            "tipo" => Ok(FiltroInstituicao::Tipo(valor.to_string())),
            "modalidades" | "modalidade" => Ok(FiltroInstituicao::Modalidade(valor.to_string())),
            "credenciada" => Ok(FiltroInstituicao::Credenciada(parse_bool(campo, valor)?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "cnpj" => Err(campo_imutavel(campo)),
            "razao_social" => Self::set_texto(campo, &mut self.razao_social, valor),
            "nome_fantasia" => Self::set_texto(campo, &mut self.nome_fantasia, valor),
            "registro_educacional" => Self::set_texto(campo, &mut self.registro_educacional, valor),
            "tipo" => {
                self.tipo = valor.to_string();
                Ok(())
            }
            "modalidades" => {
                self.modalidades = lista_de_texto(valor);
                Ok(())
            }
            "credenciada" => {
                self.credenciada = parse_bool(campo, valor)?;
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for InstituicaoEnsino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Razão social: {}", self.razao_social)?;
        writeln!(f, "Nome fantasia: {}", self.nome_fantasia)?;
        writeln!(f, "CNPJ: {}", self.cnpj)?;
        writeln!(f, "Registro educacional: {}", self.registro_educacional)?;
        writeln!(f, "Tipo: {}", self.tipo)?;
        writeln!(f, "Modalidades: {}", self.modalidades.join(", "))?;
        writeln!(
            f,
            "Credenciada: {}",
            if self.credenciada { "sim" } else { "não" }
        )?;
        write!(f, "-------------------------")
    }
}
