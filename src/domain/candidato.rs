use crate::domain::ports::Entidade;
use crate::domain::{campo_imutavel, lista_de_texto};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{
    AreasValidador, CpfValidador, EmailValidador, IdValidador, TextoValidador, Validate, Validador,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidato {
    id: u64,
    nome: String,
    cpf: String,
    email: String,
    areas_interesse: Vec<String>,
    nivel_formacao: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCandidato {
    Nome(String),
    Cpf(String),
    Email(String),
    AreaInteresse(String),
    NivelFormacao(String),
}

impl Candidato {
    pub fn new(
        id: u64,
        nome: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        areas_interesse: Vec<String>,
        nivel_formacao: impl Into<String>,
    ) -> Result<Self> {
        let candidato = Self {
            id,
            nome: nome.into(),
            cpf: cpf.into(),
            email: email.into(),
            areas_interesse,
            nivel_formacao: nivel_formacao.into(),
        };
        candidato.validate()?;
        Ok(candidato)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn areas_interesse(&self) -> &[String] {
        &self.areas_interesse
    }

    pub fn nivel_formacao(&self) -> &str {
        &self.nivel_formacao
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) -> Result<()> {
        let nome = nome.into();
        TextoValidador.validar("nome", nome.as_str())?;
        self.nome = nome;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        EmailValidador.validar("email", email.as_str())?;
        self.email = email;
        Ok(())
    }

    pub fn set_areas_interesse(&mut self, areas: Vec<String>) -> Result<()> {
        AreasValidador.validar("areas_interesse", areas.as_slice())?;
        self.areas_interesse = areas;
        Ok(())
    }

    pub fn set_nivel_formacao(&mut self, nivel_formacao: impl Into<String>) {
        self.nivel_formacao = nivel_formacao.into();
    }

    pub fn adicionar_area(&mut self, area: &str) -> Result<()> {
        TextoValidador
            .validar("areas_interesse", area)
            .map_err(|_| SkillUpError::validation("areas_interesse", "Área inválida"))?;

        if self.areas_interesse.iter().any(|a| a == area) {
            return Err(SkillUpError::validation("areas_interesse", "Área já cadastrada"));
        }

        self.areas_interesse.push(area.to_string());
        Ok(())
    }

    pub fn remover_area(&mut self, area: &str) -> Result<()> {
        let posicao = self
            .areas_interesse
            .iter()
            .position(|a| a == area)
            .ok_or_else(|| SkillUpError::validation("areas_interesse", "Área não encontrada"))?;

        if self.areas_interesse.len() == 1 {
            return Err(SkillUpError::validation(
                "areas_interesse",
                "Ao menos uma área é obrigatória",
            ));
        }

        self.areas_interesse.remove(posicao);
        Ok(())
    }
}

impl Validate for Candidato {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        TextoValidador.validar("nome", self.nome.as_str())?;
        CpfValidador.validar("cpf", self.cpf.as_str())?;
        EmailValidador.validar("email", self.email.as_str())?;
        AreasValidador.validar("areas_interesse", self.areas_interesse.as_slice())?;
        Ok(())
    }
}

impl Entidade for Candidato {
    const NOME: &'static str = "candidato";
    const ARQUIVO: &'static str = "candidato.json";

    type Filtro = FiltroCandidato;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCandidato) -> bool {
        match filtro {
            FiltroCandidato::Nome(nome) => &self.nome == nome,
            FiltroCandidato::Cpf(cpf) => &self.cpf == cpf,
            FiltroCandidato::Email(email) => &self.email == email,
            FiltroCandidato::AreaInteresse(area) => self.areas_interesse.contains(area),
            FiltroCandidato::NivelFormacao(nivel) => &self.nivel_formacao == nivel,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCandidato> {
        let valor = valor.to_string();
        match campo {
            "nome" => Ok(FiltroCandidato::Nome(valor)),
            "cpf" => Ok(FiltroCandidato::Cpf(valor)),
            "email" => Ok(FiltroCandidato::Email(valor)),
            "areas_interesse" | "area_interesse" | "area" => Ok(FiltroCandidato::AreaInteresse(valor)),
            "nivel_formacao" => Ok(FiltroCandidato::NivelFormacao(valor)),
            _ => Err(SkillUpError::UnknownField {
                entidade: Self::NOME,
                campo: campo.to_string(),
            }),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "cpf" => Err(campo_imutavel(campo)),
            "nome" => self.set_nome(valor),
            "email" => self.set_email(valor),
            "areas_interesse" => self.set_areas_interesse(lista_de_texto(valor)),
            "nivel_formacao" => {
                self.set_nivel_formacao(valor);
                Ok(())
            }
            _ => Err(SkillUpError::UnknownField {
                entidade: Self::NOME,
                campo: campo.to_string(),
            }),
        }
    }
}

impl fmt::Display for Candidato {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nome: {}", self.nome)?;
        writeln!(f, "CPF: {}", self.cpf)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Áreas: {}", self.areas_interesse.join(", "))?;
        writeln!(f, "Formação: {}", self.nivel_formacao)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joao() -> Candidato {
        Candidato::new(
            1,
            "João",
            "11111111111",
            "joao@x.com",
            vec!["TI".to_string()],
            "Superior",
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let areas = vec!["TI".to_string()];
        assert!(Candidato::new(0, "João", "11111111111", "joao@x.com", areas.clone(), "").is_err());
        assert!(Candidato::new(1, " ", "11111111111", "joao@x.com", areas.clone(), "").is_err());
        assert!(Candidato::new(1, "João", "1111111111", "joao@x.com", areas.clone(), "").is_err());
        assert!(Candidato::new(1, "João", "11111111111", "joao.x.com", areas, "").is_err());
        assert!(Candidato::new(1, "João", "11111111111", "joao@x.com", vec![], "").is_err());
    }

    #[test]
    fn test_adicionar_area_rejects_duplicate() {
        let mut candidato = joao();
        candidato.adicionar_area("RH").unwrap();
        assert_eq!(candidato.areas_interesse(), ["TI", "RH"]);
        assert!(candidato.adicionar_area("RH").is_err());
        assert!(candidato.adicionar_area("  ").is_err());
    }

    #[test]
    fn test_remover_ultima_area_falha() {
        let mut candidato = joao();
        assert!(candidato.remover_area("TI").is_err());
        assert!(candidato.remover_area("Vendas").is_err());

        candidato.adicionar_area("Vendas").unwrap();
        candidato.remover_area("TI").unwrap();
        assert_eq!(candidato.areas_interesse(), ["Vendas"]);
    }

    #[test]
    fn test_cpf_nao_pode_ser_alterado() {
        let mut candidato = joao();
        let err = candidato.atualizar_campo("cpf", "22222222222").unwrap_err();
        assert!(err.to_string().contains("não pode ser alterado"));
        assert_eq!(candidato.cpf(), "11111111111");
        assert!(candidato.atualizar_campo("id", "5").is_err());
    }

    #[test]
    fn test_atualizar_campo() {
        let mut candidato = joao();
        candidato.atualizar_campo("email", "novo@x.com").unwrap();
        candidato.atualizar_campo("areas_interesse", "TI, Dados").unwrap();
        assert_eq!(candidato.email(), "novo@x.com");
        assert_eq!(candidato.areas_interesse(), ["TI", "Dados"]);
        assert!(candidato.atualizar_campo("email", "invalido").is_err());
        assert!(matches!(
            candidato.atualizar_campo("telefone", "1"),
            Err(SkillUpError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_dict_round_trip() {
        let candidato = joao();
        let dict = candidato.to_dict().unwrap();
        assert_eq!(dict["areas_interesse"], serde_json::json!(["TI"]));
        assert_eq!(Candidato::from_dict(dict).unwrap(), candidato);
    }

    #[test]
    fn test_from_dict_revalidates() {
        let dict = serde_json::json!({
            "id": 1,
            "nome": "João",
            "cpf": "123",
            "email": "joao@x.com",
            "areas_interesse": ["TI"],
            "nivel_formacao": "Superior"
        });
        assert!(Candidato::from_dict(dict).is_err());
    }

    #[test]
    fn test_filtros() {
        let candidato = joao();
        assert!(candidato.corresponde(&FiltroCandidato::AreaInteresse("TI".to_string())));
        assert!(!candidato.corresponde(&FiltroCandidato::AreaInteresse("RH".to_string())));
        assert!(candidato.corresponde(&Candidato::filtro("nome", "João").unwrap()));
        assert!(Candidato::filtro("idade", "30").is_err());
    }
}
