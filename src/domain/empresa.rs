use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{CnpjValidador, IdValidador, TextoValidador, Validate, Validador};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Porte {
    Pequeno,
    Medio,
    Grande,
}

impl Porte {
    /// Quantidade máxima de vagas ativas por porte.
    pub fn limite_publicacoes(self) -> usize {
        match self {
            Porte::Pequeno => 5,
            Porte::Medio => 15,
            Porte::Grande => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Porte::Pequeno => "pequeno",
            Porte::Medio => "medio",
            Porte::Grande => "grande",
        }
    }
}

impl FromStr for Porte {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "pequeno" => Ok(Porte::Pequeno),
            "medio" | "médio" => Ok(Porte::Medio),
            "grande" => Ok(Porte::Grande),
            _ => Err(SkillUpError::validation(
                "porte",
                "Porte deve ser: pequeno, medio ou grande.",
            )),
        }
    }
}

impl fmt::Display for Porte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    id: u64,
    nome: String,
    cnpj: String,
    porte: Porte,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroEmpresa {
    Nome(String),
    Cnpj(String),
    Porte(Porte),
}

impl Empresa {
    pub fn new(id: u64, nome: impl Into<String>, cnpj: impl Into<String>, porte: Porte) -> Result<Self> {
        let empresa = Self {
            id,
            nome: nome.into(),
            cnpj: cnpj.into(),
            porte,
        };
        empresa.validate()?;
        Ok(empresa)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    pub fn porte(&self) -> Porte {
        self.porte
    }

    pub fn set_nome(&mut self, nome: impl Into<String>) -> Result<()> {
        let nome = nome.into();
        TextoValidador.validar("nome", nome.as_str())?;
        self.nome = nome;
        Ok(())
    }

    pub fn set_porte(&mut self, porte: Porte) {
        self.porte = porte;
    }

    pub fn obter_limites_publicacao(&self) -> usize {
        self.porte.limite_publicacoes()
    }

    /// Falha quando a empresa já atingiu o limite de vagas ativas do seu porte.
    pub fn validar_publicacao(&self, vagas_ativas: usize) -> Result<()> {
        let limite = self.obter_limites_publicacao();
        if vagas_ativas >= limite {
            return Err(SkillUpError::permission(format!(
                "Empresa de porte {} pode manter no máximo {} vagas ativas",
                self.porte, limite
            )));
        }
        Ok(())
    }
}

impl Validate for Empresa {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        TextoValidador.validar("nome", self.nome.as_str())?;
        CnpjValidador.validar("cnpj", self.cnpj.as_str())?;
        Ok(())
    }
}

impl Entidade for Empresa {
    const NOME: &'static str = "empresa";
    const ARQUIVO: &'static str = "empresa.json";

    type Filtro = FiltroEmpresa;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroEmpresa) -> bool {
        match filtro {
            FiltroEmpresa::Nome(nome) => &self.nome == nome,
            FiltroEmpresa::Cnpj(cnpj) => &self.cnpj == cnpj,
            FiltroEmpresa::Porte(porte) => self.porte == *porte,
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroEmpresa> {
        match campo {
            "nome" => Ok(FiltroEmpresa::Nome(valor.to_string())),
            "cnpj" => Ok(FiltroEmpresa::Cnpj(valor.to_string())),
            "porte" => Ok(FiltroEmpresa::Porte(valor.parse()?)),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "cnpj" => Err(campo_imutavel(campo)),
            "nome" => self.set_nome(valor),
            "porte" => {
                self.set_porte(valor.parse()?);
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for Empresa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nome: {}", self.nome)?;
        writeln!(f, "CNPJ: {}", self.cnpj)?;
        writeln!(f, "Porte: {}", self.porte)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limites_por_porte() {
        let pequena = Empresa::new(1, "Loja", "12345678000199", Porte::Pequeno).unwrap();
        assert_eq!(pequena.obter_limites_publicacao(), 5);
        assert!(pequena.validar_publicacao(4).is_ok());
        assert!(matches!(
            pequena.validar_publicacao(5),
            Err(SkillUpError::Permission { .. })
        ));
        assert_eq!(Porte::Medio.limite_publicacoes(), 15);
        assert_eq!(Porte::Grande.limite_publicacoes(), 50);
    }

    #[test]
    fn test_cnpj_invalido_e_imutavel() {
        assert!(Empresa::new(1, "Loja", "123", Porte::Pequeno).is_err());
        let mut empresa = Empresa::new(1, "Loja", "12345678000199", Porte::Pequeno).unwrap();
        assert!(empresa.atualizar_campo("cnpj", "99999999000199").is_err());
        empresa.atualizar_campo("porte", "Grande").unwrap();
        assert_eq!(empresa.porte(), Porte::Grande);
        assert!(empresa.atualizar_campo("porte", "enorme").is_err());
    }

    #[test]
    fn test_porte_serializado_em_minusculas() {
        let empresa = Empresa::new(3, "Acme", "12345678000199", Porte::Medio).unwrap();
        let dict = empresa.to_dict().unwrap();
        assert_eq!(
            dict,
            serde_json::json!({"id": 3, "nome": "Acme", "cnpj": "12345678000199", "porte": "medio"})
        );
        assert_eq!(Empresa::from_dict(dict).unwrap(), empresa);
    }
}
