use crate::domain::ports::Entidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_bool, parse_campo};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{IdValidador, PositivoValidador, TextoValidador, Validate, Validador};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modalidade {
    Presencial,
    Remoto,
    #[serde(rename = "Híbrido")]
    Hibrido,
}

impl Modalidade {
    pub fn label(self) -> &'static str {
        match self {
            Modalidade::Presencial => "Presencial",
            Modalidade::Remoto => "Remoto",
            Modalidade::Hibrido => "Híbrido",
        }
    }
}

impl FromStr for Modalidade {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "presencial" => Ok(Modalidade::Presencial),
            "remoto" => Ok(Modalidade::Remoto),
            "híbrido" | "hibrido" => Ok(Modalidade::Hibrido),
            _ => Err(SkillUpError::validation(
                "modalidade",
                "Modalidade deve ser: Presencial, Remoto ou Híbrido",
            )),
        }
    }
}

impl fmt::Display for Modalidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoVaga {
    Emprego,
    #[serde(rename = "Estágio")]
    Estagio,
    Trainee,
}

impl TipoVaga {
    pub fn label(self) -> &'static str {
        match self {
            TipoVaga::Emprego => "Emprego",
            TipoVaga::Estagio => "Estágio",
            TipoVaga::Trainee => "Trainee",
        }
    }
}

impl FromStr for TipoVaga {
    type Err = SkillUpError;

    fn from_str(valor: &str) -> Result<Self> {
        match valor.trim().to_lowercase().as_str() {
            "emprego" => Ok(TipoVaga::Emprego),
            "estágio" | "estagio" => Ok(TipoVaga::Estagio),
            "trainee" => Ok(TipoVaga::Trainee),
            _ => Err(SkillUpError::validation(
                "tipo",
                "Tipo deve ser: Emprego, Estágio ou Trainee",
            )),
        }
    }
}

impl fmt::Display for TipoVaga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regime de contratação; define os campos extras e a fórmula de custo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contrato")]
pub enum Contrato {
    #[serde(rename = "CLT")]
    Clt { salario_base: f64 },
    #[serde(rename = "ESTAGIO")]
    Estagio {
        bolsa_auxilio: f64,
        instituicao_conveniada: String,
    },
}

impl Contrato {
    pub fn label(&self) -> &'static str {
        match self {
            Contrato::Clt { .. } => "CLT",
            Contrato::Estagio { .. } => "Estágio",
        }
    }

    fn validar(&self) -> Result<()> {
        match self {
            Contrato::Clt { salario_base } => {
                PositivoValidador.validar("salario_base", salario_base)
            }
            Contrato::Estagio {
                bolsa_auxilio,
                instituicao_conveniada,
            } => {
                PositivoValidador.validar("bolsa_auxilio", bolsa_auxilio)?;
                TextoValidador.validar("instituicao_conveniada", instituicao_conveniada.as_str())
            }
        }
    }
}

fn ativa_padrao() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaga {
    id: u64,
    titulo: String,
    descricao: String,
    area: String,
    modalidade: Modalidade,
    tipo: TipoVaga,
    #[serde(default)]
    prazo_inscricao: Option<NaiveDate>,
    #[serde(default)]
    requisitos: Vec<String>,
    #[serde(default = "ativa_padrao")]
    ativa: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_empresa: Option<u64>,
    #[serde(flatten)]
    contrato: Contrato,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroVaga {
    Titulo(String),
    Area(String),
    Modalidade(Modalidade),
    Tipo(TipoVaga),
    Ativa(bool),
    Empresa(u64),
    Requisito(String),
}

impl Vaga {
    pub fn new(
        id: u64,
        titulo: impl Into<String>,
        descricao: impl Into<String>,
        area: impl Into<String>,
        modalidade: Modalidade,
        tipo: TipoVaga,
        contrato: Contrato,
    ) -> Result<Self> {
        let vaga = Self {
            id,
            titulo: titulo.into(),
            descricao: descricao.into(),
            area: area.into(),
            modalidade,
            tipo,
            prazo_inscricao: None,
            requisitos: Vec::new(),
            ativa: true,
            id_empresa: None,
            contrato,
        };
        vaga.validate()?;
        Ok(vaga)
    }

    pub fn com_prazo_inscricao(mut self, prazo: Option<NaiveDate>) -> Self {
        self.prazo_inscricao = prazo;
        self
    }

    pub fn com_empresa(mut self, id_empresa: Option<u64>) -> Result<Self> {
        if let Some(id) = id_empresa {
            IdValidador.validar("id_empresa", &id)?;
        }
        self.id_empresa = id_empresa;
        Ok(self)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn titulo(&self) -> &str {
        &self.titulo
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn modalidade(&self) -> Modalidade {
        self.modalidade
    }

    pub fn tipo(&self) -> TipoVaga {
        self.tipo
    }

    pub fn prazo_inscricao(&self) -> Option<NaiveDate> {
        self.prazo_inscricao
    }

    pub fn requisitos(&self) -> &[String] {
        &self.requisitos
    }

    pub fn ativa(&self) -> bool {
        self.ativa
    }

    pub fn id_empresa(&self) -> Option<u64> {
        self.id_empresa
    }

    pub fn contrato(&self) -> &Contrato {
        &self.contrato
    }

    pub fn calcular_custo_contratacao(&self) -> f64 {
        match &self.contrato {
            Contrato::Clt { salario_base } => salario_base * 1.8,
            Contrato::Estagio { bolsa_auxilio, .. } => bolsa_auxilio * 1.1,
        }
    }

    pub fn adicionar_requisito(&mut self, requisito: &str) -> Result<()> {
        let requisito = requisito.trim();
        if requisito.is_empty() {
            return Err(SkillUpError::validation(
                "requisitos",
                "Requisito não pode ser vazio.",
            ));
        }
        self.requisitos.push(requisito.to_string());
        Ok(())
    }

    pub fn publicar(&mut self) {
        self.ativa = true;
    }

    pub fn pausar(&mut self) {
        self.ativa = false;
    }

    /// Campos ausentes ou vazios ficam como estão.
    pub fn editar(&mut self, titulo: Option<&str>, descricao: Option<&str>) -> Result<()> {
        let titulo = titulo.filter(|t| !t.is_empty());
        let descricao = descricao.filter(|d| !d.is_empty());

        if let Some(titulo) = titulo {
            TextoValidador.validar("titulo", titulo)?;
        }
        if let Some(descricao) = descricao {
            TextoValidador.validar("descricao", descricao)?;
        }

        if let Some(titulo) = titulo {
            self.titulo = titulo.to_string();
        }
        if let Some(descricao) = descricao {
            self.descricao = descricao.to_string();
        }
        Ok(())
    }

    fn set_valor_contrato(&mut self, campo: &str, valor: &str) -> Result<()> {
        let mut contrato = self.contrato.clone();
        match (&mut contrato, campo) {
            (Contrato::Clt { salario_base }, "salario_base") => {
                *salario_base = parse_campo(campo, valor)?;
            }
            (Contrato::Estagio { bolsa_auxilio, .. }, "bolsa_auxilio") => {
                *bolsa_auxilio = parse_campo(campo, valor)?;
            }
            (
                Contrato::Estagio {
                    instituicao_conveniada,
                    ..
                },
                "instituicao_conveniada",
            ) => {
                *instituicao_conveniada = valor.to_string();
            }
            _ => {
                return Err(SkillUpError::validation(
                    campo,
                    format!("Campo não se aplica a vagas {}", self.contrato.label()),
                ))
            }
        }
        contrato.validar()?;
        self.contrato = contrato;
        Ok(())
    }
}

impl Validate for Vaga {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        TextoValidador.validar("titulo", self.titulo.as_str())?;
        TextoValidador.validar("descricao", self.descricao.as_str())?;
        TextoValidador.validar("area", self.area.as_str())?;
        if let Some(id_empresa) = self.id_empresa {
            IdValidador.validar("id_empresa", &id_empresa)?;
        }
        self.contrato.validar()
    }
}

impl Entidade for Vaga {
    const NOME: &'static str = "vaga";
    const ARQUIVO: &'static str = "vaga.json";

    type Filtro = FiltroVaga;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroVaga) -> bool {
        match filtro {
            FiltroVaga::Titulo(titulo) => &self.titulo == titulo,
            FiltroVaga::Area(area) => &self.area == area,
            FiltroVaga::Modalidade(modalidade) => self.modalidade == *modalidade,
            FiltroVaga::Tipo(tipo) => self.tipo == *tipo,
            FiltroVaga::Ativa(ativa) => self.ativa == *ativa,
            FiltroVaga::Empresa(id) => self.id_empresa == Some(*id),
            FiltroVaga::Requisito(requisito) => self.requisitos.contains(requisito),
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroVaga> {
        match campo {
            "titulo" => Ok(FiltroVaga::Titulo(valor.to_string())),
            "area" => Ok(FiltroVaga::Area(valor.to_string())),
            "modalidade" => Ok(FiltroVaga::Modalidade(valor.parse()?)),
            "tipo" => Ok(FiltroVaga::Tipo(valor.parse()?)),
            "ativa" => Ok(FiltroVaga::Ativa(parse_bool(campo, valor)?)),
            "id_empresa" | "empresa" => Ok(FiltroVaga::Empresa(parse_campo(campo, valor)?)),
            "requisitos" | "requisito" => Ok(FiltroVaga::Requisito(valor.to_string())),
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" => Err(campo_imutavel(campo)),
            "titulo" => self.editar(Some(valor), None),
            "descricao" => self.editar(None, Some(valor)),
            "area" => {
                TextoValidador.validar(campo, valor)?;
                self.area = valor.to_string();
                Ok(())
            }
            "modalidade" => {
                self.modalidade = valor.parse()?;
                Ok(())
            }
            "tipo" => {
                self.tipo = valor.parse()?;
                Ok(())
            }
            "prazo_inscricao" => {
                self.prazo_inscricao = if valor.trim().is_empty() {
                    None
                } else {
                    Some(parse_campo(campo, valor)?)
                };
                Ok(())
            }
            "salario_base" | "bolsa_auxilio" | "instituicao_conveniada" => {
                self.set_valor_contrato(campo, valor)
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for Vaga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vaga #{} - {} ({})", self.id, self.titulo, self.contrato.label())?;
        writeln!(f, "Área: {} | Modalidade: {} | Tipo: {}", self.area, self.modalidade, self.tipo)?;
        writeln!(f, "Descrição: {}", self.descricao)?;
        match &self.contrato {
            Contrato::Clt { salario_base } => writeln!(f, "Salário base: R$ {:.2}", salario_base)?,
            Contrato::Estagio {
                bolsa_auxilio,
                instituicao_conveniada,
            } => writeln!(
                f,
                "Bolsa auxílio: R$ {:.2} | Convênio: {}",
                bolsa_auxilio, instituicao_conveniada
            )?,
        }
        if !self.requisitos.is_empty() {
            writeln!(f, "Requisitos: {}", self.requisitos.join(", "))?;
        }
        let prazo = self
            .prazo_inscricao
            .map(|p| p.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Indefinido".to_string());
        writeln!(
            f,
            "Status: {} | Inscrições até: {}",
            if self.ativa { "Ativa" } else { "Pausada" },
            prazo
        )?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vaga_clt(salario_base: f64) -> Result<Vaga> {
        Vaga::new(
            1,
            "Desenvolvedor Rust",
            "Backend",
            "TI",
            Modalidade::Remoto,
            TipoVaga::Emprego,
            Contrato::Clt { salario_base },
        )
    }

    fn vaga_estagio(bolsa_auxilio: f64, instituicao: &str) -> Result<Vaga> {
        Vaga::new(
            2,
            "Estágio em Dados",
            "Apoio ao time de BI",
            "Dados",
            Modalidade::Hibrido,
            TipoVaga::Estagio,
            Contrato::Estagio {
                bolsa_auxilio,
                instituicao_conveniada: instituicao.to_string(),
            },
        )
    }

    #[test]
    fn test_custo_contratacao() {
        assert_eq!(vaga_clt(1000.0).unwrap().calcular_custo_contratacao(), 1800.0);
        assert_eq!(
            vaga_estagio(1000.0, "UFPE").unwrap().calcular_custo_contratacao(),
            1100.0
        );
    }

    #[test]
    fn test_valores_do_contrato_validados() {
        assert!(vaga_clt(0.0).is_err());
        assert!(vaga_clt(-10.0).is_err());
        assert!(vaga_estagio(0.0, "UFPE").is_err());
        assert!(vaga_estagio(800.0, " ").is_err());
    }

    #[test]
    fn test_publicar_pausar_e_editar() {
        let mut vaga = vaga_clt(3000.0).unwrap();
        vaga.pausar();
        assert!(!vaga.ativa());
        vaga.publicar();
        assert!(vaga.ativa());

        vaga.editar(Some("Dev Rust Sênior"), None).unwrap();
        assert_eq!(vaga.titulo(), "Dev Rust Sênior");
        assert_eq!(vaga.descricao(), "Backend");
        assert!(vaga.editar(Some("  "), None).is_err());
        assert_eq!(vaga.titulo(), "Dev Rust Sênior");
    }

    #[test]
    fn test_adicionar_requisito() {
        let mut vaga = vaga_clt(3000.0).unwrap();
        vaga.adicionar_requisito("  Git ").unwrap();
        assert_eq!(vaga.requisitos(), ["Git"]);
        assert!(vaga.adicionar_requisito("   ").is_err());
        assert!(vaga.corresponde(&FiltroVaga::Requisito("Git".to_string())));
    }

    #[test]
    fn test_dict_usa_codigos_estaveis() {
        let vaga = vaga_estagio(1200.0, "UFPE")
            .unwrap()
            .com_prazo_inscricao(NaiveDate::from_ymd_opt(2026, 12, 1));
        let dict = vaga.to_dict().unwrap();
        assert_eq!(dict["contrato"], "ESTAGIO");
        assert_eq!(dict["modalidade"], "Híbrido");
        assert_eq!(dict["tipo"], "Estágio");
        assert_eq!(dict["prazo_inscricao"], "2026-12-01");
        assert_eq!(dict["instituicao_conveniada"], "UFPE");
        assert!(dict.get("id_empresa").is_none());
        assert_eq!(Vaga::from_dict(dict).unwrap(), vaga);
    }

    #[test]
    fn test_atualizar_campo_do_contrato() {
        let mut vaga = vaga_clt(2000.0).unwrap();
        vaga.atualizar_campo("salario_base", "2500").unwrap();
        assert_eq!(vaga.calcular_custo_contratacao(), 4500.0);
        assert!(vaga.atualizar_campo("salario_base", "-1").is_err());
        assert!(vaga.atualizar_campo("bolsa_auxilio", "900").is_err());
        assert_eq!(vaga.calcular_custo_contratacao(), 4500.0);
    }

    #[test]
    fn test_from_dict_rejeita_contrato_desconhecido() {
        let dict = serde_json::json!({
            "id": 9,
            "titulo": "PJ",
            "descricao": "x",
            "area": "TI",
            "modalidade": "Remoto",
            "tipo": "Emprego",
            "contrato": "PJ",
            "valor_hora": 100.0
        });
        assert!(Vaga::from_dict(dict).is_err());
    }
}
