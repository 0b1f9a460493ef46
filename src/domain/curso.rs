use crate::domain::ports::Entidade;
use crate::domain::vaga::Modalidade;
use crate::domain::{campo_desconhecido, campo_imutavel, parse_bool, parse_campo};
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{IdValidador, PositivoValidador, TextoValidador, Validate, Validador};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum FormatoCurso {
    #[serde(rename = "EAD")]
    Ead { plataforma_url: String },
    #[serde(rename = "PRESENCIAL")]
    Presencial { localidade: String },
}

impl FormatoCurso {
    pub fn modalidade(&self) -> Modalidade {
        match self {
            FormatoCurso::Ead { .. } => Modalidade::Remoto,
            FormatoCurso::Presencial { .. } => Modalidade::Presencial,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormatoCurso::Ead { .. } => "EAD",
            FormatoCurso::Presencial { .. } => "PRESENCIAL",
        }
    }

    fn validar(&self) -> Result<()> {
        match self {
            FormatoCurso::Ead { plataforma_url } => TextoValidador
                .validar("plataforma_url", plataforma_url.as_str())
                .map_err(|_| {
                    SkillUpError::validation(
                        "plataforma_url",
                        "A URL da plataforma é obrigatória para cursos EAD.",
                    )
                }),
            FormatoCurso::Presencial { localidade } => TextoValidador
                .validar("localidade", localidade.as_str())
                .map_err(|_| {
                    SkillUpError::validation(
                        "localidade",
                        "A localidade é obrigatória para cursos presenciais.",
                    )
                }),
        }
    }
}

fn ativo_padrao() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curso {
    id: u64,
    nome: String,
    area: String,
    carga_horaria: u32,
    capacidade: u32,
    #[serde(default)]
    prazo_inscricao: Option<NaiveDate>,
    #[serde(default = "ativo_padrao")]
    ativo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_instituicao: Option<u64>,
    #[serde(flatten)]
    formato: FormatoCurso,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltroCurso {
    Nome(String),
    Area(String),
    Formato(String),
    Ativo(bool),
    CargaHorariaMinima(u32),
    Instituicao(u64),
}

impl Curso {
    pub fn new(
        id: u64,
        nome: impl Into<String>,
        area: impl Into<String>,
        carga_horaria: u32,
        capacidade: u32,
        formato: FormatoCurso,
    ) -> Result<Self> {
        let curso = Self {
            id,
            nome: nome.into(),
            area: area.into(),
            carga_horaria,
            capacidade,
            prazo_inscricao: None,
            ativo: true,
            id_instituicao: None,
            formato,
        };
        curso.validate()?;
        Ok(curso)
    }

    pub fn com_prazo_inscricao(mut self, prazo: Option<NaiveDate>) -> Self {
        self.prazo_inscricao = prazo;
        self
    }

    pub fn com_instituicao(mut self, id_instituicao: Option<u64>) -> Result<Self> {
        if let Some(id) = id_instituicao {
            IdValidador.validar("id_instituicao", &id)?;
        }
        self.id_instituicao = id_instituicao;
        Ok(self)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn carga_horaria(&self) -> u32 {
        self.carga_horaria
    }

    pub fn capacidade(&self) -> u32 {
        self.capacidade
    }

    pub fn prazo_inscricao(&self) -> Option<NaiveDate> {
        self.prazo_inscricao
    }

    pub fn ativo(&self) -> bool {
        self.ativo
    }

    pub fn id_instituicao(&self) -> Option<u64> {
        self.id_instituicao
    }

    pub fn formato(&self) -> &FormatoCurso {
        &self.formato
    }

    pub fn modalidade(&self) -> Modalidade {
        self.formato.modalidade()
    }

    pub fn publicar(&mut self) {
        self.ativo = true;
    }

    pub fn pausar(&mut self) {
        self.ativo = false;
    }

    /// Só aplica as alterações se todas forem válidas.
    pub fn editar(
        &mut self,
        nome: Option<&str>,
        area: Option<&str>,
        carga_horaria: Option<u32>,
        capacidade: Option<u32>,
    ) -> Result<()> {
        if let Some(nome) = nome {
            TextoValidador.validar("nome", nome)?;
        }
        if let Some(area) = area {
            TextoValidador.validar("area", area)?;
        }
        if let Some(carga_horaria) = carga_horaria {
            PositivoValidador.validar("carga_horaria", &carga_horaria)?;
        }
        if let Some(capacidade) = capacidade {
            PositivoValidador.validar("capacidade", &capacidade)?;
        }

        if let Some(nome) = nome {
            self.nome = nome.to_string();
        }
        if let Some(area) = area {
            self.area = area.to_string();
        }
        if let Some(carga_horaria) = carga_horaria {
            self.carga_horaria = carga_horaria;
        }
        if let Some(capacidade) = capacidade {
            self.capacidade = capacidade;
        }
        Ok(())
    }

    /// Inscrições abertas: curso ativo e prazo (se houver) não vencido em `hoje`.
    pub fn aceita_inscricao_em(&self, hoje: NaiveDate) -> bool {
        self.ativo && self.prazo_inscricao.map_or(true, |prazo| hoje <= prazo)
    }

    pub fn exibir_detalhes(&self) -> String {
        let status = if self.ativo { "Ativo" } else { "Inativo" };
        let prazo = self
            .prazo_inscricao
            .map(|p| p.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Indefinido".to_string());

        match &self.formato {
            FormatoCurso::Ead { plataforma_url } => format!(
                "Curso EAD: {} ({})\nCarga: {}h | Modalidade: {}\nPlataforma: {}\nStatus: {} | Inscrições até: {}",
                self.nome,
                self.area,
                self.carga_horaria,
                self.modalidade(),
                plataforma_url,
                status,
                prazo
            ),
            FormatoCurso::Presencial { localidade } => format!(
                "Curso Presencial: {} ({})\nCarga: {}h | Local: {}\nStatus: {} | Inscrições até: {}",
                self.nome, self.area, self.carga_horaria, localidade, status, prazo
            ),
        }
    }
}

impl Validate for Curso {
    fn validate(&self) -> Result<()> {
        IdValidador.validar("id", &self.id)?;
        TextoValidador.validar("nome", self.nome.as_str())?;
        TextoValidador.validar("area", self.area.as_str())?;
        PositivoValidador.validar("carga_horaria", &self.carga_horaria)?;
        PositivoValidador.validar("capacidade", &self.capacidade)?;
        if let Some(id_instituicao) = self.id_instituicao {
            IdValidador.validar("id_instituicao", &id_instituicao)?;
        }
        self.formato.validar()
    }
}

impl Entidade for Curso {
    const NOME: &'static str = "curso";
    const ARQUIVO: &'static str = "curso.json";

    type Filtro = FiltroCurso;

    fn id(&self) -> u64 {
        self.id
    }

    fn corresponde(&self, filtro: &FiltroCurso) -> bool {
        match filtro {
            FiltroCurso::Nome(nome) => &self.nome == nome,
            FiltroCurso::Area(area) => &self.area == area,
            FiltroCurso::Formato(formato) => self.formato.label().eq_ignore_ascii_case(formato),
            FiltroCurso::Ativo(ativo) => self.ativo == *ativo,
            FiltroCurso::CargaHorariaMinima(minimo) => self.carga_horaria >= *minimo,
            FiltroCurso::Instituicao(id) => self.id_instituicao == Some(*id),
        }
    }

    fn filtro(campo: &str, valor: &str) -> Result<FiltroCurso> {
        match campo {
            "nome" => Ok(FiltroCurso::Nome(valor.to_string())),
            "area" => Ok(FiltroCurso::Area(valor.to_string())),
            "tipo" | "formato" => Ok(FiltroCurso::Formato(valor.to_string())),
            "ativo" => Ok(FiltroCurso::Ativo(parse_bool(campo, valor)?)),
            "carga_horaria_min" => Ok(FiltroCurso::CargaHorariaMinima(parse_campo(campo, valor)?)),
            "id_instituicao" | "instituicao" => {
                Ok(FiltroCurso::Instituicao(parse_campo(campo, valor)?))
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }

    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()> {
        match campo {
            "id" | "tipo" => Err(campo_imutavel(campo)),
            "nome" => self.editar(Some(valor), None, None, None),
            "area" => self.editar(None, Some(valor), None, None),
            "carga_horaria" => self.editar(None, None, Some(parse_campo(campo, valor)?), None),
            "capacidade" => self.editar(None, None, None, Some(parse_campo(campo, valor)?)),
            "prazo_inscricao" => {
                self.prazo_inscricao = if valor.trim().is_empty() {
                    None
                } else {
                    Some(parse_campo(campo, valor)?)
                };
                Ok(())
            }
            "plataforma_url" | "localidade" => {
                let mut formato = self.formato.clone();
                match (&mut formato, campo) {
                    (FormatoCurso::Ead { plataforma_url }, "plataforma_url") => {
                        *plataforma_url = valor.to_string()
                    }
                    (FormatoCurso::Presencial { localidade }, "localidade") => {
                        *localidade = valor.to_string()
                    }
                    _ => {
                        return Err(SkillUpError::validation(
                            campo,
                            format!("Campo não se aplica a cursos {}", self.formato.label()),
                        ))
                    }
                }
                formato.validar()?;
                self.formato = formato;
                Ok(())
            }
            _ => Err(campo_desconhecido(Self::NOME, campo)),
        }
    }
}

impl fmt::Display for Curso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "{}", self.exibir_detalhes())?;
        writeln!(f, "Capacidade: {}", self.capacidade)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curso_ead() -> Curso {
        Curso::new(
            1,
            "Rust Básico",
            "TI",
            40,
            30,
            FormatoCurso::Ead {
                plataforma_url: "https://cursos.exemplo.com".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_modalidade_fixa_por_formato() {
        assert_eq!(curso_ead().modalidade(), Modalidade::Remoto);
        let presencial = Curso::new(
            2,
            "Oficina",
            "TI",
            8,
            10,
            FormatoCurso::Presencial {
                localidade: "Recife".to_string(),
            },
        )
        .unwrap();
        assert_eq!(presencial.modalidade(), Modalidade::Presencial);
        assert!(presencial.exibir_detalhes().starts_with("Curso Presencial: Oficina"));
    }

    #[test]
    fn test_invariantes() {
        let ead = || FormatoCurso::Ead {
            plataforma_url: "https://x".to_string(),
        };
        assert!(Curso::new(1, "Rust", "TI", 0, 10, ead()).is_err());
        assert!(Curso::new(1, "Rust", "TI", 10, 0, ead()).is_err());
        assert!(Curso::new(1, "", "TI", 10, 10, ead()).is_err());
        assert!(Curso::new(
            1,
            "Rust",
            "TI",
            10,
            10,
            FormatoCurso::Ead {
                plataforma_url: String::new()
            }
        )
        .is_err());
    }

    #[test]
    fn test_editar_e_atomico() {
        let mut curso = curso_ead();
        assert!(curso.editar(Some("Rust Avançado"), None, Some(0), None).is_err());
        assert_eq!(curso.nome(), "Rust Básico");
        curso.editar(Some("Rust Avançado"), None, Some(60), None).unwrap();
        assert_eq!(curso.nome(), "Rust Avançado");
        assert_eq!(curso.carga_horaria(), 60);
    }

    #[test]
    fn test_aceita_inscricao() {
        let hoje = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut curso = curso_ead().com_prazo_inscricao(NaiveDate::from_ymd_opt(2026, 3, 10));
        assert!(curso.aceita_inscricao_em(hoje));
        assert!(!curso.aceita_inscricao_em(hoje.succ_opt().unwrap()));
        curso.pausar();
        assert!(!curso.aceita_inscricao_em(hoje));
    }

    #[test]
    fn test_dict_round_trip() {
        let curso = curso_ead()
            .com_prazo_inscricao(NaiveDate::from_ymd_opt(2026, 5, 1))
            .com_instituicao(Some(3))
            .unwrap();
        let dict = curso.to_dict().unwrap();
        assert_eq!(dict["tipo"], "EAD");
        assert_eq!(dict["plataforma_url"], "https://cursos.exemplo.com");
        assert_eq!(dict["id_instituicao"], 3);
        assert_eq!(Curso::from_dict(dict).unwrap(), curso);
    }

    #[test]
    fn test_filtro_carga_minima() {
        let curso = curso_ead();
        assert!(curso.corresponde(&FiltroCurso::CargaHorariaMinima(40)));
        assert!(!curso.corresponde(&FiltroCurso::CargaHorariaMinima(41)));
        assert!(curso.corresponde(&Curso::filtro("tipo", "ead").unwrap()));
    }
}
