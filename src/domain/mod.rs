// Entidades de domínio e portas (traits) de persistência/configuração.
// Nenhuma entidade guarda referência a outra: relacionamentos são apenas ids.

pub mod candidato;
pub mod candidatura;
pub mod competencia;
pub mod competencia_nivelada;
pub mod curso;
pub mod empresa;
pub mod inscricao_curso;
pub mod instituicao_ensino;
pub mod nivel;
pub mod ports;
pub mod publicadora;
pub mod requisito_vaga;
pub mod vaga;

pub use candidato::{Candidato, FiltroCandidato};
pub use candidatura::{Candidatura, FiltroCandidatura, StatusCandidatura};
pub use competencia::{Competencia, FiltroCompetencia};
pub use competencia_nivelada::{
    CompetenciaCandidato, CursoCompetencia, FiltroCompetenciaCandidato, FiltroCursoCompetencia,
};
pub use curso::{Curso, FiltroCurso, FormatoCurso};
pub use empresa::{Empresa, FiltroEmpresa, Porte};
pub use inscricao_curso::{FiltroInscricao, InscricaoCurso, StatusInscricao};
pub use instituicao_ensino::{FiltroInstituicao, InstituicaoEnsino};
pub use nivel::Nivel;
pub use ports::{ConfigProvider, Entidade, Repositorio, Storage};
pub use publicadora::EntidadePublicadora;
pub use requisito_vaga::{FiltroRequisito, RequisitoVaga};
pub use vaga::{Contrato, FiltroVaga, Modalidade, TipoVaga, Vaga};

use crate::utils::error::SkillUpError;
use std::str::FromStr;

pub(crate) fn campo_imutavel(campo: &str) -> SkillUpError {
    SkillUpError::validation(campo, format!("'{}' não pode ser alterado", campo))
}

/// "TI, RH ,Vendas" -> ["TI", "RH", "Vendas"]
pub(crate) fn lista_de_texto(valor: &str) -> Vec<String> {
    valor
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

pub(crate) fn parse_campo<T: FromStr>(campo: &str, valor: &str) -> Result<T, SkillUpError> {
    valor
        .trim()
        .parse()
        .map_err(|_| SkillUpError::validation(campo, format!("Valor '{}' inválido", valor)))
}

pub(crate) fn parse_bool(campo: &str, valor: &str) -> Result<bool, SkillUpError> {
    match valor.trim().to_lowercase().as_str() {
        "true" | "sim" | "s" | "1" => Ok(true),
        "false" | "nao" | "não" | "n" | "0" => Ok(false),
        _ => Err(SkillUpError::validation(campo, "Valor deve ser booleano")),
    }
}

/// Status só muda pelas ações do serviço, que aplicam as regras de transição.
pub(crate) fn status_por_acao(acoes: &str) -> SkillUpError {
    SkillUpError::invalid_transition(format!(
        "O status não pode ser alterado diretamente; use {}",
        acoes
    ))
}

pub(crate) fn campo_desconhecido(entidade: &'static str, campo: &str) -> SkillUpError {
    SkillUpError::UnknownField {
        entidade,
        campo: campo.to_string(),
    }
}
