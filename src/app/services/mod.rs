//! Serviços de aplicação: regras que cruzam registros (unicidade, chaves
//! estrangeiras, limites de publicação) antes de delegar ao repositório.

pub mod candidato;
pub mod candidatura;
pub mod competencia;
pub mod competencia_nivelada;
pub mod curso;
pub mod empresa;
pub mod inscricao_curso;
pub mod instituicao_ensino;
pub mod requisito_vaga;
pub mod vaga;

pub use candidato::CandidatoService;
pub use candidatura::CandidaturaService;
pub use competencia::CompetenciaService;
pub use competencia_nivelada::{CompetenciaCandidatoService, CursoCompetenciaService};
pub use curso::{CursoService, NovoCurso};
pub use empresa::EmpresaService;
pub use inscricao_curso::InscricaoCursoService;
pub use instituicao_ensino::{InstituicaoEnsinoService, NovaInstituicao};
pub use requisito_vaga::RequisitoVagaService;
pub use vaga::{NovaVaga, VagaService};

use crate::domain::ports::{Entidade, Repositorio};
use crate::utils::error::{Result, SkillUpError};

/// Próximo id livre: maior id existente + 1, ou 1 quando vazio.
pub fn proximo_id<E: Entidade>(registros: &[E]) -> u64 {
    registros.iter().map(Entidade::id).max().unwrap_or(0) + 1
}

/// Operações comuns a todos os serviços. Cada serviço só precisa expor o
/// repositório da sua entidade.
pub trait CrudService<E: Entidade> {
    type Repo: Repositorio<E>;

    fn repositorio(&self) -> &Self::Repo;

    fn listar(&self) -> Result<Vec<E>> {
        self.repositorio().listar()
    }

    fn buscar_por_id(&self, id: u64) -> Result<E> {
        self.repositorio()
            .buscar_por_id(id)?
            .ok_or(SkillUpError::NotFound {
                entidade: E::NOME,
                id,
            })
    }

    fn buscar_por_filtros(&self, filtros: &[E::Filtro]) -> Result<Vec<E>> {
        self.repositorio().buscar_por_filtros(filtros)
    }

    /// Altera um campo a partir de texto (vindo da CLI) e persiste.
    fn atualizar(&self, id: u64, campo: &str, valor: &str) -> Result<E> {
        self.alterar(id, |entidade| entidade.atualizar_campo(campo, valor))
    }

    /// Carrega, aplica `mudanca` e regrava. Se `mudanca` falhar nada é
    /// persistido.
    fn alterar<F>(&self, id: u64, mudanca: F) -> Result<E>
    where
        F: FnOnce(&mut E) -> Result<()>,
    {
        let mut entidade = self.buscar_por_id(id)?;
        mudanca(&mut entidade)?;
        self.repositorio().atualizar(&entidade)?;
        tracing::debug!("{} {} atualizado(a)", E::NOME, id);
        Ok(entidade)
    }

    fn deletar(&self, id: u64) -> Result<()> {
        self.repositorio().deletar(id)?;
        tracing::info!("{} {} removido(a)", E::NOME, id);
        Ok(())
    }

    fn contar_total(&self) -> Result<usize> {
        Ok(self.listar()?.len())
    }

    fn listar_formatado(&self) -> Result<Vec<String>> {
        Ok(self.listar()?.iter().map(ToString::to_string).collect())
    }

    fn buscar_por_id_formatado(&self, id: u64) -> Result<String> {
        Ok(self.buscar_por_id(id)?.to_string())
    }

    fn buscar_por_filtros_formatado(&self, filtros: &[E::Filtro]) -> Result<Vec<String>> {
        Ok(self
            .buscar_por_filtros(filtros)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Competencia;

    #[test]
    fn test_proximo_id() {
        let vazio: Vec<Competencia> = Vec::new();
        assert_eq!(proximo_id(&vazio), 1);

        let registros = vec![
            Competencia::new(3, "SQL", "").unwrap(),
            Competencia::new(7, "Rust", "").unwrap(),
        ];
        assert_eq!(proximo_id(&registros), 8);
    }
}
