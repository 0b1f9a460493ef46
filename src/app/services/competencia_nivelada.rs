use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
use crate::domain::{
    Candidato, Competencia, CompetenciaCandidato, Curso, CursoCompetencia,
    FiltroCompetenciaCandidato, FiltroCursoCompetencia, Nivel,
};
use crate::utils::error::{Result, SkillUpError};

/// Falha com `NotFound` se o id não existir no repositório.
pub(crate) fn garantir_existe<S: Storage, E: Entidade>(
    repo: &JsonRepository<S, E>,
    id: u64,
) -> Result<()> {
    match repo.buscar_por_id(id)? {
        Some(_) => Ok(()),
        None => Err(SkillUpError::NotFound {
            entidade: E::NOME,
            id,
        }),
    }
}

pub struct CompetenciaCandidatoService<S: Storage> {
    vinculos: JsonRepository<S, CompetenciaCandidato>,
    candidatos: JsonRepository<S, Candidato>,
    competencias: JsonRepository<S, Competencia>,
}

impl<S: Storage + Clone> CompetenciaCandidatoService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            vinculos: JsonRepository::from_config(storage.clone(), config),
            candidatos: JsonRepository::from_config(storage.clone(), config),
            competencias: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> CompetenciaCandidatoService<S> {
    pub fn registrar(
        &self,
        id_candidato: u64,
        id_competencia: u64,
        nivel: Nivel,
    ) -> Result<CompetenciaCandidato> {
        garantir_existe(&self.candidatos, id_candidato)?;
        garantir_existe(&self.competencias, id_competencia)?;

        let vinculos = self.vinculos.listar()?;
        if vinculos
            .iter()
            .any(|v| v.id_candidato() == id_candidato && v.id_competencia() == id_competencia)
        {
            return Err(SkillUpError::conflict(
                "Candidato já possui esta competência registrada",
            ));
        }

        let vinculo =
            CompetenciaCandidato::new(proximo_id(&vinculos), id_candidato, id_competencia, nivel)?;
        self.vinculos.salvar(&vinculo)?;

        tracing::info!(
            "Competência {} registrada para candidato {} ({})",
            id_competencia,
            id_candidato,
            nivel
        );
        Ok(vinculo)
    }

    pub fn atualizar_nivel(&self, id: u64, nivel: &str) -> Result<CompetenciaCandidato> {
        self.alterar(id, |v| v.atualizar_nivel(nivel))
    }

    pub fn listar_por_candidato(&self, id_candidato: u64) -> Result<Vec<CompetenciaCandidato>> {
        self.vinculos
            .buscar_por_filtros(&[FiltroCompetenciaCandidato::Candidato(id_candidato)])
    }

    pub fn listar_por_competencia(
        &self,
        id_competencia: u64,
    ) -> Result<Vec<CompetenciaCandidato>> {
        self.vinculos
            .buscar_por_filtros(&[FiltroCompetenciaCandidato::Competencia(id_competencia)])
    }
}

impl<S: Storage> CrudService<CompetenciaCandidato> for CompetenciaCandidatoService<S> {
    type Repo = JsonRepository<S, CompetenciaCandidato>;

    fn repositorio(&self) -> &Self::Repo {
        &self.vinculos
    }
}

pub struct CursoCompetenciaService<S: Storage> {
    vinculos: JsonRepository<S, CursoCompetencia>,
    cursos: JsonRepository<S, Curso>,
    competencias: JsonRepository<S, Competencia>,
}

impl<S: Storage + Clone> CursoCompetenciaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            vinculos: JsonRepository::from_config(storage.clone(), config),
            cursos: JsonRepository::from_config(storage.clone(), config),
            competencias: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> CursoCompetenciaService<S> {
    pub fn registrar(
        &self,
        id_curso: u64,
        id_competencia: u64,
        nivel: Nivel,
    ) -> Result<CursoCompetencia> {
        garantir_existe(&self.cursos, id_curso)?;
        garantir_existe(&self.competencias, id_competencia)?;

        let vinculos = self.vinculos.listar()?;
        if vinculos
            .iter()
            .any(|v| v.id_curso() == id_curso && v.id_competencia() == id_competencia)
        {
            return Err(SkillUpError::conflict("Curso já confere esta competência"));
        }

        let vinculo = CursoCompetencia::new(proximo_id(&vinculos), id_curso, id_competencia, nivel)?;
        self.vinculos.salvar(&vinculo)?;

        tracing::info!(
            "Curso {} passa a conferir competência {} ({})",
            id_curso,
            id_competencia,
            nivel
        );
        Ok(vinculo)
    }

    pub fn atualizar_nivel(&self, id: u64, nivel: &str) -> Result<CursoCompetencia> {
        self.alterar(id, |v| v.atualizar_nivel(nivel))
    }

    pub fn listar_por_curso(&self, id_curso: u64) -> Result<Vec<CursoCompetencia>> {
        self.vinculos
            .buscar_por_filtros(&[FiltroCursoCompetencia::Curso(id_curso)])
    }

    pub fn listar_por_competencia(&self, id_competencia: u64) -> Result<Vec<CursoCompetencia>> {
        self.vinculos
            .buscar_por_filtros(&[FiltroCursoCompetencia::Competencia(id_competencia)])
    }
}

impl<S: Storage> CrudService<CursoCompetencia> for CursoCompetenciaService<S> {
    type Repo = JsonRepository<S, CursoCompetencia>;

    fn repositorio(&self) -> &Self::Repo {
        &self.vinculos
    }
}
