use super::competencia_nivelada::garantir_existe;
use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::{
    Candidato, Curso, FiltroInscricao, InscricaoCurso, StatusInscricao,
};
use crate::utils::error::{Result, SkillUpError};
use chrono::{Local, NaiveDate};

/// Inscrições de candidatos (alunos) em cursos.
pub struct InscricaoCursoService<S: Storage> {
    inscricoes: JsonRepository<S, InscricaoCurso>,
    cursos: JsonRepository<S, Curso>,
    alunos: JsonRepository<S, Candidato>,
}

impl<S: Storage + Clone> InscricaoCursoService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            inscricoes: JsonRepository::from_config(storage.clone(), config),
            cursos: JsonRepository::from_config(storage.clone(), config),
            alunos: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> InscricaoCursoService<S> {
    pub fn inscrever(&self, id_curso: u64, id_aluno: u64) -> Result<InscricaoCurso> {
        self.inscrever_em(id_curso, id_aluno, Local::now().date_naive())
    }

    /// Como `inscrever`, com a data da inscrição explícita.
    pub fn inscrever_em(
        &self,
        id_curso: u64,
        id_aluno: u64,
        hoje: NaiveDate,
    ) -> Result<InscricaoCurso> {
        let curso = self
            .cursos
            .buscar_por_id(id_curso)?
            .ok_or(SkillUpError::NotFound {
                entidade: "curso",
                id: id_curso,
            })?;
        garantir_existe(&self.alunos, id_aluno)?;

        if !curso.aceita_inscricao_em(hoje) {
            tracing::warn!("Inscrição recusada: curso {} fechado em {}", id_curso, hoje);
            return Err(SkillUpError::invalid_transition(
                "Curso não está aberto para inscrições",
            ));
        }

        let inscricoes = self.inscricoes.listar()?;
        let do_curso: Vec<&InscricaoCurso> =
            inscricoes.iter().filter(|i| i.id_curso() == id_curso).collect();

        if do_curso.iter().any(|i| i.id_aluno() == id_aluno) {
            return Err(SkillUpError::conflict("Aluno já inscrito neste curso"));
        }

        let deferidas = do_curso
            .iter()
            .filter(|i| i.status() == StatusInscricao::Deferido)
            .count();
        if deferidas >= curso.capacidade() as usize {
            tracing::warn!("Inscrição recusada: curso {} lotado", id_curso);
            return Err(SkillUpError::conflict("Curso sem vagas disponíveis"));
        }

        let inscricao = InscricaoCurso::new(proximo_id(&inscricoes), id_curso, id_aluno, hoje)?;
        self.inscricoes.salvar(&inscricao)?;

        tracing::info!(
            "Inscrição {} registrada: aluno {} no curso {}",
            inscricao.id(),
            id_aluno,
            id_curso
        );
        Ok(inscricao)
    }

    /// Defere novamente uma inscrição indeferida, se ainda houver vaga.
    pub fn deferir(&self, id: u64) -> Result<InscricaoCurso> {
        let inscricao = self.buscar_por_id(id)?;
        if inscricao.status() == StatusInscricao::Deferido {
            return Ok(inscricao);
        }

        let curso = self
            .cursos
            .buscar_por_id(inscricao.id_curso())?
            .ok_or(SkillUpError::NotFound {
                entidade: "curso",
                id: inscricao.id_curso(),
            })?;
        let deferidas = self
            .inscricoes
            .buscar_por_filtros(&[
                FiltroInscricao::Curso(curso.id()),
                FiltroInscricao::Status(StatusInscricao::Deferido),
            ])?
            .len();
        if deferidas >= curso.capacidade() as usize {
            return Err(SkillUpError::conflict("Curso sem vagas disponíveis"));
        }

        let inscricao = self.alterar(id, |i| {
            i.deferir();
            Ok(())
        })?;
        tracing::info!("Inscrição {} deferida", id);
        Ok(inscricao)
    }

    pub fn indeferir(&self, id: u64) -> Result<InscricaoCurso> {
        let inscricao = self.alterar(id, |i| {
            i.indeferir();
            Ok(())
        })?;
        tracing::info!("Inscrição {} indeferida", id);
        Ok(inscricao)
    }

    pub fn listar_por_curso(&self, id_curso: u64) -> Result<Vec<InscricaoCurso>> {
        self.inscricoes
            .buscar_por_filtros(&[FiltroInscricao::Curso(id_curso)])
    }

    pub fn listar_por_aluno(&self, id_aluno: u64) -> Result<Vec<InscricaoCurso>> {
        self.inscricoes
            .buscar_por_filtros(&[FiltroInscricao::Aluno(id_aluno)])
    }
}

impl<S: Storage> CrudService<InscricaoCurso> for InscricaoCursoService<S> {
    type Repo = JsonRepository<S, InscricaoCurso>;

    fn repositorio(&self) -> &Self::Repo {
        &self.inscricoes
    }
}
