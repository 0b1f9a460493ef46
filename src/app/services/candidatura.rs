use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::{Candidato, Candidatura, FiltroCandidatura, Vaga};
use crate::utils::error::{Result, SkillUpError};

pub struct CandidaturaService<S: Storage> {
    candidaturas: JsonRepository<S, Candidatura>,
    candidatos: JsonRepository<S, Candidato>,
    vagas: JsonRepository<S, Vaga>,
}

impl<S: Storage + Clone> CandidaturaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            candidaturas: JsonRepository::from_config(storage.clone(), config),
            candidatos: JsonRepository::from_config(storage.clone(), config),
            vagas: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> CandidaturaService<S> {
    pub fn candidatar(&self, id_candidato: u64, id_vaga: u64) -> Result<Candidatura> {
        if self.candidatos.buscar_por_id(id_candidato)?.is_none() {
            return Err(SkillUpError::NotFound {
                entidade: "candidato",
                id: id_candidato,
            });
        }

        let vaga = self
            .vagas
            .buscar_por_id(id_vaga)?
            .ok_or(SkillUpError::NotFound {
                entidade: "vaga",
                id: id_vaga,
            })?;
        if !vaga.ativa() {
            tracing::warn!("Candidatura recusada: vaga {} pausada", id_vaga);
            return Err(SkillUpError::invalid_transition(
                "Vaga não está aberta para candidaturas",
            ));
        }

        let candidaturas = self.candidaturas.listar()?;
        let duplicada = candidaturas.iter().any(|c| {
            c.id_candidato() == id_candidato && c.id_vaga() == id_vaga && c.status().em_aberto()
        });
        if duplicada {
            tracing::warn!(
                "Candidatura duplicada: candidato {} na vaga {}",
                id_candidato,
                id_vaga
            );
            return Err(SkillUpError::conflict(
                "Candidato já possui candidatura em aberto para esta vaga",
            ));
        }

        let candidatura = Candidatura::new(proximo_id(&candidaturas), id_vaga, id_candidato)?;
        self.candidaturas.salvar(&candidatura)?;

        tracing::info!(
            "Candidatura {} registrada: candidato {} -> vaga {}",
            candidatura.id(),
            id_candidato,
            id_vaga
        );
        Ok(candidatura)
    }

    pub fn analisar(&self, id: u64) -> Result<Candidatura> {
        self.transicionar(id, |c| {
            c.analisar();
            Ok(())
        })
    }

    pub fn aprovar(&self, id: u64) -> Result<Candidatura> {
        self.transicionar(id, |c| {
            c.aprovar();
            Ok(())
        })
    }

    pub fn reprovar(&self, id: u64) -> Result<Candidatura> {
        self.transicionar(id, |c| {
            c.reprovar();
            Ok(())
        })
    }

    pub fn cancelar(&self, id: u64) -> Result<Candidatura> {
        self.transicionar(id, Candidatura::cancelar)
    }

    pub fn listar_por_candidato(&self, id_candidato: u64) -> Result<Vec<Candidatura>> {
        self.candidaturas
            .buscar_por_filtros(&[FiltroCandidatura::Candidato(id_candidato)])
    }

    pub fn listar_por_vaga(&self, id_vaga: u64) -> Result<Vec<Candidatura>> {
        self.candidaturas
            .buscar_por_filtros(&[FiltroCandidatura::Vaga(id_vaga)])
    }

    fn transicionar<F>(&self, id: u64, transicao: F) -> Result<Candidatura>
    where
        F: FnOnce(&mut Candidatura) -> Result<()>,
    {
        let candidatura = self
            .alterar(id, transicao)
            .inspect_err(|e| tracing::warn!("Candidatura {}: {}", id, e))?;
        tracing::info!("Candidatura {} agora está {}", id, candidatura.status());
        Ok(candidatura)
    }
}

impl<S: Storage> CrudService<Candidatura> for CandidaturaService<S> {
    type Repo = JsonRepository<S, Candidatura>;

    fn repositorio(&self) -> &Self::Repo {
        &self.candidaturas
    }
}
