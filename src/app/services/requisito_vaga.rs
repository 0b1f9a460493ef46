use super::competencia_nivelada::garantir_existe;
use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::{Competencia, FiltroRequisito, Nivel, RequisitoVaga, Vaga};
use crate::utils::error::{Result, SkillUpError};

pub struct RequisitoVagaService<S: Storage> {
    requisitos: JsonRepository<S, RequisitoVaga>,
    vagas: JsonRepository<S, Vaga>,
    competencias: JsonRepository<S, Competencia>,
}

impl<S: Storage + Clone> RequisitoVagaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            requisitos: JsonRepository::from_config(storage.clone(), config),
            vagas: JsonRepository::from_config(storage.clone(), config),
            competencias: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> RequisitoVagaService<S> {
    pub fn registrar(
        &self,
        id_vaga: u64,
        id_competencia: u64,
        nivel_minimo: Nivel,
        obrigatorio: bool,
    ) -> Result<RequisitoVaga> {
        garantir_existe(&self.vagas, id_vaga)?;
        garantir_existe(&self.competencias, id_competencia)?;

        let requisitos = self.requisitos.listar()?;
        if requisitos
            .iter()
            .any(|r| r.id_vaga() == id_vaga && r.id_competencia() == id_competencia)
        {
            return Err(SkillUpError::conflict("Vaga já exige esta competência"));
        }

        let requisito = RequisitoVaga::new(
            proximo_id(&requisitos),
            id_vaga,
            id_competencia,
            nivel_minimo,
            obrigatorio,
        )?;
        self.requisitos.salvar(&requisito)?;

        tracing::info!(
            "Requisito {} registrado: vaga {} exige competência {} ({})",
            requisito.id(),
            id_vaga,
            id_competencia,
            nivel_minimo
        );
        Ok(requisito)
    }

    pub fn atualizar_nivel(&self, id: u64, nivel: &str) -> Result<RequisitoVaga> {
        self.alterar(id, |r| r.atualizar_nivel(nivel))
    }

    pub fn tornar_opcional(&self, id: u64) -> Result<RequisitoVaga> {
        self.alterar(id, |r| {
            r.tornar_opcional();
            Ok(())
        })
    }

    pub fn tornar_obrigatorio(&self, id: u64) -> Result<RequisitoVaga> {
        self.alterar(id, |r| {
            r.tornar_obrigatorio();
            Ok(())
        })
    }

    pub fn listar_por_vaga(&self, id_vaga: u64) -> Result<Vec<RequisitoVaga>> {
        self.requisitos
            .buscar_por_filtros(&[FiltroRequisito::Vaga(id_vaga)])
    }

    pub fn listar_por_competencia(&self, id_competencia: u64) -> Result<Vec<RequisitoVaga>> {
        self.requisitos
            .buscar_por_filtros(&[FiltroRequisito::Competencia(id_competencia)])
    }

    /// Remove todos os requisitos da vaga; devolve quantos foram removidos.
    pub fn remover_por_vaga(&self, id_vaga: u64) -> Result<usize> {
        let removidos = self.listar_por_vaga(id_vaga)?;
        for requisito in &removidos {
            self.requisitos.deletar(requisito.id())?;
        }
        tracing::info!("{} requisito(s) removido(s) da vaga {}", removidos.len(), id_vaga);
        Ok(removidos.len())
    }
}

impl<S: Storage> CrudService<RequisitoVaga> for RequisitoVagaService<S> {
    type Repo = JsonRepository<S, RequisitoVaga>;

    fn repositorio(&self) -> &Self::Repo {
        &self.requisitos
    }
}
