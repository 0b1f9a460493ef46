use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::{Candidato, FiltroCandidato};
use crate::utils::error::{Result, SkillUpError};

pub struct CandidatoService<S: Storage> {
    repo: JsonRepository<S, Candidato>,
}

impl<S: Storage> CandidatoService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            repo: JsonRepository::from_config(storage, config),
        }
    }

    pub fn cadastrar(
        &self,
        nome: &str,
        cpf: &str,
        email: &str,
        areas_interesse: Vec<String>,
        nivel_formacao: &str,
    ) -> Result<Candidato> {
        let candidatos = self.repo.listar()?;

        if candidatos.iter().any(|c| c.cpf() == cpf) {
            tracing::warn!("Cadastro recusado: CPF {} já utilizado", cpf);
            return Err(SkillUpError::conflict("Já existe candidato com este CPF"));
        }

        let candidato = Candidato::new(
            proximo_id(&candidatos),
            nome,
            cpf,
            email,
            areas_interesse,
            nivel_formacao,
        )?;
        self.repo.salvar(&candidato)?;

        tracing::info!("Candidato {} cadastrado: {}", candidato.id(), candidato.nome());
        Ok(candidato)
    }

    pub fn buscar_por_cpf(&self, cpf: &str) -> Result<Option<Candidato>> {
        Ok(self
            .repo
            .buscar_por_filtros(&[FiltroCandidato::Cpf(cpf.to_string())])?
            .into_iter()
            .next())
    }

    pub fn adicionar_area(&self, id: u64, area: &str) -> Result<Candidato> {
        self.alterar(id, |candidato| candidato.adicionar_area(area))
    }

    pub fn remover_area(&self, id: u64, area: &str) -> Result<Candidato> {
        self.alterar(id, |candidato| candidato.remover_area(area))
    }
}

impl<S: Storage> CrudService<Candidato> for CandidatoService<S> {
    type Repo = JsonRepository<S, Candidato>;

    fn repositorio(&self) -> &Self::Repo {
        &self.repo
    }
}
