use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::InstituicaoEnsino;
use crate::utils::error::{Result, SkillUpError};

/// Dados de entrada para o cadastro; o id é atribuído pelo serviço.
#[derive(Debug, Clone)]
pub struct NovaInstituicao {
    pub razao_social: String,
    pub nome_fantasia: String,
    pub cnpj: String,
    pub registro_educacional: String,
    pub tipo: String,
    pub modalidades: Vec<String>,
    pub credenciada: bool,
}

pub struct InstituicaoEnsinoService<S: Storage> {
    repo: JsonRepository<S, InstituicaoEnsino>,
}

impl<S: Storage> InstituicaoEnsinoService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            repo: JsonRepository::from_config(storage, config),
        }
    }

    pub fn cadastrar(&self, dados: NovaInstituicao) -> Result<InstituicaoEnsino> {
        let instituicoes = self.repo.listar()?;

        if instituicoes.iter().any(|i| i.cnpj() == dados.cnpj) {
            tracing::warn!("Cadastro recusado: CNPJ {} já utilizado", dados.cnpj);
            return Err(SkillUpError::conflict(
                "Já existe instituição de ensino com este CNPJ",
            ));
        }

        let instituicao = InstituicaoEnsino::new(
            proximo_id(&instituicoes),
            dados.razao_social,
            dados.nome_fantasia,
            dados.cnpj,
            dados.registro_educacional,
            dados.tipo,
            dados.modalidades,
            dados.credenciada,
        )?;
        self.repo.salvar(&instituicao)?;

        tracing::info!(
            "Instituição {} cadastrada: {}",
            instituicao.id(),
            instituicao.nome_fantasia()
        );
        Ok(instituicao)
    }

    pub fn credenciar(&self, id: u64) -> Result<InstituicaoEnsino> {
        let instituicao = self.alterar(id, |i| {
            i.credenciar();
            Ok(())
        })?;
        tracing::info!("Instituição {} credenciada", id);
        Ok(instituicao)
    }

    pub fn descredenciar(&self, id: u64) -> Result<InstituicaoEnsino> {
        let instituicao = self.alterar(id, |i| {
            i.descredenciar();
            Ok(())
        })?;
        tracing::info!("Instituição {} descredenciada", id);
        Ok(instituicao)
    }
}

impl<S: Storage> CrudService<InstituicaoEnsino> for InstituicaoEnsinoService<S> {
    type Repo = JsonRepository<S, InstituicaoEnsino>;

    fn repositorio(&self) -> &Self::Repo {
        &self.repo
    }
}
