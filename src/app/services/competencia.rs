use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
use crate::domain::Competencia;
use crate::utils::error::{Result, SkillUpError};

pub struct CompetenciaService<S: Storage> {
    repo: JsonRepository<S, Competencia>,
}

impl<S: Storage> CompetenciaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            repo: JsonRepository::from_config(storage, config),
        }
    }

    pub fn cadastrar(&self, nome: &str, descricao: &str) -> Result<Competencia> {
        let competencias = self.repo.listar()?;
        garantir_nome_livre(&competencias, nome, None)?;

        let competencia = Competencia::new(proximo_id(&competencias), nome.trim(), descricao)?;
        self.repo.salvar(&competencia)?;

        tracing::info!("Competência {} cadastrada: {}", competencia.id(), competencia.nome());
        Ok(competencia)
    }
}

fn garantir_nome_livre(competencias: &[Competencia], nome: &str, ignorar: Option<u64>) -> Result<()> {
    let nome = nome.trim().to_lowercase();
    let repetida = competencias
        .iter()
        .filter(|c| Some(c.id()) != ignorar)
        .any(|c| c.nome().to_lowercase() == nome);

    if repetida {
        tracing::warn!("Competência '{}' já cadastrada", nome);
        return Err(SkillUpError::conflict("Já existe competência com este nome"));
    }
    Ok(())
}

impl<S: Storage> CrudService<Competencia> for CompetenciaService<S> {
    type Repo = JsonRepository<S, Competencia>;

    fn repositorio(&self) -> &Self::Repo {
        &self.repo
    }

    fn atualizar(&self, id: u64, campo: &str, valor: &str) -> Result<Competencia> {
        if campo == "nome" {
            garantir_nome_livre(&self.repo.listar()?, valor, Some(id))?;
        }
        self.alterar(id, |competencia| competencia.atualizar_campo(campo, valor))
    }
}
