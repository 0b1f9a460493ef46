use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
use crate::domain::{Empresa, FiltroEmpresa, FiltroVaga, Porte, Vaga};
use crate::utils::error::{Result, SkillUpError};

pub struct EmpresaService<S: Storage> {
    repo: JsonRepository<S, Empresa>,
    vagas: JsonRepository<S, Vaga>,
}

impl<S: Storage + Clone> EmpresaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            repo: JsonRepository::from_config(storage.clone(), config),
            vagas: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> EmpresaService<S> {
    pub fn cadastrar(&self, nome: &str, cnpj: &str, porte: Porte) -> Result<Empresa> {
        let empresas = self.repo.listar()?;

        if empresas.iter().any(|e| e.cnpj() == cnpj) {
            tracing::warn!("Cadastro recusado: CNPJ {} já utilizado", cnpj);
            return Err(SkillUpError::conflict("Já existe empresa com este CNPJ"));
        }

        let empresa = Empresa::new(proximo_id(&empresas), nome, cnpj, porte)?;
        self.repo.salvar(&empresa)?;

        tracing::info!("Empresa {} cadastrada: {}", empresa.id(), empresa.nome());
        Ok(empresa)
    }

    pub fn buscar_por_cnpj(&self, cnpj: &str) -> Result<Option<Empresa>> {
        Ok(self
            .repo
            .buscar_por_filtros(&[FiltroEmpresa::Cnpj(cnpj.to_string())])?
            .into_iter()
            .next())
    }

    /// Rebaixar o porte não pode deixar a empresa acima do novo limite.
    fn garantir_porte_comporta_vagas(&self, id: u64, porte: Porte) -> Result<()> {
        let ativas = self
            .vagas
            .buscar_por_filtros(&[FiltroVaga::Empresa(id), FiltroVaga::Ativa(true)])?
            .len();
        let limite = porte.limite_publicacoes();
        if ativas > limite {
            tracing::warn!(
                "Porte da empresa {} mantido: {} vagas ativas, limite {}",
                id,
                ativas,
                limite
            );
            return Err(SkillUpError::permission(format!(
                "Empresa com {} vagas ativas não comporta o porte {} (máximo {})",
                ativas, porte, limite
            )));
        }
        Ok(())
    }
}

impl<S: Storage> CrudService<Empresa> for EmpresaService<S> {
    type Repo = JsonRepository<S, Empresa>;

    fn repositorio(&self) -> &Self::Repo {
        &self.repo
    }

    fn atualizar(&self, id: u64, campo: &str, valor: &str) -> Result<Empresa> {
        if campo == "porte" {
            self.garantir_porte_comporta_vagas(id, valor.parse()?)?;
        }
        self.alterar(id, |empresa| empresa.atualizar_campo(campo, valor))
    }
}
