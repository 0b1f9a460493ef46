use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Repositorio, Storage};
use crate::domain::{
    Contrato, Empresa, EntidadePublicadora, FiltroVaga, Modalidade, TipoVaga, Vaga,
};
use crate::utils::error::{Result, SkillUpError};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NovaVaga {
    pub titulo: String,
    pub descricao: String,
    pub area: String,
    pub modalidade: Modalidade,
    pub tipo: TipoVaga,
    pub contrato: Contrato,
    pub prazo_inscricao: Option<NaiveDate>,
    pub requisitos: Vec<String>,
    pub id_empresa: Option<u64>,
}

pub struct VagaService<S: Storage> {
    vagas: JsonRepository<S, Vaga>,
    empresas: JsonRepository<S, Empresa>,
}

impl<S: Storage + Clone> VagaService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            vagas: JsonRepository::from_config(storage.clone(), config),
            empresas: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> VagaService<S> {
    pub fn cadastrar(&self, dados: NovaVaga) -> Result<Vaga> {
        let vagas = self.vagas.listar()?;

        if let Some(id_empresa) = dados.id_empresa {
            self.validar_publicacao(&vagas, id_empresa)?;
        }

        let mut vaga = Vaga::new(
            proximo_id(&vagas),
            dados.titulo,
            dados.descricao,
            dados.area,
            dados.modalidade,
            dados.tipo,
            dados.contrato,
        )?
        .com_prazo_inscricao(dados.prazo_inscricao)
        .com_empresa(dados.id_empresa)?;
        for requisito in &dados.requisitos {
            vaga.adicionar_requisito(requisito)?;
        }

        self.vagas.salvar(&vaga)?;
        tracing::info!(
            "Vaga {} cadastrada: {} ({})",
            vaga.id(),
            vaga.titulo(),
            vaga.contrato().label()
        );
        Ok(vaga)
    }

    /// Reativa a vaga, respeitando o limite de publicações da empresa.
    pub fn publicar(&self, id: u64) -> Result<Vaga> {
        let vaga = self.buscar_por_id(id)?;
        if vaga.ativa() {
            return Ok(vaga);
        }
        if let Some(id_empresa) = vaga.id_empresa() {
            self.validar_publicacao(&self.vagas.listar()?, id_empresa)?;
        }

        let vaga = self.alterar(id, |v| {
            v.publicar();
            Ok(())
        })?;
        tracing::info!("Vaga {} publicada", id);
        Ok(vaga)
    }

    pub fn pausar(&self, id: u64) -> Result<Vaga> {
        let vaga = self.alterar(id, |v| {
            v.pausar();
            Ok(())
        })?;
        tracing::info!("Vaga {} pausada", id);
        Ok(vaga)
    }

    pub fn listar_ativas(&self) -> Result<Vec<Vaga>> {
        self.vagas.buscar_por_filtros(&[FiltroVaga::Ativa(true)])
    }

    pub fn listar_por_empresa(&self, id_empresa: u64) -> Result<Vec<Vaga>> {
        self.vagas.buscar_por_filtros(&[FiltroVaga::Empresa(id_empresa)])
    }

    pub fn calcular_custo_contratacao(&self, id: u64) -> Result<f64> {
        Ok(self.buscar_por_id(id)?.calcular_custo_contratacao())
    }

    pub fn editar(&self, id: u64, titulo: Option<&str>, descricao: Option<&str>) -> Result<Vaga> {
        self.alterar(id, |v| v.editar(titulo, descricao))
    }

    pub fn adicionar_requisito(&self, id: u64, requisito: &str) -> Result<Vaga> {
        self.alterar(id, |v| v.adicionar_requisito(requisito))
    }

    fn validar_publicacao(&self, vagas: &[Vaga], id_empresa: u64) -> Result<()> {
        let empresa = self
            .empresas
            .buscar_por_id(id_empresa)?
            .ok_or(SkillUpError::NotFound {
                entidade: "empresa",
                id: id_empresa,
            })?;

        let ativas = vagas
            .iter()
            .filter(|v| v.ativa() && v.id_empresa() == Some(id_empresa))
            .count();

        EntidadePublicadora::from(empresa)
            .validar_publicacao(ativas)
            .inspect_err(|e| tracing::warn!("Publicação recusada para empresa {}: {}", id_empresa, e))
    }
}

impl<S: Storage> CrudService<Vaga> for VagaService<S> {
    type Repo = JsonRepository<S, Vaga>;

    fn repositorio(&self) -> &Self::Repo {
        &self.vagas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::config::toml_config::TomlConfig;
    use crate::domain::Porte;
    use tempfile::TempDir;

    fn nova_vaga(id_empresa: Option<u64>) -> NovaVaga {
        NovaVaga {
            titulo: "Dev Rust".to_string(),
            descricao: "Backend".to_string(),
            area: "TI".to_string(),
            modalidade: Modalidade::Remoto,
            tipo: TipoVaga::Emprego,
            contrato: Contrato::Clt {
                salario_base: 1000.0,
            },
            prazo_inscricao: None,
            requisitos: vec!["Rust".to_string()],
            id_empresa,
        }
    }

    #[test]
    fn test_limite_de_publicacao_por_porte() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let config = TomlConfig::default();
        let empresas: JsonRepository<_, Empresa> = JsonRepository::from_config(storage.clone(), &config);
        empresas
            .salvar(&Empresa::new(1, "Acme", "12345678000199", Porte::Pequeno).unwrap())
            .unwrap();
        let service = VagaService::new(storage, &config);

        for _ in 0..5 {
            service.cadastrar(nova_vaga(Some(1))).unwrap();
        }
        let err = service.cadastrar(nova_vaga(Some(1))).unwrap_err();
        assert!(matches!(err, SkillUpError::Permission { .. }));

        service.pausar(1).unwrap();
        let vaga = service.cadastrar(nova_vaga(Some(1))).unwrap();
        assert_eq!(vaga.id(), 6);
        assert!(matches!(service.publicar(1), Err(SkillUpError::Permission { .. })));
    }

    #[test]
    fn test_empresa_inexistente() {
        let dir = TempDir::new().unwrap();
        let service = VagaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());
        let err = service.cadastrar(nova_vaga(Some(42))).unwrap_err();
        assert!(matches!(err, SkillUpError::NotFound { id: 42, .. }));
        assert_eq!(service.contar_total().unwrap(), 0);
    }

    #[test]
    fn test_custo_e_listar_ativas() {
        let dir = TempDir::new().unwrap();
        let service = VagaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());
        let vaga = service.cadastrar(nova_vaga(None)).unwrap();
        assert_eq!(service.calcular_custo_contratacao(vaga.id()).unwrap(), 1800.0);

        service.pausar(vaga.id()).unwrap();
        assert!(service.listar_ativas().unwrap().is_empty());
        assert!(service.publicar(vaga.id()).unwrap().ativa());
    }
}
