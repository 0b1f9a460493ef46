use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
use crate::utils::error::{Result, SkillUpError};
use std::marker::PhantomData;

/// Repositório genérico sobre um arquivo JSON contendo um array de objetos.
///
/// Cada operação relê o arquivo inteiro e, quando altera algo, regrava o
/// array completo. Arquivo ausente equivale a lista vazia; arquivo
/// corrompido é erro.
pub struct JsonRepository<S: Storage, E: Entidade> {
    storage: S,
    arquivo: String,
    _entidade: PhantomData<fn() -> E>,
}

impl<S: Storage, E: Entidade> JsonRepository<S, E> {
    pub fn new(storage: S, arquivo: impl Into<String>) -> Self {
        Self {
            storage,
            arquivo: arquivo.into(),
            _entidade: PhantomData,
        }
    }

    /// Usa o arquivo configurado para a entidade, ou `E::ARQUIVO`.
    pub fn from_config<C: ConfigProvider + ?Sized>(storage: S, config: &C) -> Self {
        Self::new(storage, config.arquivo(E::NOME).unwrap_or(E::ARQUIVO))
    }

    pub fn arquivo(&self) -> &str {
        &self.arquivo
    }

    fn carregar(&self) -> Result<Vec<E>> {
        if !self.storage.exists(&self.arquivo) {
            tracing::debug!("{} ausente, iniciando lista vazia", self.arquivo);
            return Ok(Vec::new());
        }

        let bytes = self.storage.read_file(&self.arquivo)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let brutos: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;
        let registros = brutos
            .into_iter()
            .map(E::from_dict)
            .collect::<Result<Vec<E>>>()?;

        tracing::debug!("Carregados {} registro(s) de {}", registros.len(), self.arquivo);
        Ok(registros)
    }

    fn gravar(&self, registros: &[E]) -> Result<()> {
        let dados = registros
            .iter()
            .map(|e| e.to_dict())
            .collect::<Result<Vec<_>>>()?;
        let json = serde_json::to_vec_pretty(&dados)?;
        self.storage.write_file(&self.arquivo, &json)?;

        tracing::debug!("Gravados {} registro(s) em {}", registros.len(), self.arquivo);
        Ok(())
    }

    fn nao_encontrado(id: u64) -> SkillUpError {
        SkillUpError::NotFound {
            entidade: E::NOME,
            id,
        }
    }
}

impl<S: Storage, E: Entidade> Repositorio<E> for JsonRepository<S, E> {
    fn salvar(&self, entidade: &E) -> Result<()> {
        let mut registros = self.carregar()?;
        if registros.iter().any(|e| e.id() == entidade.id()) {
            return Err(SkillUpError::conflict(format!(
                "Já existe {} com id {}",
                E::NOME,
                entidade.id()
            )));
        }
        registros.push(entidade.clone());
        self.gravar(&registros)
    }

    fn listar(&self) -> Result<Vec<E>> {
        self.carregar()
    }

    fn atualizar(&self, entidade: &E) -> Result<()> {
        let mut registros = self.carregar()?;
        let atual = registros
            .iter_mut()
            .find(|e| e.id() == entidade.id())
            .ok_or_else(|| Self::nao_encontrado(entidade.id()))?;
        *atual = entidade.clone();
        self.gravar(&registros)
    }

    fn deletar(&self, id: u64) -> Result<()> {
        let mut registros = self.carregar()?;
        let antes = registros.len();
        registros.retain(|e| e.id() != id);
        if registros.len() == antes {
            return Err(Self::nao_encontrado(id));
        }
        self.gravar(&registros)
    }
}
