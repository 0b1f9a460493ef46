use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &Path;
    /// Arquivo configurado para a entidade (relativo a `data_dir`), quando
    /// difere do padrão.
    fn arquivo(&self, entidade: &str) -> Option<&str>;
}

/// Registro de domínio persistido como um objeto dentro de um array JSON.
///
/// A forma serializada (serde) é exatamente o `to_dict` da entidade; toda
/// desserialização passa por `Validate` antes de ser entregue ao chamador.
pub trait Entidade: Serialize + DeserializeOwned + Validate + Clone + Display {
    /// Nome usado em mensagens e como chave de configuração.
    const NOME: &'static str;
    /// Arquivo padrão dentro do diretório de dados.
    const ARQUIVO: &'static str;

    /// Predicados nomeados aceitos por `buscar_por_filtros`.
    type Filtro: std::fmt::Debug + Clone;

    fn id(&self) -> u64;

    fn corresponde(&self, filtro: &Self::Filtro) -> bool;

    /// Converte um par `campo=valor` vindo da CLI em filtro.
    fn filtro(campo: &str, valor: &str) -> Result<Self::Filtro>;

    /// Altera um campo mutável a partir de texto, revalidando o valor.
    fn atualizar_campo(&mut self, campo: &str, valor: &str) -> Result<()>;

    fn to_dict(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn from_dict(dados: serde_json::Value) -> Result<Self> {
        let entidade: Self = serde_json::from_value(dados)?;
        entidade.validate()?;
        Ok(entidade)
    }
}

/// Contrato CRUD comum a todos os repositórios.
pub trait Repositorio<E: Entidade> {
    fn salvar(&self, entidade: &E) -> Result<()>;
    fn listar(&self) -> Result<Vec<E>>;
    fn atualizar(&self, entidade: &E) -> Result<()>;
    fn deletar(&self, id: u64) -> Result<()>;

    fn buscar_por_id(&self, id: u64) -> Result<Option<E>> {
        Ok(self.listar()?.into_iter().find(|e| e.id() == id))
    }

    /// Registros que satisfazem todos os filtros; sem filtros, todos.
    fn buscar_por_filtros(&self, filtros: &[E::Filtro]) -> Result<Vec<E>> {
        Ok(self
            .listar()?
            .into_iter()
            .filter(|e| filtros.iter().all(|f| e.corresponde(f)))
            .collect())
    }
}
