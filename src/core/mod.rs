pub mod repository;

pub use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
pub use crate::utils::error::Result;
pub use repository::JsonRepository;
