pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, TomlConfig};

pub use app::services::CrudService;
pub use core::repository::JsonRepository;
pub use utils::error::{Result, SkillUpError};
