pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::TomlConfig;
    use crate::app::cli::Comando;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_file_extension, validate_path, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "skillup")]
    #[command(about = "Marketplace de vagas e cursos SkillUp", version)]
    pub struct CliConfig {
        /// Arquivo TOML de configuração
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        /// Diretório dos arquivos JSON (sobrepõe o TOML)
        #[arg(long, global = true)]
        pub data_dir: Option<PathBuf>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[command(subcommand)]
        pub comando: Comando,
    }

    impl CliConfig {
        /// Junta arquivo TOML (se houver) e flags; flags vencem.
        pub fn resolver(&self) -> Result<TomlConfig> {
            let config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };
            let config = config.com_data_dir(self.data_dir.clone());
            config.validate()?;
            Ok(config)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                let path = path.to_string_lossy();
                validate_path("config", &path)?;
                validate_file_extension("config", &path, "toml")?;
            }
            if let Some(dir) = &self.data_dir {
                validate_path("data_dir", &dir.to_string_lossy())?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::ports::ConfigProvider;
        use std::path::Path;

        #[test]
        fn test_parse_global_flags_after_subcommand() {
            let cli = CliConfig::try_parse_from([
                "skillup",
                "candidato",
                "listar",
                "--data-dir",
                "/tmp/dados",
                "-v",
            ])
            .unwrap();

            assert!(cli.verbose);
            assert!(cli.validate().is_ok());
            let config = cli.resolver().unwrap();
            assert_eq!(config.data_dir(), Path::new("/tmp/dados"));
        }

        #[test]
        fn test_config_must_be_toml() {
            let cli =
                CliConfig::try_parse_from(["skillup", "--config", "conf.yaml", "vaga", "ativas"])
                    .unwrap();
            assert!(cli.validate().is_err());
        }

        #[test]
        fn test_filtrar_requires_pairs() {
            assert!(CliConfig::try_parse_from(["skillup", "curso", "filtrar"]).is_err());
            assert!(
                CliConfig::try_parse_from(["skillup", "curso", "filtrar", "area=TI"]).is_ok()
            );
        }
    }
}
