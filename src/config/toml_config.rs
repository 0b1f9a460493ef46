use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SkillUpError};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DATA_DIR_PADRAO: &str = "data";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "data_dir_padrao")]
    pub data_dir: PathBuf,
    /// Sobrescreve o arquivo de uma entidade: `vaga = "vagas_2024.json"`.
    #[serde(default)]
    pub arquivos: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    /// Logs em JSON em vez do formato compacto.
    #[serde(default)]
    pub json: bool,
}

fn data_dir_padrao() -> PathBuf {
    PathBuf::from(DATA_DIR_PADRAO)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: data_dir_padrao(),
            arquivos: HashMap::new(),
        }
    }
}

impl TomlConfig {
    /// Carrega a configuração de um arquivo TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SkillUpError::Config {
            mensagem: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SkillUpError::Config {
            mensagem: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitui `${VAR}` pelo valor da variável de ambiente; variáveis
    /// ausentes ficam como estão.
    fn substitute_env_vars(content: &str) -> String {
        static RE: OnceLock<regex::Regex> = OnceLock::new();
        let re = RE.get_or_init(|| regex::Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let data_dir = self.storage.data_dir.to_string_lossy();
        validate_path("storage.data_dir", &data_dir)?;

        for (entidade, arquivo) in &self.storage.arquivos {
            let campo = format!("storage.arquivos.{}", entidade);
            validate_path(&campo, arquivo)?;
            validate_file_extension(&campo, arquivo, "json")?;
        }

        Ok(())
    }

    /// `--data-dir` tem precedência sobre o valor do arquivo.
    pub fn com_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.storage.data_dir = dir;
        }
        self
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose
    }

    pub fn log_json(&self) -> bool {
        self.logging.json
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &Path {
        &self.storage.data_dir
    }

    fn arquivo(&self, entidade: &str) -> Option<&str> {
        self.storage.arquivos.get(entidade).map(String::as_str)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
data_dir = "/var/lib/skillup"

[storage.arquivos]
vaga = "vagas.json"

[logging]
verbose = true
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_dir(), Path::new("/var/lib/skillup"));
        assert_eq!(config.arquivo("vaga"), Some("vagas.json"));
        assert_eq!(config.arquivo("curso"), None);
        assert!(config.verbose());
        assert!(config.log_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.data_dir(), Path::new(DATA_DIR_PADRAO));
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SKILLUP_TEST_DATA_DIR", "/tmp/skillup-env");

        let toml_content = r#"
[storage]
data_dir = "${SKILLUP_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_dir(), Path::new("/tmp/skillup-env"));

        std::env::remove_var("SKILLUP_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation_rejects_non_json_file() {
        let toml_content = r#"
[storage.arquivos]
curso = "cursos.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(config.validate(), Err(SkillUpError::Config { .. })));
    }

    #[test]
    fn test_cli_data_dir_wins() {
        let config = TomlConfig::from_toml_str("[storage]\ndata_dir = \"toml\"\n")
            .unwrap()
            .com_data_dir(Some(PathBuf::from("cli")));
        assert_eq!(config.data_dir(), Path::new("cli"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"./dados\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_dir(), Path::new("./dados"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[storage\n"),
            Err(SkillUpError::Config { .. })
        ));
    }
}
