use crate::utils::error::{Result, SkillUpError};
use regex::Regex;
use std::sync::OnceLock;

/// Validação completa de um objeto já montado (entidade ou configuração).
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Validador de um único valor. Não altera nada, só rejeita.
pub trait Validador<T: ?Sized> {
    fn validar(&self, campo: &str, valor: &T) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdValidador;

impl Validador<u64> for IdValidador {
    fn validar(&self, campo: &str, valor: &u64) -> Result<()> {
        if *valor == 0 {
            return Err(SkillUpError::validation(campo, "ID deve ser inteiro positivo."));
        }
        Ok(())
    }
}

/// Texto não vazio (após trim).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextoValidador;

impl Validador<str> for TextoValidador {
    fn validar(&self, campo: &str, valor: &str) -> Result<()> {
        if valor.trim().is_empty() {
            return Err(SkillUpError::validation(campo, "Texto inválido."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TamanhoMaximoValidador(pub usize);

impl Validador<str> for TamanhoMaximoValidador {
    fn validar(&self, campo: &str, valor: &str) -> Result<()> {
        if valor.chars().count() > self.0 {
            return Err(SkillUpError::validation(
                campo,
                format!("Deve ter no máximo {} caracteres", self.0),
            ));
        }
        Ok(())
    }
}

fn somente_digitos(valor: &str, tamanho: usize) -> bool {
    valor.len() == tamanho && valor.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CpfValidador;

impl Validador<str> for CpfValidador {
    fn validar(&self, campo: &str, valor: &str) -> Result<()> {
        if !somente_digitos(valor, 11) {
            return Err(SkillUpError::validation(campo, "CPF inválido."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjValidador;

impl Validador<str> for CnpjValidador {
    fn validar(&self, campo: &str, valor: &str) -> Result<()> {
        if !somente_digitos(valor, 14) {
            return Err(SkillUpError::validation(campo, "CNPJ inválido."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidador;

impl EmailValidador {
    pub const EMAIL_REGEX: &'static str = r"^[\w.-]+@[\w.-]+\.\w+$";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"))
    }
}

impl Validador<str> for EmailValidador {
    fn validar(&self, campo: &str, valor: &str) -> Result<()> {
        if !Self::regex().is_match(valor) {
            return Err(SkillUpError::validation(campo, "Email inválido."));
        }
        Ok(())
    }
}

/// Lista com ao menos um item, todos não vazios e sem repetição.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreasValidador;

impl Validador<[String]> for AreasValidador {
    fn validar(&self, campo: &str, valor: &[String]) -> Result<()> {
        if valor.is_empty() {
            return Err(SkillUpError::validation(campo, "Informe ao menos uma área."));
        }
        for (i, area) in valor.iter().enumerate() {
            TextoValidador.validar(campo, area.as_str()).map_err(|_| {
                SkillUpError::validation(campo, "Área inválida.")
            })?;
            if valor[..i].contains(area) {
                return Err(SkillUpError::validation(campo, "Área duplicada."));
            }
        }
        Ok(())
    }
}

/// Números estritamente positivos (salário, carga horária, capacidade...).
#[derive(Debug, Clone, Copy, Default)]
pub struct PositivoValidador;

impl Validador<f64> for PositivoValidador {
    fn validar(&self, campo: &str, valor: &f64) -> Result<()> {
        if !valor.is_finite() || *valor <= 0.0 {
            return Err(SkillUpError::validation(campo, "Valor deve ser positivo."));
        }
        Ok(())
    }
}

impl Validador<u32> for PositivoValidador {
    fn validar(&self, campo: &str, valor: &u32) -> Result<()> {
        if *valor == 0 {
            return Err(SkillUpError::validation(campo, "Valor deve ser positivo."));
        }
        Ok(())
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkillUpError::Config {
            mensagem: format!("{}: Path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(SkillUpError::Config {
            mensagem: format!("{}: Path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extension: &str) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if extension == allowed_extension => Ok(()),
        Some(extension) => Err(SkillUpError::Config {
            mensagem: format!(
                "{}: Unsupported file extension '{}' in '{}'. Expected: {}",
                field_name, extension, file, allowed_extension
            ),
        }),
        None => Err(SkillUpError::Config {
            mensagem: format!(
                "{}: File '{}' has no extension or invalid filename",
                field_name, file
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_validador() {
        assert!(IdValidador.validar("id", &1).is_ok());
        assert!(IdValidador.validar("id", &0).is_err());
    }

    #[test]
    fn test_texto_validador() {
        assert!(TextoValidador.validar("nome", "João").is_ok());
        assert!(TextoValidador.validar("nome", "").is_err());
        assert!(TextoValidador.validar("nome", "   ").is_err());
    }

    #[test]
    fn test_cpf_cnpj_validador() {
        assert!(CpfValidador.validar("cpf", "12345678901").is_ok());
        assert!(CpfValidador.validar("cpf", "1234567890").is_err());
        assert!(CpfValidador.validar("cpf", "1234567890a").is_err());
        assert!(CnpjValidador.validar("cnpj", "12345678000199").is_ok());
        assert!(CnpjValidador.validar("cnpj", "12.345.678/0001-99").is_err());
    }

    #[test]
    fn test_email_validador() {
        assert!(EmailValidador.validar("email", "joao@x.com").is_ok());
        assert!(EmailValidador.validar("email", "joao.silva@empresa.com.br").is_ok());
        assert!(EmailValidador.validar("email", "joao@x").is_err());
        assert!(EmailValidador.validar("email", "joao.x.com").is_err());
    }

    #[test]
    fn test_areas_validador() {
        assert!(AreasValidador.validar("areas_interesse", &["TI".to_string()][..]).is_ok());
        let vazio: Vec<String> = Vec::new();
        assert!(AreasValidador.validar("areas_interesse", vazio.as_slice()).is_err());
        assert!(AreasValidador
            .validar("areas_interesse", &["TI".to_string(), " ".to_string()][..])
            .is_err());
        let err = AreasValidador
            .validar("areas_interesse", &["TI".to_string(), "TI".to_string()][..])
            .unwrap_err();
        assert_eq!(err.user_friendly_message(), "Área duplicada.");
    }

    #[test]
    fn test_positivo_validador() {
        assert!(PositivoValidador.validar("salario_base", &1000.0_f64).is_ok());
        assert!(PositivoValidador.validar("salario_base", &0.0_f64).is_err());
        assert!(PositivoValidador.validar("salario_base", &f64::NAN).is_err());
        assert!(PositivoValidador.validar("capacidade", &0u32).is_err());
    }

    #[test]
    fn test_tamanho_maximo() {
        let validador = TamanhoMaximoValidador(3);
        assert!(validador.validar("nome", "ábc").is_ok());
        assert!(validador.validar("nome", "abcd").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("arquivos", "candidato.json", "json").is_ok());
        assert!(validate_file_extension("arquivos", "candidato.csv", "json").is_err());
        assert!(validate_file_extension("arquivos", "candidato", "json").is_err());
    }
}
