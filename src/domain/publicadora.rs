use crate::domain::empresa::Empresa;
use crate::domain::instituicao_ensino::InstituicaoEnsino;
use crate::utils::error::Result;

/// Quem pode publicar oportunidades: empresas publicam vagas, instituições
/// publicam cursos. Cada variante continua persistida no seu próprio arquivo.
#[derive(Debug, Clone, PartialEq)]
pub enum EntidadePublicadora {
    Empresa(Empresa),
    Instituicao(InstituicaoEnsino),
}

impl EntidadePublicadora {
    pub fn id(&self) -> u64 {
        match self {
            Self::Empresa(empresa) => empresa.id(),
            Self::Instituicao(instituicao) => instituicao.id(),
        }
    }

    pub fn nome(&self) -> &str {
        match self {
            Self::Empresa(empresa) => empresa.nome(),
            Self::Instituicao(instituicao) => instituicao.nome_fantasia(),
        }
    }

    pub fn cnpj(&self) -> &str {
        match self {
            Self::Empresa(empresa) => empresa.cnpj(),
            Self::Instituicao(instituicao) => instituicao.cnpj(),
        }
    }

    /// `publicadas` é o número de oportunidades ativas já publicadas.
    /// Instituições ignoram o contador: só o credenciamento importa.
    pub fn validar_publicacao(&self, publicadas: usize) -> Result<()> {
        match self {
            Self::Empresa(empresa) => empresa.validar_publicacao(publicadas),
            Self::Instituicao(instituicao) => instituicao.validar_publicacao(),
        }
    }
}

impl From<Empresa> for EntidadePublicadora {
    fn from(empresa: Empresa) -> Self {
        Self::Empresa(empresa)
    }
}

impl From<InstituicaoEnsino> for EntidadePublicadora {
    fn from(instituicao: InstituicaoEnsino) -> Self {
        Self::Instituicao(instituicao)
    }
}
