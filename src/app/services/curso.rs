use super::{proximo_id, CrudService};
use crate::core::repository::JsonRepository;
use crate::domain::ports::{ConfigProvider, Entidade, Repositorio, Storage};
use crate::domain::{
    Curso, EntidadePublicadora, FiltroCurso, FiltroInscricao, FormatoCurso, InscricaoCurso,
    InstituicaoEnsino, StatusInscricao,
};
use crate::utils::error::{Result, SkillUpError};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NovoCurso {
    pub nome: String,
    pub area: String,
    pub carga_horaria: u32,
    pub capacidade: u32,
    pub formato: FormatoCurso,
    pub prazo_inscricao: Option<NaiveDate>,
    pub id_instituicao: Option<u64>,
}

pub struct CursoService<S: Storage> {
    cursos: JsonRepository<S, Curso>,
    instituicoes: JsonRepository<S, InstituicaoEnsino>,
    inscricoes: JsonRepository<S, InscricaoCurso>,
}

impl<S: Storage + Clone> CursoService<S> {
    pub fn new(storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            cursos: JsonRepository::from_config(storage.clone(), config),
            instituicoes: JsonRepository::from_config(storage.clone(), config),
            inscricoes: JsonRepository::from_config(storage, config),
        }
    }
}

impl<S: Storage> CursoService<S> {
    pub fn cadastrar(&self, dados: NovoCurso) -> Result<Curso> {
        if let Some(id_instituicao) = dados.id_instituicao {
            self.validar_publicacao(id_instituicao)?;
        }

        let cursos = self.cursos.listar()?;
        let curso = Curso::new(
            proximo_id(&cursos),
            dados.nome,
            dados.area,
            dados.carga_horaria,
            dados.capacidade,
            dados.formato,
        )?
        .com_prazo_inscricao(dados.prazo_inscricao)
        .com_instituicao(dados.id_instituicao)?;

        self.cursos.salvar(&curso)?;
        tracing::info!(
            "Curso {} cadastrado: {} ({})",
            curso.id(),
            curso.nome(),
            curso.formato().label()
        );
        Ok(curso)
    }

    pub fn publicar(&self, id: u64) -> Result<Curso> {
        if let Some(id_instituicao) = self.buscar_por_id(id)?.id_instituicao() {
            self.validar_publicacao(id_instituicao)?;
        }
        let curso = self.alterar(id, |c| {
            c.publicar();
            Ok(())
        })?;
        tracing::info!("Curso {} publicado", id);
        Ok(curso)
    }

    pub fn pausar(&self, id: u64) -> Result<Curso> {
        let curso = self.alterar(id, |c| {
            c.pausar();
            Ok(())
        })?;
        tracing::info!("Curso {} pausado", id);
        Ok(curso)
    }

    pub fn listar_ativos(&self) -> Result<Vec<Curso>> {
        self.cursos.buscar_por_filtros(&[FiltroCurso::Ativo(true)])
    }

    pub fn listar_por_instituicao(&self, id_instituicao: u64) -> Result<Vec<Curso>> {
        self.cursos
            .buscar_por_filtros(&[FiltroCurso::Instituicao(id_instituicao)])
    }

    pub fn editar(
        &self,
        id: u64,
        nome: Option<&str>,
        area: Option<&str>,
        carga_horaria: Option<u32>,
        capacidade: Option<u32>,
    ) -> Result<Curso> {
        if let Some(capacidade) = capacidade {
            self.garantir_capacidade(id, capacidade)?;
        }
        self.alterar(id, |c| c.editar(nome, area, carga_horaria, capacidade))
    }

    pub fn exibir_detalhes(&self, id: u64) -> Result<String> {
        Ok(self.buscar_por_id(id)?.exibir_detalhes())
    }

    /// A capacidade nunca fica abaixo do número de inscrições deferidas.
    fn garantir_capacidade(&self, id: u64, capacidade: u32) -> Result<()> {
        let deferidas = self
            .inscricoes
            .buscar_por_filtros(&[
                FiltroInscricao::Curso(id),
                FiltroInscricao::Status(StatusInscricao::Deferido),
            ])?
            .len();
        if deferidas > capacidade as usize {
            tracing::warn!(
                "Capacidade do curso {} mantida: {} inscrições deferidas",
                id,
                deferidas
            );
            return Err(SkillUpError::conflict(format!(
                "Curso já tem {} inscrições deferidas; a capacidade não pode ser menor",
                deferidas
            )));
        }
        Ok(())
    }

    fn validar_publicacao(&self, id_instituicao: u64) -> Result<()> {
        let instituicao = self
            .instituicoes
            .buscar_por_id(id_instituicao)?
            .ok_or(SkillUpError::NotFound {
                entidade: "instituicao_ensino",
                id: id_instituicao,
            })?;

        EntidadePublicadora::from(instituicao)
            .validar_publicacao(0)
            .inspect_err(|e| {
                tracing::warn!("Publicação recusada para instituição {}: {}", id_instituicao, e)
            })
    }
}

impl<S: Storage> CrudService<Curso> for CursoService<S> {
    type Repo = JsonRepository<S, Curso>;

    fn repositorio(&self) -> &Self::Repo {
        &self.cursos
    }

    fn atualizar(&self, id: u64, campo: &str, valor: &str) -> Result<Curso> {
        if campo == "capacidade" {
            if let Ok(capacidade) = valor.trim().parse() {
                self.garantir_capacidade(id, capacidade)?;
            }
        }
        self.alterar(id, |curso| curso.atualizar_campo(campo, valor))
    }
}
