use crate::app::services::{
    CandidatoService, CandidaturaService, CompetenciaCandidatoService, CompetenciaService,
    CrudService, CursoCompetenciaService, CursoService, EmpresaService, InscricaoCursoService,
    InstituicaoEnsinoService, NovaInstituicao, NovaVaga, NovoCurso, RequisitoVagaService,
    VagaService,
};
use crate::config::cli::LocalStorage;
use crate::domain::lista_de_texto;
use crate::domain::ports::{ConfigProvider, Entidade};
use crate::domain::{
    Candidato, Candidatura, Competencia, CompetenciaCandidato, Contrato, Curso, CursoCompetencia,
    Empresa, FormatoCurso, InscricaoCurso, InstituicaoEnsino, Nivel, RequisitoVaga, Vaga,
};
use crate::utils::error::{Result, SkillUpError};
use chrono::NaiveDate;
use clap::Subcommand;
use std::fmt::Display;

#[derive(Subcommand, Debug, Clone)]
pub enum Comando {
    /// Candidatos a vagas e alunos de cursos
    Candidato {
        #[command(subcommand)]
        acao: AcaoCandidato,
    },
    /// Empresas que publicam vagas
    Empresa {
        #[command(subcommand)]
        acao: AcaoEmpresa,
    },
    /// Instituições de ensino que publicam cursos
    Instituicao {
        #[command(subcommand)]
        acao: AcaoInstituicao,
    },
    Vaga {
        #[command(subcommand)]
        acao: AcaoVaga,
    },
    Curso {
        #[command(subcommand)]
        acao: AcaoCurso,
    },
    Competencia {
        #[command(subcommand)]
        acao: AcaoCompetencia,
    },
    /// Candidaturas de candidatos a vagas
    Candidatura {
        #[command(subcommand)]
        acao: AcaoCandidatura,
    },
    /// Competências que um candidato domina
    CompetenciaCandidato {
        #[command(subcommand)]
        acao: AcaoCompetenciaCandidato,
    },
    /// Competências conferidas por um curso
    CursoCompetencia {
        #[command(subcommand)]
        acao: AcaoCursoCompetencia,
    },
    /// Competências exigidas por uma vaga
    Requisito {
        #[command(subcommand)]
        acao: AcaoRequisito,
    },
    /// Inscrições de alunos em cursos
    Inscricao {
        #[command(subcommand)]
        acao: AcaoInscricao,
    },
}

/// Ações disponíveis para toda entidade.
#[derive(Subcommand, Debug, Clone)]
pub enum AcaoComum {
    Listar,
    Buscar {
        #[arg(long)]
        id: u64,
    },
    /// Filtra por pares campo=valor (todos precisam casar)
    Filtrar {
        #[arg(value_parser = parse_par, required = true)]
        filtros: Vec<(String, String)>,
    },
    Atualizar {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        campo: String,
        #[arg(long)]
        valor: String,
    },
    Deletar {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCandidato {
    Cadastrar {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
        /// Lista separada por vírgulas
        #[arg(long)]
        areas: String,
        #[arg(long)]
        nivel_formacao: String,
    },
    AdicionarArea {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        area: String,
    },
    RemoverArea {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        area: String,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoEmpresa {
    Cadastrar {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cnpj: String,
        /// pequeno, medio ou grande
        #[arg(long)]
        porte: String,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoInstituicao {
    Cadastrar {
        #[arg(long)]
        razao_social: String,
        #[arg(long)]
        nome_fantasia: String,
        #[arg(long)]
        cnpj: String,
        #[arg(long)]
        registro_educacional: String,
        #[arg(long)]
        tipo: String,
        #[arg(long, default_value = "")]
        modalidades: String,
        /// Cadastra sem credenciamento
        #[arg(long)]
        nao_credenciada: bool,
    },
    Credenciar {
        #[arg(long)]
        id: u64,
    },
    Descredenciar {
        #[arg(long)]
        id: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoVaga {
    Cadastrar {
        #[arg(long)]
        titulo: String,
        #[arg(long)]
        descricao: String,
        #[arg(long)]
        area: String,
        /// Presencial, Remoto ou Híbrido
        #[arg(long)]
        modalidade: String,
        /// Emprego, Estágio ou Trainee
        #[arg(long)]
        tipo: String,
        /// clt ou estagio
        #[arg(long)]
        contrato: String,
        #[arg(long)]
        salario_base: Option<f64>,
        #[arg(long)]
        bolsa_auxilio: Option<f64>,
        #[arg(long)]
        instituicao_conveniada: Option<String>,
        /// AAAA-MM-DD
        #[arg(long)]
        prazo: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        requisitos: String,
        #[arg(long)]
        empresa: Option<u64>,
    },
    Publicar {
        #[arg(long)]
        id: u64,
    },
    Pausar {
        #[arg(long)]
        id: u64,
    },
    Ativas,
    Custo {
        #[arg(long)]
        id: u64,
    },
    Editar {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        titulo: Option<String>,
        #[arg(long)]
        descricao: Option<String>,
    },
    AdicionarRequisito {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        requisito: String,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCurso {
    Cadastrar {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        area: String,
        #[arg(long)]
        carga_horaria: u32,
        #[arg(long)]
        capacidade: u32,
        /// ead ou presencial
        #[arg(long)]
        formato: String,
        #[arg(long)]
        plataforma_url: Option<String>,
        #[arg(long)]
        localidade: Option<String>,
        #[arg(long)]
        prazo: Option<NaiveDate>,
        #[arg(long)]
        instituicao: Option<u64>,
    },
    Publicar {
        #[arg(long)]
        id: u64,
    },
    Pausar {
        #[arg(long)]
        id: u64,
    },
    Ativos,
    Detalhes {
        #[arg(long)]
        id: u64,
    },
    Editar {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        carga_horaria: Option<u32>,
        #[arg(long)]
        capacidade: Option<u32>,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCompetencia {
    Cadastrar {
        #[arg(long)]
        nome: String,
        #[arg(long, default_value = "")]
        descricao: String,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCandidatura {
    Candidatar {
        #[arg(long)]
        candidato: u64,
        #[arg(long)]
        vaga: u64,
    },
    Analisar {
        #[arg(long)]
        id: u64,
    },
    Aprovar {
        #[arg(long)]
        id: u64,
    },
    Reprovar {
        #[arg(long)]
        id: u64,
    },
    Cancelar {
        #[arg(long)]
        id: u64,
    },
    PorCandidato {
        #[arg(long)]
        candidato: u64,
    },
    PorVaga {
        #[arg(long)]
        vaga: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCompetenciaCandidato {
    Registrar {
        #[arg(long)]
        candidato: u64,
        #[arg(long)]
        competencia: u64,
        /// iniciante, intermediario ou avancado
        #[arg(long)]
        nivel: String,
    },
    Nivel {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        nivel: String,
    },
    PorCandidato {
        #[arg(long)]
        candidato: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoCursoCompetencia {
    Registrar {
        #[arg(long)]
        curso: u64,
        #[arg(long)]
        competencia: u64,
        #[arg(long)]
        nivel: String,
    },
    Nivel {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        nivel: String,
    },
    PorCurso {
        #[arg(long)]
        curso: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoRequisito {
    Registrar {
        #[arg(long)]
        vaga: u64,
        #[arg(long)]
        competencia: u64,
        #[arg(long)]
        nivel: String,
        #[arg(long)]
        opcional: bool,
    },
    Nivel {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        nivel: String,
    },
    Opcional {
        #[arg(long)]
        id: u64,
    },
    Obrigatorio {
        #[arg(long)]
        id: u64,
    },
    PorVaga {
        #[arg(long)]
        vaga: u64,
    },
    RemoverPorVaga {
        #[arg(long)]
        vaga: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AcaoInscricao {
    Inscrever {
        #[arg(long)]
        curso: u64,
        #[arg(long)]
        aluno: u64,
    },
    Deferir {
        #[arg(long)]
        id: u64,
    },
    Indeferir {
        #[arg(long)]
        id: u64,
    },
    PorCurso {
        #[arg(long)]
        curso: u64,
    },
    #[command(flatten)]
    Comum(AcaoComum),
}

fn parse_par(par: &str) -> std::result::Result<(String, String), String> {
    match par.split_once('=') {
        Some((campo, valor)) if !campo.trim().is_empty() => {
            Ok((campo.trim().to_string(), valor.trim().to_string()))
        }
        _ => Err(format!("esperado campo=valor, recebido '{}'", par)),
    }
}

pub(crate) fn montar_contrato(
    contrato: &str,
    salario_base: Option<f64>,
    bolsa_auxilio: Option<f64>,
    instituicao_conveniada: Option<String>,
) -> Result<Contrato> {
    match contrato.trim().to_lowercase().as_str() {
        "clt" => {
            let salario_base = salario_base.ok_or_else(|| {
                SkillUpError::validation("salario_base", "Informe --salario-base para vagas CLT")
            })?;
            Ok(Contrato::Clt { salario_base })
        }
        "estagio" | "estágio" => {
            let bolsa_auxilio = bolsa_auxilio.ok_or_else(|| {
                SkillUpError::validation("bolsa_auxilio", "Informe --bolsa-auxilio para estágios")
            })?;
            let instituicao_conveniada = instituicao_conveniada.ok_or_else(|| {
                SkillUpError::validation(
                    "instituicao_conveniada",
                    "Informe --instituicao-conveniada para estágios",
                )
            })?;
            Ok(Contrato::Estagio {
                bolsa_auxilio,
                instituicao_conveniada,
            })
        }
        _ => Err(SkillUpError::validation(
            "contrato",
            "Contrato inválido. Use: clt ou estagio",
        )),
    }
}

pub(crate) fn montar_formato(
    formato: &str,
    plataforma_url: Option<String>,
    localidade: Option<String>,
) -> Result<FormatoCurso> {
    match formato.trim().to_lowercase().as_str() {
        "ead" => Ok(FormatoCurso::Ead {
            plataforma_url: plataforma_url.unwrap_or_default(),
        }),
        "presencial" => Ok(FormatoCurso::Presencial {
            localidade: localidade.unwrap_or_default(),
        }),
        _ => Err(SkillUpError::validation(
            "formato",
            "Formato inválido. Use: ead ou presencial",
        )),
    }
}

fn imprimir_lista(itens: Vec<String>) {
    if itens.is_empty() {
        println!("Nenhum registro encontrado.");
        return;
    }
    for item in itens {
        println!("{}", item);
    }
}

fn imprimir_sucesso(mensagem: &str, entidade: &impl Display) {
    println!("✅ {}", mensagem);
    println!("{}", entidade);
}

fn executar_comum<E, Svc>(servico: &Svc, acao: AcaoComum) -> Result<()>
where
    E: Entidade,
    Svc: CrudService<E>,
{
    match acao {
        AcaoComum::Listar => imprimir_lista(servico.listar_formatado()?),
        AcaoComum::Buscar { id } => println!("{}", servico.buscar_por_id_formatado(id)?),
        AcaoComum::Filtrar { filtros } => {
            let filtros = filtros
                .iter()
                .map(|(campo, valor)| E::filtro(campo, valor))
                .collect::<Result<Vec<_>>>()?;
            imprimir_lista(servico.buscar_por_filtros_formatado(&filtros)?)
        }
        AcaoComum::Atualizar { id, campo, valor } => {
            let entidade = servico.atualizar(id, &campo, &valor)?;
            imprimir_sucesso("Registro atualizado", &entidade);
        }
        AcaoComum::Deletar { id } => {
            servico.deletar(id)?;
            println!("✅ {} {} removido(a)", E::NOME, id);
        }
    }
    Ok(())
}

/// Executa o comando sobre os arquivos do diretório de dados configurado.
pub fn executar(comando: Comando, config: &impl ConfigProvider) -> Result<()> {
    let storage = LocalStorage::new(config.data_dir());
    tracing::debug!("Diretório de dados: {}", config.data_dir().display());

    match comando {
        Comando::Candidato { acao } => executar_candidato(CandidatoService::new(storage, config), acao),
        Comando::Empresa { acao } => executar_empresa(EmpresaService::new(storage, config), acao),
        Comando::Instituicao { acao } => {
            executar_instituicao(InstituicaoEnsinoService::new(storage, config), acao)
        }
        Comando::Vaga { acao } => executar_vaga(VagaService::new(storage, config), acao),
        Comando::Curso { acao } => executar_curso(CursoService::new(storage, config), acao),
        Comando::Competencia { acao } => {
            executar_competencia(CompetenciaService::new(storage, config), acao)
        }
        Comando::Candidatura { acao } => {
            executar_candidatura(CandidaturaService::new(storage, config), acao)
        }
        Comando::CompetenciaCandidato { acao } => executar_competencia_candidato(
            CompetenciaCandidatoService::new(storage, config),
            acao,
        ),
        Comando::CursoCompetencia { acao } => {
            executar_curso_competencia(CursoCompetenciaService::new(storage, config), acao)
        }
        Comando::Requisito { acao } => {
            executar_requisito(RequisitoVagaService::new(storage, config), acao)
        }
        Comando::Inscricao { acao } => {
            executar_inscricao(InscricaoCursoService::new(storage, config), acao)
        }
    }
}

fn executar_candidato(servico: CandidatoService<LocalStorage>, acao: AcaoCandidato) -> Result<()> {
    match acao {
        AcaoCandidato::Cadastrar {
            nome,
            cpf,
            email,
            areas,
            nivel_formacao,
        } => {
            let candidato =
                servico.cadastrar(&nome, &cpf, &email, lista_de_texto(&areas), &nivel_formacao)?;
            imprimir_sucesso("Candidato cadastrado", &candidato);
        }
        AcaoCandidato::AdicionarArea { id, area } => {
            imprimir_sucesso("Área adicionada", &servico.adicionar_area(id, &area)?);
        }
        AcaoCandidato::RemoverArea { id, area } => {
            imprimir_sucesso("Área removida", &servico.remover_area(id, &area)?);
        }
        AcaoCandidato::Comum(acao) => executar_comum::<Candidato, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_empresa(servico: EmpresaService<LocalStorage>, acao: AcaoEmpresa) -> Result<()> {
    match acao {
        AcaoEmpresa::Cadastrar { nome, cnpj, porte } => {
            let empresa = servico.cadastrar(&nome, &cnpj, porte.parse()?)?;
            imprimir_sucesso("Empresa cadastrada", &empresa);
        }
        AcaoEmpresa::Comum(acao) => executar_comum::<Empresa, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_instituicao(
    servico: InstituicaoEnsinoService<LocalStorage>,
    acao: AcaoInstituicao,
) -> Result<()> {
    match acao {
        AcaoInstituicao::Cadastrar {
            razao_social,
            nome_fantasia,
            cnpj,
            registro_educacional,
            tipo,
            modalidades,
            nao_credenciada,
        } => {
            let instituicao = servico.cadastrar(NovaInstituicao {
                razao_social,
                nome_fantasia,
                cnpj,
                registro_educacional,
                tipo,
                modalidades: lista_de_texto(&modalidades),
                credenciada: !nao_credenciada,
            })?;
            imprimir_sucesso("Instituição cadastrada", &instituicao);
        }
        AcaoInstituicao::Credenciar { id } => {
            imprimir_sucesso("Instituição credenciada", &servico.credenciar(id)?);
        }
        AcaoInstituicao::Descredenciar { id } => {
            imprimir_sucesso("Instituição descredenciada", &servico.descredenciar(id)?);
        }
        AcaoInstituicao::Comum(acao) => executar_comum::<InstituicaoEnsino, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_vaga(servico: VagaService<LocalStorage>, acao: AcaoVaga) -> Result<()> {
    match acao {
        AcaoVaga::Cadastrar {
            titulo,
            descricao,
            area,
            modalidade,
            tipo,
            contrato,
            salario_base,
            bolsa_auxilio,
            instituicao_conveniada,
            prazo,
            requisitos,
            empresa,
        } => {
            let vaga = servico.cadastrar(NovaVaga {
                titulo,
                descricao,
                area,
                modalidade: modalidade.parse()?,
                tipo: tipo.parse()?,
                contrato: montar_contrato(
                    &contrato,
                    salario_base,
                    bolsa_auxilio,
                    instituicao_conveniada,
                )?,
                prazo_inscricao: prazo,
                requisitos: lista_de_texto(&requisitos),
                id_empresa: empresa,
            })?;
            imprimir_sucesso("Vaga cadastrada", &vaga);
        }
        AcaoVaga::Publicar { id } => imprimir_sucesso("Vaga publicada", &servico.publicar(id)?),
        AcaoVaga::Pausar { id } => imprimir_sucesso("Vaga pausada", &servico.pausar(id)?),
        AcaoVaga::Ativas => imprimir_lista(formatar(servico.listar_ativas()?)),
        AcaoVaga::Custo { id } => {
            println!(
                "Custo de contratação da vaga {}: R$ {:.2}",
                id,
                servico.calcular_custo_contratacao(id)?
            );
        }
        AcaoVaga::Editar {
            id,
            titulo,
            descricao,
        } => {
            let vaga = servico.editar(id, titulo.as_deref(), descricao.as_deref())?;
            imprimir_sucesso("Vaga editada", &vaga);
        }
        AcaoVaga::AdicionarRequisito { id, requisito } => {
            imprimir_sucesso("Requisito adicionado", &servico.adicionar_requisito(id, &requisito)?);
        }
        AcaoVaga::Comum(acao) => executar_comum::<Vaga, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_curso(servico: CursoService<LocalStorage>, acao: AcaoCurso) -> Result<()> {
    match acao {
        AcaoCurso::Cadastrar {
            nome,
            area,
            carga_horaria,
            capacidade,
            formato,
            plataforma_url,
            localidade,
            prazo,
            instituicao,
        } => {
            let curso = servico.cadastrar(NovoCurso {
                nome,
                area,
                carga_horaria,
                capacidade,
                formato: montar_formato(&formato, plataforma_url, localidade)?,
                prazo_inscricao: prazo,
                id_instituicao: instituicao,
            })?;
            imprimir_sucesso("Curso cadastrado", &curso);
        }
        AcaoCurso::Publicar { id } => imprimir_sucesso("Curso publicado", &servico.publicar(id)?),
        AcaoCurso::Pausar { id } => imprimir_sucesso("Curso pausado", &servico.pausar(id)?),
        AcaoCurso::Ativos => imprimir_lista(formatar(servico.listar_ativos()?)),
        AcaoCurso::Detalhes { id } => println!("{}", servico.exibir_detalhes(id)?),
        AcaoCurso::Editar {
            id,
            nome,
            area,
            carga_horaria,
            capacidade,
        } => {
            let curso = servico.editar(
                id,
                nome.as_deref(),
                area.as_deref(),
                carga_horaria,
                capacidade,
            )?;
            imprimir_sucesso("Curso editado", &curso);
        }
        AcaoCurso::Comum(acao) => executar_comum::<Curso, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_competencia(
    servico: CompetenciaService<LocalStorage>,
    acao: AcaoCompetencia,
) -> Result<()> {
    match acao {
        AcaoCompetencia::Cadastrar { nome, descricao } => {
            imprimir_sucesso("Competência cadastrada", &servico.cadastrar(&nome, &descricao)?);
        }
        AcaoCompetencia::Comum(acao) => executar_comum::<Competencia, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_candidatura(
    servico: CandidaturaService<LocalStorage>,
    acao: AcaoCandidatura,
) -> Result<()> {
    match acao {
        AcaoCandidatura::Candidatar { candidato, vaga } => {
            imprimir_sucesso("Candidatura enviada", &servico.candidatar(candidato, vaga)?);
        }
        AcaoCandidatura::Analisar { id } => {
            imprimir_sucesso("Candidatura em análise", &servico.analisar(id)?);
        }
        AcaoCandidatura::Aprovar { id } => {
            imprimir_sucesso("Candidatura aprovada", &servico.aprovar(id)?);
        }
        AcaoCandidatura::Reprovar { id } => {
            imprimir_sucesso("Candidatura reprovada", &servico.reprovar(id)?);
        }
        AcaoCandidatura::Cancelar { id } => {
            imprimir_sucesso("Candidatura cancelada", &servico.cancelar(id)?);
        }
        AcaoCandidatura::PorCandidato { candidato } => imprimir_lista(formatar(
            servico.listar_por_candidato(candidato)?,
        )),
        AcaoCandidatura::PorVaga { vaga } => {
            imprimir_lista(formatar(servico.listar_por_vaga(vaga)?))
        }
        AcaoCandidatura::Comum(acao) => executar_comum::<Candidatura, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_competencia_candidato(
    servico: CompetenciaCandidatoService<LocalStorage>,
    acao: AcaoCompetenciaCandidato,
) -> Result<()> {
    match acao {
        AcaoCompetenciaCandidato::Registrar {
            candidato,
            competencia,
            nivel,
        } => {
            let nivel: Nivel = nivel.parse()?;
            let vinculo = servico.registrar(candidato, competencia, nivel)?;
            imprimir_sucesso("Competência registrada", &vinculo);
        }
        AcaoCompetenciaCandidato::Nivel { id, nivel } => {
            imprimir_sucesso("Nível atualizado", &servico.atualizar_nivel(id, &nivel)?);
        }
        AcaoCompetenciaCandidato::PorCandidato { candidato } => {
            imprimir_lista(formatar(servico.listar_por_candidato(candidato)?))
        }
        AcaoCompetenciaCandidato::Comum(acao) => {
            executar_comum::<CompetenciaCandidato, _>(&servico, acao)?
        }
    }
    Ok(())
}

fn executar_curso_competencia(
    servico: CursoCompetenciaService<LocalStorage>,
    acao: AcaoCursoCompetencia,
) -> Result<()> {
    match acao {
        AcaoCursoCompetencia::Registrar {
            curso,
            competencia,
            nivel,
        } => {
            let nivel: Nivel = nivel.parse()?;
            let vinculo = servico.registrar(curso, competencia, nivel)?;
            imprimir_sucesso("Competência vinculada ao curso", &vinculo);
        }
        AcaoCursoCompetencia::Nivel { id, nivel } => {
            imprimir_sucesso("Nível atualizado", &servico.atualizar_nivel(id, &nivel)?);
        }
        AcaoCursoCompetencia::PorCurso { curso } => {
            imprimir_lista(formatar(servico.listar_por_curso(curso)?))
        }
        AcaoCursoCompetencia::Comum(acao) => {
            executar_comum::<CursoCompetencia, _>(&servico, acao)?
        }
    }
    Ok(())
}

fn executar_requisito(servico: RequisitoVagaService<LocalStorage>, acao: AcaoRequisito) -> Result<()> {
    match acao {
        AcaoRequisito::Registrar {
            vaga,
            competencia,
            nivel,
            opcional,
        } => {
            let nivel: Nivel = nivel.parse()?;
            let requisito = servico.registrar(vaga, competencia, nivel, !opcional)?;
            imprimir_sucesso("Requisito registrado", &requisito);
        }
        AcaoRequisito::Nivel { id, nivel } => {
            imprimir_sucesso("Nível atualizado", &servico.atualizar_nivel(id, &nivel)?);
        }
        AcaoRequisito::Opcional { id } => {
            imprimir_sucesso("Requisito agora é opcional", &servico.tornar_opcional(id)?);
        }
        AcaoRequisito::Obrigatorio { id } => {
            imprimir_sucesso("Requisito agora é obrigatório", &servico.tornar_obrigatorio(id)?);
        }
        AcaoRequisito::PorVaga { vaga } => imprimir_lista(formatar(servico.listar_por_vaga(vaga)?)),
        AcaoRequisito::RemoverPorVaga { vaga } => {
            let removidos = servico.remover_por_vaga(vaga)?;
            println!("✅ {} requisito(s) removido(s) da vaga {}", removidos, vaga);
        }
        AcaoRequisito::Comum(acao) => executar_comum::<RequisitoVaga, _>(&servico, acao)?,
    }
    Ok(())
}

fn executar_inscricao(servico: InscricaoCursoService<LocalStorage>, acao: AcaoInscricao) -> Result<()> {
    match acao {
        AcaoInscricao::Inscrever { curso, aluno } => {
            imprimir_sucesso("Inscrição realizada", &servico.inscrever(curso, aluno)?);
        }
        AcaoInscricao::Deferir { id } => {
            imprimir_sucesso("Inscrição deferida", &servico.deferir(id)?);
        }
        AcaoInscricao::Indeferir { id } => {
            imprimir_sucesso("Inscrição indeferida", &servico.indeferir(id)?);
        }
        AcaoInscricao::PorCurso { curso } => {
            imprimir_lista(formatar(servico.listar_por_curso(curso)?))
        }
        AcaoInscricao::Comum(acao) => executar_comum::<InscricaoCurso, _>(&servico, acao)?,
    }
    Ok(())
}

fn formatar<E: Display>(registros: Vec<E>) -> Vec<String> {
    registros.iter().map(ToString::to_string).collect()
}
