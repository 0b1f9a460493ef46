use chrono::NaiveDate;
use skillup::app::services::{
    CandidatoService, CursoService, EmpresaService, InscricaoCursoService,
    InstituicaoEnsinoService, NovaInstituicao, NovaVaga, NovoCurso, VagaService,
};
use skillup::domain::{Contrato, FiltroVaga, FormatoCurso, Modalidade, Porte, TipoVaga};
use skillup::{CrudService, LocalStorage, SkillUpError, TomlConfig};
use tempfile::TempDir;

fn estagio() -> NovaVaga {
    NovaVaga {
        titulo: "Estágio em Dados".to_string(),
        descricao: "Apoio ao time de BI".to_string(),
        area: "Dados".to_string(),
        modalidade: Modalidade::Hibrido,
        tipo: TipoVaga::Estagio,
        contrato: Contrato::Estagio {
            bolsa_auxilio: 1000.0,
            instituicao_conveniada: "UFPE".to_string(),
        },
        prazo_inscricao: NaiveDate::from_ymd_opt(2030, 1, 31),
        requisitos: vec!["SQL".to_string(), " ".to_string()],
        id_empresa: None,
    }
}

fn curso_ead(id_instituicao: Option<u64>) -> NovoCurso {
    NovoCurso {
        nome: "Rust Essencial".to_string(),
        area: "TI".to_string(),
        carga_horaria: 40,
        capacidade: 2,
        formato: FormatoCurso::Ead {
            plataforma_url: "https://ead.exemplo.com".to_string(),
        },
        prazo_inscricao: None,
        id_instituicao,
    }
}

#[test]
fn test_requisito_vazio_rejeita_cadastro() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = VagaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());

    assert!(matches!(
        service.cadastrar(estagio()),
        Err(SkillUpError::Validation { .. })
    ));
    assert_eq!(service.contar_total()?, 0);
    Ok(())
}

#[test]
fn test_vaga_estagio_persistida_com_discriminante() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = VagaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());

    let mut dados = estagio();
    dados.requisitos = vec!["SQL".to_string()];
    let vaga = service.cadastrar(dados)?;
    assert!((service.calcular_custo_contratacao(vaga.id())? - 1100.0).abs() < 1e-9);

    let bruto: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("vaga.json"))?)?;
    assert_eq!(bruto[0]["contrato"], "ESTAGIO");
    assert_eq!(bruto[0]["modalidade"], "Híbrido");
    assert_eq!(bruto[0]["tipo"], "Estágio");
    assert_eq!(bruto[0]["prazo_inscricao"], "2030-01-31");
    assert_eq!(bruto[0]["instituicao_conveniada"], "UFPE");

    let editada = service.editar(vaga.id(), Some("Estágio em BI"), Some(""))?;
    assert_eq!(editada.titulo(), "Estágio em BI");
    assert_eq!(editada.descricao(), "Apoio ao time de BI");

    let por_area = service.buscar_por_filtros(&[
        FiltroVaga::Area("Dados".to_string()),
        FiltroVaga::Requisito("SQL".to_string()),
    ])?;
    assert_eq!(por_area.len(), 1);
    Ok(())
}

#[test]
fn test_arquivo_configurado_por_entidade() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = TomlConfig::from_toml_str("[storage.arquivos]\nvaga = \"vagas_abertas.json\"\n")?;
    let service = VagaService::new(LocalStorage::new(dir.path()), &config);

    let mut dados = estagio();
    dados.requisitos.clear();
    service.cadastrar(dados)?;

    assert!(dir.path().join("vagas_abertas.json").is_file());
    assert!(!dir.path().join("vaga.json").exists());
    Ok(())
}

#[test]
fn test_curso_exige_instituicao_credenciada() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path());
    let config = TomlConfig::default();
    let instituicoes = InstituicaoEnsinoService::new(storage.clone(), &config);
    let cursos = CursoService::new(storage, &config);

    assert!(matches!(
        cursos.cadastrar(curso_ead(Some(1))),
        Err(SkillUpError::NotFound { id: 1, .. })
    ));

    let instituicao = instituicoes.cadastrar(NovaInstituicao {
        razao_social: "Escola Beta SA".to_string(),
        nome_fantasia: "Beta".to_string(),
        cnpj: "55666777000188".to_string(),
        registro_educacional: "REG-55".to_string(),
        tipo: "Livre".to_string(),
        modalidades: vec![],
        credenciada: false,
    })?;

    let err = cursos.cadastrar(curso_ead(Some(instituicao.id()))).unwrap_err();
    assert!(matches!(err, SkillUpError::Permission { .. }));
    assert_eq!(
        err.user_friendly_message(),
        "Instituição não credenciada não pode publicar cursos"
    );

    instituicoes.credenciar(instituicao.id())?;
    let curso = cursos.cadastrar(curso_ead(Some(instituicao.id())))?;
    assert_eq!(curso.modalidade(), Modalidade::Remoto);
    assert_eq!(cursos.listar_por_instituicao(instituicao.id())?.len(), 1);

    cursos.pausar(curso.id())?;
    assert!(cursos.listar_ativos()?.is_empty());

    instituicoes.descredenciar(instituicao.id())?;
    assert!(matches!(
        cursos.publicar(curso.id()),
        Err(SkillUpError::Permission { .. })
    ));
    Ok(())
}

#[test]
fn test_editar_curso_e_detalhes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cursos = CursoService::new(LocalStorage::new(dir.path()), &TomlConfig::default());
    let curso = cursos.cadastrar(curso_ead(None))?;

    assert!(cursos
        .editar(curso.id(), Some("Rust Avançado"), None, Some(0), None)
        .is_err());
    assert_eq!(cursos.buscar_por_id(curso.id())?.nome(), "Rust Essencial");

    let editado = cursos.editar(curso.id(), Some("Rust Avançado"), None, Some(60), Some(30))?;
    assert_eq!(editado.carga_horaria(), 60);
    assert!(cursos.exibir_detalhes(curso.id())?.contains("Rust Avançado"));
    Ok(())
}

#[test]
fn test_rebaixar_porte_respeita_vagas_ativas() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path());
    let config = TomlConfig::default();
    let empresas = EmpresaService::new(storage.clone(), &config);
    let vagas = VagaService::new(storage, &config);

    let empresa = empresas.cadastrar("Acme", "12345678000199", Porte::Medio)?;
    for _ in 0..6 {
        let mut dados = estagio();
        dados.requisitos = vec!["SQL".to_string()];
        dados.id_empresa = Some(empresa.id());
        vagas.cadastrar(dados)?;
    }

    let err = empresas.atualizar(empresa.id(), "porte", "pequeno").unwrap_err();
    assert!(matches!(err, SkillUpError::Permission { .. }));
    assert_eq!(empresas.buscar_por_id(empresa.id())?.porte(), Porte::Medio);

    // Com uma vaga pausada, as cinco restantes cabem no porte pequeno
    vagas.pausar(1)?;
    assert_eq!(
        empresas.atualizar(empresa.id(), "porte", "pequeno")?.porte(),
        Porte::Pequeno
    );
    Ok(())
}

#[test]
fn test_capacidade_nao_fica_abaixo_das_inscricoes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path());
    let config = TomlConfig::default();
    let candidatos = CandidatoService::new(storage.clone(), &config);
    candidatos.cadastrar("João", "11111111111", "joao@x.com", vec!["TI".into()], "Superior")?;
    candidatos.cadastrar("Ana", "22222222222", "ana@x.com", vec!["TI".into()], "Técnico")?;

    let cursos = CursoService::new(storage.clone(), &config);
    let curso = cursos.cadastrar(curso_ead(None))?;
    let inscricoes = InscricaoCursoService::new(storage, &config);
    let hoje = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    inscricoes.inscrever_em(curso.id(), 1, hoje)?;
    let segunda = inscricoes.inscrever_em(curso.id(), 2, hoje)?;

    assert!(matches!(
        cursos.atualizar(curso.id(), "capacidade", "1"),
        Err(SkillUpError::Conflict { .. })
    ));
    assert!(matches!(
        cursos.editar(curso.id(), None, None, None, Some(1)),
        Err(SkillUpError::Conflict { .. })
    ));
    assert_eq!(cursos.buscar_por_id(curso.id())?.capacidade(), 2);

    inscricoes.indeferir(segunda.id())?;
    assert_eq!(cursos.atualizar(curso.id(), "capacidade", "1")?.capacidade(), 1);
    Ok(())
}
