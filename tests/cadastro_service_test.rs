use skillup::app::services::{
    CandidatoService, CompetenciaService, EmpresaService, InstituicaoEnsinoService,
    NovaInstituicao,
};
use skillup::domain::{Candidato, FiltroCandidato, Porte};
use skillup::{CrudService, LocalStorage, SkillUpError, TomlConfig};
use tempfile::TempDir;

fn candidato_service(dir: &TempDir) -> CandidatoService<LocalStorage> {
    CandidatoService::new(LocalStorage::new(dir.path()), &TomlConfig::default())
}

#[test]
fn test_cadastrar_candidato_e_cpf_unico() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = candidato_service(&dir);

    let joao = service.cadastrar(
        "João",
        "11111111111",
        "joao@x.com",
        vec!["TI".to_string()],
        "Superior",
    )?;
    assert_eq!(joao.id(), 1);

    let err = service
        .cadastrar(
            "Outro João",
            "11111111111",
            "outro@x.com",
            vec!["RH".to_string()],
            "Médio",
        )
        .unwrap_err();
    assert!(matches!(err, SkillUpError::Conflict { .. }));
    assert_eq!(err.user_friendly_message(), "Já existe candidato com este CPF");
    assert_eq!(service.contar_total()?, 1);

    // O arquivo é a fonte da verdade: um novo serviço enxerga o mesmo estado
    let recarregado = candidato_service(&dir).buscar_por_id(1)?;
    assert_eq!(recarregado, joao);
    Ok(())
}

#[test]
fn test_ids_sequenciais_apos_remocao() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = candidato_service(&dir);

    for (i, cpf) in ["11111111111", "22222222222", "33333333333"].iter().enumerate() {
        let c = service.cadastrar("Ana", cpf, "ana@x.com", vec!["TI".to_string()], "Técnico")?;
        assert_eq!(c.id(), i as u64 + 1);
    }

    service.deletar(2)?;
    let err = service.buscar_por_id(2).unwrap_err();
    assert!(matches!(err, SkillUpError::NotFound { id: 2, .. }));
    assert!(matches!(service.deletar(2), Err(SkillUpError::NotFound { .. })));

    let quarto = service.cadastrar(
        "Bia",
        "44444444444",
        "bia@x.com",
        vec!["Dados".to_string()],
        "Superior",
    )?;
    assert_eq!(quarto.id(), 4);
    Ok(())
}

#[test]
fn test_atualizar_e_filtrar_candidatos() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = candidato_service(&dir);
    service.cadastrar(
        "João",
        "11111111111",
        "joao@x.com",
        vec!["TI".to_string(), "Dados".to_string()],
        "Superior",
    )?;
    service.cadastrar(
        "Maria",
        "22222222222",
        "maria@x.com",
        vec!["RH".to_string()],
        "Superior",
    )?;

    let atualizado = service.atualizar(1, "email", "joao.silva@x.com")?;
    assert_eq!(atualizado.email(), "joao.silva@x.com");

    assert!(service.atualizar(1, "email", "invalido").is_err());
    assert!(matches!(
        service.atualizar(1, "salario", "10"),
        Err(SkillUpError::UnknownField { .. })
    ));
    assert!(service.atualizar(1, "cpf", "99999999999").is_err());
    assert_eq!(service.buscar_por_id(1)?.email(), "joao.silva@x.com");

    let de_dados = service.buscar_por_filtros(&[FiltroCandidato::AreaInteresse(
        "Dados".to_string(),
    )])?;
    assert_eq!(de_dados.len(), 1);
    assert_eq!(de_dados[0].nome(), "João");

    let superiores = service.buscar_por_filtros_formatado(&[FiltroCandidato::NivelFormacao(
        "Superior".to_string(),
    )])?;
    assert_eq!(superiores.len(), 2);
    assert!(superiores[1].contains("Maria"));
    Ok(())
}

#[test]
fn test_areas_de_interesse() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = candidato_service(&dir);
    service.cadastrar("João", "11111111111", "joao@x.com", vec!["TI".to_string()], "Superior")?;

    let candidato: Candidato = service.adicionar_area(1, "Dados")?;
    assert_eq!(candidato.areas_interesse(), ["TI", "Dados"]);
    assert!(service.adicionar_area(1, "TI").is_err());

    service.remover_area(1, "TI")?;
    let err = service.remover_area(1, "Dados").unwrap_err();
    assert!(matches!(err, SkillUpError::Validation { .. }));
    assert_eq!(service.buscar_por_id(1)?.areas_interesse(), ["Dados"]);

    assert!(matches!(
        service.atualizar(1, "areas_interesse", "TI, TI"),
        Err(SkillUpError::Validation { .. })
    ));
    assert_eq!(service.buscar_por_id(1)?.areas_interesse(), ["Dados"]);
    Ok(())
}

#[test]
fn test_empresa_cnpj_unico() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = EmpresaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());

    let acme = service.cadastrar("Acme", "12345678000199", Porte::Medio)?;
    assert_eq!(acme.obter_limites_publicacao(), 15);

    let err = service
        .cadastrar("Acme 2", "12345678000199", Porte::Grande)
        .unwrap_err();
    assert_eq!(err.user_friendly_message(), "Já existe empresa com este CNPJ");
    assert_eq!(service.buscar_por_cnpj("12345678000199")?, Some(acme));
    Ok(())
}

#[test]
fn test_instituicao_credenciamento() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service =
        InstituicaoEnsinoService::new(LocalStorage::new(dir.path()), &TomlConfig::default());

    let dados = NovaInstituicao {
        razao_social: "Instituto Alfa LTDA".to_string(),
        nome_fantasia: "Alfa".to_string(),
        cnpj: "11222333000144".to_string(),
        registro_educacional: "MEC-123".to_string(),
        tipo: "Técnico".to_string(),
        modalidades: vec!["EAD".to_string()],
        credenciada: true,
    };
    let alfa = service.cadastrar(dados.clone())?;
    assert!(alfa.credenciada());
    assert!(matches!(
        service.cadastrar(dados),
        Err(SkillUpError::Conflict { .. })
    ));

    assert!(!service.descredenciar(alfa.id())?.credenciada());
    assert!(service.credenciar(alfa.id())?.credenciada());
    Ok(())
}

#[test]
fn test_competencia_nome_unico_sem_caixa() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = CompetenciaService::new(LocalStorage::new(dir.path()), &TomlConfig::default());

    service.cadastrar("Python", "Linguagem")?;
    service.cadastrar("SQL", "Bancos de dados")?;
    assert!(matches!(
        service.cadastrar("python", ""),
        Err(SkillUpError::Conflict { .. })
    ));
    assert!(matches!(
        service.atualizar(2, "nome", "PYTHON"),
        Err(SkillUpError::Conflict { .. })
    ));
    assert_eq!(service.atualizar(2, "nome", "PostgreSQL")?.nome(), "PostgreSQL");
    assert_eq!(service.listar_formatado()?.len(), 2);
    Ok(())
}
