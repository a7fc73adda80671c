//! End-to-end report generation tests: raw bytes through session to summary.

use registry_ingest::RawTable;
use registry_model::{DiseaseConfig, DiseaseType, PatientRecord, Sex, Stage};
use registry_report::{ReportSession, aggregate, summary_csv_string};

fn load(bytes: &[u8], config: &DiseaseConfig) -> ReportSession {
    let table = RawTable::from_bytes(bytes, config.header_offset).unwrap();
    ReportSession::load(&table, config.clone()).unwrap()
}

#[test]
fn lymphoma_file_with_default_header_offset() {
    let mut csv = String::new();
    for i in 0..7 {
        csv.push_str(&format!("relatório consolidado,linha {i},,\n"));
    }
    csv.push_str("GENERO,Idade,Data Primeira Consulta,Óbito (S) ou (N),Recidiva (S) ou (N),Estadiamento\n");
    csv.push_str("F,62,10/01/2020,N,S,Estadiamento II\n");
    csv.push_str("M,85,05/06/2018,S,N,IV - metástase\n");
    csv.push_str("F,19,,N,N,indefinido\n");

    let config = DiseaseConfig::for_disease(DiseaseType::Lymphoma);
    assert_eq!(config.header_offset, 7);
    let session = load(csv.as_bytes(), &config);
    assert_eq!(session.records().len(), 3);

    let summary = session.summary();
    assert_eq!(summary.count("F", "Total"), Some(2));
    assert_eq!(summary.count("M", "Total"), Some(1));
    assert_eq!(summary.count("Total", "Total"), Some(3));

    assert_eq!(summary.count("F", "Idade (≤20)"), Some(1));
    assert_eq!(summary.count("F", "Idade (61-80)"), Some(1));
    assert_eq!(summary.count("M", "Idade (>80)"), Some(1));

    // Durations run to the 2025-12-31 cutoff (the M record's death has no
    // date column, so it also uses the cutoff).
    assert_eq!(summary.count("F", "Tempo (6-10 anos)"), Some(1));
    assert_eq!(summary.count("M", "Tempo (6-10 anos)"), Some(1));

    assert_eq!(summary.count("Total", "Est. II"), Some(1));
    assert_eq!(summary.count("Total", "Est. IV"), Some(1));
    assert_eq!(summary.count("Total", "Est. I"), Some(0));

    assert_eq!(summary.count("M", "Óbitos"), Some(1));
    assert_eq!(summary.count("Total", "Óbitos"), Some(1));

    // Fixed-year relapse policy: the single relapse lands in the 2025 column.
    assert_eq!(summary.count("F", "2025 (Recidiva)"), Some(1));
    assert_eq!(summary.count("M", "2025 (Recidiva)"), Some(0));
    assert_eq!(summary.count("Total", "2025 (Recidiva)"), Some(1));
}

#[test]
fn myeloma_latin1_semicolon_export() {
    // Latin-1 bytes: 0xD3 is Ó. Semicolon-delimited, as the second parse
    // attempt expects.
    let bytes: &[u8] = b"linha de cabe\xE7alho;;\nsegunda linha;;\n\
        GENERO;Data Primeira Consulta;Data do \xD3bito\n\
        F;10/01/2020;\n\
        M;05/06/2018;10/05/2023\n";

    let config = DiseaseConfig::for_disease(DiseaseType::MultipleMyeloma);
    assert_eq!(config.header_offset, 2);
    let session = load(bytes, &config);

    let summary = session.summary();
    // No staging columns for myeloma.
    assert!(!summary.columns.iter().any(|c| c.starts_with("Est.")));
    assert_eq!(summary.count("M", "Óbitos"), Some(1));
    // Death date bounds the duration: 2018-06-05 to 2023-05-10 is ~4.9 years.
    assert_eq!(summary.count("M", "Tempo (3-5 anos)"), Some(1));
    assert_eq!(summary.count("F", "Óbitos"), Some(0));
}

#[test]
fn relapse_years_from_date_column_are_rectangular() {
    let csv = "GENERO,Data Primeira Consulta,Recidiva (S) ou (N),Data da Recidiva\n\
               F,10/01/2020,S,15/03/2021\n\
               M,10/01/2020,S,20/08/2023\n\
               F,10/01/2020,N,\n";
    let config = DiseaseConfig::for_disease(DiseaseType::Lung);
    let session = load_with_offset(csv.as_bytes(), &config, 0);

    let summary = session.summary();
    assert_eq!(summary.count("F", "2021 (Recidiva)"), Some(1));
    assert_eq!(summary.count("F", "2023 (Recidiva)"), Some(0));
    assert_eq!(summary.count("M", "2021 (Recidiva)"), Some(0));
    assert_eq!(summary.count("M", "2023 (Recidiva)"), Some(1));
    assert_eq!(summary.count("Total", "2023 (Recidiva)"), Some(1));
    for row in &summary.rows {
        assert_eq!(row.counts.len() + 1, summary.columns.len());
    }
}

#[test]
fn wrong_header_offset_surfaces_an_input_error() {
    // Offset 0 reads the junk banner as the header row; sex cannot resolve.
    let csv = "relatório,consolidado\nGENERO,Data Primeira Consulta\nF,10/01/2020\n";
    let table = RawTable::from_bytes(csv.as_bytes(), 0).unwrap();
    let config = DiseaseConfig::for_disease(DiseaseType::Lung);
    let err = ReportSession::load(&table, config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("sex"));
    assert!(message.contains("relatório"));
}

#[test]
fn report_generation_is_idempotent() {
    let csv = "GENERO,Idade,Data Primeira Consulta\nF,62,10/01/2020\nM,45,10/01/2021\n";
    let config = DiseaseConfig::for_disease(DiseaseType::Lung);
    let session = load_with_offset(csv.as_bytes(), &config, 0);

    let first = session.summary();
    let second = session.summary();
    assert_eq!(first, second);
    assert_eq!(summary_csv_string(&first), summary_csv_string(&second));
}

#[test]
fn summary_csv_snapshot() {
    let records = vec![
        PatientRecord {
            sex: Sex::Female,
            age: Some(34.0),
            treatment_years: Some(1.5),
            stage: Some(Stage::II),
            is_relapsed: true,
            relapse_year: Some(2021),
            ..PatientRecord::default()
        },
        PatientRecord {
            sex: Sex::Male,
            age: Some(70.0),
            treatment_years: Some(6.0),
            stage: Some(Stage::IV),
            is_deceased: true,
            is_relapsed: true,
            relapse_year: Some(2023),
            ..PatientRecord::default()
        },
        PatientRecord {
            sex: Sex::Female,
            age: Some(81.0),
            treatment_years: Some(12.0),
            ..PatientRecord::default()
        },
    ];
    let config = DiseaseConfig::for_disease(DiseaseType::Lung);
    let csv = summary_csv_string(&aggregate(&records, &config));
    insta::assert_snapshot!(csv.trim_end(), @r"
    Gênero,Total,Idade (≤20),Idade (21-40),Idade (41-60),Idade (61-80),Idade (>80),Tempo (≤2 anos),Tempo (3-5 anos),Tempo (6-10 anos),Tempo (>10 Anos),Est. I,Est. II,Est. III,Est. IV,Óbitos,2021 (Recidiva),2023 (Recidiva)
    F,2,0,1,0,0,1,1,0,0,1,0,1,0,0,0,1,0
    M,1,0,0,0,1,0,0,0,1,0,0,0,0,1,1,0,1
    Total,3,0,1,0,1,1,1,0,1,1,0,1,0,1,1,1,1
    ");
}

fn load_with_offset(bytes: &[u8], config: &DiseaseConfig, offset: usize) -> ReportSession {
    let table = RawTable::from_bytes(bytes, offset).unwrap();
    ReportSession::load(&table, config.clone()).unwrap()
}
