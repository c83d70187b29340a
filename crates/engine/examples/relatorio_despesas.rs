//! Generates a sample expense report PDF in the current directory.
//!
//! ```sh
//! cargo run --example relatorio_despesas
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use florestal_report::ReportEngine;
use florestal_report::document::AssemblerOptions;
use florestal_report::request::ReportRequest;
use florestal_report::schema::EntityKind;
use florestal_shared::Record;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let records = vec![
        Record::new()
            .with("data", "2024-01-15")
            .with("tipo_de_despesa", "Mudas")
            .with("descricao", "Compra de mudas de pinus")
            .with("total", "1250.00"),
        Record::new()
            .with("data", "2024-02-10")
            .with("tipo_de_despesa", "Insumos")
            .with("descricao", "Adubo NPK")
            .with("total", "430.50"),
        Record::new()
            .with("data", "2024-02-22")
            .with("tipo_de_despesa", "Mão de Obra")
            .with("descricao", "Plantio - equipe terceirizada")
            .with("total", "2800.00"),
    ];
    let property = Record::new()
        .with("descricao", "Fazenda Santa Rita")
        .with("area_plantio", "120.5")
        .with("num_arvores_plantadas", 96_000_i64)
        .with("num_arvores_remanescentes", 81_200_i64);

    let request = ReportRequest::new(
        EntityKind::Expense,
        vec![
            "data".to_string(),
            "tipo_de_despesa".to_string(),
            "descricao".to_string(),
            "total".to_string(),
        ],
    )
    .with_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .with_sort_key("data");

    let artifact = ReportEngine::default().generate(
        &request,
        &records,
        Some(&property),
        &AssemblerOptions::default(),
    )?;

    std::fs::write(&artifact.file_name, &artifact.bytes)?;
    println!(
        "{} gravado ({} páginas, {} linhas)",
        artifact.file_name, artifact.pages, artifact.rows_emitted
    );
    Ok(())
}
