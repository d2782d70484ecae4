// src/main.rs
mod extractors;
mod pdf;
mod storage;
mod utils;

use std::path::Path;

use clap::Parser;

use extractors::fields::{FieldRecord, VOTO};
use extractors::normalize::normalize;
use extractors::segment::{segment, SegmentRow};
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the judicial-ruling metadata extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the input PDF rulings
    #[arg(short, long, default_value = "./input")]
    input_dir: String,

    /// Output directory for the generated tables
    #[arg(short, long, default_value = "./output")]
    output_dir: String,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction run for args: {:?}", args);

    // 3. Enumerate the input documents
    let documents = pdf::list_documents(Path::new(&args.input_dir))?;

    if documents.is_empty() {
        tracing::warn!("No PDF files found in {}", args.input_dir);
        println!("Nenhum arquivo PDF encontrado na pasta especificada.");
        return Ok(());
    }
    tracing::info!("Found {} PDF files in {}", documents.len(), args.input_dir);

    // 4. Process each document in order, accumulating the two tables.
    // A document that cannot be read aborts the whole run; pattern misses
    // degrade to sentinels inside the extractors and are never errors.
    let mut results: Vec<FieldRecord> = Vec::with_capacity(documents.len());
    let mut segments: Vec<SegmentRow> = Vec::with_capacity(documents.len());

    for path in &documents {
        let nome_pdf = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!("Processing document: {}", nome_pdf);

        let raw_text = pdf::read_document_text(path)?;
        let text = normalize(&raw_text);

        let pair = segment(&text);
        let record = FieldRecord::extract(&text);

        // Intermediate value, not persisted as a table column.
        let voto = VOTO.apply(&text);
        tracing::debug!("Vote body for {}: {} chars", nome_pdf, voto.len());

        results.push(record);
        segments.push(SegmentRow::new(nome_pdf, pair));
    }

    // 5. Persist both tables to the output directory (created if missing)
    let storage = StorageManager::new(&args.output_dir)?;
    storage.save_results(&results)?;
    storage.save_segments(&segments)?;
    storage.save_run_summary(documents.len())?;

    tracing::info!(
        "Extraction finished: {} documents, output in {}",
        documents.len(),
        args.output_dir
    );
    println!("Extração concluída. Resultados salvos em: {}", args.output_dir);

    Ok(())
}
