// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::fields::FieldRecord;
use crate::extractors::segment::SegmentRow;
use crate::utils::error::StorageError;

const RESULTS_FILENAME: &str = "resultado_completo.csv";
const SEGMENTS_FILENAME: &str = "segmentado.csv";
const SUMMARY_FILENAME: &str = "resumo_execucao.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory,
    /// creating the directory if it doesn't exist yet.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Writes the complete-results table: one row of extracted fields per
    /// document, header row derived from the record's field names.
    pub fn save_results(&self, records: &[FieldRecord]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RESULTS_FILENAME);

        let mut writer = csv::Writer::from_path(&file_path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(StorageError::IoError)?;

        tracing::info!("Saved {} result rows to {}", records.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes the segmented-texts table: file name plus the pre/post-marker
    /// halves of each document.
    pub fn save_segments(&self, rows: &[SegmentRow]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(SEGMENTS_FILENAME);

        let mut writer = csv::Writer::from_path(&file_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(StorageError::IoError)?;

        tracing::info!("Saved {} segment rows to {}", rows.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes a small JSON summary of the run next to the two tables.
    pub fn save_run_summary(&self, document_count: usize) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(SUMMARY_FILENAME);

        let summary = serde_json::json!({
            "documentos_processados": document_count,
            "artefatos": [RESULTS_FILENAME, SEGMENTS_FILENAME],
            "concluido_em": chrono::Utc::now().to_rfc3339(),
        });

        let summary_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, summary_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved run summary to {}", file_path.display());
        Ok(file_path)
    }
}
