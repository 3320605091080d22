/*!
 * Common test utilities for the intuitus test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A short annotated script used across tests
pub const SAMPLE_SCRIPT: &str = "Hola, bienvenidos. [PAUSA 2s] Hoy vamos a hablar de un tema importante. [SONREÍR]

[enfasis] Primero, lo básico. [RESPIRAR]
[Lento] Despacio... [rapido] ¡y rápido! [BAILAR] [PAUSA 5s]
Gracias por ver. [PENSATIVO]
";

/// Creates the sample script file in the specified directory
pub fn create_sample_script(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SCRIPT)
}
