//! Mapping of on-disk output file names to catalogue keys
//!
//! LPJ-GUESS instruction files declare output files with lines such as
//! `file_cmass "cmass.out"`. The resolver reads those declarations and
//! falls back to the `name.out` -> `file_name` naming convention for files
//! the instruction file does not mention.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

use crate::app::services::output_registry::OutputFileRegistry;
use crate::constants::{FILE_TYPE_PREFIX, OUTPUT_FILE_EXTENSION};
use crate::{Error, Result};

const DECLARATION_PATTERN: &str = r#"(?m)^\s*(file_\w+)\s+"([^"]+)""#;

/// Resolves output file paths to registered file-type keys
#[derive(Debug, Clone, Default)]
pub struct FileTypeResolver {
    /// Declared file name -> file-type key
    declared: HashMap<String, String>,

    /// Every key known to the registry
    known: HashSet<String>,
}

impl FileTypeResolver {
    /// Resolver using only the naming convention
    pub fn new(registry: &OutputFileRegistry) -> Self {
        Self {
            declared: HashMap::new(),
            known: registry
                .get_all_file_types()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Resolver seeded from the text of an instruction file
    ///
    /// Declarations naming keys the registry does not know are ignored;
    /// when a file name is declared twice the later declaration wins.
    pub fn from_instructions(
        registry: &OutputFileRegistry,
        instructions: &str,
        source: &str,
    ) -> Result<Self> {
        let pattern = Regex::new(DECLARATION_PATTERN)
            .map_err(|e| Error::instruction_file(source, e.to_string()))?;

        let mut resolver = Self::new(registry);
        for captures in pattern.captures_iter(instructions) {
            let key = &captures[1];
            let file_name = captures[2].trim();

            if !registry.contains(key) {
                warn!("Ignoring unknown output declaration {} in {}", key, source);
                continue;
            }
            if file_name.is_empty() {
                continue;
            }

            debug!("Instruction file declares {} as {}", file_name, key);
            resolver
                .declared
                .insert(file_name.to_string(), key.to_string());
        }

        Ok(resolver)
    }

    /// Read an instruction file from disk
    pub async fn from_instruction_file(registry: &OutputFileRegistry, path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(
                format!("Failed to read instruction file {}", path.display()),
                e,
            )
        })?;
        Self::from_instructions(registry, &content, &path.display().to_string())
    }

    /// Number of declarations taken from the instruction file
    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }

    /// File-type key for the given output file path
    pub fn resolve(&self, path: &Path) -> Option<&str> {
        let file_name = path.file_name()?.to_str()?;

        if let Some(key) = self.declared.get(file_name) {
            return Some(key.as_str());
        }

        let stem = file_name.strip_suffix(&format!(".{}", OUTPUT_FILE_EXTENSION))?;
        let candidate = format!("{}{}", FILE_TYPE_PREFIX, stem);
        self.known.get(&candidate).map(String::as_str)
    }
}
