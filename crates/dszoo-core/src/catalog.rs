//! Catalogue — the ordered descriptor list the search cache is built from.
//!
//! [`builtin`] returns the entries shipped with dszoo. [`load`] and
//! [`from_json`] read a caller-supplied JSON array of descriptors and enforce
//! the non-empty-name contract via [`validate`].

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::Descriptor;

/// The descriptors shipped with dszoo, in display order.
pub fn builtin() -> Vec<Descriptor> {
    vec![
        Descriptor::new(
            "array",
            "Arranjo",
            "Itens do mesmo tipo em um bloco de comprimento definido",
        )
        .with_alternate_name("Array")
        .with_aliases(["Vetor", "Lista"]),
        Descriptor::new(
            "record",
            "Registro",
            "Itens de tipos possivelmente diferentes em um bloco estruturado",
        )
        .with_alternate_name("Record")
        .with_aliases(["Struct", "Structure", "Estrutura"]),
        Descriptor::new(
            "linked-list",
            "Lista encadeada",
            "Sequência de nós estruturados que pode crescer dinamicamente",
        ),
    ]
}

/// Read and validate a JSON catalogue file.
pub fn load(path: &Path) -> CatalogResult<Vec<Descriptor>> {
    let raw = std::fs::read_to_string(path)?;
    let descriptors = from_json(&raw)?;
    tracing::info!(path = %path.display(), count = descriptors.len(), "catalogue loaded");
    Ok(descriptors)
}

/// Parse and validate a JSON array of descriptors.
pub fn from_json(raw: &str) -> CatalogResult<Vec<Descriptor>> {
    let descriptors: Vec<Descriptor> = serde_json::from_str(raw)?;
    validate(&descriptors)?;
    Ok(descriptors)
}

/// Check the input contract of the search layer.
///
/// Empty names are rejected. Duplicate ids are allowed but logged, since the
/// cache tells descriptors apart by position, not id.
pub fn validate(descriptors: &[Descriptor]) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for (index, descriptor) in descriptors.iter().enumerate() {
        if descriptor.name.is_empty() {
            return Err(CatalogError::InvalidDescriptor {
                index,
                id: descriptor.id.clone(),
            });
        }
        if !seen.insert(descriptor.id.as_str()) {
            tracing::warn!(id = %descriptor.id, index, "duplicate descriptor id");
        }
    }
    Ok(())
}
