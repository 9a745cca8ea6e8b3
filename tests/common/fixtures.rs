//! Static catalogues used across harnesses.

use super::builders::DescriptorBuilder;
use dszoo_core::Descriptor;

/// The three entries of the original page, as JSON.
pub const CATALOG_JSON: &str = r#"[
    {
        "id": "array",
        "name": "Arranjo",
        "alternateName": "Array",
        "description": "Itens do mesmo tipo em um bloco de comprimento definido",
        "alsoKnownAs": ["Vetor", "Lista"]
    },
    {
        "id": "record",
        "name": "Registro",
        "alternateName": "Record",
        "description": "Itens de tipos possivelmente diferentes em um bloco estruturado",
        "alsoKnownAs": ["Struct", "Structure", "Estrutura"]
    },
    {
        "id": "linked-list",
        "name": "Lista encadeada",
        "description": "Sequência de nós estruturados que pode crescer dinamicamente"
    }
]"#;

/// A wider catalogue exercising every optional field.
pub fn catalog_wide() -> Vec<Descriptor> {
    vec![
        DescriptorBuilder::new("array", "Arranjo")
            .alternate("Array")
            .alias("Vetor")
            .alias("Lista")
            .keyword("contíguo")
            .build(),
        DescriptorBuilder::new("stack", "Pilha")
            .alternate("Stack")
            .alias("LIFO")
            .build(),
        DescriptorBuilder::new("queue", "Fila")
            .alternate("Queue")
            .alias("FIFO")
            .keyword("buffer")
            .build(),
        DescriptorBuilder::new("ring-buffer", "Buffer circular")
            .alternate("Ring buffer")
            .keyword("fila")
            .build(),
        DescriptorBuilder::new("hash-map", "Tabela hash")
            .alternate("Hash map")
            .alias("Dicionário")
            .alias("Mapa")
            .build(),
        DescriptorBuilder::new("tree", "Árvore").alternate("Tree").build(),
    ]
}

/// `n` synthetic descriptors with a handful of aliases each, for benches and
/// scaling tests.
pub fn catalog_synthetic(n: usize) -> Vec<Descriptor> {
    (0..n)
        .map(|i| {
            DescriptorBuilder::new(format!("ds-{i}"), format!("Estrutura {i}"))
                .alternate(format!("Structure {i}"))
                .alias(format!("alias-{}", i % 17))
                .alias(format!("Grupo {}", i % 5))
                .keyword(format!("kw{}", i % 31))
                .build()
        })
        .collect()
}
