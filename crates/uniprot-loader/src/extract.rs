//! Mapping from one entry subtree to the domain model.
//!
//! Every function here is total over well-formed subtrees: optional
//! substructure that is missing becomes a defined default, and only
//! structurally required pieces (the sequence block, dbReference and
//! property attributes) can produce an error. Sub-extractions are
//! independent of each other and scan only their own named child subtree.

use std::collections::BTreeMap;

use uniprot_types::{
    well_known, DbReference, Gene, GeneNameType, Organism, OrganismNameType, Sequence,
    UniProtEntry,
};

use crate::element::Element;
use crate::namespace::TagTable;
use crate::types::{UniprotError, UniprotResult};

/// Builds the full record for one `entry` subtree.
pub(crate) fn entry(tags: &TagTable, entry: &Element) -> UniprotResult<UniProtEntry> {
    let accessions: Vec<String> = entry
        .find_all(&tags.accession)
        .map(|e| e.text().to_string())
        .collect();

    // The first <name> is the mnemonic entry name
    let entry_name = entry
        .find(&tags.name)
        .map(|e| e.text().to_string())
        .unwrap_or_default();

    let protein_name = entry
        .find(&tags.protein)
        .and_then(|p| p.find(&tags.recommended_name))
        .and_then(|r| r.find(&tags.full_name))
        .map(|e| e.text().to_string());

    let keywords = entry
        .find_all(&tags.keyword)
        .map(|e| e.text().to_string())
        .collect();

    let protein_existence = entry
        .find(&tags.protein_existence)
        .and_then(|e| e.attr("type"))
        .map(str::to_string);

    Ok(UniProtEntry {
        primary_accession: accessions.first().cloned().unwrap_or_default(),
        accessions,
        entry_name,
        dataset: entry.attr("dataset").unwrap_or_default().to_string(),
        protein_name,
        gene: gene(tags, entry),
        organism: organism(tags, entry),
        sequence: sequence(tags, entry)?,
        keywords,
        db_references: db_references(tags, entry)?,
        protein_existence,
    })
}

/// Extracts the gene block. An entry without one yields `None`, not an
/// all-empty `Gene`.
fn gene(tags: &TagTable, entry: &Element) -> Option<Gene> {
    let gene_elem = entry.find(&tags.gene)?;

    let mut gene = Gene::default();
    for name in gene_elem.find_all(&tags.name) {
        // Unknown type attribute values are dropped, not surfaced
        let Some(kind) = name.attr("type").and_then(GeneNameType::from_attr) else {
            continue;
        };
        let text = name.text().to_string();
        match kind {
            GeneNameType::Primary => gene.primary = Some(text),
            GeneNameType::Synonym => gene.synonyms.push(text),
            GeneNameType::OrderedLocus => gene.ordered_locus_names.push(text),
            GeneNameType::Orf => gene.orf_names.push(text),
        }
    }

    Some(gene)
}

/// Extracts the organism block. Always produces an `Organism`; a missing
/// block leaves every field empty.
fn organism(tags: &TagTable, entry: &Element) -> Organism {
    let mut organism = Organism::default();
    let Some(org) = entry.find(&tags.organism) else {
        return organism;
    };

    for name in org.find_all(&tags.name) {
        match name.attr("type").and_then(OrganismNameType::from_attr) {
            Some(OrganismNameType::Scientific) => {
                organism.scientific_name = Some(name.text().to_string());
            }
            Some(OrganismNameType::Common) => {
                organism.common_name = Some(name.text().to_string());
            }
            None => {}
        }
    }

    organism.tax_id = org
        .find_all(&tags.db_reference)
        .find(|r| r.attr("type") == Some(well_known::NCBI_TAXONOMY))
        .and_then(|r| r.attr("id"))
        .map(str::to_string);

    if let Some(lineage) = org.find(&tags.lineage) {
        organism.lineage = lineage
            .find_all(&tags.taxon)
            .map(|t| t.text().to_string())
            .collect();
    }

    organism
}

/// Extracts the sequence block. The element itself is structurally
/// required; its `length`/`mass`/`checksum` attributes are not.
fn sequence(tags: &TagTable, entry: &Element) -> UniprotResult<Sequence> {
    let seq = entry
        .find(&tags.sequence)
        .ok_or(UniprotError::MissingElement { element: "sequence" })?;

    let value: String = seq
        .text()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    Ok(Sequence {
        value,
        length: numeric_attr(seq, "length")?,
        mass: numeric_attr(seq, "mass")?,
        checksum: seq.attr("checksum").unwrap_or_default().to_string(),
    })
}

/// Extracts all entry-level cross-references, in document order.
fn db_references(tags: &TagTable, entry: &Element) -> UniprotResult<Vec<DbReference>> {
    let mut references = Vec::new();
    for elem in entry.find_all(&tags.db_reference) {
        let database = elem
            .attr("type")
            .ok_or(UniprotError::MissingAttribute {
                attribute: "type",
                element: "dbReference",
            })?
            .to_string();
        let id = elem
            .attr("id")
            .ok_or(UniprotError::MissingAttribute {
                attribute: "id",
                element: "dbReference",
            })?
            .to_string();

        let molecule = elem
            .find(&tags.molecule)
            .and_then(|m| m.attr("id"))
            .map(str::to_string);

        let mut properties = BTreeMap::new();
        for prop in elem.find_all(&tags.property) {
            let key = prop.attr("type").ok_or(UniprotError::MissingAttribute {
                attribute: "type",
                element: "property",
            })?;
            let value = prop.attr("value").ok_or(UniprotError::MissingAttribute {
                attribute: "value",
                element: "property",
            })?;
            // Repeated property types: last occurrence wins
            properties.insert(key.to_string(), value.to_string());
        }

        references.push(DbReference {
            database,
            id,
            molecule,
            properties,
        });
    }
    Ok(references)
}

/// Parses a numeric attribute, defaulting to 0 when absent.
fn numeric_attr(element: &Element, name: &str) -> UniprotResult<u32> {
    match element.attr(name) {
        None => Ok(0),
        Some(raw) => raw.parse().map_err(|_| UniprotError::InvalidInteger {
            value: raw.to_string(),
        }),
    }
}
