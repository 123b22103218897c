//! CLI commands for character name table operations

use std::fs;
use std::path::Path;

use crate::formats::names::{
    CharacterEntry, NameTableDocument, build_names_bytes, parse_names_bytes, parse_names_json,
    serialize_names_json,
};

/// Decompile or compile a name table, switching on flags and extension
pub fn execute(
    input: &Path,
    output: Option<&Path>,
    compile: bool,
    indent: usize,
    verify: bool,
) -> anyhow::Result<()> {
    if compile || super::is_json_path(input) {
        if verify {
            anyhow::bail!("--verify only applies when decompiling a binary table");
        }
        compile_table(input, output)
    } else {
        decompile_table(input, output, indent, verify)
    }
}

fn decompile_table(
    input: &Path,
    output: Option<&Path>,
    indent: usize,
    verify: bool,
) -> anyhow::Result<()> {
    let data = fs::read(input)?;
    let doc = parse_names_bytes(&data);

    if verify {
        verify_round_trip(&doc, data.len())?;
    }

    let output_path = super::resolve_output(input, output, "json");
    fs::write(&output_path, serialize_names_json(&doc, indent)?)?;

    let named = doc
        .characters
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .count();
    println!("Decompiled {} -> {}", input.display(), output_path.display());
    println!("  Character records: {}", doc.characters.len());
    println!("  With names: {named}");
    Ok(())
}

fn compile_table(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let json = fs::read_to_string(input)?;
    let doc = parse_names_json(&json)?;

    let bytes = build_names_bytes(&doc)?;
    let output_path = super::resolve_output(input, output, "_dt");
    fs::write(&output_path, &bytes)?;

    println!(
        "Compiled {} character records into {} ({} bytes)",
        doc.characters.len(),
        output_path.display(),
        bytes.len()
    );
    Ok(())
}

/// Recompile the document in memory and compare against a fresh decode
fn verify_round_trip(doc: &NameTableDocument, source_size: usize) -> anyhow::Result<()> {
    let rebuilt = build_names_bytes(doc)?;
    if rebuilt.len() != source_size {
        println!(
            "Note: recompiled size {} differs from source size {}",
            rebuilt.len(),
            source_size
        );
    }

    let reparsed = parse_names_bytes(&rebuilt);
    if reparsed.characters.len() != doc.characters.len() {
        anyhow::bail!(
            "recompile yields {} character records, source had {}",
            reparsed.characters.len(),
            doc.characters.len()
        );
    }

    let mut drifted = Vec::new();
    for (before, after) in doc.characters.iter().zip(&reparsed.characters) {
        if character_differs(before, after) {
            drifted.push(before.id);
        }
    }

    if drifted.is_empty() {
        println!(
            "Verified: all {} character records survive a recompile",
            doc.characters.len()
        );
        Ok(())
    } else {
        for id in &drifted {
            println!("  character {id} differs after recompiling");
        }
        anyhow::bail!(
            "{} of {} character records do not survive a recompile",
            drifted.len(),
            doc.characters.len()
        )
    }
}

fn character_differs(before: &CharacterEntry, after: &CharacterEntry) -> bool {
    before.id != after.id || before.name != after.name || before.fields != after.fields
}
