//! CLI commands for quest table operations

use std::fs;
use std::path::Path;

use crate::formats::quest::{
    QuestDocument, QuestEntry, build_quest_bytes, parse_quest_bytes, parse_quest_json,
    serialize_quest_json,
};

/// Decompile or compile a quest table, switching on flags and extension
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
    let doc = parse_quest_bytes(&data)?;

    if verify {
        verify_round_trip(&doc, data.len())?;
    }

    let output_path = super::resolve_output(input, output, "json");
    fs::write(&output_path, serialize_quest_json(&doc, indent)?)?;

    let populated = doc
        .quests
        .iter()
        .filter(|q| !q.name.is_empty() || !q.client.is_empty() || !q.description.is_empty())
        .count();
    println!("Decompiled {} -> {}", input.display(), output_path.display());
    println!("  Quest slots: {}", doc.quests.len());
    println!("  Populated: {populated}");
    Ok(())
}

fn compile_table(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let json = fs::read_to_string(input)?;
    let doc = parse_quest_json(&json)?;

    let bytes = build_quest_bytes(&doc)?;
    let output_path = super::resolve_output(input, output, "_dt");
    fs::write(&output_path, &bytes)?;

    println!(
        "Compiled {} quest slots into {} ({} bytes)",
        doc.quests.len(),
        output_path.display(),
        bytes.len()
    );
    Ok(())
}

/// Recompile the document in memory and compare against a fresh decode
fn verify_round_trip(doc: &QuestDocument, source_size: usize) -> anyhow::Result<()> {
    let rebuilt = build_quest_bytes(doc)?;
    if rebuilt.len() != source_size {
        println!(
            "Note: recompiled size {} differs from source size {}",
            rebuilt.len(),
            source_size
        );
    }

    let reparsed = parse_quest_bytes(&rebuilt)?;
    let mut drifted = Vec::new();
    for (before, after) in doc.quests.iter().zip(&reparsed.quests) {
        if quest_differs(before, after) {
            drifted.push(before.index);
        }
    }

    if drifted.is_empty() {
        println!(
            "Verified: all {} quest slots survive a recompile",
            doc.quests.len()
        );
        Ok(())
    } else {
        for index in &drifted {
            println!("  quest {index} differs after recompiling");
        }
        anyhow::bail!(
            "{} of {} quest slots do not survive a recompile",
            drifted.len(),
            doc.quests.len()
        )
    }
}

fn quest_differs(before: &QuestEntry, after: &QuestEntry) -> bool {
    before.counter != after.counter
        || before.reserved != after.reserved
        || before.name != after.name
        || before.client != after.client
        || before.description != after.description
        || before.progress != after.progress
}
