use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));
    types.push(clean_type(ContactStatus::export_to_string()?));
    types.push(clean_type(ContactPriority::export_to_string()?));
    types.push(clean_type(UpdateContactRequest::export_to_string()?));
    types.push(clean_type(LogCallRequest::export_to_string()?));
    types.push(clean_type(ContactsResponse::export_to_string()?));

    // Import batch types
    types.push(clean_type(ImportBatch::export_to_string()?));
    types.push(clean_type(BatchesResponse::export_to_string()?));
    types.push(clean_type(ImportCsvRequest::export_to_string()?));
    types.push(clean_type(SkipReason::export_to_string()?));
    types.push(clean_type(SkippedRow::export_to_string()?));
    types.push(clean_type(ImportResponse::export_to_string()?));

    // Filter types
    types.push(clean_type(CarrierGroup::export_to_string()?));
    types.push(clean_type(SortOrder::export_to_string()?));
    types.push(clean_type(ContactFilter::export_to_string()?));
    types.push(clean_type(SavedFilter::export_to_string()?));
    types.push(clean_type(CreateSavedFilterRequest::export_to_string()?));
    types.push(clean_type(SavedFiltersResponse::export_to_string()?));

    // Statistics
    types.push(clean_type(StatusCounts::export_to_string()?));
    types.push(clean_type(CarrierCounts::export_to_string()?));
    types.push(clean_type(ContactStats::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    // Everything lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
