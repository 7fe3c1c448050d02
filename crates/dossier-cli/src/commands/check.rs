use colored::Colorize;
use dossier_catalog::Catalog;
use dossier_engine::validate_catalog;

pub fn run(catalog: &Catalog) -> Result<(), String> {
    let issues = validate_catalog(catalog);

    for issue in &issues {
        let level = if issue.is_error {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        eprintln!("  {level}: {}: {}", issue.subject, issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "catalog check failed with {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} records, {} warning{}",
        catalog.len(),
        warnings,
        if warnings == 1 { "" } else { "s" },
    );

    Ok(())
}
