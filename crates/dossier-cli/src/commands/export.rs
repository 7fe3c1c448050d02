use std::path::Path;

use dossier_catalog::Catalog;
use dossier_engine::{DossierExport, EngineConfig, ExportFormat, export_file_stem};

use crate::SelectionArgs;

pub fn run(
    catalog: &Catalog,
    config: &EngineConfig,
    args: &SelectionArgs,
    format: &str,
    output: Option<&Path>,
) -> Result<(), String> {
    let format = ExportFormat::parse(format).map_err(|e| e.to_string())?;
    let (selection, identity) = super::build_selection(catalog, args)?;

    let export = DossierExport::build(catalog, config, &selection, &identity);
    let content = export.render(format).map_err(|e| e.to_string())?;

    if let Some(path) = output {
        // A directory target gets a file name derived from the code name.
        let path = if path.is_dir() {
            path.join(format!(
                "{}_dossier.{}",
                export_file_stem(&identity.codename),
                format.extension()
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
