//! CLI logic for the Maquette diagram tool.
//!
//! This module contains the core CLI logic: load configuration, replay a
//! diagram document through an editor session, and write the generated
//! source skeleton.

pub mod error_adapter;

mod args;
mod config;
mod document;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use maquette::{Editor, Language, MaquetteError};

/// Run the Maquette CLI application
///
/// Processes the input diagram document through the editor core and writes
/// the generated source skeleton to the output file.
///
/// # Errors
///
/// Returns `MaquetteError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing or reference-resolution errors
/// - Diagram integrity errors
pub fn run(args: &Args) -> Result<(), MaquetteError> {
    info!(input_path = args.input; "Processing diagram document");

    let app_config = config::load_config(args.config.as_ref())?;

    let language = match &args.language {
        Some(name) => Language::from_name(name),
        None => app_config.generator().language(),
    };

    let document = document::load(&args.input)?;

    let mut editor = Editor::new(app_config);
    document::apply(&document, &mut editor)?;

    let code = editor.generate(language);

    let output = output_path(args, language);
    fs::write(&output, code)?;

    info!(output_file = output, language:% = language; "Source skeleton written");

    Ok(())
}

/// Output path from the arguments, defaulting to the input file stem with
/// the target language's extension.
fn output_path(args: &Args, language: Language) -> String {
    match &args.output {
        Some(path) => path.clone(),
        None => {
            let stem = Path::new(&args.input)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "out".to_string());
            format!("{stem}.{}", language.extension())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, output: Option<&str>) -> Args {
        Args {
            input: input.to_string(),
            output: output.map(str::to_string),
            language: None,
            config: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn output_defaults_to_stem_and_extension() {
        assert_eq!(
            output_path(&args("diagrams/zoo.toml", None), Language::Python),
            "zoo.py"
        );
        assert_eq!(
            output_path(&args("zoo.toml", Some("custom.txt")), Language::Java),
            "custom.txt"
        );
    }
}
