//! Fixture generation for renderer integration tests.
//!
//! ```ignore
//! use draft_renderers_dev::generate_fixtures::FixtureGenerator;
//!
//! FixtureGenerator::new("terminal", "txt").generate(|content, output| {
//!     Processor::new(Options::default()).write_to(content, output)?;
//!     Ok(())
//! })?;
//! ```

use std::{error::Error, fs, path::Path, path::PathBuf};

use crossterm::style::{PrintStyledContent, Stylize};
use draft_model::RawContentState;

/// Writes expected outputs for every raw content fixture of a renderer.
pub struct FixtureGenerator {
    renderer_name: String,
    output_extension: String,
}

impl FixtureGenerator {
    /// Create a generator for `renderers/<renderer_name>`.
    ///
    /// * `renderer_name` - Directory name of the renderer (e.g., "terminal")
    /// * `output_extension` - File extension for output files (e.g., "txt")
    #[must_use]
    pub fn new(renderer_name: &str, output_extension: &str) -> Self {
        Self {
            renderer_name: renderer_name.to_string(),
            output_extension: output_extension.to_string(),
        }
    }

    /// Render every `tests/fixtures/source/*.json` of the renderer into
    /// `tests/fixtures/expected/`.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file I/O fails. Fixtures
    /// that fail to load or render are reported and skipped.
    pub fn generate<F>(&self, render_fn: F) -> Result<(), Box<dyn Error>>
    where
        F: Fn(&RawContentState, &mut Vec<u8>) -> Result<(), Box<dyn Error>>,
    {
        let base = PathBuf::from("renderers")
            .join(&self.renderer_name)
            .join("tests/fixtures");
        self.generate_dir(&base.join("source"), &base.join("expected"), &render_fn)
    }

    fn generate_dir<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        render_fn: &F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: Fn(&RawContentState, &mut Vec<u8>) -> Result<(), Box<dyn Error>>,
    {
        fs::create_dir_all(output_dir)?;

        println!(
            "Generating expected {} outputs...\n",
            self.renderer_name.to_uppercase()
        );

        let mut success_count = 0;
        let mut error_count = 0;

        let mut inputs: Vec<_> = input_dir
            .read_dir()?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        inputs.sort();

        for input_path in inputs {
            let Some(output_path) = input_path
                .file_stem()
                .map(|name| output_dir.join(name).with_extension(&self.output_extension))
            else {
                eprintln!(
                    "{} Skipping {}: unable to determine output file name",
                    PrintStyledContent("?".yellow()),
                    input_path.display()
                );
                continue;
            };

            let content = match draft_model::parse_file(&input_path) {
                Ok(content) => content,
                Err(e) => {
                    println!(
                        "{} Error loading {}: {e}",
                        PrintStyledContent("❌".red()),
                        input_path.display()
                    );
                    error_count += 1;
                    continue;
                }
            };

            let mut output = Vec::new();
            if let Err(e) = render_fn(&content, &mut output) {
                println!(
                    "{} Error rendering {} to {}: {e}",
                    PrintStyledContent("❌".red()),
                    input_path.display(),
                    output_path.display()
                );
                error_count += 1;
                continue;
            }

            fs::write(&output_path, &output)?;
            success_count += 1;

            println!(
                "{} Generated {} ({} bytes)",
                PrintStyledContent("✓".green()),
                output_path.display(),
                output.len()
            );
        }

        println!();
        if error_count > 0 {
            println!(
                "⚠️  Completed with {error_count} error(s). {success_count} file(s) generated."
            );
        } else {
            println!(
                "✨ Done! {success_count} file(s) generated in {}",
                output_dir.display()
            );
        }
        println!("   Manually verify each file before using in tests.");

        Ok(())
    }
}
