//! Generate expected terminal output files for integration tests.
//!
//! Usage (from the workspace root):
//!   `cargo run -p draft-renderers-terminal --example generate_terminal_fixtures`

use draft_renderers_core::Options;
use draft_renderers_dev::generate_fixtures::FixtureGenerator;
use draft_renderers_terminal::{Appearance, Processor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    FixtureGenerator::new("terminal", "txt").generate(|content, output| {
        let processor = Processor::new(Options::builder().depth_margin(2).build())
            .with_appearance(Appearance::plain());
        processor.write_to(content, output)?;
        Ok(())
    })
}
