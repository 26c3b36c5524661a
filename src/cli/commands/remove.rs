//! Remove command handler.

use anyhow::Result;

use crate::document::Library;
use crate::ui::Style;

pub fn run_remove(selector: &str) -> Result<()> {
    let mut library = Library::open_default()?;
    let removed = library.remove(selector)?;
    library.save()?;
    println!("{} Removed {}", Style::success("✓"), Style::title(&removed.title));
    Ok(())
}
