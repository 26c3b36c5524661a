//! Library listing command handler.

use anyhow::Result;

use crate::display::print_library;
use crate::document::Library;

pub fn run_list() -> Result<()> {
    let library = Library::open_default()?;
    print_library(library.documents());
    Ok(())
}
