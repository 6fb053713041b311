use crate::services::quiz_service;
use crate::Result;
use std::path::Path;

/// Print the Moodle XML for a quiz file without writing it
pub fn run(input: &Path) -> Result<()> {
    let xml = quiz_service::preview(input)?;
    println!("{}", xml);
    Ok(())
}
