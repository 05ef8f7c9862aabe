//! Print the OpenAPI document as JSON.

use std::error::Error;
use std::io::Write;

use utoipa::OpenApi;
use virtual_market::doc::ApiDoc;

fn main() -> Result<(), Box<dyn Error>> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
