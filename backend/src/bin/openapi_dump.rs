//! Print the OpenAPI document as JSON.

use registration::ApiDoc;
use utoipa::OpenApi;

fn main() -> std::io::Result<()> {
    let json = ApiDoc::openapi()
        .to_json()
        .map_err(|e| std::io::Error::other(format!("failed to render OpenAPI: {e}")))?;
    println!("{json}");
    Ok(())
}
