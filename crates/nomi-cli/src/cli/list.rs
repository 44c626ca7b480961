//! `nomi list` -- show every Nomi the API key can talk to.

use anyhow::Result;
use console::style;

/// Print the listing as styled text or raw JSON.
pub async fn list_nomis(json: bool) -> Result<()> {
    let client = super::connect().await?;
    let listing = client.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if listing.nomis.is_empty() {
        println!("  {}", style("No Nomis found.").dim());
        return Ok(());
    }

    println!();
    for nomi in &listing.nomis {
        println!("  {}  {}", style(&nomi.name).cyan().bold(), style(&nomi.uuid).dim());
    }
    println!();
    Ok(())
}
