use anyhow::Result;
use tracing::info;

use super::HandlerContext;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut repository = ctx.repository();
    repository.store_mut().clear()?;
    info!(key = repository.store().key(), "stored users cleared");

    println!(
        "Cleared stored users in {}. Demo users will be seeded on next start.",
        ctx.data_dir().display()
    );
    Ok(())
}
