//! Assertions over `aurora list --format json` output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

fn users(json: &Value) -> Result<&Vec<Value>> {
    json.as_array()
        .context("Expected a JSON array of users")
}

pub fn assert_user_count(json: &Value, expected: usize) -> Result<()> {
    let users = users(json)?;
    if users.len() != expected {
        bail!("Expected {} users, got {}", expected, users.len());
    }
    Ok(())
}

/// Assert the ids appear in exactly this order.
pub fn assert_user_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = users(json)?
        .iter()
        .enumerate()
        .map(|(i, user)| {
            user["id"]
                .as_str()
                .with_context(|| format!("User {} missing id", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if ids != expected {
        bail!("Expected ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}
