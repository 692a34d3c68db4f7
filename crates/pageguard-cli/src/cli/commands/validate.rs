//! `pageguard validate` – check one form field value.

use anyhow::Result;
use pageguard_core::validation::{sanitize_string, validate_field};

pub fn run_validate(field: &str, value: &str, required: bool) -> Result<()> {
    let value = sanitize_string(value);
    validate_field(field, &value, required)?;
    println!("ok");
    Ok(())
}
