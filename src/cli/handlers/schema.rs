//! Schema command handler

use std::io::Write;

use crate::config::schema::FIELDS;
use crate::error::{AppError, AppResult};

/// Handler for the schema command
pub struct SchemaCommandHandler;

impl SchemaCommandHandler {
    /// Print every declared key with its environment variable, default and description
    pub fn execute<W: Write>(out: &mut W) -> AppResult<()> {
        Self::write_fields(out).map_err(|e| AppError::io("<stdout>", e))
    }

    fn write_fields<W: Write>(out: &mut W) -> std::io::Result<()> {
        let key_width = FIELDS.iter().map(|f| f.key.len()).max().unwrap_or(0);
        let env_width = FIELDS
            .iter()
            .map(|f| f.env.unwrap_or("-").len())
            .max()
            .unwrap_or(0);

        for field in FIELDS {
            writeln!(
                out,
                "{:<key_width$}  {:<env_width$}  default: {}",
                field.key,
                field.env.unwrap_or("-"),
                field.default.display(),
            )?;
            writeln!(out, "{:<key_width$}  {}", "", field.doc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_every_field() {
        let mut out = Vec::new();
        SchemaCommandHandler::execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for field in FIELDS {
            assert!(text.contains(field.key), "missing {}", field.key);
            assert!(text.contains(field.doc));
        }
        assert!(text.contains("CENTRAL_LEDGER_ADMIN_URL"));
        assert!(text.contains("default: 0.0.0.0:4003"));
        assert!(text.contains("default: []"));
    }
}
