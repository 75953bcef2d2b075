//! Show command implementation.
//!
//! Displays one catalog item.

use showroom_catalog::{Catalog, Field};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_item_details_json, format_item_details_table};

/// Executes the show command.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if no item has the given id.
pub fn execute(ctx: &CommandContext, catalog: &Catalog, id: &str) -> Result<()> {
    let item = catalog.get(id).ok_or_else(|| CommandError::NotFound {
        id: id.to_string(),
        suggestion: suggest_id(catalog, id),
    })?;

    if ctx.json_output {
        println!("{}", format_item_details_json(item)?);
    } else if !ctx.quiet {
        print!("{}", format_item_details_table(item, ctx.use_colors));
    }

    Ok(())
}

/// Suggests a known id close to `id`, matching against ids and names.
fn suggest_id(catalog: &Catalog, id: &str) -> Option<String> {
    let by_id = catalog
        .items()
        .iter()
        .map(|item| item.id.as_str())
        .find(|known| known.eq_ignore_ascii_case(id));
    if let Some(known) = by_id {
        return Some(known.to_string());
    }

    let name = catalog.suggest(&Field::Name, id)?;
    catalog
        .items()
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_catalog::Item;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("click125", "Honda Click", "scooter", "honda", 79900.0),
            Item::new("ninja400", "Kawasaki Ninja", "sport", "kawasaki", 339000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_suggest_id_case_insensitive() {
        assert_eq!(suggest_id(&catalog(), "NINJA400"), Some("ninja400".to_string()));
    }

    #[test]
    fn test_suggest_id_by_name() {
        assert_eq!(suggest_id(&catalog(), "honda clik"), Some("click125".to_string()));
    }

    #[test]
    fn test_suggest_id_none() {
        assert_eq!(suggest_id(&catalog(), "xsr155"), None);
    }

    #[test]
    fn test_execute_missing_item() {
        let ctx = CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            noun: "motorcycle".to_string(),
        };

        let err = execute(&ctx, &catalog(), "ninja").unwrap_err();
        assert!(matches!(err, CommandError::NotFound { ref id, .. } if id == "ninja"));
        assert!(execute(&ctx, &catalog(), "ninja400").is_ok());
    }
}
