use serde::Serialize;

use fl_core::taxonomy;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TaxonomyArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CategoryRow {
    category: &'static str,
    subcategories: String,
}

/// Handle `fieldline taxonomy`.
pub fn handle(args: &TaxonomyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(category) = args.category.as_deref()
        && !taxonomy::is_category(category)
    {
        anyhow::bail!(
            "unknown category '{category}'; expected one of: {}",
            taxonomy::categories().collect::<Vec<_>>().join(", ")
        );
    }

    output(&rows(args.category.as_deref()), flags.format)
}

fn rows(filter: Option<&str>) -> Vec<CategoryRow> {
    taxonomy::categories()
        .filter(|category| filter.is_none_or(|wanted| wanted == *category))
        .map(|category| CategoryRow {
            category,
            subcategories: taxonomy::subcategories(category).join(", "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::rows;

    #[test]
    fn filter_keeps_one_category() {
        let rows = rows(Some("Infrastructure"));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].subcategories.starts_with("Pothole"));
        assert!(rows[0].subcategories.ends_with("Others"));
    }

    #[test]
    fn unfiltered_lists_every_category() {
        assert_eq!(rows(None).len(), fl_core::taxonomy::categories().count());
    }
}
