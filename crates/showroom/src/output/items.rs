//! Item output formatting.

use std::collections::BTreeMap;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use showroom_catalog::filter::{ActiveFilter, VisibleList};
use showroom_catalog::{Catalog, Item, Renderer, TagValue};

use super::helpers::{format_filter_tags, format_php, format_summary, format_tag_value, truncate_str};

/// Presentation settings for a list of items.
#[derive(Debug, Clone)]
pub struct ListStyle {
    /// Whether to use colors.
    pub use_colors: bool,
    /// Noun for the summary line.
    pub noun: String,
    /// Maximum rows to print; `None` prints every visible item.
    pub limit: Option<usize>,
    /// Active filters, shown as tags above the results.
    pub filters: Vec<ActiveFilter>,
}

/// JSON output structure for list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub items: Vec<ItemOutput<'a>>,
    pub count: usize,
    pub total: usize,
    pub filters: &'a [ActiveFilter],
    pub has_more: bool,
}

/// JSON output structure for a single item.
#[derive(Serialize)]
pub struct ItemOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub brand: &'a str,
    pub price: f64,
    pub price_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_on: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: &'a BTreeMap<String, TagValue>,
}

impl<'a> From<&'a Item> for ItemOutput<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            category: &item.category,
            brand: &item.brand,
            price: item.price,
            price_display: format_php(item.price),
            listed_on: item.listed_on.map(|d| d.to_string()),
            tags: &item.tags,
        }
    }
}

/// Resolves the ids of a view to items, up to `limit`.
fn visible_items<'a>(catalog: &'a Catalog, view: &VisibleList, limit: Option<usize>) -> Vec<&'a Item> {
    view.ids
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .filter_map(|id| catalog.get(id))
        .collect()
}

/// Formats a view as JSON.
pub fn format_items_json(
    catalog: &Catalog,
    view: &VisibleList,
    style: &ListStyle,
) -> Result<String, serde_json::Error> {
    let items: Vec<ItemOutput> = visible_items(catalog, view, style.limit)
        .into_iter()
        .map(ItemOutput::from)
        .collect();

    let output = ListOutput {
        has_more: items.len() < view.count,
        items,
        count: view.count,
        total: view.total,
        filters: &style.filters,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a view as a table with filter tags and a summary line.
pub fn format_items_table(catalog: &Catalog, view: &VisibleList, style: &ListStyle) -> String {
    let mut output = String::new();

    if !style.filters.is_empty() {
        output.push_str(&format_filter_tags(&style.filters, style.use_colors));
        output.push('\n');
    }

    let summary = format_summary(view.count, &style.noun);
    if style.use_colors {
        output.push_str(&format!("{}\n", summary.bold()));
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    if view.is_empty() {
        return output;
    }
    output.push('\n');

    // Header
    let header = format!(
        "{:<14} {:<10} {:<10} {:>14}  {}",
        "ID", "Category", "Brand", "Price", "Name"
    );
    if style.use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    let items = visible_items(catalog, view, style.limit);
    for item in &items {
        let price = format!("{:>14}", format_php(item.price));
        let price = if style.use_colors {
            price.green().to_string()
        } else {
            price
        };

        let line = format!(
            "{:<14} {:<10} {:<10} {}  {}",
            truncate_str(&item.id, 14),
            truncate_str(&item.category, 10),
            truncate_str(&item.brand, 10),
            price,
            item.name
        );
        output.push_str(&line);
        output.push('\n');
    }

    if items.len() < view.count {
        output.push_str(&format!(
            "\n({} more not shown; use --all to list every one)\n",
            view.count - items.len()
        ));
    }

    output
}

/// Formats one item's details as a table (show command).
pub fn format_item_details_table(item: &Item, use_colors: bool) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n\n", item.name.bold()));
    } else {
        output.push_str(&format!("{}\n\n", item.name));
    }

    output.push_str(&format!("ID:       {}\n", item.id));
    if !item.category.is_empty() {
        output.push_str(&format!("Category: {}\n", item.category));
    }
    if !item.brand.is_empty() {
        output.push_str(&format!("Brand:    {}\n", item.brand));
    }
    output.push_str(&format!("Price:    {}\n", format_php(item.price)));
    if let Some(date) = item.listed_on {
        output.push_str(&format!("Listed:   {}\n", date.format("%B %d, %Y")));
    }

    if !item.tags.is_empty() {
        output.push_str("\nTags:\n");
        for (name, value) in &item.tags {
            output.push_str(&format!("  {}: {}\n", name, format_tag_value(value)));
        }
    }

    output
}

/// Formats one item's details as JSON (show command).
pub fn format_item_details_json(item: &Item) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ItemOutput::from(item))
}

/// Renders views as tables.
pub struct TableRenderer<W> {
    out: W,
    style: ListStyle,
}

impl<W: Write> TableRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, style: ListStyle) -> Self {
        Self { out, style }
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, catalog: &Catalog, view: &VisibleList) -> io::Result<()> {
        let table = format_items_table(catalog, view, &self.style);
        self.out.write_all(table.as_bytes())?;
        self.out.flush()
    }
}

/// Renders views as JSON documents.
pub struct JsonRenderer<W> {
    out: W,
    style: ListStyle,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, style: ListStyle) -> Self {
        Self { out, style }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    type Error = crate::commands::CommandError;

    fn render(&mut self, catalog: &Catalog, view: &VisibleList) -> Result<(), Self::Error> {
        let json = format_items_json(catalog, view, &self.style)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }
}
