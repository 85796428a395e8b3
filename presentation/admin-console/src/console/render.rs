use std::fmt::Write;

use bigdecimal::RoundingMode;

use business::domain::catalog::view::{CatalogSnapshot, FetchMode, ViewStatus};
use business::domain::product::model::Product;

pub const HELP: &str = "\
Commands:
  list                       show the current products
  refresh | retry            reload every product
  search <term>              search on the server (blank term lists all)
  category <name> | --all    products in one category, or all again
  filter <text>              narrow the list by name, description or brand
  show <id>                  product details
  create key=value ...       add a product
  edit <id> key=value ...    update a product (omit image to keep it)
  delete <id>                remove a product
  image <id> <path>          save a product image to a file
  help                       this text
  quit                       leave
Fields: name, description, brand, category, price, quantity, available, release (YYYY-MM-DD), image (path)";

pub fn render_snapshot(snapshot: &CatalogSnapshot) -> String {
    match &snapshot.status {
        ViewStatus::Loading => "Loading products...".to_string(),
        ViewStatus::Errored(message) => {
            format!("Error: {}\nType 'retry' to try again.", message)
        }
        ViewStatus::Ready => render_ready(snapshot),
    }
}

fn render_ready(snapshot: &CatalogSnapshot) -> String {
    let mut out = String::new();

    let source = match &snapshot.mode {
        FetchMode::All => "all products".to_string(),
        FetchMode::Search(term) => format!("search \"{}\"", term),
        FetchMode::Category(category) => format!("category \"{}\"", category),
    };
    let _ = write!(
        out,
        "{} of {} from {}",
        snapshot.visible.len(),
        snapshot.total,
        source
    );
    if !snapshot.filter_text.is_empty() {
        let _ = write!(out, ", filtered by \"{}\"", snapshot.filter_text);
    }
    out.push('\n');

    if !snapshot.categories.is_empty() {
        let _ = writeln!(out, "Categories: {}", snapshot.categories.join(", "));
    }

    if snapshot.visible.is_empty() {
        out.push_str("No products found.");
        return out;
    }

    let lines: Vec<String> = snapshot.visible.iter().map(render_card).collect();
    out.push_str(&lines.join("\n"));
    out
}

/// One line per product in the list.
pub fn render_card(product: &Product) -> String {
    format!(
        "#{:<4} {} [{}]  {}  ${}  qty {}  {}",
        product.id.get(),
        product.name,
        product.brand,
        product.category,
        format_price(product),
        product.quantity,
        availability(product)
    )
}

pub fn render_details(product: &Product, image_url: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", product.id, product.name);
    let _ = writeln!(out, "  Brand:       {}", product.brand);
    let _ = writeln!(out, "  Category:    {}", product.category);
    let _ = writeln!(out, "  Description: {}", product.description);
    let _ = writeln!(out, "  Price:       ${}", format_price(product));
    let _ = writeln!(out, "  Quantity:    {}", product.quantity);
    let _ = writeln!(out, "  Status:      {}", availability(product));
    let _ = writeln!(
        out,
        "  Released:    {}",
        product
            .release_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    let image = match (&product.image, image_url) {
        (Some(meta), Some(url)) => format!(
            "{} ({}) {}",
            meta.file_name.as_deref().unwrap_or("unnamed"),
            meta.content_type,
            url
        ),
        (Some(meta), None) => meta.content_type.clone(),
        (None, _) => "none".to_string(),
    };
    let _ = write!(out, "  Image:       {}", image);
    out
}

fn format_price(product: &Product) -> String {
    product
        .price
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_string()
}

fn availability(product: &Product) -> &'static str {
    if product.available {
        "Available"
    } else {
        "Out of stock"
    }
}
