use crate::models::{DashboardStats, Product};
use super::region::Counter;

pub const NO_RESULTS: &str = "Aucun produit trouvé";
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.png";

pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Two decimals, ties rounded away from zero (`0.125` gives `0.13 €`).
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() / 100.0;
    format!("{:.2} €", cents)
}

pub fn product_card(product: &Product) -> String {
    let image = product
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);

    format!(
        r#"
        <div class="product-card">
            <img src="{image}" alt="{name}" class="product-image">
            <div class="product-body">
                <h3 class="product-title">{name}</h3>
                <p class="product-price">{price}</p>
                <p>{description}</p>
                <div class="product-actions">
                    <a href="/products/{id}" class="btn btn-primary btn-sm">Voir</a>
                    <a href="/products/{id}/edit" class="btn btn-secondary btn-sm">Modifier</a>
                </div>
            </div>
        </div>
    "#,
        image = html_escape(image),
        name = html_escape(&product.name),
        price = format_price(product.price),
        description = html_escape(product.description.as_deref().unwrap_or("")),
        id = product.id,
    )
}

/// Markup for the search results container. Pure: same input, same output.
pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return format!(r#"<p class="text-center">{}</p>"#, NO_RESULTS);
    }

    products.iter().map(product_card).collect()
}

pub fn counter_values(stats: &DashboardStats) -> [(Counter, String); 4] {
    [
        (Counter::TotalUsers, stats.total_users.to_string()),
        (Counter::TotalProducts, stats.total_products.to_string()),
        (Counter::TotalUploads, stats.total_uploads.to_string()),
        (Counter::TotalActivities, stats.total_activities.to_string()),
    ]
}
