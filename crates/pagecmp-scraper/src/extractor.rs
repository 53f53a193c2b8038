use scraper::{Html, Selector};

/// Trimmed text of every `tag` element whose style attribute contains
/// `style` as a literal substring, in document order.
pub fn extract(html: &str, tag: &str, style: &str) -> Vec<String> {
    let selector = match Selector::parse(tag) {
        Ok(selector) => selector,
        Err(e) => {
            log::warn!("Skipping extraction, unusable tag `{tag}`: {e}");
            return Vec::new();
        }
    };

    Html::parse_document(html)
        .select(&selector)
        // Matched by name equality, even when `tag` parses as a wider selector.
        .filter(|el| el.value().name() == tag)
        .filter(|el| {
            el.value()
                .attr("style")
                .map_or(false, |css| css.contains(style))
        })
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}
