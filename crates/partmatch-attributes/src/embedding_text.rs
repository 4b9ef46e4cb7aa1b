use partmatch_normalize::normalize_name;

use crate::category::detect_category;
use crate::product_type::extract_product_type;
use partmatch_types::Category;

fn category_keyword(c: Category) -> Option<&'static str> {
    match c {
        Category::Pert => Some("pert полиэтилен"),
        Category::Pnd => Some("пнд компрессионная"),
        Category::Prestige => Some("prestige малошумная"),
        Category::Outdoor => Some("наружная канализация"),
        Category::Ppr => Some("ппр водопровод"),
        Category::Sewer => Some("канализация серый"),
        Category::None => None,
    }
}

/// Build the text handed to the Embedding Index capability: the product
/// type and category keywords are repeated ahead of the normalized name
/// so the embedding model weighs them more heavily than incidental noun
/// phrases (brand suffixes, SKU fragments). Grounded in the original
/// system's query-preparation step, which the distilled specification
/// does not itself describe.
pub fn embedding_query_text(name: &str) -> String {
    let normalized = normalize_name(name);
    let mut boosts = Vec::new();

    if let Some(ty) = extract_product_type(name) {
        let marker = format!("{ty:?}").to_lowercase();
        boosts.push(marker.clone());
        boosts.push(marker);
    }

    if let Some(kw) = category_keyword(detect_category(name)) {
        boosts.push(kw.to_string());
    }

    if boosts.is_empty() {
        normalized
    } else {
        format!("{} {}", boosts.join(" "), normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosts_product_type_and_category() {
        let text = embedding_query_text("Труба ПП канализационная малошумная 110");
        assert!(text.contains("prestige малошумная"));
        assert!(text.contains("труба"));
    }

    #[test]
    fn falls_back_to_plain_normalized_name() {
        let text = embedding_query_text("xyz 110");
        assert_eq!(text, normalize_name("xyz 110"));
    }
}
