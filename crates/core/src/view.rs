//! View model assembly.
//!
//! Turns decoded CMS documents into display-ready structures. Everything
//! here is pure: the inputs are already fetched, relationships are resolved
//! through [`Relation`], URLs go through [`crate::url`], and the same inputs
//! always produce the same output. Nothing in this module returns an error;
//! missing data degrades to placeholders and empty lists.

use serde::Serialize;

use crate::content::{Category, Routable, Template};
use crate::preview::ContentMode;
use crate::price::PriceDisplay;
use crate::relation::{resolve_many, Relation};
use crate::url::{normalize_demo_url, resolve_media_url};

/// Storefront name used in page titles.
pub const SITE_NAME: &str = "FolioMate";

/// Site-wide description used by the home page.
pub const SITE_DESCRIPTION: &str =
    "Discover beautifully crafted templates designed to help you build stunning websites faster.";

/// Alt text used when a template has no name.
const DEFAULT_IMAGE_ALT: &str = "Template";

// ---------------------------------------------------------------------------
// Display policy
// ---------------------------------------------------------------------------

/// Knobs controlling how view models are assembled.
#[derive(Debug, Clone)]
pub struct DisplayPolicy {
    /// Maximum number of category labels on a list card (default: `2`).
    pub card_category_limit: usize,
    /// Truncate card descriptions to this many characters (default: no limit).
    pub card_description_max_chars: Option<usize>,
    /// Origin used to resolve root-relative media URLs.
    pub media_base_url: Option<String>,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            card_category_limit: 2,
            card_description_max_chars: None,
            media_base_url: None,
        }
    }
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Card image: a resolved URL or the generic placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thumbnail {
    Image { url: String, alt: String },
    Placeholder,
}

/// A category as shown on cards, badges and filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLabel {
    pub title: String,
    pub slug: String,
}

/// Title and description for the document head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

/// A template in a listing grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateCard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub href: String,
    pub description: Option<String>,
    pub price: PriceDisplay,
    pub price_label: String,
    pub thumbnail: Thumbnail,
    pub demo_url: Option<String>,
    pub categories: Vec<CategoryLabel>,
}

/// One feature section on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: String,
}

/// The template detail page.
///
/// Empty `sections` and `categories` are omitted from the serialized form so
/// the page drops those blocks instead of rendering them empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDetail {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub href: String,
    pub description: Option<String>,
    pub price: PriceDisplay,
    pub price_label: String,
    pub purchase_label: String,
    pub thumbnail: Option<String>,
    pub thumbnail_alt: String,
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryLabel>,
    /// Show the "viewing a draft" banner.
    pub preview: bool,
    pub meta: PageMeta,
}

/// A category listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
    pub title: String,
    pub slug: String,
    pub templates: Vec<TemplateCard>,
    pub count_label: String,
    /// Render the "no templates in this category yet" state.
    pub is_empty: bool,
    pub meta: PageMeta,
}

/// One button of the home page category filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFilterEntry {
    pub label: String,
    /// `None` for the "All Templates" entry.
    pub slug: Option<String>,
    pub active: bool,
}

/// The storefront home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub templates: Vec<TemplateCard>,
    pub filters: Vec<CategoryFilterEntry>,
    pub selected_category: Option<String>,
    pub is_empty: bool,
    pub meta: PageMeta,
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Builds view models under a fixed [`DisplayPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    policy: DisplayPolicy,
}

impl Assembler {
    pub fn new(policy: DisplayPolicy) -> Self {
        Self { policy }
    }

    /// Build a listing card.
    ///
    /// Category labels come from the first `card_category_limit` relations;
    /// unresolved ones among those are dropped rather than backfilled.
    pub fn card(&self, template: &Template) -> TemplateCard {
        let slug = template.effective_slug();
        let price = PriceDisplay::from_price(template.price);

        let thumbnail = match self.thumbnail_url(template) {
            Some(url) => Thumbnail::Image {
                url,
                alt: image_alt(template),
            },
            None => Thumbnail::Placeholder,
        };

        let limit = self.policy.card_category_limit.min(template.categories.len());
        let categories = category_labels(&template.categories[..limit]);

        TemplateCard {
            id: template.id.clone(),
            name: template.name.clone(),
            href: format!("/template/{slug}"),
            slug,
            description: self.card_description(template.description.as_deref()),
            price_label: price.label(),
            price,
            thumbnail,
            demo_url: normalize_demo_url(template.live_demo.as_deref()),
            categories,
        }
    }

    /// Build the detail page for a template read in `mode`.
    pub fn detail(&self, template: &Template, mode: ContentMode) -> TemplateDetail {
        let slug = template.effective_slug();
        let price = PriceDisplay::from_price(template.price);

        let sections = template
            .sections
            .iter()
            .enumerate()
            .map(|(idx, section)| SectionView {
                title: section.title.clone(),
                content: non_blank(section.content.as_deref()),
                image_url: section
                    .image
                    .resolve()
                    .and_then(|m| self.media_url(m.url.as_deref())),
                image_alt: if section.title.trim().is_empty() {
                    format!("Section {}", idx + 1)
                } else {
                    section.title.clone()
                },
            })
            .collect();

        TemplateDetail {
            id: template.id.clone(),
            name: template.name.clone(),
            href: format!("/template/{slug}"),
            slug,
            description: non_blank(template.description.as_deref()),
            price_label: price.label(),
            purchase_label: price.purchase_label(),
            price,
            thumbnail: self.thumbnail_url(template),
            thumbnail_alt: image_alt(template),
            demo_url: normalize_demo_url(template.live_demo.as_deref()),
            sections,
            categories: category_labels(&template.categories),
            preview: mode.is_draft(),
            meta: template_meta(Some(template)),
        }
    }

    /// Build a category page from the category and its templates.
    pub fn category_page(&self, category: &Category, templates: &[Template]) -> CategoryPage {
        let cards: Vec<TemplateCard> = templates.iter().map(|t| self.card(t)).collect();

        CategoryPage {
            title: category.title.clone(),
            slug: category.effective_slug(),
            count_label: count_label(cards.len()),
            is_empty: cards.is_empty(),
            templates: cards,
            meta: category_meta(Some(category)),
        }
    }

    /// Build the home page, optionally narrowed to one category slug.
    pub fn home_page(
        &self,
        templates: &[Template],
        categories: &[Category],
        selected: Option<&str>,
    ) -> HomePage {
        let selected = selected.map(str::trim).filter(|s| !s.is_empty());

        let cards: Vec<TemplateCard> = templates
            .iter()
            .filter(|t| selected.map_or(true, |slug| t.in_category(slug)))
            .map(|t| self.card(t))
            .collect();

        let mut filters = Vec::with_capacity(categories.len() + 1);
        filters.push(CategoryFilterEntry {
            label: "All Templates".to_string(),
            slug: None,
            active: selected.is_none(),
        });
        filters.extend(categories.iter().map(|c| {
            let slug = c.effective_slug();
            CategoryFilterEntry {
                label: c.title.clone(),
                active: selected == Some(slug.as_str()),
                slug: Some(slug),
            }
        }));

        HomePage {
            is_empty: cards.is_empty(),
            templates: cards,
            filters,
            selected_category: selected.map(str::to_string),
            meta: PageMeta {
                title: SITE_NAME.to_string(),
                description: Some(SITE_DESCRIPTION.to_string()),
            },
        }
    }

    fn thumbnail_url(&self, template: &Template) -> Option<String> {
        template
            .thumbnail
            .resolve()
            .and_then(|m| self.media_url(m.url.as_deref()))
    }

    fn media_url(&self, raw: Option<&str>) -> Option<String> {
        resolve_media_url(raw, self.policy.media_base_url.as_deref())
    }

    fn card_description(&self, raw: Option<&str>) -> Option<String> {
        let text = non_blank(raw)?;
        match self.policy.card_description_max_chars {
            Some(max) => Some(truncate_chars(&text, max)),
            None => Some(text),
        }
    }
}

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// Head metadata for a template page; `None` yields the not-found title.
pub fn template_meta(template: Option<&Template>) -> PageMeta {
    match template {
        Some(t) => PageMeta {
            title: format!("{} - {SITE_NAME}", t.name),
            description: Some(
                non_blank(t.description.as_deref())
                    .unwrap_or_else(|| format!("Get {} template", t.name)),
            ),
        },
        None => PageMeta {
            title: "Template Not Found".to_string(),
            description: None,
        },
    }
}

/// Head metadata for a category page; `None` yields the not-found title.
pub fn category_meta(category: Option<&Category>) -> PageMeta {
    match category {
        Some(c) => PageMeta {
            title: format!("{} Templates - {SITE_NAME}", c.title),
            description: Some(format!("Browse {} templates on {SITE_NAME}", c.title)),
        },
        None => PageMeta {
            title: "Category Not Found".to_string(),
            description: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Labels for the resolved categories. A category without a usable slug
/// has no page to link to and is left out.
fn category_labels(relations: &[Relation<Category>]) -> Vec<CategoryLabel> {
    resolve_many(relations)
        .into_iter()
        .filter_map(|c| {
            let slug = c.routable_slug().ok()?;
            Some(CategoryLabel {
                title: c.title.clone(),
                slug,
            })
        })
        .collect()
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 template".to_string()
    } else {
        format!("{count} templates")
    }
}

fn image_alt(template: &Template) -> String {
    if template.name.trim().is_empty() {
        DEFAULT_IMAGE_ALT.to_string()
    } else {
        template.name.clone()
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn template(value: serde_json::Value) -> Template {
        serde_json::from_value(value).unwrap()
    }

    fn category(id: &str, title: &str) -> serde_json::Value {
        json!({ "id": id, "title": title, "slug": crate::slug::derive_slug(title) })
    }

    fn full_template() -> Template {
        template(json!({
            "id": "t1",
            "name": "Modern Portfolio",
            "slug": "modern-portfolio",
            "description": "A clean portfolio.",
            "price": 19.99,
            "liveDemo": "demo.example.com",
            "thumbnail": { "id": "m1", "url": "/media/thumb.png" },
            "sections": [
                { "title": "Hero", "content": "Big header", "image": { "id": "m2", "url": "https://cdn.test/hero.png" } },
                { "title": "", "content": "", "image": "m3" }
            ],
            "categories": [
                category("c1", "Portfolio"),
                category("c2", "Minimal"),
                category("c3", "Dark"),
                category("c4", "Agency"),
                category("c5", "Personal")
            ],
            "_status": "published"
        }))
    }

    fn assembler() -> Assembler {
        Assembler::new(DisplayPolicy {
            media_base_url: Some("http://cms.test".into()),
            ..DisplayPolicy::default()
        })
    }

    #[test]
    fn card_resolves_everything() {
        let card = assembler().card(&full_template());

        assert_eq!(card.href, "/template/modern-portfolio");
        assert_eq!(card.price_label, "$19.99 USD");
        assert_eq!(card.demo_url.as_deref(), Some("https://demo.example.com"));
        assert_matches!(
            &card.thumbnail,
            Thumbnail::Image { url, alt } if url == "http://cms.test/media/thumb.png" && alt == "Modern Portfolio"
        );
    }

    #[test]
    fn card_caps_category_labels_at_two() {
        let card = assembler().card(&full_template());
        let titles: Vec<&str> = card.categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Portfolio", "Minimal"]);
    }

    #[test]
    fn card_skips_categories_without_a_slug() {
        let t = template(json!({
            "id": "t2",
            "name": "Symbols",
            "categories": [{ "id": "c9", "title": "***" }, category("c2", "Shop")]
        }));
        let card = assembler().card(&t);
        let slugs: Vec<&str> = card.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["shop"]);
    }

    #[test]
    fn card_drops_unresolved_categories_within_limit() {
        let t = template(json!({
            "id": "t2",
            "name": "Mixed",
            "categories": ["c1", category("c2", "Shop"), category("c3", "Blog")]
        }));
        let card = assembler().card(&t);
        assert_eq!(card.categories.len(), 1);
        assert_eq!(card.categories[0].slug, "shop");
    }

    #[test]
    fn card_without_thumbnail_uses_placeholder() {
        let t = template(json!({ "id": "t3", "name": "Plain", "thumbnail": "m9" }));
        let card = assembler().card(&t);
        assert_eq!(card.thumbnail, Thumbnail::Placeholder);
        assert_eq!(card.price_label, "Free");
        assert_eq!(card.demo_url, None);
    }

    #[test]
    fn card_description_truncation() {
        let policy = DisplayPolicy {
            card_description_max_chars: Some(10),
            ..DisplayPolicy::default()
        };
        let t = template(json!({
            "id": "t4",
            "name": "Long",
            "description": "Responsive layouts for every screen"
        }));
        let card = Assembler::new(policy).card(&t);
        assert_eq!(card.description.as_deref(), Some("Responsive…"));
    }

    #[test]
    fn detail_includes_sections_and_all_categories() {
        let detail = assembler().detail(&full_template(), ContentMode::Published);

        assert_eq!(detail.categories.len(), 5);
        assert_eq!(detail.sections.len(), 2);
        assert_eq!(detail.sections[0].image_url.as_deref(), Some("https://cdn.test/hero.png"));
        assert_eq!(detail.sections[1].image_url, None);
        assert_eq!(detail.sections[1].image_alt, "Section 2");
        assert_eq!(detail.sections[1].content, None);
        assert_eq!(detail.purchase_label, "Purchase for $19.99");
        assert!(!detail.preview);
        assert_eq!(detail.meta.title, "Modern Portfolio - FolioMate");
    }

    #[test]
    fn detail_without_thumbnail_is_none() {
        let t = template(json!({ "id": "t5", "name": "No Thumb" }));
        let detail = assembler().detail(&t, ContentMode::Draft);
        assert_eq!(detail.thumbnail, None);
        assert!(detail.preview);
        assert_eq!(detail.meta.description.as_deref(), Some("Get No Thumb template"));
    }

    #[test]
    fn detail_omits_empty_sections_and_categories() {
        let t = template(json!({ "id": "t6", "name": "Empty", "sections": [], "categories": [] }));
        let value = serde_json::to_value(assembler().detail(&t, ContentMode::Published)).unwrap();
        assert!(value.get("sections").is_none());
        assert!(value.get("categories").is_none());
        assert_eq!(value["thumbnail"], serde_json::Value::Null);
    }

    #[test]
    fn category_page_counts_templates() {
        let cat: Category = serde_json::from_value(category("c1", "Portfolio")).unwrap();

        let empty = assembler().category_page(&cat, &[]);
        assert!(empty.is_empty);
        assert!(empty.templates.is_empty());
        assert_eq!(empty.count_label, "0 templates");

        let one = assembler().category_page(&cat, &[full_template()]);
        assert_eq!(one.count_label, "1 template");
        assert_eq!(one.meta.title, "Portfolio Templates - FolioMate");
    }

    #[test]
    fn home_page_filters_by_selected_category() {
        let other = template(json!({
            "id": "t7",
            "name": "Shop",
            "categories": [category("c9", "Ecommerce")]
        }));
        let cats: Vec<Category> = vec![
            serde_json::from_value(category("c1", "Portfolio")).unwrap(),
            serde_json::from_value(category("c9", "Ecommerce")).unwrap(),
        ];

        let home = assembler().home_page(&[full_template(), other.clone()], &cats, Some("ecommerce"));
        assert_eq!(home.templates.len(), 1);
        assert_eq!(home.templates[0].name, "Shop");
        assert_eq!(home.filters.len(), 3);
        assert!(!home.filters[0].active);
        assert!(home.filters[2].active);

        let all = assembler().home_page(&[full_template(), other], &cats, None);
        assert_eq!(all.templates.len(), 2);
        assert!(all.filters[0].active);
        assert_eq!(all.filters[0].slug, None);
    }

    #[test]
    fn not_found_meta() {
        assert_eq!(template_meta(None).title, "Template Not Found");
        assert_eq!(category_meta(None).title, "Category Not Found");
    }
}
