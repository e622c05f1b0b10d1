//! # Page Metadata
//!
//! Titles, meta descriptions, keyword lists and schema.org JSON-LD for
//! catalog pages. Brand and origin come from [`SiteConfig`].

use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::CalculatorDescriptor;
use crate::config::SiteConfig;

const TITLE_SUFFIX: &str = "Free Online Calculators";
const BASE_MESSAGE: &str =
    "Fast, accurate, mobile-friendly tools with instant results. No ads, no registration required.";
const BASE_KEYWORDS: &[&str] = &[
    "free calculator",
    "online calculator",
    "instant results",
    "no ads",
    "mobile friendly",
    "accurate calculations",
];

/// `"<page> | <brand> - Free Online Calculators"`, or the homepage title
/// when `page_title` is empty. With `include_brand` unset the page title
/// is returned as is.
pub fn page_title(config: &SiteConfig, page_title: &str, include_brand: bool) -> String {
    if !include_brand {
        return page_title.to_string();
    }
    if page_title.is_empty() {
        return format!("{} - 100+ {}", config.brand, TITLE_SUFFIX);
    }
    format!("{} | {} - {}", page_title, config.brand, TITLE_SUFFIX)
}

pub fn meta_description(config: &SiteConfig, description: &str, category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => {
            let host = url::Url::parse(&config.base_url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| config.base_url.clone());
            format!(
                "{} {} Browse {} calculators at {}.",
                description, BASE_MESSAGE, category, host
            )
        }
        None => format!("{} {}", description, BASE_MESSAGE),
    }
}

/// Brand and base keywords followed by the page's own, comma-separated
pub fn keywords(config: &SiteConfig, specific: &[&str]) -> String {
    std::iter::once(config.brand.as_str())
        .chain(BASE_KEYWORDS.iter().copied())
        .chain(specific.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full title, description and keywords for a calculator page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
}

pub fn calculator_page(config: &SiteConfig, calculator: &CalculatorDescriptor) -> PageMeta {
    PageMeta {
        title: page_title(config, calculator.name, true),
        description: meta_description(config, calculator.description, Some(calculator.category.slug())),
        keywords: keywords(config, calculator.keywords),
        canonical_url: config.url_for(&format!("/calculator/{}/", calculator.id)),
    }
}

// ============================================================================
// Structured Data
// ============================================================================

/// schema.org `WebApplication` for a calculator page
pub fn calculator_structured_data(config: &SiteConfig, calculator: &CalculatorDescriptor, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": calculator.name,
        "description": format!("{} - Free online calculator with instant results", calculator.description),
        "url": url,
        "applicationCategory": "UtilityApplication",
        "operatingSystem": "Any",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock"
        },
        "publisher": {
            "@type": "Organization",
            "name": config.brand,
            "url": config.base_url
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Breadcrumb {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Home → category → calculator trail
pub fn breadcrumbs_for(config: &SiteConfig, calculator: &CalculatorDescriptor, category_name: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", config.url_for("/")),
        Breadcrumb::new(
            category_name,
            config.url_for(&format!("/category/{}/", calculator.category.slug())),
        ),
        Breadcrumb::new(
            calculator.name,
            config.url_for(&format!("/calculator/{}/", calculator.id)),
        ),
    ]
}

/// schema.org `BreadcrumbList`; positions start at 1
pub fn breadcrumb_structured_data(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": crumb.url
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

pub fn faq_structured_data(faqs: &[Faq]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer }
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn loan() -> &'static CalculatorDescriptor {
        Catalog::builtin().unwrap().get_by_id("loan-calculator").unwrap()
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::default();
        assert_eq!(
            page_title(&config, "Loan Calculator", true),
            "Loan Calculator | kceva - Free Online Calculators"
        );
        assert_eq!(page_title(&config, "", true), "kceva - 100+ Free Online Calculators");
        assert_eq!(page_title(&config, "Bare", false), "Bare");
    }

    #[test]
    fn test_meta_description_mentions_category_and_host() {
        let config = SiteConfig::default();
        let text = meta_description(&config, "Compute things.", Some("finance"));
        assert!(text.starts_with("Compute things. Fast, accurate"));
        assert!(text.ends_with("Browse finance calculators at kceva.com."));
        assert!(!meta_description(&config, "x", Some("")).contains("Browse"));
    }

    #[test]
    fn test_keywords_order() {
        let config = SiteConfig::default();
        let text = keywords(&config, &["loan"]);
        assert!(text.starts_with("kceva, free calculator"));
        assert!(text.ends_with(", loan"));
    }

    #[test]
    fn test_calculator_page() {
        let meta = calculator_page(&SiteConfig::default(), loan());
        assert_eq!(meta.canonical_url, "https://kceva.com/calculator/loan-calculator/");
        assert!(meta.keywords.contains("monthly"));
    }

    #[test]
    fn test_structured_data() {
        let config = SiteConfig::default();
        let data = calculator_structured_data(&config, loan(), "https://kceva.com/calculator/loan-calculator/");
        assert_eq!(data["@type"], "WebApplication");
        assert_eq!(data["offers"]["price"], "0");
        assert_eq!(data["publisher"]["url"], "https://kceva.com");

        let crumbs = breadcrumbs_for(&config, loan(), "Finance");
        let list = breadcrumb_structured_data(&crumbs);
        let items = list["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["item"], "https://kceva.com/category/finance/");

        let faq = faq_structured_data(&[Faq {
            question: "Is it free?".to_string(),
            answer: "Yes.".to_string(),
        }]);
        assert_eq!(faq["mainEntity"][0]["acceptedAnswer"]["text"], "Yes.");
    }
}
