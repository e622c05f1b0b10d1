//! sitemap.xml and robots.txt

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Site path, always with leading and trailing slash
    pub path: String,
    /// Formatted with one decimal, as sitemap readers expect
    pub priority: &'static str,
    pub changefreq: ChangeFreq,
}

const STATIC_PAGES: &[(&str, &str, ChangeFreq)] = &[
    ("/", "1.0", ChangeFreq::Daily),
    ("/about/", "0.8", ChangeFreq::Monthly),
    ("/categories/", "0.9", ChangeFreq::Weekly),
    ("/education/", "0.8", ChangeFreq::Weekly),
];

/// Static pages, then one page per category, then one per calculator.
/// Featured calculators get priority 0.9, the rest 0.7.
pub fn entries(catalog: &Catalog) -> Vec<SitemapEntry> {
    let statics = STATIC_PAGES.iter().map(|(path, priority, changefreq)| SitemapEntry {
        path: path.to_string(),
        priority: *priority,
        changefreq: *changefreq,
    });
    let categories = catalog.categories().iter().map(|cat| SitemapEntry {
        path: format!("/category/{}/", cat.id.slug()),
        priority: "0.8",
        changefreq: ChangeFreq::Weekly,
    });
    let calculators = catalog.all().iter().map(|calc| SitemapEntry {
        path: format!("/calculator/{}/", calc.id),
        priority: if calc.featured { "0.9" } else { "0.7" },
        changefreq: ChangeFreq::Monthly,
    });
    statics.chain(categories).chain(calculators).collect()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the sitemap with every `lastmod` set to `date`.
pub fn sitemap_xml(catalog: &Catalog, config: &SiteConfig, date: NaiveDate) -> String {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries(catalog) {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&config.url_for(&entry.path)),
            lastmod,
            entry.changefreq.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

const PRIVATE_PATHS: &[&str] = &["/admin/", "/private/"];

pub fn robots_txt(config: &SiteConfig) -> String {
    let host = url::Url::parse(&config.base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| config.brand.clone());

    let mut out = format!("# {} - Robots.txt\n\nUser-agent: *\nAllow: /\n", host);
    for path in PRIVATE_PATHS.iter().chain(["/api/"].iter()) {
        let _ = writeln!(out, "Disallow: {}", path);
    }
    let _ = write!(
        out,
        "\nSitemap: {}\n\nCrawl-delay: 1\n",
        config.url_for("/sitemap.xml")
    );
    for agent in ["Googlebot", "Bingbot"] {
        let _ = write!(out, "\nUser-agent: {}\nAllow: /\n", agent);
        for path in PRIVATE_PATHS {
            let _ = writeln!(out, "Disallow: {}", path);
        }
    }
    out
}
