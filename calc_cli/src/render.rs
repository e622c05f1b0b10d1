//! Text and JSON output for each command.

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

use calc_core::catalog::{CalculatorDescriptor, Catalog};
use calc_core::format::{format_currency, format_number};
use calc_core::resolver::{ComponentResolver, Resolution};
use calc_core::seo;
use calc_core::store::{HistoryEntry, UsageStat, UserPreferences};
use calc_core::units::{CalculatorUnit, FieldKind, FieldSpec};
use calc_core::validation::SchemaResult;
use calc_core::{CalcError, SiteConfig};

/// Print `value` as pretty JSON, or hand it to `text`
pub fn json_or<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

pub fn calculators(json: bool, list: &[&CalculatorDescriptor], resolver: &ComponentResolver) -> Result<()> {
    if json {
        let rows: Vec<Value> = list
            .iter()
            .map(|c| json!({ "calculator": c, "status": resolver.status(c.id) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if list.is_empty() {
        println!("No calculators found.");
        return Ok(());
    }
    let width = list.iter().map(|c| c.id.len()).max().unwrap_or(0);
    for calc in list {
        let marker = if resolver.status(calc.id).working { ' ' } else { '·' };
        let star = if calc.featured { "★" } else { " " };
        println!("{}{} {:<width$}  {}", marker, star, calc.id, calc.name, width = width);
    }
    println!("\n{} calculator(s); · marks ones still in development", list.len());
    Ok(())
}

pub fn categories(json: bool, catalog: &Catalog) -> Result<()> {
    let counts = catalog.category_counts();
    if json {
        let rows: Vec<Value> = catalog
            .categories()
            .iter()
            .zip(&counts)
            .map(|(cat, (_, n))| json!({ "category": cat, "count": n }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for (cat, (_, n)) in catalog.categories().iter().zip(&counts) {
        println!("{} {:<12} {:>3}  {}", cat.icon, cat.id.slug(), n, cat.name);
    }
    Ok(())
}

pub fn show(json: bool, config: &SiteConfig, resolver: &ComponentResolver, id: &str) -> Result<()> {
    let resolution = resolver.resolve(id);
    let descriptor = match &resolution {
        Resolution::Implemented { descriptor, .. } => *descriptor,
        Resolution::UnderDevelopment(descriptor) => *descriptor,
        Resolution::Unknown => return Err(CalcError::calculator_not_found(id).into()),
    };
    let meta = seo::calculator_page(config, descriptor);
    let status = resolver.status(id);
    let fields: &[FieldSpec] = match &resolution {
        Resolution::Implemented { unit, .. } => unit.fields(),
        _ => &[],
    };

    if json {
        let value = json!({
            "calculator": descriptor,
            "status": status,
            "fields": fields,
            "meta": meta,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} {}", descriptor.icon, descriptor.name);
    println!("  {}", descriptor.description);
    println!("  category: {}", descriptor.category.slug());
    println!("  keywords: {}", descriptor.keywords.join(", "));
    println!("  status:   {}", status.message);
    println!("  url:      {}", meta.canonical_url);
    if let Resolution::Implemented { unit, alias: true, .. } = &resolution {
        println!("  runs on the {} unit", unit.title());
    }
    if !fields.is_empty() {
        println!("\nFields:");
        for field in fields {
            let kind = match field.kind {
                FieldKind::Number => "number".to_string(),
                FieldKind::Text => "text".to_string(),
                FieldKind::Date => "date".to_string(),
                FieldKind::Toggle => "true/false".to_string(),
                FieldKind::Choice(options) => options.join("|"),
            };
            let default = field.default.map(|d| format!(" [default {}]", d)).unwrap_or_default();
            println!("  {:<20} {} ({}){}", field.name, field.label, kind, default);
        }
    }
    Ok(())
}

/// Print a computed result using the user's number preferences.
/// Money-looking keys are shown in the preferred currency.
pub fn result(title: &str, result: &Map<String, Value>, prefs: &UserPreferences) {
    println!("{}", title);
    let width = result.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in result {
        let shown = match value {
            Value::Number(n) => {
                let n = n.as_f64().unwrap_or(f64::NAN);
                if is_money(key) {
                    format_currency(n, &prefs.currency)
                } else if n.fract() == 0.0 {
                    format_number(n, 0, prefs.thousands_separator)
                } else {
                    format_number(n, usize::from(prefs.decimal_places), prefs.thousands_separator)
                }
            }
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {:<width$}  {}", key, shown, width = width);
    }
}

fn is_money(key: &str) -> bool {
    matches!(
        key,
        "monthly_payment"
            | "total_payment"
            | "total_interest"
            | "final_amount"
            | "interest_earned"
            | "tip"
            | "total"
            | "per_person"
    )
}

pub fn form_errors(check: &SchemaResult) {
    eprintln!("Please fix the following:");
    for (field, messages) in &check.errors {
        for message in messages {
            eprintln!("  {}: {}", field, message);
        }
    }
}

pub fn history(json: bool, entries: &[HistoryEntry]) -> Result<()> {
    json_or(json, &entries, |entries| {
        if entries.is_empty() {
            println!("History is empty.");
        }
        for entry in entries.iter() {
            let star = if entry.favorited { "★" } else { " " };
            println!(
                "{} {}  {}  {}",
                star,
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.calculator_name,
                entry.id
            );
        }
    })
}

pub fn usage(json: bool, stats: &[UsageStat]) -> Result<()> {
    json_or(json, &stats, |stats| {
        for stat in stats.iter() {
            println!(
                "{:>4}  {:<32} last {}",
                stat.count,
                stat.name,
                stat.last_used.format("%Y-%m-%d")
            );
        }
    })
}

pub fn preferences(prefs: &UserPreferences) {
    println!("currency             {}", prefs.currency);
    println!("units                {}", prefs.units);
    println!("decimal_places       {}", prefs.decimal_places);
    println!("thousands_separator  {}", prefs.thousands_separator);
    println!("auto_save            {}", prefs.auto_save);
    println!("show_tooltips        {}", prefs.show_tooltips);
    println!("compact_mode         {}", prefs.compact_mode);
    println!("high_contrast        {}", prefs.high_contrast);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keys() {
        assert!(is_money("monthly_payment"));
        assert!(!is_money("bmi"));
    }
}
