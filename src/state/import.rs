use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::costing::constants::DEFAULT_YIELD_FACTOR;
use crate::costing::units::UnitDomain;
use crate::error::{CostError, Result};
use crate::models::{CaseDescriptor, Category, Ingredient};

/// One row of a vendor price list.
#[derive(Debug, Deserialize)]
struct PriceListRow {
    name: String,
    #[serde(default)]
    category: Option<String>,
    case_quantity: f64,
    case_unit: String,
    case_price: f64,
    #[serde(default)]
    secondary_quantity: Option<f64>,
    #[serde(default)]
    secondary_unit: Option<String>,
    #[serde(default)]
    trim_loss_pct: Option<f64>,
    #[serde(default)]
    cooking_loss_pct: Option<f64>,
    #[serde(default)]
    vendor: Option<String>,
}

impl PriceListRow {
    fn into_ingredient(self, row: usize) -> Result<Ingredient> {
        let category = match self.category.as_deref() {
            None => Category::Other,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Row {}: unknown category '{}', using other", row, raw);
                Category::Other
            }),
        };

        let mut case = CaseDescriptor::new(self.case_quantity, self.case_unit);
        if let (Some(quantity), Some(unit)) = (self.secondary_quantity, self.secondary_unit) {
            if !unit.trim().is_empty() {
                case = case.with_secondary(quantity, unit);
            }
        }

        let ingredient = Ingredient {
            name: self.name.trim().to_string(),
            category,
            case,
            case_price: self.case_price,
            trim_loss_pct: self.trim_loss_pct,
            cooking_loss_pct: self.cooking_loss_pct,
            density_key: None,
            vendor: self.vendor.filter(|v| !v.trim().is_empty()),
        };

        if !ingredient.is_valid() {
            return Err(CostError::InvalidInput(format!(
                "Row {}: '{}' needs a name, a positive case quantity and unit, and a positive price",
                row, ingredient.name
            )));
        }
        if !ingredient.has_usable_losses() {
            return Err(CostError::InvalidInput(format!(
                "Row {}: '{}' losses must each be in [0, 100) and leave some yield",
                row, ingredient.name
            )));
        }

        Ok(ingredient)
    }
}

/// Parse a CSV price list with a header row.
pub fn read_price_list<R: io::Read>(reader: R) -> Result<Vec<Ingredient>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut ingredients = Vec::new();
    for (i, row) in rdr.deserialize::<PriceListRow>().enumerate() {
        // header is line 1
        ingredients.push(row?.into_ingredient(i + 2)?);
    }

    Ok(ingredients)
}

pub fn import_price_list<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let file = File::open(path.as_ref())?;
    let ingredients = read_price_list(file)?;
    tracing::info!(
        "Read {} ingredients from {}",
        ingredients.len(),
        path.as_ref().display()
    );
    Ok(ingredients)
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_default()
}

/// Write a per-unit cost report as CSV.
pub fn write_cost_report_to<W: io::Write>(ingredients: &[&Ingredient], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "name",
        "category",
        "case",
        "case_price",
        "domain",
        "cost_per_case_unit",
        "yield_pct",
        "ep_cost_per_case_unit",
        "per_pound",
        "per_ounce",
        "per_gallon",
        "per_fluid_ounce",
        "per_each",
    ])?;

    for ingredient in ingredients {
        let costs = ingredient.unit_costs(DEFAULT_YIELD_FACTOR);
        let record = ingredient.cost_record_for(None);
        let per = |unit: &str| ingredient.ap_cost_per(Some(unit));

        wtr.write_record([
            ingredient.name.clone(),
            ingredient.category.to_string(),
            ingredient.case.summary(),
            format!("{:.2}", ingredient.case_price),
            costs
                .as_ref()
                .and_then(|c| c.domain)
                .map(|d: UnitDomain| d.to_string())
                .unwrap_or_default(),
            money(costs.as_ref().map(|c| c.adjusted_cost_per_unit)),
            record.map(|r| format!("{:.1}", r.yield_pct)).unwrap_or_default(),
            money(record.map(|r| r.ep_cost)),
            money(per("lb")),
            money(per("oz")),
            money(per("gal")),
            money(per("fl oz")),
            money(per("each")),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_cost_report<P: AsRef<Path>>(ingredients: &[&Ingredient], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_cost_report_to(ingredients, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_LIST: &str = "\
name,category,case_quantity,case_unit,case_price,secondary_quantity,secondary_unit,trim_loss_pct,cooking_loss_pct,vendor
Russet Potatoes,produce,40,each,60.00,50,lb,12,,Shamrock
Heavy Cream,dairy,4,gal,95.00,,,,,
Mystery Box,gadgets,1,case,10,,,,,
";

    #[test]
    fn test_read_price_list() {
        let ingredients = read_price_list(PRICE_LIST.as_bytes()).unwrap();
        assert_eq!(ingredients.len(), 3);

        let potatoes = &ingredients[0];
        assert_eq!(potatoes.category, Category::Produce);
        assert_eq!(potatoes.case.dual_quantity(), Some(50.0));
        assert_eq!(potatoes.trim_loss_pct, Some(12.0));
        assert_eq!(potatoes.cooking_loss_pct, None);
        assert_eq!(potatoes.vendor.as_deref(), Some("Shamrock"));

        let cream = &ingredients[1];
        assert!(!cream.case.is_dual_unit);
        assert_eq!(cream.vendor, None);

        assert_eq!(ingredients[2].category, Category::Other);
    }

    #[test]
    fn test_invalid_row_reports_line() {
        let csv = "name,case_quantity,case_unit,case_price\nFlour,50,lb,0\n";
        let err = read_price_list(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 2"));
    }

    #[test]
    fn test_losses_without_yield_are_rejected() {
        let csv = "\
name,category,case_quantity,case_unit,case_price,secondary_quantity,secondary_unit,trim_loss_pct,cooking_loss_pct
Chuck Roll,meat,60,lb,240.00,,,10,30
Beef Shank,meat,10,lb,80.00,,,70,40
";
        let err = read_price_list(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 3"), "{err}");

        let csv = "name,case_quantity,case_unit,case_price,trim_loss_pct\nLeeks,20,lb,30,-5\n";
        let err = read_price_list(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 2"), "{err}");
    }

    #[test]
    fn test_write_cost_report() {
        let ingredients = read_price_list(PRICE_LIST.as_bytes()).unwrap();
        let refs: Vec<&Ingredient> = ingredients.iter().collect();

        let mut out = Vec::new();
        write_cost_report_to(&refs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name,category,case"));
        assert!(lines[1].contains("1.5000"));
        assert!(lines[1].contains("1.2000"));
        assert!(lines[2].contains("23.7500"));
    }
}
