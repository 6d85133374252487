use core_types::{NutritionalInfo, Supplier};

use crate::{error::DomainError, rating::StarRating, text::format_number};

/// Display strings derived from a fruit's nutritional record.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionSummary {
    /// Compact grid cell text, e.g. `52 cal | 14g carbs`.
    pub cell: String,
    pub tooltip: String,
    /// Flat value used for quick filtering and CSV export.
    pub value: String,
}

impl From<&NutritionalInfo> for NutritionSummary {
    fn from(info: &NutritionalInfo) -> Self {
        let calories = format_number(info.calories);
        let carbohydrates = format_number(info.carbohydrates);
        let protein = format_number(info.protein);
        let fat = format_number(info.fat);
        let fiber = format_number(info.fiber);

        let cell = format!("{} cal | {}g carbs", calories, carbohydrates);
        let tooltip = format!(
            "Protein: {}g\nFat: {}g\nFiber: {}g\nVitamins: {}",
            protein, fat, fiber, info.vitamins
        );
        let value = format!(
            "{}cal, {}g carbs, {}g protein, {}g fat, {}g fiber, Vitamins: {}",
            calories, carbohydrates, protein, fat, fiber, info.vitamins
        );

        Self {
            cell,
            tooltip,
            value,
        }
    }
}

/// Display strings for a fruit's primary (first) supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierSummary {
    pub name: String,
    pub rating: StarRating,
    pub tooltip: String,
    pub value: String,
    pub other_suppliers: usize,
}

impl SupplierSummary {
    /// Only `suppliers[0]` is shown; an empty list is an error rather than a
    /// blank cell.
    pub fn from_suppliers(fruit_id: i64, suppliers: &[Supplier]) -> Result<Self, DomainError> {
        let primary = suppliers
            .first()
            .ok_or(DomainError::NoSupplier { fruit_id })?;
        let other_suppliers = suppliers.len() - 1;
        let rating = format_number(primary.rating);

        let mut tooltip = format!(
            "Rating: {}/5\nEmail: {}\nCountry: {}",
            rating, primary.contact_email, primary.country
        );
        match other_suppliers {
            0 => {}
            1 => tooltip.push_str("\n+1 more supplier"),
            n => tooltip.push_str(&format!("\n+{} more suppliers", n)),
        }

        let value = format!(
            "{} ({}/5) - {} - {}",
            primary.name, rating, primary.contact_email, primary.country
        );

        Ok(Self {
            name: primary.name.clone(),
            rating: StarRating::from_rating(primary.rating),
            tooltip,
            value,
            other_suppliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple_nutrition() -> NutritionalInfo {
        NutritionalInfo {
            calories: 52.0,
            carbohydrates: 14.0,
            protein: 0.3,
            fat: 0.2,
            fiber: 2.4,
            vitamins: "A, C".to_string(),
        }
    }

    fn supplier(id: i64, name: &str, country: &str, rating: f64) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            contact_email: format!("contact@{}.com", name.to_lowercase().replace(' ', "")),
            country: country.to_string(),
            rating,
        }
    }

    #[test]
    fn test_nutrition_cell() {
        let summary = NutritionSummary::from(&apple_nutrition());
        assert_eq!(summary.cell, "52 cal | 14g carbs");
    }

    #[test]
    fn test_nutrition_tooltip_lists_details() {
        let summary = NutritionSummary::from(&apple_nutrition());
        assert_eq!(
            summary.tooltip,
            "Protein: 0.3g\nFat: 0.2g\nFiber: 2.4g\nVitamins: A, C"
        );
    }

    #[test]
    fn test_nutrition_value() {
        let summary = NutritionSummary::from(&apple_nutrition());
        assert_eq!(
            summary.value,
            "52cal, 14g carbs, 0.3g protein, 0.2g fat, 2.4g fiber, Vitamins: A, C"
        );
    }

    #[test]
    fn test_supplier_uses_first_entry() {
        let suppliers = vec![
            supplier(1, "Fresh Farms", "USA", 4.5),
            supplier(2, "Global Fruits Co", "Spain", 4.8),
        ];
        let summary = SupplierSummary::from_suppliers(1, &suppliers).unwrap();
        assert_eq!(summary.name, "Fresh Farms");
        assert_eq!(summary.rating.full, 4);
        assert!(summary.rating.half);
        assert_eq!(summary.other_suppliers, 1);
        assert_eq!(
            summary.tooltip,
            "Rating: 4.5/5\nEmail: contact@freshfarms.com\nCountry: USA\n+1 more supplier"
        );
        assert_eq!(
            summary.value,
            "Fresh Farms (4.5/5) - contact@freshfarms.com - USA"
        );
    }

    #[test]
    fn test_single_supplier_has_no_more_line() {
        let suppliers = vec![supplier(3, "Tropical Exports", "Ecuador", 4.0)];
        let summary = SupplierSummary::from_suppliers(2, &suppliers).unwrap();
        assert_eq!(
            summary.tooltip,
            "Rating: 4/5\nEmail: contact@tropicalexports.com\nCountry: Ecuador"
        );
    }

    #[test]
    fn test_empty_supplier_list_is_an_error() {
        let result = SupplierSummary::from_suppliers(9, &[]);
        assert_eq!(result, Err(DomainError::NoSupplier { fruit_id: 9 }));
    }
}
