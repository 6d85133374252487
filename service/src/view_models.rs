use core_types::{AllData, BasicFruit, ExtendedFruit};
use domain::{
    CountryFlag, DomainError, NutritionSummary, Rgb, StatusKind, SupplierSummary,
    capitalize_words, country_flag, created_at_millis, format_date_added, format_price_per_kg,
    parse_css_color,
};

use crate::{
    fetch_state::RowCount,
    grid::{CellValue, GridColumn, GridRow},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FruitListModel {
    pub id: i64,
    pub name: String,
    /// `name` with every word capitalised, for display only.
    pub display_name: String,
    pub color: String,
    pub swatch: Option<Rgb>,
}

impl From<&BasicFruit> for FruitListModel {
    fn from(fruit: &BasicFruit) -> Self {
        Self {
            id: fruit.id,
            name: fruit.fruit.clone(),
            display_name: capitalize_words(&fruit.fruit),
            color: fruit.color.clone(),
            swatch: parse_css_color(&fruit.color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitListColumn {
    Id,
    Name,
    Color,
}

impl GridColumn for FruitListColumn {
    fn all() -> &'static [Self] {
        &[
            FruitListColumn::Id,
            FruitListColumn::Name,
            FruitListColumn::Color,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            FruitListColumn::Id => "#",
            FruitListColumn::Name => "Fruit Name",
            FruitListColumn::Color => "Color",
        }
    }
}

impl GridRow for FruitListModel {
    type Column = FruitListColumn;

    fn sort_value(&self, column: FruitListColumn) -> CellValue {
        match column {
            FruitListColumn::Id => CellValue::Number(self.id as f64),
            FruitListColumn::Name => CellValue::Text(self.name.clone()),
            FruitListColumn::Color => CellValue::Text(self.color.clone()),
        }
    }

    fn cell_text(&self, column: FruitListColumn) -> String {
        match column {
            FruitListColumn::Id => self.id.to_string(),
            FruitListColumn::Name => self.name.clone(),
            FruitListColumn::Color => self.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FruitListSnapshot {
    pub rows: Vec<FruitListModel>,
}

impl FruitListSnapshot {
    pub fn title(&self) -> String {
        format!("Fruits ({} total)", self.rows.len())
    }
}

impl From<&[BasicFruit]> for FruitListSnapshot {
    fn from(fruits: &[BasicFruit]) -> Self {
        Self {
            rows: fruits.iter().map(FruitListModel::from).collect(),
        }
    }
}

impl RowCount for FruitListSnapshot {
    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One row of the extended view with every derived display value resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedFruitRowModel {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub swatch: Option<Rgb>,
    pub taste: String,
    pub origin: CountryFlag,
    pub nutrition: Option<NutritionSummary>,
    pub supplier: SupplierSummary,
    pub status: String,
    pub status_kind: StatusKind,
    pub price_per_kg: f64,
    pub price_label: String,
    pub created_at: Option<String>,
    pub date_added: String,
}

impl ExtendedFruitRowModel {
    pub fn nutrition_cell(&self) -> &str {
        self.nutrition
            .as_ref()
            .map(|n| n.cell.as_str())
            .unwrap_or("No nutrition data")
    }
}

impl TryFrom<&ExtendedFruit> for ExtendedFruitRowModel {
    type Error = DomainError;

    fn try_from(fruit: &ExtendedFruit) -> Result<Self, Self::Error> {
        let supplier = SupplierSummary::from_suppliers(fruit.id, &fruit.suppliers)?;
        let status = fruit.status.clone().unwrap_or_default();
        Ok(Self {
            id: fruit.id,
            name: fruit.name.clone(),
            color: fruit.color.clone(),
            swatch: parse_css_color(&fruit.color),
            taste: fruit.taste.clone(),
            origin: country_flag(&fruit.origin_country),
            nutrition: fruit.nutritional_info.as_ref().map(NutritionSummary::from),
            supplier,
            status_kind: StatusKind::from_status(&status),
            status,
            price_per_kg: fruit.price_per_kg,
            price_label: format_price_per_kg(fruit.price_per_kg),
            created_at: fruit.created_at.clone(),
            date_added: format_date_added(fruit.created_at.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedColumn {
    Id,
    Name,
    Origin,
    Taste,
    Nutrition,
    Supplier,
    Status,
    Price,
    DateAdded,
}

impl GridColumn for ExtendedColumn {
    fn all() -> &'static [Self] {
        &[
            ExtendedColumn::Id,
            ExtendedColumn::Name,
            ExtendedColumn::Origin,
            ExtendedColumn::Taste,
            ExtendedColumn::Nutrition,
            ExtendedColumn::Supplier,
            ExtendedColumn::Status,
            ExtendedColumn::Price,
            ExtendedColumn::DateAdded,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            ExtendedColumn::Id => "#",
            ExtendedColumn::Name => "Fruit Name",
            ExtendedColumn::Origin => "Origin",
            ExtendedColumn::Taste => "Taste",
            ExtendedColumn::Nutrition => "Nutrition",
            ExtendedColumn::Supplier => "Supplier",
            ExtendedColumn::Status => "Status",
            ExtendedColumn::Price => "Price/kg",
            ExtendedColumn::DateAdded => "Date Added",
        }
    }
}

impl GridRow for ExtendedFruitRowModel {
    type Column = ExtendedColumn;

    fn sort_value(&self, column: ExtendedColumn) -> CellValue {
        match column {
            ExtendedColumn::Id => CellValue::Number(self.id as f64),
            ExtendedColumn::Price => CellValue::Number(self.price_per_kg),
            // unparseable timestamps sort after parsed ones, by raw text
            ExtendedColumn::DateAdded => {
                let raw = self.created_at.as_deref().unwrap_or_default();
                match created_at_millis(raw) {
                    Some(millis) => CellValue::Number(millis as f64),
                    None => CellValue::Text(raw.to_string()),
                }
            }
            other => CellValue::Text(self.cell_text(other)),
        }
    }

    fn cell_text(&self, column: ExtendedColumn) -> String {
        match column {
            ExtendedColumn::Id => self.id.to_string(),
            ExtendedColumn::Name => self.name.clone(),
            ExtendedColumn::Origin => self.origin.country().to_string(),
            ExtendedColumn::Taste => self.taste.clone(),
            ExtendedColumn::Nutrition => self
                .nutrition
                .as_ref()
                .map(|n| n.value.clone())
                .unwrap_or_default(),
            ExtendedColumn::Supplier => self.supplier.value.clone(),
            ExtendedColumn::Status => self.status.clone(),
            ExtendedColumn::Price => self.price_label.clone(),
            ExtendedColumn::DateAdded => self.date_added.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedDataSnapshot {
    pub rows: Vec<ExtendedFruitRowModel>,
    pub total_fruits: u64,
    pub total_suppliers: u64,
    pub total_nutritional_records: u64,
}

impl ExtendedDataSnapshot {
    pub fn totals_label(&self) -> String {
        format!(
            "{} fruits · {} suppliers · {} nutrition records",
            self.total_fruits, self.total_suppliers, self.total_nutritional_records
        )
    }
}

impl TryFrom<&AllData> for ExtendedDataSnapshot {
    type Error = DomainError;

    /// Fails on the first fruit without a supplier; no partial snapshot is
    /// produced.
    fn try_from(data: &AllData) -> Result<Self, Self::Error> {
        let rows = data
            .fruits
            .iter()
            .map(ExtendedFruitRowModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows,
            total_fruits: data.total_fruits,
            total_suppliers: data.total_suppliers,
            total_nutritional_records: data.total_nutritional_records,
        })
    }
}

impl RowCount for ExtendedDataSnapshot {
    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
pub(crate) mod test_data {
    use core_types::{AllData, BasicFruit, ExtendedFruit, NutritionalInfo, Supplier};

    pub fn basic_fruits() -> Vec<BasicFruit> {
        vec![
            BasicFruit {
                id: 1,
                fruit: "apple".to_string(),
                color: "Red".to_string(),
            },
            BasicFruit {
                id: 2,
                fruit: "banana".to_string(),
                color: "yellow".to_string(),
            },
            BasicFruit {
                id: 3,
                fruit: "green apple".to_string(),
                color: "#8db600".to_string(),
            },
        ]
    }

    pub fn supplier(id: i64, name: &str, email: &str, country: &str, rating: f64) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            contact_email: email.to_string(),
            country: country.to_string(),
            rating,
        }
    }

    pub fn apple() -> ExtendedFruit {
        ExtendedFruit {
            id: 1,
            name: "Apple".to_string(),
            color: "Red".to_string(),
            taste: "Sweet".to_string(),
            origin_country: "USA".to_string(),
            price_per_kg: 2.99,
            status: Some("Processed".to_string()),
            created_at: Some("2024-01-05T15:07:00".to_string()),
            nutritional_info: Some(NutritionalInfo {
                calories: 52.0,
                carbohydrates: 14.0,
                protein: 0.3,
                fat: 0.2,
                fiber: 2.4,
                vitamins: "A, C".to_string(),
            }),
            suppliers: vec![
                supplier(1, "Fresh Farms", "contact@freshfarms.com", "USA", 4.5),
                supplier(2, "Global Fruits Co", "sales@globalfruits.com", "Spain", 4.8),
            ],
        }
    }

    pub fn mango() -> ExtendedFruit {
        ExtendedFruit {
            id: 2,
            name: "Mango".to_string(),
            color: "orange".to_string(),
            taste: "Sweet, tropical".to_string(),
            origin_country: "Peru".to_string(),
            price_per_kg: 4.5,
            status: Some("to be processed".to_string()),
            created_at: None,
            nutritional_info: None,
            suppliers: vec![supplier(
                3,
                "Tropical Exports",
                "info@tropicalexports.com",
                "Ecuador",
                4.0,
            )],
        }
    }

    pub fn all_data(fruits: Vec<ExtendedFruit>) -> AllData {
        AllData {
            total_fruits: fruits.len() as u64,
            total_suppliers: 3,
            total_nutritional_records: 1,
            fruits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_data::*;
    use super::*;
    use crate::grid::GridState;

    #[test]
    fn test_list_model_capitalizes_for_display_only() {
        let fruits = basic_fruits();
        let model = FruitListModel::from(&fruits[2]);
        assert_eq!(model.name, "green apple");
        assert_eq!(model.display_name, "Green Apple");
        assert_eq!(model.cell_text(FruitListColumn::Name), "green apple");
        assert!(model.swatch.is_some());
    }

    #[test]
    fn test_list_snapshot_title() {
        let fruits = basic_fruits();
        let snapshot = FruitListSnapshot::from(fruits.as_slice());
        assert_eq!(snapshot.title(), "Fruits (3 total)");
        assert_eq!(FruitListSnapshot::default().title(), "Fruits (0 total)");
    }

    #[test]
    fn test_extended_row_derivations() {
        let row = ExtendedFruitRowModel::try_from(&apple()).unwrap();
        assert_eq!(row.origin.emoji(), Some("🇺🇸"));
        assert_eq!(row.origin.country(), "USA");
        assert_eq!(row.nutrition_cell(), "52 cal | 14g carbs");
        assert_eq!(row.supplier.name, "Fresh Farms");
        assert_eq!(row.status_kind, StatusKind::Processed);
        assert_eq!(row.price_label, "$2.99/kg");
        assert_eq!(row.date_added, "Jan 5, 2024, 03:07 PM");
        assert_eq!(
            row.cell_text(ExtendedColumn::Supplier),
            "Fresh Farms (4.5/5) - contact@freshfarms.com - USA"
        );
    }

    #[test]
    fn test_extended_row_without_optional_fields() {
        let row = ExtendedFruitRowModel::try_from(&mango()).unwrap();
        assert_eq!(
            row.origin,
            CountryFlag::TextOnly {
                country: "Peru".to_string()
            }
        );
        assert_eq!(row.nutrition_cell(), "No nutrition data");
        assert_eq!(row.cell_text(ExtendedColumn::Nutrition), "");
        assert_eq!(row.status_kind, StatusKind::ToBeProcessed);
        assert_eq!(row.date_added, "");
    }

    #[test]
    fn test_extended_snapshot_fails_without_supplier() {
        let mut broken = mango();
        broken.suppliers.clear();
        let data = all_data(vec![apple(), broken]);
        assert_eq!(
            ExtendedDataSnapshot::try_from(&data),
            Err(DomainError::NoSupplier { fruit_id: 2 })
        );
    }

    #[test]
    fn test_extended_snapshot_totals_label() {
        let snapshot = ExtendedDataSnapshot::try_from(&all_data(vec![apple(), mango()])).unwrap();
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(
            snapshot.totals_label(),
            "2 fruits · 3 suppliers · 1 nutrition records"
        );
    }

    #[test]
    fn test_date_added_sorts_by_instant_across_formats() {
        let mut late_naive = apple();
        late_naive.id = 10;
        late_naive.created_at = Some("2024-03-01T22:00:00".to_string());
        let mut early_offset = apple();
        early_offset.id = 11;
        early_offset.created_at = Some("2024-03-01T23:59:00+02:00".to_string());
        let mut unparseable = apple();
        unparseable.id = 12;
        unparseable.created_at = Some("sometime".to_string());

        let snapshot =
            ExtendedDataSnapshot::try_from(&all_data(vec![late_naive, unparseable, early_offset]))
                .unwrap();
        let mut grid = GridState::new(10);
        grid.toggle_sort(ExtendedColumn::DateAdded);
        let ids: Vec<i64> = grid
            .visible_rows(&snapshot.rows)
            .iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }
}
