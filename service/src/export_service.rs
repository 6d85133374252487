use std::path::{Path, PathBuf};

use async_std::path::Path as AsyncPath;

use crate::{
    error::Error,
    grid::{GridColumn, GridRow},
};

pub const LIST_EXPORT_FILE_NAME: &str = "Fruits.csv";
pub const EXTENDED_EXPORT_FILE_NAME: &str = "Fruits-Extended-Data.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes grid rows to CSV files.
#[derive(Debug, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Renders the given rows as CSV: BOM, header row of column titles, then
    /// one record per row using the flat cell text.
    pub fn to_csv<R: GridRow>(&self, rows: &[&R]) -> Result<Vec<u8>, Error> {
        let columns = R::Column::all();
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .from_writer(UTF8_BOM.to_vec());

        writer.write_record(columns.iter().map(|column| column.title()))?;
        for row in rows {
            writer.write_record(columns.iter().map(|column| row.cell_text(*column)))?;
        }

        writer
            .into_inner()
            .map_err(|e| Error::ExportError(format!("Failed to flush CSV: {}", e)))
    }
}

/// Writes rendered CSV bytes to `<dir>/<file_name>`, replacing any existing
/// file. Rendering happens on the UI thread; only the bytes move into the task.
pub async fn write_export(dir: &Path, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, Error> {
    if !AsyncPath::new(dir).is_dir().await {
        return Err(Error::InvalidInput(format!(
            "Export folder does not exist: {}",
            dir.display()
        )));
    }
    let path = dir.join(file_name);
    async_std::fs::write(AsyncPath::new(&path), &bytes).await?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Exported CSV");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::GridState,
        view_models::{
            ExtendedDataSnapshot, FruitListColumn, FruitListModel, FruitListSnapshot,
            test_data::{all_data, apple, basic_fruits, mango},
        },
    };

    fn csv_text(bytes: &[u8]) -> &str {
        assert!(bytes.starts_with(UTF8_BOM));
        std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap()
    }

    #[test]
    fn test_list_csv() {
        let snapshot = FruitListSnapshot::from(basic_fruits().as_slice());
        let rows: Vec<&FruitListModel> = snapshot.rows.iter().collect();
        let bytes = ExportService::new().to_csv(&rows).unwrap();
        assert_eq!(
            csv_text(&bytes),
            "#,Fruit Name,Color\n1,apple,Red\n2,banana,yellow\n3,green apple,#8db600\n"
        );
    }

    #[test]
    fn test_extended_csv_quotes_embedded_commas() {
        let snapshot = ExtendedDataSnapshot::try_from(&all_data(vec![apple(), mango()])).unwrap();
        let rows: Vec<_> = snapshot.rows.iter().collect();
        let bytes = ExportService::new().to_csv(&rows).unwrap();
        let text = csv_text(&bytes);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("#,Fruit Name,Origin,Taste,Nutrition,Supplier,Status,Price/kg,Date Added")
        );
        assert_eq!(
            lines.next(),
            Some(
                "1,Apple,USA,Sweet,\"52cal, 14g carbs, 0.3g protein, 0.2g fat, 2.4g fiber, Vitamins: A, C\",\
                 Fresh Farms (4.5/5) - contact@freshfarms.com - USA,Processed,$2.99/kg,\
                 \"Jan 5, 2024, 03:07 PM\""
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "2,Mango,Peru,\"Sweet, tropical\",,\
                 Tropical Exports (4/5) - info@tropicalexports.com - Ecuador,to be processed,$4.50/kg,"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_follows_filter_and_sort_across_pages() {
        let snapshot = FruitListSnapshot::from(basic_fruits().as_slice());
        let mut grid = GridState::new(1);
        grid.set_quick_filter("apple");
        grid.toggle_sort(FruitListColumn::Name);
        grid.toggle_sort(FruitListColumn::Name);

        let rows = grid.visible_rows(&snapshot.rows);
        let bytes = ExportService::new().to_csv(&rows).unwrap();
        assert_eq!(
            csv_text(&bytes),
            "#,Fruit Name,Color\n3,green apple,#8db600\n1,apple,Red\n"
        );
    }

    #[async_std::test]
    async fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LIST_EXPORT_FILE_NAME), "old contents").unwrap();

        let snapshot = FruitListSnapshot::from(basic_fruits().as_slice());
        let rows: Vec<&FruitListModel> = snapshot.rows.iter().take(1).collect();
        let bytes = ExportService::new().to_csv(&rows).unwrap();
        let path = write_export(dir.path(), LIST_EXPORT_FILE_NAME, bytes)
            .await
            .unwrap();

        assert_eq!(path, dir.path().join(LIST_EXPORT_FILE_NAME));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(csv_text(&written), "#,Fruit Name,Color\n1,apple,Red\n");
    }

    #[async_std::test]
    async fn test_export_to_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = write_export(&missing, EXTENDED_EXPORT_FILE_NAME, Vec::new()).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
