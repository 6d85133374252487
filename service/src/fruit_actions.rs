/// Row actions of the list view. There is no mutation backend yet, so the
/// default implementation only logs.
pub trait FruitActionHooks: Send + Sync + std::fmt::Debug {
    fn edit(&self, fruit_id: i64);
    fn delete(&self, fruit_id: i64);
}

#[derive(Debug, Default)]
pub struct LoggingFruitActions;

impl FruitActionHooks for LoggingFruitActions {
    fn edit(&self, fruit_id: i64) {
        tracing::info!(fruit_id, "Edit fruit: {}", fruit_id);
    }

    fn delete(&self, fruit_id: i64) {
        tracing::info!(fruit_id, "Delete fruit: {}", fruit_id);
    }
}
