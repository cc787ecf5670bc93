/// Widgets for the browser window
///
/// - `table` - the artwork table with per-row and per-page checkboxes
/// - `bulk_form` - the "select first N rows" drop-down panel
/// - `paginator` - page navigation under the table
///
/// Everything here is display only; all state lives in `state::browser`.

pub mod table;
pub mod bulk_form;
pub mod paginator;
