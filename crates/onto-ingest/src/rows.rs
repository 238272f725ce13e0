use tracing::{debug, info};

use onto_model::{FieldRow, OptionColumn, OptionSheet};

use crate::columns::FieldSheetColumns;
use crate::error::Result;
use crate::sheet::{Sheet, SheetRow};

fn optional_cell(row: &SheetRow, index: Option<usize>) -> String {
    index.map(|idx| row.cell(idx).to_string()).unwrap_or_default()
}

/// Converts a field-definition sheet into raw rows, one per data row.
///
/// Rows are not validated here; blank `field` cells are left for the
/// classifier to skip so that the skip is reported with its row number.
pub fn read_field_rows(sheet: &Sheet) -> Result<Vec<FieldRow>> {
    let columns = FieldSheetColumns::resolve(&sheet.headers)?;
    debug!(?columns, "field sheet columns resolved");
    let rows: Vec<FieldRow> = sheet
        .rows
        .iter()
        .map(|row| FieldRow {
            row: row.number,
            field: row.cell(columns.field).to_string(),
            schema_field: row.cell(columns.schema_field).to_string(),
            ai_category: optional_cell(row, columns.ai_category),
            manual_calc: optional_cell(row, columns.manual_calc),
            option_set: optional_cell(row, columns.option_set),
            exists: optional_cell(row, columns.exists),
        })
        .collect();
    info!(rows = rows.len(), "field rows read");
    Ok(rows)
}

/// Exposes a sheet column by column, preserving column order.
/// Ragged rows contribute empty cells past their end.
pub fn read_option_sheet(sheet: &Sheet) -> OptionSheet {
    let columns = sheet
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| OptionColumn {
            name: header.clone(),
            cells: sheet.rows.iter().map(|row| row.cell(idx).to_string()).collect(),
        })
        .collect();
    OptionSheet { columns }
}
