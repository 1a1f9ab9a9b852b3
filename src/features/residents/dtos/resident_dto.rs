use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::census_form::TableView;
use crate::features::residents::models::{ResidentEntry, ResidentField, ResidentRecord};

/// Response DTO for a stored resident, all fields included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResidentResponseDto {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: ResidentRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResidentEntry> for ResidentResponseDto {
    fn from(entry: ResidentEntry) -> Self {
        Self {
            id: entry.id,
            record: entry.record,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// One column of the resident table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnDto {
    pub field: ResidentField,
    pub label: String,
}

/// One row of the resident table; `cells` follow the column order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableRowDto {
    pub id: Uuid,
    pub cells: Vec<String>,
}

/// Resident table projection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResidentTableDto {
    pub columns: Vec<TableColumnDto>,
    pub rows: Vec<TableRowDto>,
}

impl From<&TableView> for ResidentTableDto {
    fn from(table: &TableView) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|field| TableColumnDto {
                field: *field,
                label: field.label().to_string(),
            })
            .collect();
        let rows = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, entry)| TableRowDto {
                id: entry.id,
                cells: table.cells(index).unwrap_or_default(),
            })
            .collect();

        Self { columns, rows }
    }
}
