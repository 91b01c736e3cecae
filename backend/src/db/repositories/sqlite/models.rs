use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::calculations;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = calculations)]
pub struct CalculationRow {
    pub id: i64,
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = calculations)]
pub struct NewCalculationRow {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub created_at: NaiveDateTime,
}
