use chrono::NaiveDate;
use diesel::prelude::*;

use coachfit_core::progress::ProgressEntry;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::progress_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProgressEntryDB {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub waist_cm: Option<i32>,
    pub chest_cm: Option<i32>,
    pub arms_cm: Option<i32>,
    pub notes: Option<String>,
}

impl From<ProgressEntryDB> for ProgressEntry {
    fn from(db: ProgressEntryDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            date: db.date,
            weight_kg: db.weight_kg,
            muscle_mass_kg: db.muscle_mass_kg,
            body_fat_percent: db.body_fat_percent,
            waist_cm: db.waist_cm,
            chest_cm: db.chest_cm,
            arms_cm: db.arms_cm,
            notes: db.notes,
        }
    }
}
