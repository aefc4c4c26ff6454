//! Food record model
//!
//! One FNDDS survey food: per-100g nutrient amounts plus the known serving
//! portions and their gram weights. Records are stored as JSON documents.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A catalog food as exported by FoodData Central
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<i64>,
    #[serde(default)]
    pub food_nutrients: Vec<Nutrient>,
    #[serde(default)]
    pub food_portions: Vec<Portion>,
}

/// Nutrient amount per 100g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(default)]
    pub amount: f64,
    /// Missing info decodes to an empty code, which is never tracked
    #[serde(default)]
    pub nutrient: NutrientInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    /// Nutrient code, e.g. "208" for energy
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

impl Nutrient {
    pub fn code(&self) -> &str {
        &self.nutrient.number
    }
}

/// A named serving size, e.g. "1 cup, sliced" = 150g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portion {
    #[serde(default)]
    pub gram_weight: f64,
    #[serde(default)]
    pub portion_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
}

impl FoodRecord {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            fdc_id: None,
            food_nutrients: Vec::new(),
            food_portions: Vec::new(),
        }
    }

    /// Append a nutrient (amount per 100g)
    pub fn with_nutrient(mut self, code: impl Into<String>, amount: f64) -> Self {
        self.food_nutrients.push(Nutrient {
            amount,
            nutrient: NutrientInfo {
                number: code.into(),
                name: String::new(),
                unit_name: None,
            },
        });
        self
    }

    /// Append a portion
    pub fn with_portion(mut self, description: impl Into<String>, gram_weight: f64) -> Self {
        let sequence_number = self.food_portions.len() as i64 + 1;
        self.food_portions.push(Portion {
            gram_weight,
            portion_description: description.into(),
            modifier: None,
            sequence_number: Some(sequence_number),
        });
        self
    }

    /// Insert this record as a new document row
    pub fn insert(&self, conn: &Connection) -> DbResult<i64> {
        let document = serde_json::to_string(self)?;
        conn.execute(
            "INSERT INTO foods (fdc_id, description, document) VALUES (?1, ?2, ?3)",
            params![self.fdc_id, self.description, document],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Find the first record whose description matches, ignoring case
    pub fn find_by_description(conn: &Connection, description: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT document FROM foods
            WHERE LOWER(description) = LOWER(?1)
            ORDER BY id ASC
            LIMIT 1
            "#,
        )?;

        let result = stmt.query_row([description], |row| row.get::<_, String>(0));
        match result {
            Ok(document) => Ok(Some(serde_json::from_str(&document)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Count stored records
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Accepted layouts of a FoodData Central JSON export
#[derive(Deserialize)]
#[serde(untagged)]
enum FoodExport {
    Survey {
        #[serde(rename = "SurveyFoods")]
        survey_foods: Vec<FoodRecord>,
    },
    Bare(Vec<FoodRecord>),
}

/// Parse an export file: either `{"SurveyFoods": [...]}` or a bare array
pub fn parse_food_export(json: &str) -> serde_json::Result<Vec<FoodRecord>> {
    let export: FoodExport = serde_json::from_str(json)?;
    Ok(match export {
        FoodExport::Survey { survey_foods } => survey_foods,
        FoodExport::Bare(records) => records,
    })
}
