use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use storefront_core::{DomainError, DomainResult, FieldIssue, ValidationErrors, ValueObject};

use crate::cpf::Cpf;

/// Calendar date layout accepted for `dateManufacture`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated product record.
///
/// Only obtainable through [`Product::from_json`], so every instance held by
/// the registry satisfies the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    model: String,
    date_manufacture: NaiveDate,
    year: i64,
    brand: String,
    cpf: Cpf,
}

impl Product {
    /// Validates a request body against the product schema.
    ///
    /// Every field is checked and all violations are reported together, in
    /// declaration order. Unknown keys are ignored.
    pub fn from_json(body: &Value) -> DomainResult<Self> {
        let Some(obj) = body.as_object() else {
            return Err(DomainError::validation(FieldIssue::new(
                "body",
                "Expected object",
            )));
        };

        let mut errors = ValidationErrors::new();
        let name = non_empty_string(obj, "name", &mut errors);
        let model = non_empty_string(obj, "model", &mut errors);
        let date_manufacture = iso_date(obj, "dateManufacture", &mut errors);
        let year = integer(obj, "year", &mut errors);
        let brand = non_empty_string(obj, "brand", &mut errors);
        let cpf = cpf(obj, "cpf", &mut errors);

        match (name, model, date_manufacture, year, brand, cpf) {
            (Some(name), Some(model), Some(date_manufacture), Some(year), Some(brand), Some(cpf))
                if errors.is_empty() =>
            {
                Ok(Self {
                    name,
                    model,
                    date_manufacture,
                    year,
                    brand,
                    cpf,
                })
            }
            _ => Err(DomainError::Validation(errors)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn date_manufacture(&self) -> NaiveDate {
        self.date_manufacture
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }
}

impl ValueObject for Product {}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a Value> {
    let value = obj.get(field);
    if value.is_none() {
        errors.push(FieldIssue::new(field, "Required"));
    }
    value
}

fn string<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match required(obj, field, errors)? {
        Value::String(s) => Some(s),
        _ => {
            errors.push(FieldIssue::new(field, "Expected string"));
            None
        }
    }
}

fn non_empty_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let s = string(obj, field, errors)?;
    if s.is_empty() {
        errors.push(FieldIssue::new(
            field,
            "String must contain at least 1 character(s)",
        ));
        return None;
    }
    Some(s.to_string())
}

fn iso_date(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    let s = string(obj, field, errors)?;
    // chrono tolerates unpadded fields; the schema does not.
    let shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(date) if shaped => Some(date),
        _ => {
            errors.push(FieldIssue::new(field, "Invalid date"));
            None
        }
    }
}

fn integer(obj: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<i64> {
    let Value::Number(n) = required(obj, field, errors)? else {
        errors.push(FieldIssue::new(field, "Expected number"));
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // JSON numbers like `2020.0` are still integers.
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => {
            errors.push(FieldIssue::new(field, "Expected integer"));
            None
        }
    }
}

fn cpf(obj: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<Cpf> {
    let s = string(obj, field, errors)?;
    match Cpf::parse(s) {
        Ok(cpf) => Some(cpf),
        Err(issue) => {
            errors.push(issue);
            None
        }
    }
}
