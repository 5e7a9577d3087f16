//! Row validation against the category schema.
//!
//! Every field of the schema is checked, so a rejected row reports all of
//! its violations at once rather than stopping at the first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use genlist_ingest::RawRow;
use genlist_model::schema::{
    DATE_ADDED, GAIN_LOSS_BOTH, HGNC_ID, HUGO_NAME, NOTES, PROTOCOL, PROTOCOL_SPECIFICATION,
    TREATMENT_RELEVANCE,
};
use genlist_model::{Category, CategoryFields, DATE_FORMAT, Direction, FieldKind, FieldSpec, GeneRecord};

use crate::issue::FieldIssue;

const FIELD_REQUIRED: &str = "Field required";
const TRUE_TOKENS: [&str; 6] = ["1", "on", "t", "true", "y", "yes"];
const FALSE_TOKENS: [&str; 6] = ["0", "off", "f", "false", "n", "no"];

/// A field value after its rule passed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Symbol(String),
    Id(u32),
    Flag(bool),
    Text(Option<String>),
    Date(NaiveDate),
    Direction(Direction),
}

impl FieldValue {
    fn into_symbol(self) -> Option<String> {
        match self {
            FieldValue::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    fn into_id(self) -> Option<u32> {
        match self {
            FieldValue::Id(id) => Some(id),
            _ => None,
        }
    }

    fn into_flag(self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    fn into_text(self) -> Option<Option<String>> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    fn into_date(self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(date),
            _ => None,
        }
    }

    fn into_direction(self) -> Option<Direction> {
        match self {
            FieldValue::Direction(direction) => Some(direction),
            _ => None,
        }
    }
}

/// Checked values of one row, keyed by field name.
struct CheckedFields(BTreeMap<&'static str, FieldValue>);

impl CheckedFields {
    /// Removes the value of `name`, failing when it is absent or of another
    /// kind than `extract` expects.
    fn take<T>(
        &mut self,
        name: &'static str,
        extract: fn(FieldValue) -> Option<T>,
    ) -> Result<T, FieldIssue> {
        self.0
            .remove(name)
            .and_then(extract)
            .ok_or_else(|| FieldIssue::new(name, "", FIELD_REQUIRED))
    }
}

/// Parses `row` into a typed record of `category`.
///
/// # Errors
///
/// Returns every violated field rule when the row is invalid.
pub fn validate_row(category: Category, row: &RawRow) -> Result<GeneRecord, Vec<FieldIssue>> {
    let schema = category.schema();
    let mut issues = Vec::new();
    let mut values: BTreeMap<&'static str, FieldValue> = BTreeMap::new();

    for spec in schema.fields() {
        match check_field(spec, row.get(spec.name)) {
            Ok(value) => {
                values.insert(spec.name, value);
            }
            Err(issue) => issues.push(issue),
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }
    assemble(category, CheckedFields(values)).map_err(|issue| vec![issue])
}

fn check_field(spec: &FieldSpec, raw: Option<&str>) -> Result<FieldValue, FieldIssue> {
    let value = raw.unwrap_or_default();
    let missing = || FieldIssue::new(spec.name, value, FIELD_REQUIRED);

    match spec.kind {
        FieldKind::GeneSymbol => {
            if raw.is_none() {
                return Err(missing());
            }
            if value.is_empty() {
                return Err(FieldIssue::new(spec.name, value, "Name cannot be empty"));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(FieldIssue::new(
                    spec.name,
                    value,
                    format!("Name cannot have spaces: '{value}'"),
                ));
            }
            Ok(FieldValue::Symbol(value.to_string()))
        }
        FieldKind::GeneId => {
            if raw.is_none() {
                return Err(missing());
            }
            let Ok(number) = value.trim().parse::<i64>() else {
                return Err(FieldIssue::new(
                    spec.name,
                    value,
                    "Input should be a valid integer, unable to parse string as an integer",
                ));
            };
            if number <= 0 {
                return Err(FieldIssue::new(
                    spec.name,
                    value,
                    format!("HGNC must be greater than 0: '{number}'"),
                ));
            }
            u32::try_from(number).map(FieldValue::Id).map_err(|_| {
                FieldIssue::new(spec.name, value, format!("HGNC is out of range: '{number}'"))
            })
        }
        FieldKind::Flag { required } => {
            if value.is_empty() {
                return if required {
                    Err(missing())
                } else {
                    Ok(FieldValue::Flag(false))
                };
            }
            parse_flag(value).map(FieldValue::Flag).ok_or_else(|| {
                FieldIssue::new(
                    spec.name,
                    value,
                    "Input should be a valid boolean, unable to interpret input",
                )
            })
        }
        FieldKind::Text => Ok(FieldValue::Text(
            Some(value.to_string()).filter(|text| !text.is_empty()),
        )),
        FieldKind::Date => {
            if raw.is_none() {
                return Err(missing());
            }
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|_| {
                    FieldIssue::new(
                        spec.name,
                        value,
                        "Input should be a valid date in the format YYYY-MM-DD",
                    )
                })
        }
        FieldKind::Direction => {
            if raw.is_none() {
                return Err(missing());
            }
            value.parse().map(FieldValue::Direction).map_err(|_| {
                let options: Vec<String> =
                    Direction::VALUES.iter().map(|v| format!("'{v}'")).collect();
                FieldIssue::new(
                    spec.name,
                    value,
                    format!("Input should be {}", join_options(&options)),
                )
            })
        }
    }
}

/// Parses a boolean token (case-insensitive).
pub fn parse_flag(value: &str) -> Option<bool> {
    let lowered = value.to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn join_options(options: &[String]) -> String {
    match options {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// Builds the record from checked values.
///
/// # Errors
///
/// Fails on the first schema field without a checked value.
fn assemble(category: Category, mut values: CheckedFields) -> Result<GeneRecord, FieldIssue> {
    let details = match category {
        Category::Germline => CategoryFields::Germline {
            treatment_relevant: values.take(TREATMENT_RELEVANCE, FieldValue::into_flag)?,
        },
        Category::Fusion => CategoryFields::Fusion,
        Category::CopyNumberVariant => CategoryFields::CopyNumberVariant {
            direction: values.take(GAIN_LOSS_BOTH, FieldValue::into_direction)?,
        },
        Category::SingleNucleotideVariant => CategoryFields::SingleNucleotideVariant,
    };

    Ok(GeneRecord {
        hugo_name: values.take(HUGO_NAME, FieldValue::into_symbol)?,
        hgnc_id: values.take(HGNC_ID, FieldValue::into_id)?,
        protocol: values.take(PROTOCOL, FieldValue::into_flag)?,
        protocol_specification: values.take(PROTOCOL_SPECIFICATION, FieldValue::into_text)?,
        date_added: values.take(DATE_ADDED, FieldValue::into_date)?,
        notes: values.take(NOTES, FieldValue::into_text)?,
        details,
    })
}
