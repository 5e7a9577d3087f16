//! Static schema registry for the four gene list categories.
//!
//! Every category shares the base fields; a category may add its own fields
//! after them. Header order is always base fields, then category fields, then
//! (for combined lists) `departments` and `total`.

use crate::category::Category;

pub const HUGO_NAME: &str = "hugo_name";
pub const HGNC_ID: &str = "hgnc_id";
pub const PROTOCOL: &str = "protocol";
pub const PROTOCOL_SPECIFICATION: &str = "protocol_specification";
pub const DATE_ADDED: &str = "date_added";
pub const NOTES: &str = "notes";
pub const GAIN_LOSS_BOTH: &str = "gain_loss_both";
pub const TREATMENT_RELEVANCE: &str = "behandlings_relevans";
pub const DEPARTMENTS: &str = "departments";
pub const TOTAL: &str = "total";

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty symbol without whitespace.
    GeneSymbol,
    /// Strictly positive integer identifier.
    GeneId,
    /// Boolean token. Optional flags default to false when missing or empty.
    Flag { required: bool },
    /// Optional free text; empty means absent.
    Text,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// Copy-number direction, exact case-sensitive match against
    /// [`Direction::VALUES`](crate::Direction::VALUES).
    Direction,
}

impl FieldKind {
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldKind::Flag { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Base fields shared by every category, in header order.
pub const BASE_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: HUGO_NAME,
        kind: FieldKind::GeneSymbol,
    },
    FieldSpec {
        name: HGNC_ID,
        kind: FieldKind::GeneId,
    },
    FieldSpec {
        name: PROTOCOL,
        kind: FieldKind::Flag { required: false },
    },
    FieldSpec {
        name: PROTOCOL_SPECIFICATION,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: DATE_ADDED,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: NOTES,
        kind: FieldKind::Text,
    },
];

/// Columns only present on combined lists.
pub const COMBINED_FIELDS: [&str; 2] = [DEPARTMENTS, TOTAL];

/// Which header variant to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Plain master list (base + category fields).
    Flat,
    /// Combined list (adds `departments` and `total`).
    Combined,
}

/// Field layout of one category.
#[derive(Debug)]
pub struct Schema {
    pub category: Category,
    specific: &'static [FieldSpec],
}

static GERMLINE: Schema = Schema {
    category: Category::Germline,
    specific: &[FieldSpec {
        name: TREATMENT_RELEVANCE,
        kind: FieldKind::Flag { required: true },
    }],
};

static FUSION: Schema = Schema {
    category: Category::Fusion,
    specific: &[],
};

static CNV: Schema = Schema {
    category: Category::CopyNumberVariant,
    specific: &[FieldSpec {
        name: GAIN_LOSS_BOTH,
        kind: FieldKind::Direction,
    }],
};

static SNV: Schema = Schema {
    category: Category::SingleNucleotideVariant,
    specific: &[],
};

impl Schema {
    /// Looks up the schema registered for `category`.
    pub fn for_category(category: Category) -> &'static Schema {
        match category {
            Category::Germline => &GERMLINE,
            Category::Fusion => &FUSION,
            Category::CopyNumberVariant => &CNV,
            Category::SingleNucleotideVariant => &SNV,
        }
    }

    /// All fields a data row carries, base fields first.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        BASE_FIELDS.iter().chain(self.specific.iter())
    }

    /// Fields beyond the shared base set.
    pub fn specific_fields(&self) -> &'static [FieldSpec] {
        self.specific
    }

    pub fn specific_field_names(&self) -> Vec<&'static str> {
        self.specific.iter().map(|field| field.name).collect()
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|field| field.name == name)
    }

    /// Ordered header column names.
    pub fn header(&self, layout: HeaderLayout) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.fields().map(|field| field.name).collect();
        if layout == HeaderLayout::Combined {
            names.extend(COMBINED_FIELDS);
        }
        names
    }
}

impl Category {
    pub fn schema(&self) -> &'static Schema {
        Schema::for_category(*self)
    }
}
