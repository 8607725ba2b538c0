// src/config/fields.rs
//! Race-card header vocabulary.
//!
//! Each `<li>` in the race header carries a label ("Starters", "Distance", …)
//! and a value span. An item is assigned to the first entry below whose label
//! is a substring of the item's text (case-sensitive), so table order matters.

/// Race metadata slot a header item fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaceField {
    FieldSize,
    Distance,
    Grade,
    Prize,
    Age,
    Going,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    pub field: RaceField,
    /// Selector for the value inside the `<li>`.
    pub value: &'static str,
    /// Prepended to the extracted value.
    pub prefix: &'static str,
}

const VALUE: &str = r#"span[class="info beta-caption4"]"#;

pub const RACE_FIELDS: [FieldSpec; 6] = [
    FieldSpec { label: "Starter",  field: RaceField::FieldSize, value: r#"span[class="info info beta-caption4"]"#, prefix: "" },
    FieldSpec { label: "Distance", field: RaceField::Distance,  value: VALUE, prefix: "" },
    FieldSpec { label: "Class",    field: RaceField::Grade,     value: VALUE, prefix: "Class:" },
    FieldSpec { label: "Prize",    field: RaceField::Prize,     value: VALUE, prefix: "" },
    FieldSpec { label: "Age",      field: RaceField::Age,       value: VALUE, prefix: "" },
    FieldSpec { label: "Going",    field: RaceField::Going,     value: VALUE, prefix: "" },
];

/// First vocabulary entry whose label occurs in `text`, with its table index.
pub fn match_label(text: &str) -> Option<(usize, &'static FieldSpec)> {
    RACE_FIELDS.iter().enumerate().find(|(_, spec)| text.contains(spec.label))
}
