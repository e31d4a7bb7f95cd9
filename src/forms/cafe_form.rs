use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::cafe::{Cafe, CafeRecord};

const REQUIRED: &str = "This field is required.";
const INVALID_CHOICE: &str = "Not a valid choice.";

/// How a choice field renders a boolean.
pub const CHOICES: [&str; 2] = ["True", "False"];

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text { max_len: usize },
    Choice,
}

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
}

const FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        name: "cafe",
        label: "Cafe Name",
        kind: FieldKind::Text { max_len: 250 },
    },
    FieldSpec {
        name: "map_url",
        label: "Map URL",
        kind: FieldKind::Text { max_len: 250 },
    },
    FieldSpec {
        name: "img_url",
        label: "Image URL",
        kind: FieldKind::Text { max_len: 500 },
    },
    FieldSpec {
        name: "location",
        label: "Location",
        kind: FieldKind::Text { max_len: 250 },
    },
    FieldSpec {
        name: "has_sockets",
        label: "Has Sockets",
        kind: FieldKind::Choice,
    },
    FieldSpec {
        name: "has_toilet",
        label: "Has Toilet",
        kind: FieldKind::Choice,
    },
    FieldSpec {
        name: "has_wifi",
        label: "Has Wifi",
        kind: FieldKind::Choice,
    },
    FieldSpec {
        name: "can_take_calls",
        label: "Can Take Calls",
        kind: FieldKind::Choice,
    },
    FieldSpec {
        name: "seats",
        label: "Seats",
        kind: FieldKind::Text { max_len: 250 },
    },
    FieldSpec {
        name: "coffee_price",
        label: "Coffee Price",
        kind: FieldKind::Text { max_len: 250 },
    },
];

/// Raw add/edit submission. Missing fields deserialize as empty strings so
/// that they fail validation instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeForm {
    pub cafe: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: String,
    pub has_toilet: String,
    pub has_wifi: String,
    pub can_take_calls: String,
    pub seats: String,
    pub coffee_price: String,
    #[serde(skip_serializing)]
    pub csrf_token: String,
}

/// Field-level validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    /// Record an error; the first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// One form field as the templates render it
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub choices: Vec<&'static str>,
    pub error: Option<String>,
}

impl CafeForm {
    /// Validate the submission and build the record to store.
    pub fn validate(&self) -> Result<CafeRecord, FormErrors> {
        let mut errors = FormErrors::default();

        let name = text_field(&mut errors, "cafe", &self.cafe);
        let map_url = text_field(&mut errors, "map_url", &self.map_url);
        let img_url = text_field(&mut errors, "img_url", &self.img_url);
        let location = text_field(&mut errors, "location", &self.location);
        let has_sockets = choice_field(&mut errors, "has_sockets", &self.has_sockets);
        let has_toilet = choice_field(&mut errors, "has_toilet", &self.has_toilet);
        let has_wifi = choice_field(&mut errors, "has_wifi", &self.has_wifi);
        let can_take_calls = choice_field(&mut errors, "can_take_calls", &self.can_take_calls);
        let seats = text_field(&mut errors, "seats", &self.seats);
        let coffee_price = text_field(&mut errors, "coffee_price", &self.coffee_price);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CafeRecord {
            name,
            map_url,
            img_url,
            location,
            has_sockets,
            has_toilet,
            has_wifi,
            can_take_calls,
            seats: Some(seats),
            coffee_price: Some(coffee_price),
        })
    }

    /// The fields in display order, with their current values and errors.
    pub fn fields(&self, errors: &FormErrors) -> Vec<FieldView> {
        FIELDS
            .iter()
            .map(|spec| FieldView {
                name: spec.name,
                label: spec.label,
                value: self.value(spec.name).to_string(),
                choices: match spec.kind {
                    FieldKind::Choice => CHOICES.to_vec(),
                    FieldKind::Text { .. } => Vec::new(),
                },
                error: errors.get(spec.name).map(str::to_string),
            })
            .collect()
    }

    fn value(&self, name: &str) -> &str {
        match name {
            "cafe" => &self.cafe,
            "map_url" => &self.map_url,
            "img_url" => &self.img_url,
            "location" => &self.location,
            "has_sockets" => &self.has_sockets,
            "has_toilet" => &self.has_toilet,
            "has_wifi" => &self.has_wifi,
            "can_take_calls" => &self.can_take_calls,
            "seats" => &self.seats,
            "coffee_price" => &self.coffee_price,
            _ => "",
        }
    }
}

impl From<&Cafe> for CafeForm {
    fn from(cafe: &Cafe) -> Self {
        Self {
            cafe: cafe.name.clone(),
            map_url: cafe.map_url.clone(),
            img_url: cafe.img_url.clone(),
            location: cafe.location.clone(),
            has_sockets: choice_label(cafe.has_sockets).to_string(),
            has_toilet: choice_label(cafe.has_toilet).to_string(),
            has_wifi: choice_label(cafe.has_wifi).to_string(),
            can_take_calls: choice_label(cafe.can_take_calls).to_string(),
            seats: cafe.seats.clone().unwrap_or_default(),
            coffee_price: cafe.coffee_price.clone().unwrap_or_default(),
            csrf_token: String::new(),
        }
    }
}

/// Parse a submitted choice. Anything but `true`/`false` is rejected.
pub fn parse_choice(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn choice_label(value: bool) -> &'static str {
    if value { CHOICES[0] } else { CHOICES[1] }
}

fn max_len(field: &str) -> usize {
    FIELDS
        .iter()
        .find_map(|spec| match spec.kind {
            FieldKind::Text { max_len } if spec.name == field => Some(max_len),
            _ => None,
        })
        .unwrap_or(usize::MAX)
}

fn text_field(errors: &mut FormErrors, field: &'static str, raw: &str) -> String {
    let value = raw.trim();
    let limit = max_len(field);
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else if value.chars().count() > limit {
        errors.add(field, format!("Field cannot be longer than {limit} characters."));
    }
    value.to_string()
}

fn choice_field(errors: &mut FormErrors, field: &'static str, raw: &str) -> bool {
    match parse_choice(raw) {
        Some(value) => value,
        None => {
            let message = if raw.trim().is_empty() {
                REQUIRED
            } else {
                INVALID_CHOICE
            };
            errors.add(field, message);
            false
        }
    }
}
