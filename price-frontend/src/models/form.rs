use std::str::FromStr;
use thiserror::Error;

/// House description as submitted through the prediction form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub sqft: i64,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub location: String,
    pub year_built: i64,
}

/// Values shown on first load, before anything has been submitted.
impl Default for FormInput {
    fn default() -> Self {
        Self {
            sqft: 0,
            bedrooms: 1,
            bathrooms: 0.0,
            location: "string".to_string(),
            year_built: 2023,
        }
    }
}

/// A single form field that could not be coerced to its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be {expected} (got \"{value}\")")]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FieldError {
    fn new(field: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            expected,
        }
    }
}

/// Submission that failed coercion.
///
/// `partial` holds every field that did parse; failed fields keep their zero value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid form data: {}", join_errors(.errors))]
pub struct FormRejection {
    pub partial: FormInput,
    pub errors: Vec<FieldError>,
}

impl FormRejection {
    /// Human-readable list of the offending fields.
    pub fn details(&self) -> String {
        join_errors(&self.errors)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormInput {
    /// Zero values used for fields that were left out of a submission.
    fn blank() -> Self {
        Self {
            sqft: 0,
            bedrooms: 0,
            bathrooms: 0.0,
            location: String::new(),
            year_built: 0,
        }
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormRejection> {
        let fields: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(|e| FormRejection {
                partial: Self::blank(),
                errors: vec![FieldError::new("form", e.to_string(), "URL-encoded")],
            })?;

        Self::from_fields(&fields)
    }

    /// Coerce raw name/value pairs into a `FormInput`.
    ///
    /// Missing or empty fields take their zero value and surrounding whitespace is ignored.
    /// Only the first occurrence of a repeated field is read. Ranges are not checked.
    pub fn from_fields<K, V>(fields: &[(K, V)]) -> Result<Self, FormRejection>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::blank();
        let mut errors = Vec::new();

        match coerce(fields, "sqft", "a whole number") {
            Ok(value) => form.sqft = value,
            Err(e) => errors.push(e),
        }
        match coerce(fields, "bedrooms", "a whole number") {
            Ok(value) => form.bedrooms = value,
            Err(e) => errors.push(e),
        }
        match coerce(fields, "bathrooms", "a number") {
            Ok(value) => form.bathrooms = value,
            Err(e) => errors.push(e),
        }
        match coerce(fields, "year_built", "a whole number") {
            Ok(value) => form.year_built = value,
            Err(e) => errors.push(e),
        }
        if let Some(location) = field(fields, "location") {
            form.location = location.to_string();
        }

        if errors.is_empty() {
            Ok(form)
        } else {
            Err(FormRejection {
                partial: form,
                errors,
            })
        }
    }
}

fn field<'a, K, V>(fields: &'a [(K, V)], name: &str) -> Option<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fields
        .iter()
        .find(|(key, _)| key.as_ref() == name)
        .map(|(_, value)| value.as_ref())
}

fn coerce<T, K, V>(
    fields: &[(K, V)],
    name: &'static str,
    expected: &'static str,
) -> Result<T, FieldError>
where
    T: FromStr + Default,
    K: AsRef<str>,
    V: AsRef<str>,
{
    match field(fields, name).map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw
            .parse()
            .map_err(|_| FieldError::new(name, raw, expected)),
    }
}
