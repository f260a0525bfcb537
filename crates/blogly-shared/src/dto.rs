//! Form DTOs decoded from `application/x-www-form-urlencoded` bodies.

use thiserror::Error;

/// Errors raised while reading a submitted form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing form field: {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for form field {field}")]
    Invalid { field: &'static str, value: String },
}

/// Decoded key/value pairs of a form body.
///
/// Keys may repeat; multi-selects such as the tag checkboxes arrive as one
/// pair per selected value.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        Self(url::form_urlencoded::parse(body).into_owned().collect())
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `key`, in submission order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn required(&self, key: &'static str) -> Result<&str, FormError> {
        self.get(key).ok_or(FormError::Missing(key))
    }
}

/// Submitted user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl TryFrom<&FormFields> for UserForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: fields.required("first_name")?.to_string(),
            last_name: fields.required("last_name")?.to_string(),
            image_url: fields.get("image_url").map(str::to_string),
        })
    }
}

/// Submitted post form with the selected tag ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<i32>,
}

impl TryFrom<&FormFields> for PostForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        let tags = fields
            .get_all("tags")
            .map(|raw| {
                raw.trim().parse().map_err(|_| FormError::Invalid {
                    field: "tags",
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;

        Ok(Self {
            title: fields.required("title")?.to_string(),
            content: fields.required("content")?.to_string(),
            tags,
        })
    }
}

/// Submitted tag form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
}

impl TryFrom<&FormFields> for TagForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fields.required("name")?.to_string(),
        })
    }
}
