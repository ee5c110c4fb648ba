// src/state/forms.rs
//
// The two form records. Fields hold raw text exactly as typed; parsing
// into request bodies happens only on submit.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::api::{NewClient, NewQuery};
use crate::config::consts::DEFAULT_PAGES_TO_SCRAPE;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),

    #[error("Pages to scrape must be at least 1")]
    PagesBelowOne,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryField {
    QueryText,
    ClientId,
    Frequency,
    PagesToScrape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Email,
}

/// Create-query form. `client_id` doubles as the "load queries for" selector.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct QueryForm {
    #[validate(length(min = 1))]
    pub query_text: String,
    #[validate(length(min = 1))]
    pub client_id: String,
    /// Free text; the backend owns the allowed values.
    #[validate(length(min = 1))]
    pub frequency: String,
    #[validate(length(min = 1))]
    pub pages_to_scrape: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            query_text: s!(),
            client_id: s!(),
            frequency: s!(),
            pages_to_scrape: s!(DEFAULT_PAGES_TO_SCRAPE),
        }
    }
}

impl QueryForm {
    pub fn set(&mut self, field: QueryField, value: String) {
        match field {
            QueryField::QueryText => self.query_text = value,
            QueryField::ClientId => self.client_id = value,
            QueryField::Frequency => self.frequency = value,
            QueryField::PagesToScrape => self.pages_to_scrape = value,
        }
    }

    pub fn to_request(&self) -> Result<NewQuery, FormError> {
        self.validate().map_err(missing)?;

        let client_id = parse_int(&self.client_id, "Client ID")?;
        let pages_to_scrape = parse_int(&self.pages_to_scrape, "Pages to scrape")?;
        if pages_to_scrape < 1 {
            return Err(FormError::PagesBelowOne);
        }

        Ok(NewQuery {
            query_text: self.query_text.clone(),
            client_id,
            frequency: self.frequency.clone(),
            pages_to_scrape,
        })
    }

    /// The selector used by "load queries". `None` when nothing is selected.
    pub fn selected_client(&self) -> Option<Result<i64, FormError>> {
        if self.client_id.is_empty() {
            None
        } else {
            Some(parse_int(&self.client_id, "Client ID"))
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1))]
    pub client_name: String,
    /// Required only; no format check.
    #[validate(length(min = 1))]
    pub client_email: String,
}

impl ClientForm {
    pub fn set(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::Name => self.client_name = value,
            ClientField::Email => self.client_email = value,
        }
    }

    pub fn to_request(&self) -> Result<NewClient, FormError> {
        self.validate().map_err(missing)?;
        Ok(NewClient {
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn parse_int(raw: &str, label: &'static str) -> Result<i64, FormError> {
    raw.trim().parse::<i64>().map_err(|_| FormError::NotANumber(label))
}

fn missing(errors: ValidationErrors) -> FormError {
    let mut fields: Vec<&'static str> = errors
        .field_errors()
        .into_keys()
        .map(|k| field_label(&k))
        .collect();
    fields.sort_unstable();
    FormError::Missing(fields)
}

fn field_label(field: &str) -> &'static str {
    match field {
        "query_text" => "search text",
        "client_id" => "client",
        "frequency" => "frequency",
        "pages_to_scrape" => "pages to scrape",
        "client_name" => "client name",
        "client_email" => "client email",
        _ => "field",
    }
}
