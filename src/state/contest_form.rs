#[cfg(test)]
#[path = "contest_form_test.rs"]
mod contest_form_test;

use crate::net::types::ContestType;
use crate::state::submission::{FormError, require};

/// Contest-creation form fields. Serializes to the `/api/contests` request
/// body; the server assigns the id and initial status.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
}

impl ContestForm {
    /// Validate before the creation call: all fields present, duration a
    /// positive number of hours.
    pub fn validate(&self) -> Result<(), FormError> {
        require("Contest Title", &self.title)?;
        require("Description", &self.description)?;
        require("Date", &self.date)?;
        require("Start Time", &self.start_time)?;
        require("Duration", &self.duration)?;

        match self.duration.trim().parse::<f64>() {
            Ok(hours) if hours > 0.0 => Ok(()),
            _ => Err(FormError::Validation(
                "Duration must be a positive number of hours".to_owned(),
            )),
        }
    }
}
