//! Shared data types for the REST API.
//!
//! Field and variant names follow the JSON the server speaks: camelCase
//! keys (`startTime`, `adminCode`) and kebab-case contest type values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The signed-in user identity returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Account role. Admins may create contests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A coding contest as served by the contests API.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Duration in hours, kept as entered (e.g. "2" or "1.5").
    pub duration: String,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub status: ContestStatus,
}

/// Lifecycle status of a contest. Upcoming contests accept registrations;
/// active contests accept joins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    #[default]
    Upcoming,
    Active,
}

impl ContestStatus {
    /// Badge text shown next to a contest title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Live",
        }
    }
}

/// The contest formats offered by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContestType {
    #[default]
    WeeklyChallenge,
    AlgorithmSprint,
    CodeMastersCup,
}

impl ContestType {
    /// Wire value, also used as the `<option>` value in the creation form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeeklyChallenge => "weekly-challenge",
            Self::AlgorithmSprint => "algorithm-sprint",
            Self::CodeMastersCup => "code-masters-cup",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeeklyChallenge => "Weekly Challenge",
            Self::AlgorithmSprint => "Algorithm Sprint",
            Self::CodeMastersCup => "Code Masters Cup",
        }
    }

    /// Parse a wire value back into a type. Returns `None` for unknown values
    /// so a stale `<select>` state cannot corrupt the form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly-challenge" => Some(Self::WeeklyChallenge),
            "algorithm-sprint" => Some(Self::AlgorithmSprint),
            "code-masters-cup" => Some(Self::CodeMastersCup),
            _ => None,
        }
    }
}
