use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Month};

///
/// Gender
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Gender {
    Female,
    Male,
}

///
/// Person
///
/// Domain-object fixture mapped to the "People" region with an explicit
/// id. Equality is derived over all five fields.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub first_name: String,
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Monotonic identifier sequence for fixtures that need distinct ids.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

impl Person {
    /// Panics on empty names; fixtures must be well-formed.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<Date>,
        gender: Option<Gender>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();

        assert!(!first_name.trim().is_empty(), "first_name must be specified");
        assert!(!last_name.trim().is_empty(), "last_name must be specified");

        Self {
            id: None,
            first_name,
            last_name,
            birth_date,
            gender,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_next_id(self) -> Self {
        let id = next_id();
        self.with_id(id)
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Build a fixture birth date; panics on out-of-range components.
#[must_use]
pub fn birth_date(year: i32, month: u8, day: u8) -> Date {
    let month = Month::try_from(month).expect("valid month");

    Date::from_calendar_date(year, month, day).expect("valid calendar date")
}
