use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Mutable working copy of a voyage under creation.
///
/// Scalar fields hold raw operator input as entered; nothing is parsed,
/// trimmed or rejected until [`VoyageDraft::validate`] runs. Unit types are
/// toggled in and out of a set, so repeating a toggle is a no-op pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoyageDraft {
    departure: String,
    arrival: String,
    port_of_loading: String,
    port_of_discharge: String,
    vessel: String,
    unit_types: BTreeSet<String>,
}

/// The five scalar input fields of a [`VoyageDraft`].
#[derive(Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DraftField {
    #[strum(serialize = "departure")]
    Departure,
    #[strum(serialize = "arrival")]
    Arrival,
    #[strum(serialize = "port of loading")]
    PortOfLoading,
    #[strum(serialize = "port of discharge")]
    PortOfDischarge,
    #[strum(serialize = "vessel")]
    Vessel,
}

impl VoyageDraft {
    /// Minimum number of unit types a voyage must permit.
    pub const MIN_UNIT_TYPES: usize = 5;

    /// Overwrites one scalar field with the given raw value. Never fails;
    /// bad input surfaces later through [`VoyageDraft::validate`].
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Departure => self.departure = value,
            DraftField::Arrival => self.arrival = value,
            DraftField::PortOfLoading => self.port_of_loading = value,
            DraftField::PortOfDischarge => self.port_of_discharge = value,
            DraftField::Vessel => self.vessel = value,
        }
    }

    /// Adds the unit type id to the selection, or removes it if already
    /// selected.
    pub fn toggle_unit_type(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.unit_types.remove(&id) {
            self.unit_types.insert(id);
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Departure => self.departure.as_str(),
            DraftField::Arrival => self.arrival.as_str(),
            DraftField::PortOfLoading => self.port_of_loading.as_str(),
            DraftField::PortOfDischarge => self.port_of_discharge.as_str(),
            DraftField::Vessel => self.vessel.as_str(),
        }
    }

    pub fn unit_types(&self) -> &BTreeSet<String> { &self.unit_types }

    /// Resets every field to its initial empty state.
    pub fn clear(&mut self) { *self = Self::default(); }

    /// Checks the draft and, if it holds up, freezes it into a
    /// [`VoyagePlan`] with both timestamps canonicalized to UTC.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// 1. every scalar non-blank and at least [`Self::MIN_UNIT_TYPES`]
    ///    unit types selected,
    /// 2. both timestamps parsable,
    /// 3. departure strictly before arrival.
    pub fn validate(&self) -> Result<VoyagePlan, ValidationError> {
        if DraftField::iter().any(|field| self.field(field).trim().is_empty())
            || self.unit_types.len() < Self::MIN_UNIT_TYPES
        {
            return Err(ValidationError::Incomplete);
        }
        let departure = parse_timestamp(&self.departure)
            .ok_or(ValidationError::UnparsableTimestamp(DraftField::Departure))?;
        let arrival = parse_timestamp(&self.arrival)
            .ok_or(ValidationError::UnparsableTimestamp(DraftField::Arrival))?;
        if departure >= arrival {
            return Err(ValidationError::DepartureNotBeforeArrival);
        }
        Ok(VoyagePlan {
            departure,
            arrival,
            port_of_loading: self.port_of_loading.clone(),
            port_of_discharge: self.port_of_discharge.clone(),
            vessel: self.vessel.clone(),
            unit_types: self.unit_types.iter().cloned().collect(),
        })
    }
}

/// Parses an operator-entered timestamp. Zoneless input, e.g. what an HTML
/// `datetime-local` control produces, is interpreted as UTC; an explicit
/// offset is converted.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

/// An immutable, fully validated voyage ready for submission. Produced only
/// by [`VoyageDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoyagePlan {
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    port_of_loading: String,
    port_of_discharge: String,
    vessel: String,
    unit_types: Vec<String>,
}

impl VoyagePlan {
    pub fn departure(&self) -> DateTime<Utc> { self.departure }
    pub fn arrival(&self) -> DateTime<Utc> { self.arrival }
    pub fn port_of_loading(&self) -> &str { self.port_of_loading.as_str() }
    pub fn port_of_discharge(&self) -> &str { self.port_of_discharge.as_str() }
    pub fn vessel(&self) -> &str { self.vessel.as_str() }
    /// Selected unit type ids in lexicographic order.
    pub fn unit_types(&self) -> &[String] { &self.unit_types }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A scalar field is blank or fewer than the minimum unit types are
    /// selected.
    Incomplete,
    /// The named field does not parse as a timestamp.
    UnparsableTimestamp(DraftField),
    /// Both timestamps parse but departure is not strictly before arrival.
    DepartureNotBeforeArrival,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Incomplete => {
                write!(f, "missing fields or insufficient unit types")
            }
            ValidationError::UnparsableTimestamp(field) => {
                write!(f, "{field} is not a valid timestamp")
            }
            ValidationError::DepartureNotBeforeArrival => {
                write!(f, "departure must precede arrival")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
