//! Free-text search and status filtering over in-memory record lists.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::models::{
    Customer, Inspection, InspectionType, PartOrder, PartOrderStatus, Warranty, WorkOrder,
    WorkOrderStatus,
};

/// A record that exposes the fields a search box looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A record with a closed-set status that list pages filter on.
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// Records whose indexed fields contain `query`, ignoring case, in input order.
/// An empty query matches everything.
#[instrument(skip(records), fields(total = records.len()))]
pub fn search<'a, T: Searchable>(query: &str, records: &'a [T]) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    let hits: Vec<&T> = records
        .iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect();
    debug!(matched = hits.len(), "search complete");
    hits
}

/// Either every status or exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn accepts(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr,
{
    type Err = ServiceError;

    /// `"all"` or the snake_case name of one status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<S>()
            .map(StatusFilter::Only)
            .map_err(|_| ServiceError::InvalidInput(format!("unknown status filter '{}'", s)))
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

/// Search box plus status dropdown, as on the list pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter<S> {
    pub query: String,
    pub status: StatusFilter<S>,
}

impl<S> Default for RecordFilter<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: StatusFilter::All,
        }
    }
}

impl<S: Copy + PartialEq> RecordFilter<S> {
    pub fn new(query: impl Into<String>, status: StatusFilter<S>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + HasStatus<Status = S>,
    {
        let needle = self.query.to_lowercase();
        records
            .iter()
            .filter(|record| self.status.accepts(&record.status()))
            .filter(|record| needle.is_empty() || record.matches_lowercase(&needle))
            .collect()
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.phone.as_str()),
        ];
        for vehicle in &self.vehicles {
            fields.push(Cow::Owned(vehicle.display_name()));
            fields.push(Cow::Borrowed(vehicle.vin.as_str()));
            if let Some(plate) = &vehicle.license_plate {
                fields.push(Cow::Borrowed(plate.as_str()));
            }
        }
        fields
    }
}

impl Searchable for WorkOrder {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.customer.name.as_str()),
            Cow::Owned(self.vehicle_description()),
        ]
    }
}

impl HasStatus for WorkOrder {
    type Status = WorkOrderStatus;

    fn status(&self) -> WorkOrderStatus {
        self.status
    }
}

impl Searchable for Warranty {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.vehicle_description.as_str()),
        ];
        fields.extend(self.services.iter().map(|s| Cow::Borrowed(s.as_str())));
        fields
    }
}

impl Searchable for PartOrder {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.part_name.as_str()),
            Cow::Borrowed(self.part_number.as_str()),
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.vehicle_description.as_str()),
        ]
    }
}

impl HasStatus for PartOrder {
    type Status = PartOrderStatus;

    fn status(&self) -> PartOrderStatus {
        self.status
    }
}

impl Searchable for Inspection {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.vehicle_description.as_str()),
        ]
    }
}

impl HasStatus for Inspection {
    type Status = InspectionType;

    fn status(&self) -> InspectionType {
        self.inspection_type
    }
}
