use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// 17 characters, letters I, O and Q excluded.
pub static VIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("VIN pattern is valid"));

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerAddress {
    #[validate(length(min = 1, max = 255, message = "Street must be between 1 and 255 characters"))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 2, max = 50))]
    pub state: String,
    #[validate(length(min = 5, max = 10, message = "Zip code must be 5 to 10 characters"))]
    pub zip_code: String,
}

impl fmt::Display for CustomerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

/// A vehicle owned by a customer. `customer_id` is a back-reference only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Vehicle {
    pub id: String,
    pub customer_id: String,
    #[validate(regex(path = "VIN_REGEX", message = "VIN must be 17 characters without I, O or Q"))]
    pub vin: String,
    #[validate(range(min = 1886, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 50))]
    pub make: String,
    #[validate(length(min = 1, max = 50))]
    pub model: String,
    pub trim: Option<String>,
    pub color: Option<String>,
    pub mileage: u32,
    pub license_plate: Option<String>,
    pub notes: Option<String>,
}

impl Vehicle {
    pub fn summary(&self) -> VehicleSummary {
        VehicleSummary {
            year: self.year,
            make: self.make.clone(),
            model: self.model.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        vehicle_display_name(self.year, &self.make, &self.model)
    }

    /// Records a new odometer reading; readings never go backwards.
    pub fn record_mileage(&mut self, mileage: u32) -> bool {
        if mileage < self.mileage {
            return false;
        }
        self.mileage = mileage;
        true
    }
}

/// Year/make/model as shown on lists and cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub year: i32,
    pub make: String,
    pub model: String,
}

impl fmt::Display for VehicleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vehicle_display_name(self.year, &self.make, &self.model))
    }
}

/// `"<year> <make> <model>"`
pub fn vehicle_display_name(year: i32, make: &str, model: &str) -> String {
    format!("{} {} {}", year, make, model)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Customer {
    pub id: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "First name must be between 1 and 100 characters"
    ))]
    pub first_name: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Last name must be between 1 and 100 characters"
    ))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 7, max = 20, message = "Phone must be between 7 and 20 characters"))]
    pub phone: String,
    #[validate]
    pub address: CustomerAddress,
    pub vehicles: Vec<Vehicle>,
    pub notes: Option<String>,
    pub total_spent: Decimal,
    pub visit_count: u32,
    pub last_visit: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Spend bracket shown next to a customer on lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CustomerValueTier {
    New,
    Regular,
    HighValue,
}

impl CustomerValueTier {
    pub fn from_total_spent(total_spent: Decimal) -> Self {
        if total_spent >= Decimal::from(2000) {
            CustomerValueTier::HighValue
        } else if total_spent >= Decimal::from(1000) {
            CustomerValueTier::Regular
        } else {
            CustomerValueTier::New
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerValueTier::New => "New",
            CustomerValueTier::Regular => "Regular",
            CustomerValueTier::HighValue => "High Value",
        }
    }
}

impl Customer {
    pub fn value_tier(&self) -> CustomerValueTier {
        CustomerValueTier::from_total_spent(self.total_spent)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Average spend per visit, `None` before the first visit.
    pub fn average_ticket(&self) -> Option<Decimal> {
        if self.visit_count == 0 {
            return None;
        }
        Some((self.total_spent / Decimal::from(self.visit_count)).round_dp(2))
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn vehicle(vin: &str) -> Vehicle {
        Vehicle {
            id: "V-1".into(),
            customer_id: "C-1".into(),
            vin: vin.into(),
            year: 2019,
            make: "Honda".into(),
            model: "Civic".into(),
            trim: None,
            color: Some("Blue".into()),
            mileage: 42_000,
            license_plate: Some("ABC1234".into()),
            notes: None,
        }
    }

    #[test]
    fn display_name_is_year_make_model() {
        assert_eq!(vehicle("1HGCM82633A004352").display_name(), "2019 Honda Civic");
        assert_eq!(vehicle("1HGCM82633A004352").summary().to_string(), "2019 Honda Civic");
    }

    #[test]
    fn vin_validation_rejects_ambiguous_letters() {
        assert!(vehicle("1HGCM82633A004352").validate().is_ok());
        assert!(vehicle("1HGCM82633A00435O").validate().is_err());
        assert!(vehicle("SHORTVIN").validate().is_err());
    }

    #[test]
    fn mileage_never_decreases() {
        let mut v = vehicle("1HGCM82633A004352");
        assert!(!v.record_mileage(41_000));
        assert_eq!(v.mileage, 42_000);
        assert!(v.record_mileage(43_500));
        assert_eq!(v.mileage, 43_500);
    }

    #[test]
    fn average_ticket_handles_zero_visits() {
        let now = Utc::now();
        let mut customer = Customer {
            id: "C-1".into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john.smith@email.com".into(),
            phone: "(555) 123-4567".into(),
            address: CustomerAddress {
                street: "123 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip_code: "62701".into(),
            },
            vehicles: vec![],
            notes: None,
            total_spent: dec!(0),
            visit_count: 0,
            last_visit: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(customer.average_ticket(), None);

        customer.total_spent = dec!(1000);
        customer.visit_count = 3;
        assert_eq!(customer.average_ticket(), Some(dec!(333.33)));
        assert_eq!(customer.full_name(), "John Smith");
        assert!(customer.validate().is_ok());
        assert_eq!(customer.value_tier(), CustomerValueTier::Regular);
    }

    #[test]
    fn value_tier_thresholds_are_inclusive() {
        assert_eq!(CustomerValueTier::from_total_spent(dec!(999.99)), CustomerValueTier::New);
        assert_eq!(CustomerValueTier::from_total_spent(dec!(1000)), CustomerValueTier::Regular);
        assert_eq!(CustomerValueTier::from_total_spent(dec!(2000)), CustomerValueTier::HighValue);
        assert_eq!(CustomerValueTier::HighValue.label(), "High Value");
    }
}
