use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::bookings::{BookableItem, DateRange};

pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// How a range whose end equals its start is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SameDayPolicy {
    /// Same-instant ranges are not priced (total 0).
    #[default]
    Zero,
    /// Same-instant ranges are charged one unit.
    MinimumOneUnit,
}

impl FromStr for SameDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(SameDayPolicy::Zero),
            "minimum-one-unit" | "minimum_one_unit" => Ok(SameDayPolicy::MinimumOneUnit),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SameDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameDayPolicy::Zero => f.write_str("zero"),
            SameDayPolicy::MinimumOneUnit => f.write_str("minimum-one-unit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingOptions {
    pub same_day_policy: SameDayPolicy,
    /// Percentage of the subtotal added as a platform fee.
    pub service_fee_percent: f64,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            same_day_policy: SameDayPolicy::Zero,
            service_fee_percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("start and end dates are required")]
    MissingDates,
    #[error("end date must be after the start date")]
    EmptyRange,
    #[error("unit rate must be a positive number")]
    InvalidRate,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("requested {requested} units but only {available} are available")]
    ExceedsAvailability { requested: u32, available: u32 },
}

impl PricingError {
    pub fn code(&self) -> &'static str {
        match self {
            PricingError::MissingDates => "missing_dates",
            PricingError::EmptyRange => "empty_range",
            PricingError::InvalidRate => "invalid_rate",
            PricingError::InvalidQuantity => "invalid_quantity",
            PricingError::ExceedsAvailability { .. } => "exceeds_availability",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub duration_units: i64,
    pub quantity: u32,
    pub unit_rate: f64,
    /// `duration_units * unit_rate * quantity`
    pub total: f64,
    pub service_fee: f64,
    pub grand_total: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PricingService {
    options: PricingOptions,
}

impl PricingService {
    pub fn new(options: PricingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PricingOptions {
        self.options
    }

    /// Whole days spanned by the range, rounded up. Zero or negative when
    /// `end <= start`.
    pub fn duration_units(range: &DateRange) -> i64 {
        let ms = range
            .end
            .signed_duration_since(range.start)
            .num_milliseconds();
        if ms > 0 {
            (ms - 1) / ONE_DAY_MS + 1
        } else {
            // Truncation toward zero is the ceiling for non-positive values
            ms / ONE_DAY_MS
        }
    }

    /// Calculate the platform fee for a subtotal
    pub fn calculate_service_fee(&self, subtotal: f64) -> f64 {
        subtotal * self.options.service_fee_percent / 100.0
    }

    /// Price a booking of `item` over `range`.
    pub fn quote(
        &self,
        item: &BookableItem,
        range: Option<DateRange>,
        quantity: Option<u32>,
    ) -> Result<PriceQuote, PricingError> {
        let range = range.ok_or(PricingError::MissingDates)?;
        let quantity = quantity.unwrap_or(1);
        validate_rate_and_quantity(item.unit_rate, quantity)?;

        if let Some(available) = item.available_units {
            if quantity > available {
                return Err(PricingError::ExceedsAvailability {
                    requested: quantity,
                    available,
                });
            }
        }

        let units = self.chargeable_units(&range)?;
        self.quote_units(units, item.unit_rate, quantity)
    }

    /// Price an explicit unit count (nights, days) without a date range.
    pub fn quote_units(
        &self,
        units: i64,
        unit_rate: f64,
        quantity: u32,
    ) -> Result<PriceQuote, PricingError> {
        validate_rate_and_quantity(unit_rate, quantity)?;
        if units <= 0 {
            return Err(PricingError::EmptyRange);
        }

        let total = units as f64 * unit_rate * quantity as f64;
        let service_fee = self.calculate_service_fee(total);

        Ok(PriceQuote {
            duration_units: units,
            quantity,
            unit_rate,
            total,
            service_fee,
            grand_total: total + service_fee,
        })
    }

    /// Displayed total for the booking forms: any invalid input prices at 0.
    pub fn total(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        unit_rate: f64,
        quantity: u32,
    ) -> f64 {
        let Some(range) = DateRange::from_parts(start, end) else {
            return 0.0;
        };

        self.chargeable_units(&range)
            .and_then(|units| self.quote_units(units, unit_rate, quantity))
            .map(|quote| quote.total)
            .unwrap_or(0.0)
    }

    fn chargeable_units(&self, range: &DateRange) -> Result<i64, PricingError> {
        let units = Self::duration_units(range);
        if units > 0 {
            return Ok(units);
        }

        match self.options.same_day_policy {
            SameDayPolicy::MinimumOneUnit if range.end == range.start => Ok(1),
            _ => Err(PricingError::EmptyRange),
        }
    }
}

fn validate_rate_and_quantity(unit_rate: f64, quantity: u32) -> Result<(), PricingError> {
    if !unit_rate.is_finite() || unit_rate <= 0.0 {
        return Err(PricingError::InvalidRate);
    }
    if quantity == 0 {
        return Err(PricingError::InvalidQuantity);
    }
    Ok(())
}
