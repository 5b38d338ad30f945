//! Single-day price projection for a leveraged fund.

use std::fmt::Display;

/// Errors raised when projection inputs violate their preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A baseline price was zero, negative or not a number.
    InvalidBaseline(String),
    /// The hypothetical reference price was negative or not a number.
    InvalidInput(f64),
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::InvalidBaseline(msg) => write!(f, "Invalid baseline: {msg}"),
            ProjectionError::InvalidInput(price) => {
                write!(f, "Invalid hypothetical price: {price} (must be 0 or more)")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Daily target ratio between the leveraged fund's return and the reference asset's return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverageMultiple(f64);

impl LeverageMultiple {
    pub const DOUBLE: LeverageMultiple = LeverageMultiple(2.0);

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for LeverageMultiple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Baseline snapshot of the reference asset and the leveraged fund.
///
/// Both prices are finite and strictly positive; the constructor is the only
/// way to build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePair {
    reference_price: f64,
    leveraged_price: f64,
}

impl PricePair {
    pub fn new(reference_price: f64, leveraged_price: f64) -> Result<Self, ProjectionError> {
        if !reference_price.is_finite() || reference_price <= 0.0 {
            return Err(ProjectionError::InvalidBaseline(format!(
                "reference price must be positive, got {reference_price}"
            )));
        }
        if !leveraged_price.is_finite() || leveraged_price <= 0.0 {
            return Err(ProjectionError::InvalidBaseline(format!(
                "leveraged price must be positive, got {leveraged_price}"
            )));
        }
        Ok(Self {
            reference_price,
            leveraged_price,
        })
    }

    pub fn reference_price(&self) -> f64 {
        self.reference_price
    }

    pub fn leveraged_price(&self) -> f64 {
        self.leveraged_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Unchanged,
    Rally,
    Decline,
    /// The projected price is at or below zero.
    Wipeout,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    pub reference_change_ratio: f64,
    pub leveraged_change_ratio: f64,
    pub projected_leveraged_price: f64,
}

impl ProjectionResult {
    pub fn scenario(&self) -> Scenario {
        if self.reference_change_ratio == 0.0 {
            Scenario::Unchanged
        } else if self.projected_leveraged_price <= 0.0 {
            Scenario::Wipeout
        } else if self.reference_change_ratio > 0.0 {
            Scenario::Rally
        } else {
            Scenario::Decline
        }
    }

    /// Projected price as shown to a user; a fund cannot trade below zero.
    pub fn display_price(&self) -> f64 {
        self.projected_leveraged_price.max(0.0)
    }
}

/// Projects the leveraged fund's price after the reference asset moves to
/// `hypothetical_reference` within a single trading day.
///
/// The raw projection is returned even when it falls below zero; callers
/// inspect [`ProjectionResult::scenario`] to decide how to present it.
pub fn project(
    baseline: &PricePair,
    leverage: LeverageMultiple,
    hypothetical_reference: f64,
) -> Result<ProjectionResult, ProjectionError> {
    if !hypothetical_reference.is_finite() || hypothetical_reference < 0.0 {
        return Err(ProjectionError::InvalidInput(hypothetical_reference));
    }

    let reference_change_ratio =
        (hypothetical_reference - baseline.reference_price) / baseline.reference_price;
    let leveraged_change_ratio = leverage.value() * reference_change_ratio;
    let projected_leveraged_price = baseline.leveraged_price * (1.0 + leveraged_change_ratio);

    Ok(ProjectionResult {
        reference_change_ratio,
        leveraged_change_ratio,
        projected_leveraged_price,
    })
}
