//! # Finance Calculators
//!
//! Stateless calculators behind the loans page and the export-readiness
//! dashboard. Both consume caller-supplied data and return plain values.
//!
//! ## EMI Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EQUATED MONTHLY INSTALLMENT                                            │
//! │                                                                         │
//! │  m = r / 12 / 100        (monthly rate from annual percentage)          │
//! │  n = t × 12              (months from tenure in years)                  │
//! │                                                                         │
//! │          P · m · (1 + m)^n                                              │
//! │  EMI = ─────────────────────                                            │
//! │           (1 + m)^n − 1                                                 │
//! │                                                                         │
//! │  The formula divides by zero when m = 0 or n = 0, so both cases         │
//! │  return None instead of NaN.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Loan EMI
// =============================================================================

/// Monthly installment for a loan of `principal` rupees at `annual_rate_pct`
/// percent over `tenure_years` years.
///
/// Returns `None` when the rate or tenure is not positive; the amortization
/// formula is undefined there (a zero-rate loan is plain division, not EMI).
///
/// ## Example
/// ```rust
/// use agrilift_core::finance::monthly_installment;
///
/// // ₹1,00,000 at 12% over 1 year → ₹8,884.88 per month
/// let emi = monthly_installment(100000.0, 12.0, 1).unwrap();
/// assert!((emi - 8884.88).abs() < 0.05);
///
/// assert!(monthly_installment(100000.0, 0.0, 1).is_none());
/// ```
pub fn monthly_installment(principal: f64, annual_rate_pct: f64, tenure_years: u32) -> Option<f64> {
    if annual_rate_pct <= 0.0 || tenure_years == 0 {
        return None;
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let months = f64::from(tenure_years * 12);
    let growth = (1.0 + monthly_rate).powf(months);
    Some(principal * monthly_rate * growth / (growth - 1.0))
}

/// Total interest paid over the life of the loan.
///
/// Returns `None` under the same conditions as [`monthly_installment`].
pub fn total_interest(principal: f64, annual_rate_pct: f64, tenure_years: u32) -> Option<f64> {
    let emi = monthly_installment(principal, annual_rate_pct, tenure_years)?;
    Some(emi * f64::from(tenure_years * 12) - principal)
}

// =============================================================================
// Export Readiness
// =============================================================================

/// One requirement on the export-readiness checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub label: String,
    /// Contribution to the score when completed. Weights on a full
    /// checklist sum to 100.
    pub weight: u32,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(label: &str, weight: u32) -> Self {
        ChecklistItem {
            label: label.to_string(),
            weight,
            completed: false,
        }
    }
}

/// Weighted export-readiness score as a percentage in `[0, 100]`.
///
/// Each item contributes its weight only when completed. The result is
/// clamped so an over-weighted checklist cannot report above 100.
pub fn readiness_score(checklist: &[ChecklistItem]) -> u32 {
    let score: u32 = checklist
        .iter()
        .filter(|item| item.completed)
        .map(|item| item.weight)
        .sum();
    score.min(100)
}

/// The fixed checklist shown on the export-readiness dashboard.
///
/// Weights sum to 100, so [`readiness_score`] reads directly as a percentage.
pub fn export_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("Import Export Code (IEC) registration", 20),
        ChecklistItem::new("Phytosanitary certificate", 15),
        ChecklistItem::new("Quality certification (AGMARK / organic)", 15),
        ChecklistItem::new("Export-grade packaging and labelling", 10),
        ChecklistItem::new("Confirmed international buyer agreement", 15),
        ChecklistItem::new("Logistics partner onboarded", 10),
        ChecklistItem::new("Customs documentation prepared", 15),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
