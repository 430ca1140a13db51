//! # Currency Formatting
//!
//! Whole-rupee INR formatting for the marketplace UI.
//!
//! ## Indian Digit Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INDIAN GROUPING vs WESTERN GROUPING                                    │
//! │                                                                         │
//! │  Western:  1,234,567   (groups of three)                                │
//! │  Indian:   12,34,567   (last three, then groups of two)                 │
//! │                                                                         │
//! │  1 lakh  = 1,00,000                                                     │
//! │  1 crore = 1,00,00,000                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store's locale is fixed (en-IN, INR) and amounts render with zero
//! decimal places, so this module exposes a single formatting function
//! instead of a general localization layer.

/// Formats an amount as a whole-rupee INR string, e.g. `₹12,34,567`.
///
/// The amount is rounded to the nearest rupee (half away from zero) before
/// grouping. Negative amounts carry a leading minus sign.
///
/// ## Example
/// ```rust
/// use agrilift_core::currency::format_inr;
///
/// assert_eq!(format_inr(0.0), "₹0");
/// assert_eq!(format_inr(500.0), "₹500");
/// assert_eq!(format_inr(100000.0), "₹1,00,000");
/// ```
pub fn format_inr(amount: f64) -> String {
    let rupees = amount.round() as i64;
    let sign = if rupees < 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&rupees.abs().to_string()))
}

/// Applies Indian digit grouping to a plain digit string.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    // Last three digits form their own group; the rest splits into twos.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Unit Tests
// =============================================================================
