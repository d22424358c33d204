//! Sale price calculation from cost, shop time and percentage splits.
//!
//! Percentages are fractions of the final sale price, not of cost:
//!
//! ```text
//! price = base_cost / (1 - margin% - tax% - commission%)
//! ```
//!
//! A 35% margin therefore means 35% of the revenue is profit. When the
//! percentages reach 100% nothing is left to cover cost and the price
//! is clamped to zero.

use crate::config::ShopSettings;
use crate::model::{FinancialInputs, ProjectFinancials};

/// Shop hourly rate.
///
/// An explicitly configured rate wins. Otherwise the monthly fixed costs
/// are spread over the working hours of a month. Returns 0 when neither
/// is available.
pub fn hourly_rate(settings: &ShopSettings) -> f64 {
    if let Some(rate) = settings.configured_hourly_rate() {
        return rate;
    }

    let Some(fixed_costs) = settings.configured_fixed_costs() else {
        return 0.0;
    };

    let monthly_hours = settings.working_days_per_month() * settings.working_hours_per_day();
    if monthly_hours <= 0.0 {
        return 0.0;
    }
    finite_or_zero(fixed_costs / monthly_hours)
}

/// Price divisor `1 - sum of percentages / 100`.
pub fn price_divisor(inputs: &FinancialInputs) -> f64 {
    1.0 - inputs.percent_sum() / 100.0
}

/// Compute the financial breakdown of a project.
///
/// The price is clamped to zero when the divisor is at or below
/// `f64::EPSILON`, which also catches float residue when the
/// percentages sum to exactly 100.
pub fn calculate_financials(
    inputs: &FinancialInputs,
    hourly_rate: f64,
    working_hours_per_day: f64,
) -> ProjectFinancials {
    let total_hours = (inputs.production_days + inputs.assembly_days) * working_hours_per_day;
    let shop_overhead_cost = total_hours * hourly_rate;
    let total_base_cost = inputs.materials_cost + shop_overhead_cost + inputs.freight_cost;

    let divisor = price_divisor(inputs);
    let suggested_price = if divisor <= f64::EPSILON {
        tracing::warn!(
            percent_sum = inputs.percent_sum(),
            "percentages leave no room for cost, suggested price clamped to 0"
        );
        0.0
    } else {
        finite_or_zero(total_base_cost / divisor)
    };

    let carpenter_commission_value = suggested_price * inputs.carpenter_commission_percent / 100.0;
    let profit = suggested_price * inputs.margin_percent / 100.0;

    tracing::debug!(
        total_hours,
        total_base_cost,
        suggested_price,
        "financials calculated"
    );

    ProjectFinancials {
        total_hours: finite_or_zero(total_hours),
        hourly_rate,
        shop_overhead_cost: finite_or_zero(shop_overhead_cost),
        total_base_cost: finite_or_zero(total_base_cost),
        suggested_price,
        carpenter_commission_value: finite_or_zero(carpenter_commission_value),
        profit: finite_or_zero(profit),
    }
}

/// Compute financials with rate and hours resolved from shop settings.
pub fn calculate_with_settings(
    inputs: &FinancialInputs,
    settings: &ShopSettings,
) -> ProjectFinancials {
    calculate_financials(
        inputs,
        hourly_rate(settings),
        settings.working_hours_per_day(),
    )
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    fn worked_example() -> FinancialInputs {
        FinancialInputs {
            materials_cost: 1000.0,
            production_days: 2.0,
            assembly_days: 1.0,
            freight_cost: 100.0,
            margin_percent: 35.0,
            tax_percent: 0.0,
            carpenter_commission_percent: 20.0,
        }
    }

    #[test]
    fn test_worked_example() {
        let result = calculate_financials(&worked_example(), 25.0, 8.0);

        assert_eq!(result.total_hours, 24.0);
        assert_eq!(result.shop_overhead_cost, 600.0);
        assert_eq!(result.total_base_cost, 1700.0);
        assert!((price_divisor(&worked_example()) - 0.45).abs() < 1e-12);
        assert!(close(result.suggested_price, 3777.78));
        assert!(close(result.carpenter_commission_value, 755.56));
        assert!(close(result.profit, 1322.22));
    }

    #[test]
    fn test_markup_is_on_price_not_cost() {
        let inputs = FinancialInputs {
            materials_cost: 100.0,
            margin_percent: 50.0,
            ..Default::default()
        };
        let result = calculate_financials(&inputs, 0.0, 8.0);
        // Cost-plus would give 150.
        assert!(close(result.suggested_price, 200.0));
        assert!(close(result.profit, 100.0));
    }

    #[test]
    fn test_percentages_over_hundred_clamp_to_zero() {
        let inputs = FinancialInputs {
            margin_percent: 60.0,
            tax_percent: 25.0,
            carpenter_commission_percent: 20.0,
            ..worked_example()
        };
        let result = calculate_financials(&inputs, 25.0, 8.0);
        assert_eq!(result.suggested_price, 0.0);
        assert_eq!(result.carpenter_commission_value, 0.0);
        assert_eq!(result.profit, 0.0);
        assert!(result.is_clamped());
        assert_eq!(result.total_base_cost, 1700.0);
    }

    #[test]
    fn test_exactly_hundred_percent_clamps() {
        let inputs = FinancialInputs {
            margin_percent: 50.0,
            tax_percent: 30.0,
            carpenter_commission_percent: 20.0,
            ..worked_example()
        };
        let result = calculate_financials(&inputs, 25.0, 8.0);
        assert_eq!(result.suggested_price, 0.0);
        assert!(!result.suggested_price.is_nan());
    }

    #[test]
    fn test_tiny_positive_divisor_is_priced() {
        let inputs = FinancialInputs {
            materials_cost: 100.0,
            margin_percent: 99.995,
            ..Default::default()
        };
        let result = calculate_financials(&inputs, 0.0, 8.0);
        assert!(price_divisor(&inputs) > 0.0);
        assert!((result.suggested_price - 2_000_000.0).abs() < 1.0);
        assert!(!result.is_clamped());
    }

    #[test]
    fn test_fractional_percentages_summing_to_hundred_clamp() {
        let inputs = FinancialInputs {
            margin_percent: 33.3,
            tax_percent: 33.3,
            carpenter_commission_percent: 33.4,
            ..worked_example()
        };
        let result = calculate_financials(&inputs, 25.0, 8.0);
        assert_eq!(result.suggested_price, 0.0);
        assert!(result.is_clamped());
    }

    #[test]
    fn test_zero_percentages_price_at_cost() {
        let inputs = FinancialInputs {
            margin_percent: 0.0,
            carpenter_commission_percent: 0.0,
            ..worked_example()
        };
        let result = calculate_financials(&inputs, 25.0, 8.0);
        assert_eq!(result.suggested_price, 1700.0);
        assert!(!result.is_clamped());
    }

    #[test]
    fn test_hourly_rate_prefers_explicit_value() {
        let settings = ShopSettings {
            hourly_rate: Some(42.0),
            monthly_fixed_costs: Some(10_000.0),
            ..Default::default()
        };
        assert_eq!(hourly_rate(&settings), 42.0);
    }

    #[test]
    fn test_hourly_rate_from_fixed_costs() {
        let settings = ShopSettings {
            monthly_fixed_costs: Some(8800.0),
            working_days_per_month: Some(22.0),
            working_hours_per_day: Some(8.0),
            ..Default::default()
        };
        assert_eq!(hourly_rate(&settings), 50.0);

        // Calendar falls back to 22 x 8
        let settings = ShopSettings {
            monthly_fixed_costs: Some(1760.0),
            ..Default::default()
        };
        assert_eq!(hourly_rate(&settings), 10.0);
    }

    #[test]
    fn test_hourly_rate_without_settings_is_zero() {
        assert_eq!(hourly_rate(&ShopSettings::new()), 0.0);
    }

    #[test]
    fn test_calculate_with_settings() {
        let settings = ShopSettings {
            hourly_rate: Some(25.0),
            working_hours_per_day: Some(8.0),
            ..Default::default()
        };
        let result = calculate_with_settings(&worked_example(), &settings);
        assert_eq!(result.hourly_rate, 25.0);
        assert!(close(result.suggested_price, 3777.78));
    }
}
