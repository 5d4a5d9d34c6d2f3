/// Conversion-gap calculator: how much revenue the current site leaves on
/// the table compared to a target conversion rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LostRevenueInput {
    pub monthly_visitors: f64,
    pub current_conversion_pct: f64,
    pub target_conversion_pct: f64,
    pub average_deal_value: f64,
}

impl Default for LostRevenueInput {
    fn default() -> Self {
        Self {
            monthly_visitors: 2000.0,
            current_conversion_pct: 1.0,
            target_conversion_pct: 3.0,
            average_deal_value: 400.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueGap {
    pub monthly: f64,
    pub yearly: f64,
}

pub fn lost_revenue(input: &LostRevenueInput) -> RevenueGap {
    let visitors = input.monthly_visitors.max(0.0);
    let delta_pct = (input.target_conversion_pct - input.current_conversion_pct).max(0.0);
    let monthly = visitors * delta_pct / 100.0 * input.average_deal_value.max(0.0);
    RevenueGap { monthly, yearly: monthly * 12.0 }
}

const LOSS_PER_SECOND: f64 = 0.07;
const FAST_ENOUGH_SECONDS: f64 = 2.0;
const MAX_LOSS_SHARE: f64 = 0.6;

/// Monthly revenue lost to slow page loads: 7 % per second above 2 s,
/// capped at 60 %.
pub fn load_time_loss(monthly_revenue: f64, load_seconds: f64) -> f64 {
    let slow_by = (load_seconds - FAST_ENOUGH_SECONDS).max(0.0);
    let share = (slow_by * LOSS_PER_SECOND).min(MAX_LOSS_SHARE);
    monthly_revenue.max(0.0) * share
}

/// Parses a number typed into a form field, accepting a decimal comma.
pub fn parse_field(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(' ', "").replace(',', ".");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_euros(amount: f64) -> String {
    crate::scope::estimate::format_amount(amount.round().max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_scales_with_conversion_delta() {
        let gap = lost_revenue(&LostRevenueInput::default());
        // 2000 visitors * 2 % * 400 €
        assert!((gap.monthly - 16000.0).abs() < 1e-9);
        assert!((gap.yearly - 192000.0).abs() < 1e-9);
    }

    #[test]
    fn gap_is_never_negative() {
        let gap = lost_revenue(&LostRevenueInput {
            current_conversion_pct: 5.0,
            target_conversion_pct: 2.0,
            ..Default::default()
        });
        assert_eq!(gap.monthly, 0.0);
        assert_eq!(gap.yearly, 0.0);
    }

    #[test]
    fn fast_sites_lose_nothing() {
        assert_eq!(load_time_loss(10000.0, 1.4), 0.0);
        assert_eq!(load_time_loss(10000.0, 2.0), 0.0);
    }

    #[test]
    fn slow_sites_lose_seven_percent_per_second_up_to_the_cap() {
        assert!((load_time_loss(10000.0, 4.0) - 1400.0).abs() < 1e-9);
        assert!((load_time_loss(10000.0, 30.0) - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn form_fields_accept_decimal_commas() {
        assert_eq!(parse_field("2,5"), Some(2.5));
        assert_eq!(parse_field(" 1 200 "), Some(1200.0));
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("inf"), None);
    }

    #[test]
    fn euro_amounts_are_rounded_for_display() {
        assert_eq!(format_euros(16000.4), "16.000 €");
        assert_eq!(format_euros(-3.0), "0 €");
        assert_eq!(format_euros(12_000_000_000.0), "12.000.000.000 €");
    }
}
