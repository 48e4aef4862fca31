use orgdesk_core::models::usage::UsageMetric;
use orgdesk_core::repository::ListProvider;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageItem {
    pub label: String,
    pub current: String,
    /// e.g. `of 1.0M calls`.
    pub limit: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageView {
    pub metrics: Vec<UsageItem>,
}

/// Compact number: `1.2M`, `850K`, or the plain value below a thousand.
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Rounded utilization percentage. A zero limit reads as 0%.
pub fn utilization(current: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    (current as f64 / max as f64 * 100.0).round() as u32
}

pub fn render_usage<P>(metrics: &P) -> UsageView
where
    P: ListProvider<Item = UsageMetric> + ?Sized,
{
    UsageView {
        metrics: metrics
            .items()
            .into_iter()
            .map(|m| UsageItem {
                current: format_compact(m.current),
                limit: format!("of {} {}", format_compact(m.max), m.unit),
                percentage: utilization(m.current, m.max),
                label: m.label,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact(67), "67");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(850_000), "850K");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(2_450_000), "2.5M");
    }

    #[test]
    fn utilization_rounds() {
        assert_eq!(utilization(67, 100), 67);
        assert_eq!(utilization(850_000, 1_000_000), 85);
        assert_eq!(utilization(1, 3), 33);
        assert_eq!(utilization(2, 3), 67);
        assert_eq!(utilization(5, 0), 0);
    }
}
