use orgdesk_core::models::report::{ReportKind, ReportRow, ScheduledReport};
use orgdesk_core::repository::ListProvider;
use serde::Serialize;

/// Display tone of a report type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTone {
    Primary,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    #[serde(flatten)]
    pub report: ReportRow,
    pub tone: ReportTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledReportItem {
    #[serde(flatten)]
    pub report: ScheduledReport,
    /// Every row but the last draws a divider below it.
    pub divider: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportsView {
    pub recent: Vec<ReportItem>,
    pub scheduled: Vec<ScheduledReportItem>,
}

pub fn render_reports<R, S>(recent: &R, scheduled: &S) -> ReportsView
where
    R: ListProvider<Item = ReportRow> + ?Sized,
    S: ListProvider<Item = ScheduledReport> + ?Sized,
{
    let scheduled = scheduled.items();
    let last = scheduled.len().saturating_sub(1);

    ReportsView {
        recent: recent
            .items()
            .into_iter()
            .map(|report| ReportItem {
                tone: match report.kind {
                    ReportKind::Activity => ReportTone::Primary,
                    ReportKind::Security => ReportTone::Warning,
                },
                report,
            })
            .collect(),
        scheduled: scheduled
            .into_iter()
            .enumerate()
            .map(|(idx, report)| ScheduledReportItem {
                report,
                divider: idx != last,
            })
            .collect(),
    }
}
