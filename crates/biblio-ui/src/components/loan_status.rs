use biblio_types::LoanStatus;
use leptos::prelude::*;

pub fn status_label(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Active => "Actif",
        LoanStatus::Returned => "Retourné",
        LoanStatus::Overdue => "En retard",
    }
}

fn status_class(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Active => "badge status-active",
        LoanStatus::Returned => "badge status-returned",
        LoanStatus::Overdue => "badge status-overdue",
    }
}

#[component]
pub fn LoanStatusBadge(status: LoanStatus) -> impl IntoView {
    view! { <span class=status_class(status)>{status_label(status)}</span> }
}

/// Date part of a backend timestamp, or a dash when absent.
pub fn short_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.get(..10).unwrap_or(v).to_string(),
        _ => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_keeps_the_day() {
        assert_eq!(short_date(Some("2026-10-16T09:30:00")), "2026-10-16");
        assert_eq!(short_date(Some("2026-10-16")), "2026-10-16");
        assert_eq!(short_date(None), "\u{2014}");
        assert_eq!(short_date(Some("")), "\u{2014}");
    }
}
