//! Display formatting for amounts and dates.

use chrono::{DateTime, Utc};
use shared_types::TicketSize;

/// Compact dollar amount: `$850`, `$525K`, `$1.5M`, `$2B`.
pub fn format_currency(amount: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];
    for (scale, suffix) in UNITS {
        if amount >= scale {
            let whole = amount / scale;
            let tenth = (amount % scale) * 10 / scale;
            return if tenth == 0 {
                format!("${whole}{suffix}")
            } else {
                format!("${whole}.{tenth}{suffix}")
            };
        }
    }
    format!("${amount}")
}

/// `$100K – $1M`, or `Not specified` for an empty range.
pub fn format_ticket(ticket: TicketSize) -> String {
    if ticket.min == 0 && ticket.max == 0 {
        return "Not specified".to_string();
    }
    format!("{} – {}", format_currency(ticket.min), format_currency(ticket.max))
}

/// "Jan 20, 2026"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 20, 2026 9:35 PM"
pub fn format_datetime(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Join a list for display, with a placeholder when it is empty.
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_uses_compact_units() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(850), "$850");
        assert_eq!(format_currency(525_000), "$525K");
        assert_eq!(format_currency(1_500_000), "$1.5M");
        assert_eq!(format_currency(2_000_000_000), "$2B");
    }

    #[test]
    fn ticket_range() {
        assert_eq!(format_ticket(TicketSize { min: 0, max: 0 }), "Not specified");
        assert_eq!(
            format_ticket(TicketSize { min: 100_000, max: 1_000_000 }),
            "$100K – $1M"
        );
    }

    #[test]
    fn dates_are_human_readable() {
        let date = Utc.with_ymd_and_hms(2026, 1, 20, 21, 35, 0).unwrap();
        assert_eq!(format_date(date), "Jan 20, 2026");
        assert_eq!(format_datetime(date), "Jan 20, 2026 9:35 PM");
    }

    #[test]
    fn empty_lists_show_a_dash() {
        assert_eq!(join_or_dash(&[]), "—");
        assert_eq!(join_or_dash(&["AI".into(), "SaaS".into()]), "AI, SaaS");
    }
}
