//! Wire-level types and the client for the SGT club-admin API.
//!
//! SGT responses are loosely shaped: lists arrive either bare or wrapped in an
//! envelope object, numbers sometimes arrive as strings, and booleans as 0/1
//! integers. Everything here normalises that into typed records before the
//! rest of the service sees it.

mod client;
pub mod de;
mod member;
mod tour;
mod tournament;

pub use client::SgtClient;
pub use member::ApiMember;
pub use tour::{ApiStanding, ApiTour, ApiTourMember};
pub use tournament::{ApiScorecard, ApiTournament};

use chrono::NaiveDate;

/// SGT sends dates as free-form strings ("2025-03-04", "Mar 4 2025", ...).
/// Anything unparseable is stored as NULL rather than failing the record.
pub(crate) fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    dateparser::parse(raw).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_and_rejects_junk() {
        assert_eq!(
            parse_date(Some("2025-03-04")),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
        assert_eq!(parse_date(Some("not a date")), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(None), None);
    }
}
