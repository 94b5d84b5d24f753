//! Calendar-day codec for wire date values.
//!
//! Stops and attractions carry their dates exactly as the journey API
//! delivers them: either a bare `YYYY-MM-DD` string or a full timestamp
//! such as `2025-06-02T00:00:00.000Z`. Both describe the same local
//! calendar day, and that day must never move when the machine's timezone
//! differs from UTC. The codec therefore reads the leading `YYYY-MM-DD`
//! digits directly instead of constructing an instant and converting back
//! to local fields.
//!
//! Unparsable input decodes to `None`, which callers treat as "no date
//! assigned" rather than an error.

use jiff::civil::Date;

/// A timezone-independent calendar day.
pub type DayKey = Date;

/// Decodes a date-like wire value into a calendar day.
///
/// Takes the leading `YYYY-MM-DD` digits of the value; anything after them
/// (a `T...` time suffix, for instance) is ignored. Returns `None` when the
/// value does not start with a structurally and calendrically valid date.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::day;
///
/// let key = day::day_key("2025-06-02").unwrap();
/// assert_eq!((key.year(), key.month(), key.day()), (2025, 6, 2));
///
/// // Full timestamps decode to the same day regardless of timezone.
/// assert_eq!(day::day_key("2025-06-02T00:00:00.000Z"), Some(key));
///
/// assert_eq!(day::day_key("not a date"), None);
/// assert_eq!(day::day_key("2025-13-01"), None);
/// ```
pub fn day_key(value: &str) -> Option<DayKey> {
    let bytes = value.as_bytes();
    if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits = |range: std::ops::Range<usize>| -> Option<&str> {
        let field = value.get(range)?;
        field.bytes().all(|b| b.is_ascii_digit()).then_some(field)
    };

    let year: i16 = digits(0..4)?.parse().ok()?;
    let month: i8 = digits(5..7)?.parse().ok()?;
    let day: i8 = digits(8..10)?.parse().ok()?;

    Date::new(year, month, day).ok()
}

/// Encodes a calendar day back to its bare `YYYY-MM-DD` wire form.
///
/// Round-trip law: for any valid bare `YYYY-MM-DD` string `s`,
/// `to_ymd(day_key(s).unwrap()) == s`.
pub fn to_ymd(key: DayKey) -> String {
    format!("{:04}-{:02}-{:02}", key.year(), key.month(), key.day())
}
