//! Date, clock, and timezone lexing after a `SHIFT` token (§4.2.5).
//!
//! These have no direct analog in `faxc-lex` — no language token family
//! needs calendar math. Grounded instead on the digit-run/field-table
//! scanning idiom used throughout
//! `other_examples/7b96e960_octofhir-ucum-rs__src-parser.rs.rs` for its own
//! fixed-width numeric literals, generalized here to the packed/broken date
//! forms and to Howard Hinnant's public-domain `days_from_civil`
//! proleptic-Gregorian day count for the epoch-seconds conversion.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Seconds in a non-leap day.
const SECONDS_PER_DAY: f64 = 86_400.0;

impl<'a> Lexer<'a> {
    /// Entry point used by the parser immediately after consuming a `SHIFT`
    /// token when the left-hand product is time-like (`expect_timestamp`):
    /// tries a packed or broken date, falling back to an ordinary token if
    /// neither applies (the right-hand side of `@`/`after`/... can also be
    /// a plain numeric offset, e.g. `s after 2000-01-01...` vs `kg after 5`
    /// is nonsensical but `s @ 10` is a plain shift-by-seconds).
    pub fn lex_after_shift(&mut self) -> Token {
        self.start_token_here();
        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof);
        }
        if self.expect_timestamp() {
            let c = self.cursor.current_char();
            let looks_like_date = c.is_ascii_digit()
                || ((c == '+' || c == '-') && self.cursor.peek_char(1).is_ascii_digit());
            if looks_like_date {
                if let Some(token) = self.try_lex_date() {
                    return token;
                }
            }
        }
        self.next_token()
    }

    /// Entry point used right after a `DATE` token: optionally lexes the
    /// clock portion (`Thh:mm:ss[.frac]` or packed `Thhmmss`), or nothing
    /// if the date stood alone (§4.2.5: a bare date means midnight).
    pub fn lex_timestamp_continuation(&mut self) -> Token {
        self.start_token_here();
        if self.cursor.current_char() != 'T' && self.cursor.current_char() != ' ' {
            return self.next_token();
        }
        let snapshot = self.cursor.snapshot();
        let separator = self.cursor.current_char();
        self.cursor.advance();
        if separator == ' ' && !self.cursor.current_char().is_ascii_digit() {
            self.cursor.restore(snapshot);
            return self.next_token();
        }
        match self.try_lex_clock() {
            Some(token) => token,
            None => {
                self.cursor.restore(snapshot);
                self.next_token()
            }
        }
    }

    /// Entry point used right after a `CLOCK` token: optionally lexes a
    /// timezone designator (`Z`, packed/broken `±hh[:mm]`), or nothing if
    /// the clock stood alone (implicitly UTC per §4.2.5's Open Question
    /// resolution — see `DESIGN.md`).
    pub fn lex_tz_continuation(&mut self) -> Token {
        self.start_token_here();
        match self.cursor.current_char() {
            'Z' | 'z' => {
                self.cursor.advance();
                self.make(TokenKind::Z)
            }
            '+' | '-' => match self.try_lex_timezone() {
                Some(token) => token,
                None => self.next_token(),
            },
            _ => self.next_token(),
        }
    }

    fn start_token_here(&mut self) {
        self.token_start = self.cursor.position();
    }

    /// Tries both packed (`[+-]?d{1..8}`, field widths by length) and
    /// broken (`Y[-M[-D]]`, `Y` up to 4 digits, `M`/`D` 1-2 digits) date
    /// forms at the cursor, restoring on failure so the caller can fall
    /// back to an ordinary token. A digit run immediately followed by `.`
    /// is a REAL, not a date (§4.2.5), and is never consumed here.
    fn try_lex_date(&mut self) -> Option<Token> {
        let snapshot = self.cursor.snapshot();
        let negative = self.cursor.match_char('-');
        if !negative {
            self.cursor.match_char('+');
        }

        let digit_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let total_digits = self.cursor.position() - digit_start;

        if total_digits == 0 || total_digits > 8 || self.cursor.current_char() == '.' {
            self.cursor.restore(snapshot);
            return None;
        }

        // Broken form: a 1-4 digit year followed by '-'.
        if total_digits <= 4 && self.cursor.current_char() == '-' {
            let year: i64 = self.cursor.slice_from(digit_start).parse().ok()?;
            let year = if negative { -year } else { year };
            self.cursor.advance();
            let Some(month) = self.scan_broken_field(2) else {
                self.cursor.restore(snapshot);
                return None;
            };
            let mut day = 1u32;
            if self.cursor.current_char() == '-' {
                self.cursor.advance();
                let Some(d) = self.scan_broken_field(2) else {
                    self.cursor.restore(snapshot);
                    return None;
                };
                day = d;
            }
            return self.finish_date(year, month, day);
        }

        // Packed form: fixed field widths determined by the total digit
        // count (§4.2.5): 1-4 -> Y; 5 -> YYYYM; 6 -> YYYYMM; 7 -> YYYYMMD;
        // 8 -> YYYYMMDD.
        let raw = self.cursor.slice_from(digit_start);
        let (year_w, month_w, day_w) = match total_digits {
            1..=4 => (total_digits, 0, 0),
            5 => (4, 1, 0),
            6 => (4, 2, 0),
            7 => (4, 2, 1),
            8 => (4, 2, 2),
            _ => unreachable!("total_digits already bounded to 1..=8"),
        };
        let year: i64 = raw[..year_w].parse().ok()?;
        let year = if negative { -year } else { year };
        let month: u32 = if month_w > 0 {
            raw[year_w..year_w + month_w].parse().ok()?
        } else {
            1
        };
        let day: u32 = if day_w > 0 {
            raw[year_w + month_w..].parse().ok()?
        } else {
            1
        };
        self.finish_date(year, month, day)
    }

    /// Scans a broken-form numeric field of 1 or (greedily) up to `max`
    /// digits — used for the month/day fields of a broken date
    /// (`M`/`D` ∈ `d{1,2}`, §4.2.5).
    fn scan_broken_field(&mut self, max: usize) -> Option<u32> {
        let start = self.cursor.position();
        let mut count = 0;
        while count < max && self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
            count += 1;
        }
        if count == 0 {
            return None;
        }
        self.cursor.slice_from(start).parse().ok()
    }

    fn finish_date(&mut self, year: i64, month: u32, day: u32) -> Option<Token> {
        if !(1..=12).contains(&month) {
            self.report_error(format!("month {month} out of range 1-12"));
            return Some(self.make(TokenKind::Err(format!("month {month} out of range 1-12"))));
        }
        if !(1..=31).contains(&day) {
            self.report_error(format!("day {day} out of range 1-31"));
            return Some(self.make(TokenKind::Err(format!("day {day} out of range 1-31"))));
        }
        // Year 0 is normalized to year 1 (§4.2.5).
        let year = if year == 0 { 1 } else { year };
        // Day range is otherwise unvalidated against the month: §4.2.5
        // resolves day-of-month overflow (29-31 in a short month) by
        // adding (day-1) days to the first of the month rather than
        // rejecting it.
        let first_of_month_days = days_from_civil(year, month, 1);
        let total_days = first_of_month_days + (day as i64 - 1);
        let epoch_seconds = total_days as f64 * SECONDS_PER_DAY;
        Some(self.make(TokenKind::Date(epoch_seconds)))
    }

    /// Broken (`HH[:MM[:SS[.fff]]]`) or packed (`HHMMSS` by length, §4.2.5)
    /// clock lexing. Packed field widths for lengths 1-5 fill the *ones*
    /// place of the next field with an implied leading zero (e.g. length 3
    /// is `HH` + a one-digit minute: `"930"` is `09:03:00`, matching the
    /// spec's `HH0M00` notation) rather than the *tens* place, so each
    /// added digit extends the previous field before starting a new one.
    fn try_lex_clock(&mut self) -> Option<Token> {
        let snapshot = self.cursor.snapshot();
        let digits = self.count_leading_digits();

        let (hour, minute, second, frac) = if (1..=6).contains(&digits)
            && !(digits == 2 && self.cursor.peek_char(2) == ':')
        {
            let start = self.cursor.position();
            self.cursor.advance_n(digits);
            let raw = self.cursor.slice_from(start);
            let (hour_w, minute_w, second_w) = match digits {
                1 => (1, 0, 0),
                2 => (2, 0, 0),
                3 => (2, 1, 0),
                4 => (2, 2, 0),
                5 => (2, 2, 1),
                6 => (2, 2, 2),
                _ => unreachable!("digits already bounded to 1..=6"),
            };
            let hour: u32 = raw[..hour_w].parse().ok()?;
            let minute: u32 = if minute_w > 0 {
                raw[hour_w..hour_w + minute_w].parse().ok()?
            } else {
                0
            };
            let second: u32 = if second_w > 0 {
                raw[hour_w + minute_w..].parse().ok()?
            } else {
                0
            };
            // Fractional seconds are only meaningful once a (possibly
            // partial) seconds field is present, i.e. length >= 5.
            let frac = if digits >= 5 { self.scan_optional_fraction() } else { 0.0 };
            (hour, minute, second, frac)
        } else if digits == 2 && self.cursor.peek_char(2) == ':' {
            let hour_start = self.cursor.position();
            self.cursor.advance_n(2);
            let hour: u32 = self.cursor.slice_from(hour_start).parse().ok()?;
            self.cursor.advance();
            let minute_start = self.cursor.position();
            if !self.scan_n_digits(2) {
                self.cursor.restore(snapshot);
                return None;
            }
            let minute: u32 = self.cursor.slice_from(minute_start).parse().ok()?;
            let second = if self.cursor.current_char() == ':' {
                self.cursor.advance();
                let second_start = self.cursor.position();
                if !self.scan_n_digits(2) {
                    self.cursor.restore(snapshot);
                    return None;
                }
                self.cursor.slice_from(second_start).parse().ok()?
            } else {
                0
            };
            (hour, minute, second, self.scan_optional_fraction())
        } else {
            self.cursor.restore(snapshot);
            return None;
        };

        if hour > 23 {
            self.report_error(format!("hour {hour} out of range 0-23"));
            return Some(self.make(TokenKind::Err(format!("hour {hour} out of range 0-23"))));
        }
        if minute > 59 {
            self.report_error(format!("minute {minute} out of range 0-59"));
            return Some(self.make(TokenKind::Err(format!("minute {minute} out of range 0-59"))));
        }
        // Leap seconds (second == 60) fold into the next minute (§4.2.5),
        // but only at 23:59:60 — a leap second can only ever occur at the
        // end of a UTC day, so e.g. 12:00:60 is out of range.
        if second > 60 || (second == 60 && (hour != 23 || minute != 59)) {
            self.report_error(format!("second {second} out of range 0-60"));
            return Some(self.make(TokenKind::Err(format!("second {second} out of range 0-60"))));
        }

        let mut seconds = (hour * 3600 + minute * 60 + second.min(59)) as f64 + frac;
        if second == 60 {
            seconds += 1.0;
        }
        Some(self.make(TokenKind::Clock(seconds)))
    }

    /// Broken (`±HH:MM`) or packed (`±H`, `±HH`, `±HHM`, `±HHMM` by length,
    /// §4.2.5) timezone lexing. Like the clock's packed forms, a 3-digit
    /// body (`±HHM`) extends the hour field in full and gives the minute
    /// field only its ones digit (tens implied 0).
    fn try_lex_timezone(&mut self) -> Option<Token> {
        let snapshot = self.cursor.snapshot();
        let sign = if self.cursor.match_char('-') {
            -1i64
        } else {
            self.cursor.advance(); // consume '+'
            1i64
        };

        let digits = self.count_leading_digits();
        let (hour, minute) = if digits == 2 && self.cursor.peek_char(2) == ':' {
            let hour_start = self.cursor.position();
            self.cursor.advance_n(2);
            let hour: u32 = self.cursor.slice_from(hour_start).parse().ok()?;
            self.cursor.advance();
            let minute_start = self.cursor.position();
            if !self.scan_n_digits(2) {
                self.cursor.restore(snapshot);
                return None;
            }
            (hour, self.cursor.slice_from(minute_start).parse().ok()?)
        } else if (1..=4).contains(&digits) {
            let start = self.cursor.position();
            self.cursor.advance_n(digits);
            let raw = self.cursor.slice_from(start);
            let (hour_w, minute_w) = match digits {
                1 => (1, 0),
                2 => (2, 0),
                3 => (2, 1),
                4 => (2, 2),
                _ => unreachable!("digits already bounded to 1..=4"),
            };
            let hour: u32 = raw[..hour_w].parse().ok()?;
            let minute: u32 = if minute_w > 0 { raw[hour_w..].parse().ok()? } else { 0 };
            (hour, minute)
        } else {
            self.cursor.restore(snapshot);
            return None;
        };

        if hour > 14 || minute > 59 {
            self.report_error(format!("timezone offset {hour:02}:{minute:02} out of range"));
            return Some(self.make(TokenKind::Err(format!(
                "timezone offset {hour:02}:{minute:02} out of range"
            ))));
        }
        if sign < 0 && hour == 0 && minute == 0 {
            self.report_error("timezone offset -00:00 is not allowed".to_string());
            return Some(self.make(TokenKind::Err(
                "timezone offset -00:00 is not allowed".to_string(),
            )));
        }

        let offset_seconds = sign as f64 * (hour * 3600 + minute * 60) as f64;
        Some(self.make(TokenKind::TzClock(offset_seconds)))
    }

    fn scan_optional_fraction(&mut self) -> f64 {
        if self.cursor.current_char() != '.' {
            return 0.0;
        }
        let snapshot = self.cursor.snapshot();
        self.cursor.advance();
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            self.cursor.restore(snapshot);
            return 0.0;
        }
        format!("0.{}", self.cursor.slice_from(start)).parse().unwrap_or(0.0)
    }

    fn scan_n_digits(&mut self, n: usize) -> bool {
        let start = self.cursor.position();
        for _ in 0..n {
            if !self.cursor.current_char().is_ascii_digit() {
                self.cursor.restore(crate::CursorSnapshot {
                    position: start,
                    line: self.cursor.line(),
                    column: self.cursor.column(),
                });
                return false;
            }
            self.cursor.advance();
        }
        true
    }

    fn count_leading_digits(&self) -> usize {
        let mut count = 0;
        while self.cursor.peek_char(count).is_ascii_digit() {
            count += 1;
        }
        count
    }
}

/// Howard Hinnant's `days_from_civil`: the proleptic-Gregorian day count
/// for `year`-`month`-`1`, relative to 1970-01-01 (the Unix epoch). Valid
/// for any `i64` year; `month` must be `1..=12`.
fn days_from_civil(year: i64, month: u32, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64; // [0, 399]
    let mp = (month as i64 + 9) % 12; // [0, 11], Mar = 0
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}
