use chrono::{Duration, NaiveDate};
use num_format::{Buffer, Locale};

/// Label shown in place of a date when it falls on the next distribution day.
pub const DAILY_DISTRIBUTION_LABEL: &str = "Every day. Midnight UTC";

pub const ADDRESS_ELLIPSIS: &str = "...";

const ADDRESS_HEAD: usize = 6;
const ADDRESS_TAIL: usize = 4;

/// English thousands grouping: `1234567` becomes `"1,234,567"`.
pub fn format_number<T: num_format::ToFormattedStr>(number: T) -> String {
    let mut buf = Buffer::new();
    buf.write_formatted(&number, &Locale::en);

    buf.to_string()
}

/// `"Oct 5, 2026"`, or the daily distribution label when `date` is the day
/// after `today`. Comparison is by calendar day.
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if Some(date) == today.succ_opt() {
        return DAILY_DISTRIBUTION_LABEL.to_string();
    }

    date.format("%b %-d, %Y").to_string()
}

/// `0xABCD...7890` for addresses of ten or more characters; shorter input is
/// returned whole.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < ADDRESS_HEAD + ADDRESS_TAIL {
        return address.to_string();
    }

    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{}{}{}", head, ADDRESS_ELLIPSIS, tail)
}

/// `"13 Oct – 19 Oct"`
pub fn week_label(monday: NaiveDate) -> String {
    let sunday = monday + Duration::days(6);
    format!("{} – {}", monday.format("%-d %b"), sunday.format("%-d %b"))
}

/// `"October 2026"`
pub fn month_label(first_day: NaiveDate) -> String {
    first_day.format("%B %Y").to_string()
}
