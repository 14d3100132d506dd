/// Latin digit characters, indexed by value
pub const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Persian (Extended Arabic-Indic) digit glyphs U+06F0..=U+06F9, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Pattern used by `PersianDate::default`
pub const DEFAULT_FORMAT: &str = "%d/%m/%Y";

/// Length of the Jalali leap cycle, in years
pub const LEAP_CYCLE_YEARS: i64 = 33;

/// Positions within the 33-year cycle that fall on a leap year
pub const LEAP_REMAINDERS: [i64; 9] = [1, 5, 9, 13, 17, 21, 25, 29, 0];

/// Month number for Farvardin
pub const MIN_MONTH: u8 = 1;
/// Month number for Esfand
pub const MAX_MONTH: u8 = 12;

/// Weekday number for Sunday (یکشنبه)
pub const MIN_WEEKDAY: u8 = 0;
/// Weekday number for Saturday (شنبه)
pub const MAX_WEEKDAY: u8 = 6;

/// Season number for spring
pub const MIN_SEASON: u8 = 0;
/// Season number for winter
pub const MAX_SEASON: u8 = 3;

/// Every season spans three months
pub(crate) const MONTHS_PER_SEASON: u8 = 3;

/// Month names (index 0 is Farvardin)
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Abbreviated month names
/// Several carry a trailing zero width joiner so the last letter keeps its joined form.
pub const SHORT_MONTH_NAMES: [&str; 12] = [
    "فر",
    "ار",
    "خر",
    "تی\u{200d}",
    "مر",
    "شه\u{200d}",
    "مه\u{200d}",
    "آب\u{200d}",
    "آذ",
    "دی",
    "به\u{200d}",
    "اس\u{200d}",
];

/// Weekday names (index 0 is Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج شنبه",
    "جمعه",
    "شنبه",
];

/// Single-letter weekday names
pub const SHORT_WEEKDAY_NAMES: [&str; 7] = ["ی", "د", "س", "چ", "پ", "ج", "ش"];

/// Season names (index 0 is spring)
pub const SEASON_NAMES: [&str; 4] = ["بهار", "تابستان", "پاییز", "زمستان"];
