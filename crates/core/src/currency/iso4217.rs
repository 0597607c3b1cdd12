//! ISO 4217 currency registry.
//!
//! Read-only lookup of numeric and alphabetic codes to the number of minor
//! unit digits a currency uses.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::code::CurrencyCode;

/// Registry entry for one ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Numeric code (e.g., 840 for USD).
    pub numeric: u16,
    /// Alphabetic code (e.g., USD).
    pub code: CurrencyCode,
    /// Minor unit digits. `None` for codes without minor units defined
    /// (precious metals, testing and "no currency" codes).
    pub decimal_digits: Option<u8>,
}

impl CurrencyInfo {
    /// Returns `10^decimal_digits`, the divisor for amounts in minor units.
    #[must_use]
    pub fn divisor(&self) -> Option<i32> {
        self.decimal_digits.map(|digits| 10_i32.pow(u32::from(digits)))
    }
}

const fn info(numeric: u16, code: &[u8], decimal_digits: Option<u8>) -> CurrencyInfo {
    CurrencyInfo {
        numeric,
        code: CurrencyCode::from_ascii(code),
        decimal_digits,
    }
}

static CURRENCIES: &[CurrencyInfo] = &[
    info(784, b"AED", Some(2)),
    info(971, b"AFN", Some(2)),
    info(8, b"ALL", Some(2)),
    info(51, b"AMD", Some(2)),
    info(532, b"ANG", Some(2)),
    info(973, b"AOA", Some(2)),
    info(32, b"ARS", Some(2)),
    info(36, b"AUD", Some(2)),
    info(533, b"AWG", Some(2)),
    info(944, b"AZN", Some(2)),
    info(977, b"BAM", Some(2)),
    info(52, b"BBD", Some(2)),
    info(50, b"BDT", Some(2)),
    info(975, b"BGN", Some(2)),
    info(48, b"BHD", Some(3)),
    info(108, b"BIF", Some(0)),
    info(60, b"BMD", Some(2)),
    info(96, b"BND", Some(2)),
    info(68, b"BOB", Some(2)),
    info(986, b"BRL", Some(2)),
    info(44, b"BSD", Some(2)),
    info(64, b"BTN", Some(2)),
    info(72, b"BWP", Some(2)),
    info(933, b"BYN", Some(2)),
    info(84, b"BZD", Some(2)),
    info(124, b"CAD", Some(2)),
    info(976, b"CDF", Some(2)),
    info(756, b"CHF", Some(2)),
    info(990, b"CLF", Some(4)),
    info(152, b"CLP", Some(0)),
    info(156, b"CNY", Some(2)),
    info(170, b"COP", Some(2)),
    info(188, b"CRC", Some(2)),
    info(192, b"CUP", Some(2)),
    info(132, b"CVE", Some(2)),
    info(203, b"CZK", Some(2)),
    info(262, b"DJF", Some(0)),
    info(208, b"DKK", Some(2)),
    info(214, b"DOP", Some(2)),
    info(12, b"DZD", Some(2)),
    info(818, b"EGP", Some(2)),
    info(232, b"ERN", Some(2)),
    info(230, b"ETB", Some(2)),
    info(978, b"EUR", Some(2)),
    info(242, b"FJD", Some(2)),
    info(238, b"FKP", Some(2)),
    info(826, b"GBP", Some(2)),
    info(981, b"GEL", Some(2)),
    info(936, b"GHS", Some(2)),
    info(292, b"GIP", Some(2)),
    info(270, b"GMD", Some(2)),
    info(324, b"GNF", Some(0)),
    info(320, b"GTQ", Some(2)),
    info(328, b"GYD", Some(2)),
    info(344, b"HKD", Some(2)),
    info(340, b"HNL", Some(2)),
    info(332, b"HTG", Some(2)),
    info(348, b"HUF", Some(2)),
    info(360, b"IDR", Some(2)),
    info(376, b"ILS", Some(2)),
    info(356, b"INR", Some(2)),
    info(368, b"IQD", Some(3)),
    info(364, b"IRR", Some(2)),
    info(352, b"ISK", Some(0)),
    info(388, b"JMD", Some(2)),
    info(400, b"JOD", Some(3)),
    info(392, b"JPY", Some(0)),
    info(404, b"KES", Some(2)),
    info(417, b"KGS", Some(2)),
    info(116, b"KHR", Some(2)),
    info(174, b"KMF", Some(0)),
    info(408, b"KPW", Some(2)),
    info(410, b"KRW", Some(0)),
    info(414, b"KWD", Some(3)),
    info(136, b"KYD", Some(2)),
    info(398, b"KZT", Some(2)),
    info(418, b"LAK", Some(2)),
    info(422, b"LBP", Some(2)),
    info(144, b"LKR", Some(2)),
    info(430, b"LRD", Some(2)),
    info(426, b"LSL", Some(2)),
    info(434, b"LYD", Some(3)),
    info(504, b"MAD", Some(2)),
    info(498, b"MDL", Some(2)),
    info(969, b"MGA", Some(2)),
    info(807, b"MKD", Some(2)),
    info(104, b"MMK", Some(2)),
    info(496, b"MNT", Some(2)),
    info(446, b"MOP", Some(2)),
    info(929, b"MRU", Some(2)),
    info(480, b"MUR", Some(2)),
    info(462, b"MVR", Some(2)),
    info(454, b"MWK", Some(2)),
    info(484, b"MXN", Some(2)),
    info(458, b"MYR", Some(2)),
    info(943, b"MZN", Some(2)),
    info(516, b"NAD", Some(2)),
    info(566, b"NGN", Some(2)),
    info(558, b"NIO", Some(2)),
    info(578, b"NOK", Some(2)),
    info(524, b"NPR", Some(2)),
    info(554, b"NZD", Some(2)),
    info(512, b"OMR", Some(3)),
    info(590, b"PAB", Some(2)),
    info(604, b"PEN", Some(2)),
    info(598, b"PGK", Some(2)),
    info(608, b"PHP", Some(2)),
    info(586, b"PKR", Some(2)),
    info(985, b"PLN", Some(2)),
    info(600, b"PYG", Some(0)),
    info(634, b"QAR", Some(2)),
    info(946, b"RON", Some(2)),
    info(941, b"RSD", Some(2)),
    info(643, b"RUB", Some(2)),
    info(646, b"RWF", Some(0)),
    info(682, b"SAR", Some(2)),
    info(90, b"SBD", Some(2)),
    info(690, b"SCR", Some(2)),
    info(938, b"SDG", Some(2)),
    info(752, b"SEK", Some(2)),
    info(702, b"SGD", Some(2)),
    info(654, b"SHP", Some(2)),
    info(925, b"SLE", Some(2)),
    info(706, b"SOS", Some(2)),
    info(968, b"SRD", Some(2)),
    info(728, b"SSP", Some(2)),
    info(930, b"STN", Some(2)),
    info(222, b"SVC", Some(2)),
    info(760, b"SYP", Some(2)),
    info(748, b"SZL", Some(2)),
    info(764, b"THB", Some(2)),
    info(972, b"TJS", Some(2)),
    info(934, b"TMT", Some(2)),
    info(788, b"TND", Some(3)),
    info(776, b"TOP", Some(2)),
    info(949, b"TRY", Some(2)),
    info(780, b"TTD", Some(2)),
    info(901, b"TWD", Some(2)),
    info(834, b"TZS", Some(2)),
    info(980, b"UAH", Some(2)),
    info(800, b"UGX", Some(0)),
    info(840, b"USD", Some(2)),
    info(858, b"UYU", Some(2)),
    info(860, b"UZS", Some(2)),
    info(928, b"VES", Some(2)),
    info(704, b"VND", Some(0)),
    info(548, b"VUV", Some(0)),
    info(882, b"WST", Some(2)),
    info(950, b"XAF", Some(0)),
    info(961, b"XAG", None),
    info(959, b"XAU", None),
    info(955, b"XBA", None),
    info(951, b"XCD", Some(2)),
    info(960, b"XDR", None),
    info(952, b"XOF", Some(0)),
    info(964, b"XPD", None),
    info(953, b"XPF", Some(0)),
    info(962, b"XPT", None),
    info(994, b"XSU", None),
    info(963, b"XTS", None),
    info(965, b"XUA", None),
    info(999, b"XXX", None),
    info(886, b"YER", Some(2)),
    info(710, b"ZAR", Some(2)),
    info(967, b"ZMW", Some(2)),
    info(932, b"ZWL", Some(2)),
];

static BY_NUMERIC: Lazy<HashMap<u16, &'static CurrencyInfo>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.numeric, c)).collect());

static BY_CODE: Lazy<HashMap<CurrencyCode, &'static CurrencyInfo>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code, c)).collect());

/// Looks up a currency by its numeric ISO 4217 code.
#[must_use]
pub fn lookup_numeric(numeric: u16) -> Option<&'static CurrencyInfo> {
    BY_NUMERIC.get(&numeric).copied()
}

/// Looks up a currency by its alphabetic ISO 4217 code.
#[must_use]
pub fn lookup_alpha(code: CurrencyCode) -> Option<&'static CurrencyInfo> {
    BY_CODE.get(&code).copied()
}

/// All registry entries, in alphabetic order.
#[must_use]
pub fn all() -> &'static [CurrencyInfo] {
    CURRENCIES
}
