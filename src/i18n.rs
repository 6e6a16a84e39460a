//! Display text for check results. The checker itself only emits
//! [`PrizeCategory`] tags; everything user-facing lives here.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::PrizeCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Th,
    En,
}

impl Language {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "th" => Some(Language::Th),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// Localized presentation of one prize tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrizeInfo {
    pub label: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
}

/// Maps a prize tier to its display label, official prize amount, and
/// result message in the requested language.
pub fn describe(category: PrizeCategory, language: Language) -> PrizeInfo {
    match language {
        Language::Th => describe_th(category),
        Language::En => describe_en(category),
    }
}

fn describe_th(category: PrizeCategory) -> PrizeInfo {
    use PrizeCategory::*;
    match category {
        First => PrizeInfo {
            label: "รางวัลที่ 1",
            amount: "6,000,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลที่ 1",
        },
        Adjacent => PrizeInfo {
            label: "รางวัลข้างเคียงรางวัลที่ 1",
            amount: "100,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลข้างเคียงรางวัลที่ 1",
        },
        Second => PrizeInfo {
            label: "รางวัลที่ 2",
            amount: "200,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลที่ 2",
        },
        Third => PrizeInfo {
            label: "รางวัลที่ 3",
            amount: "80,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลที่ 3",
        },
        Fourth => PrizeInfo {
            label: "รางวัลที่ 4",
            amount: "40,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลที่ 4",
        },
        Fifth => PrizeInfo {
            label: "รางวัลที่ 5",
            amount: "20,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลที่ 5",
        },
        Front3 => PrizeInfo {
            label: "รางวัลเลขหน้า 3 ตัว",
            amount: "4,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลเลขหน้า 3 ตัว",
        },
        Back3 => PrizeInfo {
            label: "รางวัลเลขท้าย 3 ตัว",
            amount: "4,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลเลขท้าย 3 ตัว",
        },
        Last2 => PrizeInfo {
            label: "รางวัลเลขท้าย 2 ตัว",
            amount: "2,000 บาท",
            description: "ยินดีด้วย! คุณถูกรางวัลเลขท้าย 2 ตัว",
        },
        None => PrizeInfo {
            label: "ไม่ถูกรางวัล",
            amount: "0 บาท",
            description: "เสียใจด้วย ครั้งหน้าโชคจะดีกว่าแน่นอน",
        },
    }
}

fn describe_en(category: PrizeCategory) -> PrizeInfo {
    use PrizeCategory::*;
    match category {
        First => PrizeInfo {
            label: "1st Prize",
            amount: "6,000,000 THB",
            description: "Congratulations! You won the 1st Prize!",
        },
        Adjacent => PrizeInfo {
            label: "Adjacent to 1st Prize",
            amount: "100,000 THB",
            description: "Congratulations! You won the Adjacent to 1st Prize!",
        },
        Second => PrizeInfo {
            label: "2nd Prize",
            amount: "200,000 THB",
            description: "Congratulations! You won the 2nd Prize!",
        },
        Third => PrizeInfo {
            label: "3rd Prize",
            amount: "80,000 THB",
            description: "Congratulations! You won the 3rd Prize!",
        },
        Fourth => PrizeInfo {
            label: "4th Prize",
            amount: "40,000 THB",
            description: "Congratulations! You won the 4th Prize!",
        },
        Fifth => PrizeInfo {
            label: "5th Prize",
            amount: "20,000 THB",
            description: "Congratulations! You won the 5th Prize!",
        },
        Front3 => PrizeInfo {
            label: "Front 3 Digits Prize",
            amount: "4,000 THB",
            description: "Congratulations! You won the Front 3 Digits Prize!",
        },
        Back3 => PrizeInfo {
            label: "Back 3 Digits Prize",
            amount: "4,000 THB",
            description: "Congratulations! You won the Back 3 Digits Prize!",
        },
        Last2 => PrizeInfo {
            label: "Last 2 Digits Prize",
            amount: "2,000 THB",
            description: "Congratulations! You won the Last 2 Digits Prize!",
        },
        None => PrizeInfo {
            label: "No Prize",
            amount: "0 THB",
            description: "Sorry, no prize this time. Better luck next time!",
        },
    }
}

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Renders a draw date for display: Buddhist-era year with Thai month
/// names for Thai, long-form Gregorian for English.
pub fn format_draw_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::Th => {
            let month = THAI_MONTHS[date.month0() as usize];
            format!("{} {} {}", date.day(), month, date.year() + 543)
        }
        Language::En => format!("{} {}, {}", date.format("%B"), date.day(), date.year()),
    }
}
