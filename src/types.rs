use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prize tiers in the order they are awarded. `None` means the ticket
/// did not win anything in the selected draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeCategory {
    First,
    Adjacent,
    Second,
    Third,
    Fourth,
    Fifth,
    Front3,
    Back3,
    Last2,
    None,
}

/// One draw's published winning numbers.
///
/// All entries are fixed-width, zero-padded digit strings: six digits for
/// the numbered prizes, three for the front/back sets, two for the last-two
/// set. Records are built once at load time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub first_prize: HashSet<String>,
    pub adjacent_to_first: HashSet<String>,
    pub second_prize: HashSet<String>,
    pub third_prize: HashSet<String>,
    pub fourth_prize: HashSet<String>,
    pub fifth_prize: HashSet<String>,
    pub front_three_digits: HashSet<String>,
    pub back_three_digits: HashSet<String>,
    pub last_two_digits: HashSet<String>,
}

/// Outcome of checking one ticket number against one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub category: PrizeCategory,
    /// The digit span that satisfied the winning rule: the full ticket
    /// number for the six-digit tiers, the 3-digit prefix/suffix for
    /// front3/back3, the 2-digit suffix for last2. `None` when no rule
    /// matched.
    pub winning_number: Option<String>,
}

impl CheckResult {
    pub fn is_winner(&self) -> bool {
        self.category != PrizeCategory::None
    }
}
