use std::collections::HashSet;

use crate::error::{LottoError, Result};
use crate::types::{CheckResult, DrawRecord, PrizeCategory};

/// Thai government lottery tickets carry exactly six digits.
pub const TICKET_LEN: usize = 6;

/// One entry in the award table: which slice of the ticket number to take
/// and which of the draw's winning sets to look it up in.
struct MatchRule {
    category: PrizeCategory,
    slice: fn(&str) -> &str,
    pool: fn(&DrawRecord) -> &HashSet<String>,
}

fn full_number(number: &str) -> &str {
    number
}

fn front_three(number: &str) -> &str {
    &number[..3]
}

fn back_three(number: &str) -> &str {
    &number[3..]
}

fn last_two(number: &str) -> &str {
    &number[4..]
}

fn first_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.first_prize
}

fn adjacent_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.adjacent_to_first
}

fn second_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.second_prize
}

fn third_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.third_prize
}

fn fourth_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.fourth_prize
}

fn fifth_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.fifth_prize
}

fn front_three_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.front_three_digits
}

fn back_three_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.back_three_digits
}

fn last_two_pool(draw: &DrawRecord) -> &HashSet<String> {
    &draw.last_two_digits
}

/// Award order, highest tier first. The winning sets are not mutually
/// exclusive (a second-prize number also carries its own last two digits),
/// so the first matching rule decides the tier. Do not reorder.
const RULES: [MatchRule; 9] = [
    MatchRule {
        category: PrizeCategory::First,
        slice: full_number,
        pool: first_pool,
    },
    MatchRule {
        category: PrizeCategory::Adjacent,
        slice: full_number,
        pool: adjacent_pool,
    },
    MatchRule {
        category: PrizeCategory::Second,
        slice: full_number,
        pool: second_pool,
    },
    MatchRule {
        category: PrizeCategory::Third,
        slice: full_number,
        pool: third_pool,
    },
    MatchRule {
        category: PrizeCategory::Fourth,
        slice: full_number,
        pool: fourth_pool,
    },
    MatchRule {
        category: PrizeCategory::Fifth,
        slice: full_number,
        pool: fifth_pool,
    },
    MatchRule {
        category: PrizeCategory::Front3,
        slice: front_three,
        pool: front_three_pool,
    },
    MatchRule {
        category: PrizeCategory::Back3,
        slice: back_three,
        pool: back_three_pool,
    },
    MatchRule {
        category: PrizeCategory::Last2,
        slice: last_two,
        pool: last_two_pool,
    },
];

fn validate(number: &str) -> Result<()> {
    if number.len() != TICKET_LEN || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LottoError::InvalidNumber {
            input: number.to_string(),
        });
    }
    Ok(())
}

/// Checks a six-digit ticket number against one draw and returns the prize
/// tier it falls into, or `PrizeCategory::None`.
///
/// Fails with [`LottoError::InvalidNumber`] when the input is not exactly
/// six ASCII digits; the input is never truncated or padded. Classification
/// itself is a pure lookup and never fails.
pub fn check_number(number: &str, draw: &DrawRecord) -> Result<CheckResult> {
    validate(number)?;

    for rule in &RULES {
        let candidate = (rule.slice)(number);
        if (rule.pool)(draw).contains(candidate) {
            tracing::debug!(
                number,
                category = ?rule.category,
                matched = candidate,
                "ticket won a prize"
            );
            return Ok(CheckResult {
                category: rule.category,
                winning_number: Some(candidate.to_string()),
            });
        }
    }

    tracing::debug!(number, "ticket did not win");
    Ok(CheckResult {
        category: PrizeCategory::None,
        winning_number: None,
    })
}
