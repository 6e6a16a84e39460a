//! End-to-end checks against the bundled reference draws.

use chrono::NaiveDate;
use lotto_checker::{DrawRepository, Language, PrizeCategory, check_number, describe};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn latest_draw_full_sweep() {
    let repo = DrawRepository::builtin().unwrap();
    let draw = repo.current();
    assert_eq!(draw.date, date("2025-01-16"));

    let cases = [
        ("123456", PrizeCategory::First, "123456"),
        ("123455", PrizeCategory::Adjacent, "123455"),
        ("123457", PrizeCategory::Adjacent, "123457"),
        ("234567", PrizeCategory::Second, "234567"),
        ("789012", PrizeCategory::Third, "789012"),
        ("147258", PrizeCategory::Fourth, "147258"),
        ("108642", PrizeCategory::Fifth, "108642"),
        ("123999", PrizeCategory::Front3, "123"),
        ("999012", PrizeCategory::Back3, "012"),
        ("999956", PrizeCategory::Last2, "56"),
    ];

    for (number, category, winning) in cases {
        let result = check_number(number, draw).unwrap();
        assert_eq!(result.category, category, "ticket {number}");
        assert_eq!(result.winning_number.as_deref(), Some(winning));
    }
}

#[test]
fn latest_draw_losing_ticket() {
    let repo = DrawRepository::builtin().unwrap();
    let result = check_number("999999", repo.current()).unwrap();
    assert_eq!(result.category, PrizeCategory::None);
    assert_eq!(result.winning_number, None);
}

#[test]
fn third_prize_outranks_front_three_in_fixture() {
    // "789012" sits in the third-prize set while "789" is also a winning
    // front-three entry of the same draw; the higher tier wins.
    let repo = DrawRepository::builtin().unwrap();
    let draw = repo.current();
    assert!(draw.front_three_digits.contains("789"));
    assert!(draw.third_prize.contains("789012"));

    let result = check_number("789012", draw).unwrap();
    assert_eq!(result.category, PrizeCategory::Third);
}

#[test]
fn older_draw_by_date() {
    let repo = DrawRepository::builtin().unwrap();
    let draw = repo.by_date(date("2024-12-01")).unwrap();

    let result = check_number("888999", draw).unwrap();
    assert_eq!(result.category, PrizeCategory::First);

    let result = check_number("888998", draw).unwrap();
    assert_eq!(result.category, PrizeCategory::Adjacent);
}

#[test]
fn result_renders_in_both_languages() {
    let repo = DrawRepository::builtin().unwrap();
    let result = check_number("123456", repo.current()).unwrap();

    let en = describe(result.category, Language::En);
    assert_eq!(en.label, "1st Prize");

    let th = describe(result.category, Language::Th);
    assert_eq!(th.label, "รางวัลที่ 1");
}
