use anyhow::Result;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use lotto_checker::config;
use lotto_checker::{DrawRecord, DrawRepository, Language, check_number, describe, format_draw_date};

/// Demo walk: one ticket per tier of the latest bundled draw, plus a loser.
const DEMO_TICKETS: [&str; 10] = [
    "123456", "123455", "234567", "789012", "147258", "108642", "123999", "999012", "999956",
    "999999",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::load()?;
    let repo = DrawRepository::builtin()?;

    let mut args = std::env::args().skip(1);
    let number = args.next();
    let requested_date = args.next();

    let draw = match requested_date.as_deref().map(str::parse::<NaiveDate>) {
        Some(Ok(date)) => repo.by_date(date).unwrap_or_else(|| {
            tracing::warn!(%date, "no draw for requested date, falling back to the latest");
            repo.current()
        }),
        Some(Err(e)) => {
            tracing::warn!("unreadable draw date ({e}), falling back to the latest");
            repo.current()
        }
        None => repo.current(),
    };

    println!(
        "🎟️  Draw: {}\n",
        format_draw_date(draw.date, config.language)
    );

    match number {
        Some(number) => print_check(&number, draw, config.language)?,
        None => {
            for ticket in DEMO_TICKETS {
                print_check(ticket, draw, config.language)?;
            }
        }
    }

    Ok(())
}

fn print_check(number: &str, draw: &DrawRecord, language: Language) -> Result<()> {
    let result = check_number(number, draw)?;
    let info = describe(result.category, language);

    if result.is_winner() {
        println!("🎉 {} → {} ({})", number, info.label, info.amount);
        if let Some(winning) = &result.winning_number {
            if winning != number {
                println!("   matched digits: {}", winning);
            }
        }
    } else {
        println!("😢 {} → {}", number, info.description);
    }

    Ok(())
}
