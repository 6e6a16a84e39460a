pub mod checker;
pub mod config;
pub mod draws;
pub mod error;
pub mod i18n;
pub mod types;

pub use checker::{TICKET_LEN, check_number};
pub use draws::DrawRepository;
pub use error::{LottoError, Result};
pub use i18n::{Language, PrizeInfo, describe, format_draw_date};
pub use types::{CheckResult, DrawRecord, PrizeCategory};
