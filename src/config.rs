use anyhow::Result;
use std::env;

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
}

pub fn load() -> Result<Config> {
    let language = env::var("LOTTO_LANG")
        .ok()
        .and_then(|tag| Language::from_tag(&tag))
        .unwrap_or(Language::Th);

    Ok(Config { language })
}
