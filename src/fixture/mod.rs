mod declaration;
mod prompt;

pub use declaration::{FunctionDeclaration, get_user_info_declaration};
pub use prompt::{USER_QUESTION, render_json, render_prompt};

use clap::ValueEnum;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureFormat {
    /// The pre-rendered single-shot chat document.
    Prompt,
    /// A structured question-plus-functions object.
    Json,
}

impl FromStr for FixtureFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "prompt" => Ok(Self::Prompt),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown format '{value}' (expected 'prompt' or 'json')")),
        }
    }
}
