//! Whole-message decoding
//!
//! A message is a sequence of codes separated by single spaces. Every token is
//! decoded independently; the first failure discards the whole message.

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::MorseTree;

pub const TOKEN_SEPARATOR: char = ' ';

#[instrument(level = "debug", skip(tree))]
pub fn decode_message(tree: &MorseTree, message: &str) -> ApplicationResult<String> {
    if message.is_empty() {
        return Ok(String::new());
    }
    let decoded = message
        .split(TOKEN_SEPARATOR)
        .enumerate()
        .map(|(index, token)| {
            tree.decode(token)
                .map_err(|source| ApplicationError::Token {
                    index,
                    token: token.to_string(),
                    source,
                })
        })
        .collect::<ApplicationResult<String>>()?;
    debug!("decoded {:?}", decoded);
    Ok(decoded)
}
