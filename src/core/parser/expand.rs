//! Token expansion for variables and history references.

use super::lexer::{Lexer, Token};
use crate::core::env::EnvStore;

/// Expand variable and history tokens into plain words.
///
/// `history` is the recall buffer's entries, oldest first. Re-tokenized
/// history commands are stripped of further history references so `!!`
/// cannot recurse.
pub fn expand_tokens(tokens: Vec<Token>, history: &[String], env: &EnvStore) -> Vec<Token> {
    tokens
        .into_iter()
        .flat_map(|token| match token {
            Token::Variable(name) => {
                let value = env.get(&name).unwrap_or_default().to_string();
                vec![Token::Word(value)]
            }
            Token::HistoryLast => {
                let cmd = history.last().cloned().unwrap_or_default();
                retokenize(&cmd, env)
            }
            Token::HistoryIndex(n) => {
                let cmd = if n >= 0 {
                    history.get(n as usize).cloned().unwrap_or_default()
                } else {
                    // Negative index counts back from the newest entry.
                    history
                        .len()
                        .checked_add_signed(n as isize)
                        .and_then(|i| history.get(i).cloned())
                        .unwrap_or_default()
                };
                retokenize(&cmd, env)
            }
            other => vec![other],
        })
        .collect()
}

fn retokenize(cmd: &str, env: &EnvStore) -> Vec<Token> {
    Lexer::new(cmd, env)
        .filter(|t| !matches!(t, Token::HistoryLast | Token::HistoryIndex(_)))
        .collect()
}
