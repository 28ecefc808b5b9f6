use super::Var;
use crate::lang::literal;

/// Resolves a single token. A token starting with a letter names a
/// variable; anything else is read as a permissive integer literal.
pub fn resolve(token: &str, var: &Var) -> i32 {
    let token = token.trim_start();
    match token.chars().next() {
        Some(ch) if ch.is_ascii_alphabetic() => var.fetch(ch),
        _ => literal(token),
    }
}
