//! Rule table and generation expansion.
//!
//! Expansion is pure string rewriting: each pass maps every character of the
//! previous generation through the rule table, and characters without a rule
//! carry over unchanged. Parameter groups like `(12)` are never rewritten
//! because `(`, `)`, and digits are rejected as rule keys up front; they ride
//! along as ordinary characters until the lexer gives them meaning.

use std::collections::HashMap;

use crate::error::SkeletonError;

/// Maps a symbol to the string that replaces it each generation.
pub type RuleTable = HashMap<char, String>;

/// Returns true for characters that may not key a rule.
pub fn is_reserved_rule_key(c: char) -> bool {
    c == '(' || c == ')' || c.is_ascii_digit()
}

/// One rewrite pass over `input`, counting output characters as they are
/// appended.
///
/// Gives up with `None` the moment the pass would exceed `budget`, so an
/// over-budget generation is never fully materialized. On success the
/// returned count is the character length of the new generation.
fn rewrite(input: &str, rules: &RuleTable, budget: usize) -> Option<(String, usize)> {
    let mut next = String::new();
    let mut count = 0usize;
    for symbol in input.chars() {
        match rules.get(&symbol) {
            Some(production) => {
                count += production.chars().count();
                if count > budget {
                    return None;
                }
                next.push_str(production);
            }
            None => {
                count += 1;
                if count > budget {
                    return None;
                }
                next.push(symbol);
            }
        }
    }
    Some((next, count))
}

/// Expands `axiom` through `num_iters` rewrite passes and returns every
/// generation, axiom first.
///
/// The result holds `num_iters + 1` strings; entry `i` is the state after
/// `i` passes. The cumulative character count of all generations, axiom
/// included, is capped at `max_expanded_chars`: a generation that would push
/// the total past the cap aborts the expansion with
/// [`SkeletonError::ExpansionOverflow`] part-way through its own rewrite
/// pass, before the oversized string exists.
pub fn expand(
    axiom: &str,
    rules: &RuleTable,
    num_iters: usize,
    max_expanded_chars: usize,
) -> Result<Vec<String>, SkeletonError> {
    let mut total_chars = axiom.chars().count();
    if total_chars > max_expanded_chars {
        return Err(SkeletonError::ExpansionOverflow {
            generation: 0,
            limit: max_expanded_chars,
        });
    }

    // num_iters may be absurdly large while the cap still cuts the run
    // short, so the reservation is a clamped hint rather than a promise.
    let mut generations = Vec::with_capacity(num_iters.saturating_add(1).min(64));
    generations.push(axiom.to_owned());

    for generation in 1..=num_iters {
        let budget = max_expanded_chars - total_chars;
        let Some((next, count)) = rewrite(&generations[generation - 1], rules, budget) else {
            return Err(SkeletonError::ExpansionOverflow {
                generation,
                limit: max_expanded_chars,
            });
        };
        total_chars += count;
        generations.push(next);
    }

    Ok(generations)
}
