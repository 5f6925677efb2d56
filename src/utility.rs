use lazy_static::lazy_static;
use regex::Regex;

use crate::error::HeapError;

pub fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

pub fn lchild(idx: usize) -> usize {
    2 * idx + 1
}

pub fn rchild(idx: usize) -> usize {
    2 * idx + 2
}

lazy_static! {
    static ref ITEM: Regex = Regex::new(r"^-?\d+$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"[,\s]+").unwrap();
}

/// Parses a comma or whitespace separated list of integers, e.g. `"5, 3 8,1"`.
pub fn parse_items(text: &str) -> Result<Vec<i32>, HeapError> {
    let mut out = Vec::new();
    for token in SEPARATOR.split(text.trim()) {
        if token.is_empty() {
            continue;
        }
        if !ITEM.is_match(token) {
            return Err(HeapError::InvalidArgument(format!(
                "`{}` is not an integer",
                token
            )));
        }
        let value = token.parse::<i32>().map_err(|e| {
            HeapError::InvalidArgument(format!("`{}`: {}", token, e))
        })?;
        out.push(value);
    }
    Ok(out)
}
