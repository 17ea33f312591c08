//! Plain-text piece lists, one `length, quantity[, label]` entry per line.
//!
//! Lengths are integer millimeters (`2300`) or meters with a decimal point (`2.3`).
//! Blank lines and lines starting with `#` are skipped.
//! Entries without a label are named after their line: `L{line}`.

use crate::entities::Piece;
use crate::error::PieceListError;
use crate::io::ext_repr::ExtPiece;

pub fn parse_piece_list(text: &str) -> Result<Vec<ExtPiece>, PieceListError> {
    let mut pieces = vec![];
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let fields = content.split(',').map(str::trim).collect::<Vec<_>>();
        let (length, qty, label) = match fields.as_slice() {
            [length, qty] => (*length, *qty, None),
            [length, qty, label] => (*length, *qty, Some(*label)),
            _ => {
                return Err(PieceListError::Format {
                    line,
                    found: content.to_string(),
                });
            }
        };

        let length = parse_length_mm(length).ok_or_else(|| PieceListError::Length {
            line,
            value: length.to_string(),
        })?;
        let demand = qty.parse::<u64>().map_err(|_| PieceListError::Quantity {
            line,
            value: qty.to_string(),
        })?;
        let label = label.map_or_else(|| format!("L{line}"), str::to_string);

        // validate here so the error points at the line
        Piece::new(label.as_str(), length).map_err(|source| PieceListError::Piece { line, source })?;

        pieces.push(ExtPiece {
            label,
            length,
            demand,
        });
    }
    Ok(pieces)
}

/// Parses `2300` as 2300 mm and `2.3` as 2.3 m = 2300 mm, without going through floating point.
fn parse_length_mm(value: &str) -> Option<i64> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let mm = match digits.split_once('.') {
        None => digits.parse::<i64>().ok()?,
        Some((whole, frac)) => {
            if frac.len() > 3 || !frac.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let whole = match whole {
                "" => 0,
                w => w.parse::<i64>().ok()?,
            };
            let frac = format!("{frac:0<3}").parse::<i64>().ok()?;
            whole.checked_mul(1000)?.checked_add(frac)?
        }
    };
    Some(if negative { -mm } else { mm })
}
