use crate::utils::round_to;

/// Render an integer coordinate as a compact decimal string in units of
/// `10^exponent`, e.g. `23423456` at exponent 6 is `"23.42"`.
///
/// With no exponent the nearest lower multiple of 3 (capped to `[0, 9]`) is
/// chosen from the value's own magnitude; `suffix` then appends the matching
/// unit label (`b`, `Kb`, `Mb`, `Gb`). At least two decimal places are shown
/// for any positive exponent, more when the value is small relative to it.
pub fn position_int_to_string(position: u64, exponent: Option<i32>, suffix: bool) -> String {
    let pos = position as f64;
    let log = if position == 0 { 0.0 } else { pos.log10() };
    let exp = match exponent {
        Some(exp) => exp,
        None => (log - log.rem_euclid(3.0)).clamp(0.0, 9.0) as i32,
    };
    let places_exp = exp as f64 - round_to(log, (exp + 3).max(0) as u32).floor();
    let min_places = (exp as f64).clamp(0.0, 2.0);
    let places = places_exp.max(min_places).min(12.0) as usize;
    let scaled = pos / 10f64.powi(exp);
    let mut out = format!("{scaled:.places$}");
    if suffix {
        let symbol = match exp {
            0 => Some(""),
            3 => Some("K"),
            6 => Some("M"),
            9 => Some("G"),
            _ => None,
        };
        if let Some(symbol) = symbol {
            out.push(' ');
            out.push_str(symbol);
            out.push('b');
        }
    }
    out
}

/// Parse a coordinate string into a number, honoring thousands separators and
/// `K`/`M`/`G` magnitude suffixes with an optional trailing `b` (any case):
/// `"1.4Kb"` is 1400, `"73,054,882"` is 73054882. `None` for anything that
/// is not a number plus at most one such suffix.
pub fn position_string_to_int(position: &str) -> Option<f64> {
    let normalized = position.to_uppercase().replace(',', "");
    let stripped = normalized.trim_end_matches('B');
    let multiplier = match stripped.chars().last() {
        Some('K') => Some(1e3),
        Some('M') => Some(1e6),
        Some('G') => Some(1e9),
        _ => None,
    };
    let (digits, multiplier) = match multiplier {
        Some(multiplier) => (&stripped[..stripped.len() - 1], multiplier),
        None => (normalized.as_str(), 1.0),
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|number| number * multiplier)
}

/// A parsed region query string.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionQuery {
    /// `chr:start-end` or `chr:center+offset`.
    Range { chr: String, start: f64, end: f64 },
    /// `chr:pos`.
    Position { chr: String, position: f64 },
}

/// Parse a region query of the form `chr:start-end`, `chr:center+offset`, or
/// `chr:pos`, with coordinates in [`position_string_to_int`] syntax.
pub fn parse_position_query(query: &str) -> Option<PositionQuery> {
    let (chr, rest) = query.split_once(':')?;
    if chr.is_empty() || !chr.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let chr = chr.to_string();
    if let Some((center, offset)) = rest.split_once('+') {
        let center = position_string_to_int(center)?;
        let offset = position_string_to_int(offset)?;
        Some(PositionQuery::Range {
            chr,
            start: center - offset,
            end: center + offset,
        })
    } else if let Some((start, end)) = rest.split_once('-') {
        Some(PositionQuery::Range {
            chr,
            start: position_string_to_int(start)?,
            end: position_string_to_int(end)?,
        })
    } else {
        Some(PositionQuery::Position {
            chr,
            position: position_string_to_int(rest)?,
        })
    }
}
