/// Placeholder shown in place of a number when there is no valid solution.
pub const PLACEHOLDER: &str = "--";

/// Formats with thousands grouping and exactly two fraction digits,
/// e.g. `1234.5` → `"1,234.50"`.
#[must_use]
pub fn fixed2(value: f64) -> String {
    group(&format!("{value:.2}"))
}

/// Formats with thousands grouping and at most two fraction digits,
/// dropping trailing zeros, e.g. `2.50` → `"2.5"`, `3.0` → `"3"`.
#[must_use]
pub fn compact2(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    let s = if s == "-0" { "0" } else { s };
    group(s)
}

fn group(s: &str) -> String {
    if !s.chars().all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-') {
        // inf / NaN
        return s.to_owned();
    }
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}
