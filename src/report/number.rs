const UNITS: [(&str, f64); 6] = [
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
];

/// Abbreviates `n` with the largest unit it reaches, e.g. `1500` → `1.5k`.
pub fn abbreviate(n: u64) -> String {
    for (unit, scale) in UNITS {
        let top = n as f64 / scale;
        if top >= 1.0 {
            return format!("{}{unit}", one_decimal(top));
        }
    }
    n.to_string()
}

/// Formats `x` with one decimal, rounding exact halves away from zero.
///
/// `{:.1}` alone sends exact ties such as `12.25` to the even digit. Only
/// values with a fractional part of `.25` or `.75` are exact ties in binary;
/// everything else already rounds to the nearest tenth.
pub fn one_decimal(x: f64) -> String {
    let tenths = x * 10.0;
    if (x * 4.0).fract() == 0.0 && tenths.fract().abs() == 0.5 {
        format!("{:.1}", tenths.round() / 10.0)
    } else {
        format!("{x:.1}")
    }
}
