//! Price endings that read as a discount.

/// Maps a price onto a conventional ending in 9.
///
/// - below 100: down to the tens, then `+9` (83 → 89)
/// - 100 to 999: down to the hundreds, then `+99` (734 → 799)
/// - 1000 and up: with `h = floor(price / 100)`, a hundreds digit under 5
///   gives `h·100 − 1` (3160 → 3099), otherwise the `x499` of the same
///   thousand (2560 → 2499)
///
/// Works on the floored hundreds/tens count so boundaries are exact.
/// Non-finite input yields NaN.
pub fn round_psychological(price: f64) -> f64 {
    if price < 100.0 {
        (price / 10.0).floor() * 10.0 + 9.0
    } else if price < 1000.0 {
        (price / 100.0).floor() * 100.0 + 99.0
    } else {
        let hundreds = (price / 100.0).floor();
        let digit = hundreds.rem_euclid(10.0);
        if digit < 5.0 {
            hundreds * 100.0 - 1.0
        } else {
            (hundreds - digit + 4.0) * 100.0 + 99.0
        }
    }
}
