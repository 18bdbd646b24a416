//! Mixed-number fraction formatting for cut sheets

/// Shop-standard fraction precision: sixteenths
pub const DEFAULT_DENOMINATOR: u32 = 16;

/// Format a decimal inch value as a mixed-number fraction string.
///
/// The value is rounded to the nearest `1/denominator` and the fraction is
/// reduced by GCD, so `4.5` at sixteenths prints as `4-1/2`, `0.0625` as
/// `1/16`, and anything within half a tick of a whole number as the whole
/// number alone.
pub fn format_inches(value: f64, denominator: u32) -> String {
    let denom = u64::from(denominator.max(1));
    let negative = value < 0.0;
    let ticks = (value.abs() * denom as f64).round() as u64;
    let whole = ticks / denom;
    let numer = ticks % denom;

    let body = if numer == 0 {
        whole.to_string()
    } else {
        let g = gcd(numer, denom);
        let (n, d) = (numer / g, denom / g);
        if whole == 0 {
            format!("{}/{}", n, d)
        } else {
            format!("{}-{}/{}", whole, n, d)
        }
    };

    if negative && ticks != 0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_number() {
        assert_eq!(format_inches(4.5, 16), "4-1/2");
        assert_eq!(format_inches(10.6875, 16), "10-11/16");
        assert_eq!(format_inches(34.75, 16), "34-3/4");
    }

    #[test]
    fn test_pure_fraction() {
        assert_eq!(format_inches(0.0625, 16), "1/16");
        assert_eq!(format_inches(0.375, 16), "3/8");
        assert_eq!(format_inches(0.125, 16), "1/8");
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_inches(3.0, 16), "3");
        assert_eq!(format_inches(0.0, 16), "0");
    }

    #[test]
    fn test_near_whole_snaps() {
        assert_eq!(format_inches(2.999, 16), "3");
        assert_eq!(format_inches(5.001, 16), "5");
    }

    #[test]
    fn test_rounds_to_denominator() {
        // 0.3 is between 4/16 and 5/16; nearest tick is 5/16
        assert_eq!(format_inches(0.3, 16), "5/16");
        // Coarser precision collapses it to 1/4
        assert_eq!(format_inches(0.3, 4), "1/4");
    }

    #[test]
    fn test_finer_denominators() {
        assert_eq!(format_inches(0.03125, 32), "1/32");
        assert_eq!(format_inches(1.015625, 64), "1-1/64");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_inches(-0.75, 16), "-3/4");
        assert_eq!(format_inches(-4.5, 16), "-4-1/2");
        // A negative value that rounds to zero loses its sign
        assert_eq!(format_inches(-0.01, 16), "0");
    }
}
