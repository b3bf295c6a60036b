use crate::math::Real;

/// Sorts `values` and nudges ties apart so the result is strictly ascending.
///
/// Every value must be finite and non-negative. A value equal to its predecessor is replaced
/// by the next representable real above it.
pub fn sort_strictly_ascending(values: &mut [Real]) {
    values.sort_unstable_by(|a, b| a.total_cmp(b));

    for i in 1..values.len() {
        if values[i] <= values[i - 1] {
            values[i] = next_up(values[i - 1]);
        }
    }
}

/// The smallest representable real strictly greater than a finite non-negative `x`.
#[inline]
pub fn next_up(x: Real) -> Real {
    // Positive IEEE floats are ordered like their bit patterns.
    if x == 0.0 {
        Real::from_bits(1)
    } else {
        Real::from_bits(x.to_bits() + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ties_become_strictly_ascending() {
        let mut values = [3.0, 1.0, 2.0, 1.0, 0.0, 0.0];
        sort_strictly_ascending(&mut values);

        for w in values.windows(2) {
            assert!(w[0] < w[1], "{:?}", values);
        }
        assert_eq!(values[0], 0.0);
        assert_eq!(values[5], 3.0);
    }

    #[test]
    fn next_up_is_adjacent() {
        let x: Real = 1.5;
        let y = next_up(x);
        assert!(y > x);
        assert_eq!(y - x, Real::EPSILON);
    }
}
