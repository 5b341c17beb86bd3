//! Digit-sum reduction.

/// Repeated decimal digit sum down to a single digit (1..=9).
///
/// Zero maps to 9, so the result is always in 1..=9.
pub fn digital_root(n: u32) -> u8 {
    let mut sum = digit_sum(n);
    while sum > 9 {
        sum = digit_sum(sum);
    }
    if sum == 0 { 9 } else { sum as u8 }
}

fn digit_sum(mut n: u32) -> u32 {
    let mut s = 0;
    while n > 0 {
        s += n % 10;
        n /= 10;
    }
    s
}
