/// `n!`, or `None` if it does not fit in a `u64`.
///
/// This is the order of the symmetric group on `n` points.
pub const fn factorial(n: u64) -> Option<u64> {
    let mut acc: u64 = 1;
    let mut i = 2;
    while i <= n {
        acc = match acc.checked_mul(i) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(acc)
}
