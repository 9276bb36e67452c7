/// Formats a result the way the calculator prints it.
///
/// Whole numbers keep a trailing `.0` so results always read as reals,
/// very large or small magnitudes switch to exponent form, and the
/// non-finite values print as `inf`, `-inf` and `nan`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else {
        // Debug gives the shortest round-trip form with a decimal point.
        format!("{:?}", n)
    }
}
