/// Split a token on its first `=` into key and value.
///
/// Every double quote in the value is removed, wherever it appears, so
/// `k="a"b"` yields `("k", "ab")`. A quote escaped by an odd run of
/// backslashes takes the last backslash of the run with it; an even run is
/// literal content and is kept whole. Returns `None` when the
/// token has no `=`. The key may be empty (`=v`); callers treat that like a
/// missing `=`.
pub(crate) fn parse_key_value(token: &[u8]) -> Option<(String, String)> {
    let split = token.iter().position(|&b| b == b'=')?;
    let (key, rest) = token.split_at(split);
    let mut value = Vec::with_capacity(rest.len());
    let mut backslashes = 0usize;
    for b in rest.iter().skip(1).copied() {
        match b {
            b'\\' => {
                backslashes += 1;
                value.push(b);
            }
            b'"' => {
                if backslashes % 2 == 1 {
                    value.pop();
                }
                backslashes = 0;
            }
            _ => {
                backslashes = 0;
                value.push(b);
            }
        }
    }
    Some((
        String::from_utf8_lossy(key).into_owned(),
        String::from_utf8_lossy(&value).into_owned(),
    ))
}
