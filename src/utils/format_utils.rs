/// Groups a digit string in threes with `,` separators.
///
/// Works on the text itself so arbitrarily long supplies keep every digit.
/// Leading zeros are dropped; an empty (or all-zero) input renders as `0`.
pub fn group_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }

    let len = trimmed.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Removes every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_threes() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123000"), "123,000");
        assert_eq!(group_digits("1000000"), "1,000,000");
    }

    #[test]
    fn empty_and_zeros_render_as_zero() {
        assert_eq!(group_digits(""), "0");
        assert_eq!(group_digits("000"), "0");
        assert_eq!(group_digits("0001500"), "1,500");
    }

    #[test]
    fn huge_supplies_keep_every_digit() {
        let digits = "123456789012345678901234567890";
        let grouped = group_digits(digits);
        assert_eq!(grouped, "123,456,789,012,345,678,901,234,567,890");
        assert_eq!(grouped.replace(',', ""), digits);
    }

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(strip_whitespace("Test Coin"), "TestCoin");
        assert_eq!(strip_whitespace(" a\tb\nc "), "abc");
    }
}
