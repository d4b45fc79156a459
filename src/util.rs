/// 大文字小文字を区別せずに部分一致を判定する
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 大文字小文字を無視して部分一致する
    #[test]
    fn test_matches_regardless_of_case() {
        assert!(contains_ignore_case("Built-in Microphone", "MIC"));
        assert!(contains_ignore_case("USB Mic", "usb mic"));
        assert!(!contains_ignore_case("Webcam Mic", "xyz"));
    }

    /// 空文字列はすべてに一致
    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(contains_ignore_case("USB Mic", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_non_ascii_names_are_folded() {
        assert!(contains_ignore_case("Mikrofon ÄÖÜ", "äöü"));
    }
}
