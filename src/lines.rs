/// Forward-only iterator over the non-empty lines of a playlist.
///
/// `\n` and `\r\n` terminators are stripped. Nothing else is normalized.
#[derive(Debug, Clone)]
pub struct Lines<'input> {
    inner: std::str::Lines<'input>,
}

impl<'input> Lines<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            inner: input.lines(),
        }
    }
}

impl<'input> Iterator for Lines<'input> {
    type Item = &'input str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|line| !line.is_empty())
    }
}

pub fn lines(input: &str) -> Lines<'_> {
    Lines::new(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skips_blank_lines() {
        let input = "#EXTM3U\n\n\n#EXT-X-ENDLIST\n";
        assert_eq!(vec!["#EXTM3U", "#EXT-X-ENDLIST"], lines(input).collect::<Vec<_>>());
    }

    #[test]
    fn strips_crlf() {
        let input = "#EXTM3U\r\nlow/index.m3u8\r\n";
        assert_eq!(vec!["#EXTM3U", "low/index.m3u8"], lines(input).collect::<Vec<_>>());
    }

    #[test]
    fn keeps_interior_whitespace() {
        let input = "  a b  \n";
        assert_eq!(Some("  a b  "), lines(input).next());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(None, lines("").next());
        assert_eq!(None, lines("\n\n").next());
    }
}
