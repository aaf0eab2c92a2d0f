//! Word tokenizer feeding a [`Tree`](crate::Tree).

use std::io::{self, BufRead};

use crate::tree::MAX_KEY_LEN;

/// An iterator over the normalized words of a byte stream.
///
/// A word is a run of ASCII letters and digits, lower-cased. An apostrophe inside a
/// word is skipped without ending it, so `Don't` reads as `dont`. Every other byte
/// separates words. Words longer than [`MAX_KEY_LEN`] bytes are cut, and the rest
/// continues as the next word.
///
/// Every yielded word is a valid key for [`Tree::insert`](crate::Tree::insert).
/// A read error is yielded once and ends the iteration.
///
/// # Examples
///
/// ```
/// use wordtree::Words;
///
/// let words: Vec<String> = Words::new("Don't PANIC -- it's 42!".as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words, ["dont", "panic", "its", "42"]);
/// ```
#[derive(Debug)]
pub struct Words<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Words { reader, done: false }
    }

    /// Looks at the next byte without consuming it. `None` at end of input.
    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn read_word(&mut self) -> io::Result<Option<String>> {
        let first = loop {
            match self.next_byte()? {
                None => return Ok(None),
                Some(byte) if byte.is_ascii_alphanumeric() => break byte,
                Some(_) => {}
            }
        };

        let mut word = String::with_capacity(16);
        word.push(char::from(first.to_ascii_lowercase()));
        while word.len() < MAX_KEY_LEN {
            match self.peek_byte()? {
                Some(byte) if byte.is_ascii_alphanumeric() => word.push(char::from(byte.to_ascii_lowercase())),
                Some(b'\'') => {}
                // The separator is left for the next word's skip loop.
                _ => break,
            }
            self.reader.consume(1);
        }
        Ok(Some(word))
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_word() {
            Ok(Some(word)) => Some(Ok(word)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn words(input: &str) -> Vec<String> {
        Words::new(input.as_bytes()).collect::<io::Result<_>>().unwrap()
    }

    #[rstest]
    #[case("", &[])]
    #[case("   \n\t ", &[])]
    #[case("hello", &["hello"])]
    #[case("Hello, World!", &["hello", "world"])]
    #[case("don't", &["dont"])]
    #[case("'quoted'", &["quoted"])]
    #[case("rock'n'roll", &["rocknroll"])]
    #[case("abc123 x9", &["abc123", "x9"])]
    #[case("tab\tsep\nnew-line", &["tab", "sep", "new", "line"])]
    #[case("caf\u{e9}", &["caf"])]
    fn splits_and_normalizes(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(words(input), expected);
    }

    #[test]
    fn long_words_are_cut() {
        let input = "a".repeat(MAX_KEY_LEN + 10);
        let split = words(&input);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].len(), MAX_KEY_LEN);
        assert_eq!(split[1].len(), 10);
    }

    #[test]
    fn read_errors_end_iteration() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut iter = Words::new(io::BufReader::new(Broken));
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    proptest! {
        #[test]
        fn words_are_valid_keys(input in "[ -~\n]{0,400}") {
            for word in words(&input) {
                prop_assert!(!word.is_empty() && word.len() <= MAX_KEY_LEN);
                prop_assert!(word.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
            }
        }
    }
}
