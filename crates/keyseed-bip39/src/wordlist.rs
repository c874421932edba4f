//! Language wordlists mapping 11-bit indices to words and back.
//!
//! A wordlist is exactly 2048 unique, non-empty words. Lookups compare
//! NFKD-normalized forms, so a word typed in a different Unicode
//! composition still resolves, while the words handed back are the ones
//! stored in the list.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::Bip39Error;

/// Number of entries in every wordlist.
pub const WORDLIST_LEN: usize = 2048;

pub const CHINESE_SIMPLIFIED: &str = "chinese_simplified";
pub const CHINESE_TRADITIONAL: &str = "chinese_traditional";
pub const CZECH: &str = "czech";
pub const ENGLISH: &str = "english";
pub const FRENCH: &str = "french";
pub const ITALIAN: &str = "italian";
/// The one language with its own delimiter.
pub const JAPANESE: &str = "japanese";
pub const KOREAN: &str = "korean";
pub const PORTUGUESE: &str = "portuguese";
pub const SPANISH: &str = "spanish";

/// Every language with a wordlist compiled into the crate, sorted.
pub const BUILTIN_LANGUAGES: [&str; 10] = [
    CHINESE_SIMPLIFIED,
    CHINESE_TRADITIONAL,
    CZECH,
    ENGLISH,
    FRENCH,
    ITALIAN,
    JAPANESE,
    KOREAN,
    PORTUGUESE,
    SPANISH,
];

/// Ideographic space (U+3000), used to join Japanese mnemonics.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

const BUILTIN_ENGLISH: &str = include_str!("../wordlists/english.txt");

/// The standard BIP-39 list for a non-English language, as shipped by
/// the `bip39` crate.
fn bundled_words(language: &str) -> Option<&'static [&'static str; WORDLIST_LEN]> {
    use bip39::Language;

    let bundled = match language {
        CHINESE_SIMPLIFIED => Language::SimplifiedChinese,
        CHINESE_TRADITIONAL => Language::TraditionalChinese,
        CZECH => Language::Czech,
        FRENCH => Language::French,
        ITALIAN => Language::Italian,
        JAPANESE => Language::Japanese,
        KOREAN => Language::Korean,
        PORTUGUESE => Language::Portuguese,
        SPANISH => Language::Spanish,
        _ => return None,
    };
    Some(bundled.word_list())
}

/// Apply Unicode NFKD normalization to `text`.
pub fn normalize_string(text: &str) -> String {
    text.nfkd().collect()
}

/// The string placed between words of a mnemonic in `language`.
pub fn delimiter_for(language: &str) -> &'static str {
    if language == JAPANESE {
        IDEOGRAPHIC_SPACE
    } else {
        " "
    }
}

/// An immutable list of 2048 words for one language.
#[derive(Debug, Clone)]
pub struct Wordlist {
    language: String,
    words: Vec<String>,
    normalized: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build a wordlist from individual words.
    ///
    /// # Arguments
    /// * `language` - Lowercase language name, e.g. `"english"`.
    /// * `words` - The words in index order.
    ///
    /// # Returns
    /// The wordlist, or `InvalidWordlist` unless there are exactly 2048
    /// words, none blank and none repeated.
    pub fn from_words<I, S>(language: &str, words: I) -> Result<Self, Bip39Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invalid = |reason: String| Bip39Error::InvalidWordlist {
            language: language.to_string(),
            reason,
        };

        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(invalid(format!(
                "expected {} words, found {}",
                WORDLIST_LEN,
                words.len()
            )));
        }

        let mut normalized = Vec::with_capacity(WORDLIST_LEN);
        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.trim().is_empty() {
                return Err(invalid(format!("blank entry at line {}", i + 1)));
            }
            let norm = normalize_string(word);
            if index.insert(norm.clone(), i as u16).is_some() {
                return Err(invalid(format!("duplicate word {:?} at line {}", word, i + 1)));
            }
            normalized.push(norm);
        }

        Ok(Wordlist {
            language: language.to_string(),
            words,
            normalized,
            index,
        })
    }

    /// Parse a wordlist file body: one word per line, UTF-8, no header.
    ///
    /// Surrounding whitespace on each line is ignored; a single trailing
    /// newline is allowed.
    pub fn parse(language: &str, text: &str) -> Result<Self, Bip39Error> {
        Self::from_words(language, text.lines().map(str::trim))
    }

    /// The English wordlist compiled into the crate.
    pub fn english() -> Result<Self, Bip39Error> {
        Self::parse(ENGLISH, BUILTIN_ENGLISH)
    }

    /// A wordlist compiled into the crate; see [`BUILTIN_LANGUAGES`].
    ///
    /// # Returns
    /// The wordlist, or `WordlistNotFound` for any other name.
    pub fn builtin(language: &str) -> Result<Self, Bip39Error> {
        if language == ENGLISH {
            return Self::english();
        }
        match bundled_words(language) {
            Some(words) => Self::from_words(language, words.iter().copied()),
            None => Err(Bip39Error::WordlistNotFound {
                language: language.to_string(),
            }),
        }
    }

    /// Language name of this list.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Delimiter used to join mnemonics in this language.
    pub fn delimiter(&self) -> &'static str {
        delimiter_for(&self.language)
    }

    /// All words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word at `index`, or `None` if `index >= 2048`.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Exact index lookup.
    ///
    /// # Arguments
    /// * `word` - The word to find; compared after NFKD normalization.
    ///
    /// # Returns
    /// The 11-bit index, or `UnknownWord` if the word is not in the list.
    pub fn index_of(&self, word: &str) -> Result<u16, Bip39Error> {
        self.index
            .get(&normalize_string(word))
            .copied()
            .ok_or_else(|| Bip39Error::UnknownWord(word.to_string()))
    }

    /// Whether `word` is an exact entry.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&normalize_string(word))
    }

    /// Whether any entry starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = normalize_string(prefix);
        self.normalized.iter().any(|w| w.starts_with(&prefix))
    }

    /// Best-effort expansion of a typed abbreviation.
    ///
    /// Returns `prefix` unchanged if it already is a word, the single
    /// entry starting with `prefix` if exactly one exists, and `prefix`
    /// unchanged otherwise. Never fails.
    pub fn expand(&self, prefix: &str) -> String {
        if self.contains(prefix) {
            return prefix.to_string();
        }
        let norm = normalize_string(prefix);
        let mut matches = self
            .normalized
            .iter()
            .enumerate()
            .filter(|(_, w)| w.starts_with(&norm));
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => self.words[i].clone(),
            _ => prefix.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn synthetic_words() -> Vec<String> {
        (0..WORDLIST_LEN).map(|i| format!("w{:04}", i)).collect()
    }

    #[test]
    fn test_english_has_2048_unique_words() {
        let wl = Wordlist::english().unwrap();
        assert_eq!(wl.words().len(), WORDLIST_LEN);
        let unique: HashSet<&String> = wl.words().iter().collect();
        assert_eq!(unique.len(), WORDLIST_LEN);
        assert!(wl.words().iter().all(|w| !w.is_empty()));
        assert_eq!(wl.word(0), Some("abandon"));
        assert_eq!(wl.word(2047), Some("zoo"));
        assert_eq!(wl.word(2048), None);
        assert_eq!(wl.language(), "english");
        assert_eq!(wl.delimiter(), " ");
    }

    #[test]
    fn test_index_of() {
        let wl = Wordlist::english().unwrap();
        assert_eq!(wl.index_of("abandon").unwrap(), 0);
        assert_eq!(wl.index_of("about").unwrap(), 3);
        assert_eq!(wl.index_of("zoo").unwrap(), 2047);
        match wl.index_of("bitcoin") {
            Err(Bip39Error::UnknownWord(w)) => assert_eq!(w, "bitcoin"),
            other => panic!("expected unknown word, got {:?}", other),
        }
        // Abbreviations are not exact matches.
        assert!(wl.index_of("aban").is_err());
    }

    #[test]
    fn test_expand() {
        let wl = Wordlist::english().unwrap();
        assert_eq!(wl.expand("access"), "access");
        assert_eq!(wl.expand("aband"), "abandon");
        assert_eq!(wl.expand("zon"), "zone");
        assert_eq!(wl.expand("zo"), "zo");
        // "act" is a full word even though "action", "actor" ... share it.
        assert_eq!(wl.expand("act"), "act");
        // Ambiguous prefix and no match are returned as typed.
        assert_eq!(wl.expand("ab"), "ab");
        assert_eq!(wl.expand("xyz"), "xyz");
        assert_eq!(wl.expand(""), "");
    }

    #[test]
    fn test_has_prefix() {
        let wl = Wordlist::english().unwrap();
        assert!(wl.has_prefix("aba"));
        assert!(wl.has_prefix("zoo"));
        assert!(!wl.has_prefix("xq"));
    }

    #[test]
    fn test_from_words_rejects_wrong_count() {
        let err = Wordlist::from_words("tiny", vec!["a", "b"]).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("expected 2048 words, found 2"));
    }

    #[test]
    fn test_from_words_rejects_duplicates_and_blanks() {
        let mut words = synthetic_words();
        words[10] = words[9].clone();
        assert!(matches!(
            Wordlist::from_words("dup", words),
            Err(Bip39Error::InvalidWordlist { .. })
        ));

        let mut words = synthetic_words();
        words[100] = "  ".to_string();
        let err = Wordlist::from_words("blank", words).unwrap_err();
        assert!(err.to_string().contains("blank entry at line 101"));
    }

    #[test]
    fn test_parse_ignores_trailing_newline_and_crlf() {
        let text = synthetic_words().join("\r\n") + "\r\n";
        let wl = Wordlist::parse("synthetic", &text).unwrap();
        assert_eq!(wl.word(5), Some("w0005"));
    }

    #[test]
    fn test_lookup_is_normalization_insensitive() {
        let mut words = synthetic_words();
        // Precomposed "é" (U+00E9) stored in the list.
        words[7] = "caf\u{e9}".to_string();
        let wl = Wordlist::from_words("french", words).unwrap();
        // Decomposed form: "e" + combining acute accent.
        assert_eq!(wl.index_of("cafe\u{301}").unwrap(), 7);
        assert_eq!(wl.expand("caf"), "caf\u{e9}");
    }

    #[test]
    fn test_every_builtin_language_loads() {
        for language in BUILTIN_LANGUAGES {
            let wl = Wordlist::builtin(language).unwrap();
            assert_eq!(wl.language(), language);
            assert_eq!(wl.words().len(), WORDLIST_LEN);
            let unique: HashSet<&str> = wl.words().iter().map(String::as_str).collect();
            assert_eq!(unique.len(), WORDLIST_LEN, "{} has duplicates", language);
        }
        assert!(matches!(
            Wordlist::builtin("klingon"),
            Err(Bip39Error::WordlistNotFound { .. })
        ));
    }

    #[test]
    fn test_builtin_lists_differ() {
        let english = Wordlist::builtin(ENGLISH).unwrap();
        let spanish = Wordlist::builtin(SPANISH).unwrap();
        let japanese = Wordlist::builtin(JAPANESE).unwrap();
        assert_eq!(english.word(0), Some("abandon"));
        assert_ne!(spanish.word(0), english.word(0));
        assert_ne!(japanese.word(0), english.word(0));
        assert_eq!(japanese.delimiter(), IDEOGRAPHIC_SPACE);
        assert_eq!(spanish.delimiter(), " ");
    }

    #[test]
    fn test_japanese_delimiter() {
        assert_eq!(delimiter_for(JAPANESE), "\u{3000}");
        assert_eq!(delimiter_for("spanish"), " ");
        assert_eq!(normalize_string("\u{3000}"), " ");
    }
}
