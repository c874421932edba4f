//! Caller-owned wordlist cache and language detection.
//!
//! Wordlists are read once per language and shared as `Arc<Wordlist>`,
//! so any number of engines (and threads) can use the same list without
//! locking. The cache itself is an ordinary value held by the caller.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::wordlist::{normalize_string, Wordlist, BUILTIN_LANGUAGES};
use crate::Bip39Error;

/// File extension of wordlist files.
const WORDLIST_EXTENSION: &str = "txt";

/// Where wordlists are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistConfig {
    /// Directory holding `<language>.txt` files. `None` means only the
    /// built-in English list is available.
    #[serde(default)]
    pub wordlist_dir: Option<PathBuf>,
}

impl WordlistConfig {
    /// Configuration reading wordlists from `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        WordlistConfig {
            wordlist_dir: Some(dir.into()),
        }
    }

    /// Path of the file that would hold `language`, if a directory is set.
    pub fn path_for(&self, language: &str) -> Option<PathBuf> {
        self.wordlist_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.{}", language, WORDLIST_EXTENSION)))
    }
}

/// Loaded wordlists keyed by language name.
#[derive(Debug, Default)]
pub struct WordlistCache {
    config: WordlistConfig,
    loaded: HashMap<String, Arc<Wordlist>>,
}

impl WordlistCache {
    /// Create an empty cache that loads according to `config`.
    pub fn new(config: WordlistConfig) -> Self {
        WordlistCache {
            config,
            loaded: HashMap::new(),
        }
    }

    /// The configuration this cache loads with.
    pub fn config(&self) -> &WordlistConfig {
        &self.config
    }

    /// Load the wordlist for `language`, reading it at most once.
    ///
    /// A `<language>.txt` file in the configured directory takes
    /// precedence over the list compiled into the crate.
    ///
    /// # Arguments
    /// * `language` - Lowercase language name.
    ///
    /// # Returns
    /// The shared wordlist, `WordlistNotFound` if no source exists,
    /// `WordlistIo` if the file cannot be read, or `InvalidWordlist` if it
    /// does not hold exactly 2048 unique entries.
    pub fn load(&mut self, language: &str) -> Result<Arc<Wordlist>, Bip39Error> {
        if let Some(wordlist) = self.loaded.get(language) {
            trace!(language, "wordlist cache hit");
            return Ok(Arc::clone(wordlist));
        }
        if !is_language_name(language) {
            return Err(Bip39Error::WordlistNotFound {
                language: language.to_string(),
            });
        }

        let wordlist = match self.config.path_for(language).filter(|p| p.is_file()) {
            Some(path) => {
                let text = read_wordlist_file(&path)?;
                let wordlist = Wordlist::parse(language, &text)?;
                debug!(language, path = %path.display(), "loaded wordlist from file");
                wordlist
            }
            None => {
                let wordlist = Wordlist::builtin(language)?;
                debug!(language, "loaded built-in wordlist");
                wordlist
            }
        };

        Ok(self.insert(wordlist))
    }

    /// Register an already-built wordlist, replacing any cached list for
    /// the same language.
    pub fn insert(&mut self, wordlist: Wordlist) -> Arc<Wordlist> {
        let wordlist = Arc::new(wordlist);
        self.loaded
            .insert(wordlist.language().to_string(), Arc::clone(&wordlist));
        wordlist
    }

    /// Every language this cache can serve, sorted.
    ///
    /// Includes the built-in lists, each `*.txt` file in the configured
    /// directory, and every inserted list.
    pub fn available_languages(&self) -> Result<Vec<String>, Bip39Error> {
        let mut languages: BTreeSet<String> = self.loaded.keys().cloned().collect();
        languages.extend(BUILTIN_LANGUAGES.iter().map(|l| l.to_string()));

        if let Some(dir) = &self.config.wordlist_dir {
            let entries = std::fs::read_dir(dir).map_err(|source| Bip39Error::WordlistIo {
                path: dir.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| Bip39Error::WordlistIo {
                        path: dir.clone(),
                        source,
                    })?
                    .path();
                if path.extension().and_then(|e| e.to_str()) != Some(WORDLIST_EXTENSION) {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if is_language_name(stem) {
                        languages.insert(stem.to_string());
                    }
                }
            }
        }

        Ok(languages.into_iter().collect())
    }

    /// Work out which language a (possibly abbreviated) mnemonic is written in.
    ///
    /// Every word must be a prefix of some entry in a candidate language.
    /// If several languages survive, a language wins when it is the only
    /// one containing some word as an exact entry.
    ///
    /// # Arguments
    /// * `text` - Whitespace-separated words.
    ///
    /// # Returns
    /// The language name, `LanguageUnrecognized` naming the first word no
    /// language accepts (or an empty word for blank input), or
    /// `LanguageAmbiguous` listing the survivors.
    pub fn detect_language(&mut self, text: &str) -> Result<String, Bip39Error> {
        let normalized = normalize_string(text);
        let words: BTreeSet<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            warn!("mnemonic language unrecognized: no words");
            return Err(Bip39Error::LanguageUnrecognized {
                word: String::new(),
            });
        }

        let mut possible = Vec::new();
        for language in self.available_languages()? {
            possible.push(self.load(&language)?);
        }

        for word in &words {
            possible.retain(|wordlist| wordlist.has_prefix(word));
            if possible.is_empty() {
                warn!(word_count = words.len(), "mnemonic language unrecognized");
                return Err(Bip39Error::LanguageUnrecognized {
                    word: (*word).to_string(),
                });
            }
        }
        if let [only] = possible.as_slice() {
            debug!(language = only.language(), "detected mnemonic language");
            return Ok(only.language().to_string());
        }

        let mut complete = BTreeSet::new();
        for word in &words {
            let mut exact = possible.iter().filter(|wordlist| wordlist.contains(word));
            if let (Some(wordlist), None) = (exact.next(), exact.next()) {
                complete.insert(wordlist.language().to_string());
            }
        }
        if complete.len() == 1 {
            if let Some(language) = complete.into_iter().next() {
                debug!(%language, "detected mnemonic language from exact match");
                return Ok(language);
            }
        }

        let candidates: Vec<String> = possible
            .iter()
            .map(|wordlist| wordlist.language().to_string())
            .collect();
        warn!(?candidates, "mnemonic language ambiguous");
        Err(Bip39Error::LanguageAmbiguous { candidates })
    }
}

/// Language names are lowercase ASCII letters, digits and underscores
/// (e.g. `chinese_simplified`), which also keeps them inside the directory.
fn is_language_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn read_wordlist_file(path: &Path) -> Result<String, Bip39Error> {
    std::fs::read_to_string(path).map_err(|source| Bip39Error::WordlistIo {
        path: path.to_path_buf(),
        source,
    })
}
