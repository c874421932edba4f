use std::sync::OnceLock;

use proptest::prelude::*;

use keyseed_bip39::{MnemonicEngine, WordCount};

fn engine() -> &'static MnemonicEngine {
    static ENGINE: OnceLock<MnemonicEngine> = OnceLock::new();
    ENGINE.get_or_init(|| MnemonicEngine::english().unwrap())
}

fn entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_mnemonic_roundtrip(entropy in entropy()) {
        let engine = engine();
        let mnemonic = engine.to_mnemonic(&entropy).unwrap();
        let words = mnemonic.split(' ').count();
        prop_assert_eq!(WordCount::from_count(words).unwrap().entropy_size().bytes(), entropy.len());
        prop_assert!(engine.check(&mnemonic));
        prop_assert_eq!(engine.to_entropy(&mnemonic).unwrap(), entropy);
    }

    #[test]
    fn flipping_last_word_low_bit_breaks_checksum(entropy in entropy()) {
        // The lowest bit of the last word is always a checksum bit.
        let engine = engine();
        let wordlist = engine.wordlist();
        let mnemonic = engine.to_mnemonic(&entropy).unwrap();
        let mut words: Vec<&str> = mnemonic.split(' ').collect();
        let last = words.len() - 1;
        let index = wordlist.index_of(words[last]).unwrap();
        words[last] = wordlist.word(index ^ 1).unwrap();

        let mutated = words.join(" ");
        prop_assert!(!engine.check(&mutated));
        prop_assert!(engine.to_entropy(&mutated).is_err());
    }

    #[test]
    fn expanding_four_letter_prefixes_restores_mnemonic(entropy in entropy()) {
        // English words are unique in their first four letters.
        let engine = engine();
        let mnemonic = engine.to_mnemonic(&entropy).unwrap();
        let abbreviated: Vec<String> = mnemonic
            .split(' ')
            .map(|w| w.chars().take(4).collect())
            .collect();
        prop_assert_eq!(engine.expand(&abbreviated.join(" ")), mnemonic);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn seed_is_deterministic_and_passphrase_sensitive(
        entropy in entropy(),
        passphrase in "[a-zA-Z0-9 ]{0,16}",
    ) {
        let mnemonic = engine().to_mnemonic(&entropy).unwrap();
        let first = MnemonicEngine::to_seed(&mnemonic, &passphrase);
        let second = MnemonicEngine::to_seed(&mnemonic, &passphrase);
        prop_assert_eq!(first, second);

        let other = format!("{}!", passphrase);
        prop_assert_ne!(first, MnemonicEngine::to_seed(&mnemonic, &other));
    }
}
