mod tests {
    use anavi_word_clock::word::{WORD_COUNT, WORD_MASKS};
    use anavi_word_clock::{IlluminationMask, StatusKind, Word, WordParseError};

    #[test]
    fn test_word_names_parse_back() {
        for word in Word::ALL {
            assert_eq!(Word::parse_from_str(word.as_str()), Ok(word));
        }
        assert_eq!(Word::parse_from_str("thirteen"), Err(WordParseError));
    }

    #[test]
    fn test_from_raw_follows_table_order() {
        assert_eq!(Word::from_raw(0), Some(Word::FiveMinutes));
        assert_eq!(Word::from_raw(18), Some(Word::Twelve));
        assert_eq!(Word::from_raw(21), Some(Word::HomeAssistant));
        assert_eq!(Word::from_raw(22), None);
        assert_eq!(Word::ALL.len(), WORD_COUNT);
    }

    #[test]
    fn test_every_word_lights_something() {
        for (word, mask) in Word::ALL.iter().zip(WORD_MASKS) {
            assert_eq!(word.mask(), mask);
            assert_ne!(mask, 0, "{word:?}");
        }
    }

    #[test]
    fn test_word_groups() {
        assert!(Word::NUMERALS.iter().all(|word| word.is_numeral()));
        assert_eq!(Word::ALL.iter().filter(|word| word.is_qualifier()).count(), 7);
        assert!(!Word::Brand.is_numeral());
        assert!(!Word::Wifi.is_qualifier());
    }

    // Numerals live in the lower half of the grid, minute words in the
    // upper half, so a phrase never lights a cell twice.
    #[test]
    fn test_numerals_and_qualifiers_are_separate_regions() {
        let numerals: IlluminationMask = Word::NUMERALS.into_iter().collect();
        let qualifiers: IlluminationMask =
            Word::ALL.into_iter().filter(|word| word.is_qualifier()).collect();
        assert_eq!(numerals.bits() & qualifiers.bits(), 0);
        assert!(numerals.lit_cells().all(|cell| cell >= 32));
    }

    #[test]
    fn test_status_words() {
        assert_eq!(StatusKind::Wifi.word(), Word::Wifi);
        assert_eq!(StatusKind::HomeAssistant.as_str(), "home_assistant");
        assert_eq!(StatusKind::parse_from_str("wifi"), Ok(StatusKind::Wifi));
        assert_eq!(StatusKind::parse_from_str("brand"), Err(WordParseError));
        assert_eq!(Word::Brand.mask(), 0x1100_2000_0000_2004);
    }
}
