//! Time to phrase selection
//!
//! Minutes are bucketed into five minute windows, each mapped to a fixed
//! word combination. From minute 35 on the phrase counts down to the next
//! hour ("twenty to four"), so the numeral comes from the next-hour table.

use heapless::Vec;

use crate::mask::IlluminationMask;
use crate::time::{InvalidTimeSample, TimeSample};
use crate::word::Word;

/// Longest phrase: "twenty five past <hour>"
pub const MAX_PHRASE_WORDS: usize = 4;

/// Numeral shown for each hour of the day
#[rustfmt::skip]
pub const HOUR_NUMERALS: [Word; 24] = [
    Word::Twelve, Word::One, Word::Two, Word::Three,
    Word::Four, Word::Five, Word::Six, Word::Seven,
    Word::Eight, Word::Nine, Word::Ten, Word::Eleven,
    Word::Twelve, Word::One, Word::Two, Word::Three,
    Word::Four, Word::Five, Word::Six, Word::Seven,
    Word::Eight, Word::Nine, Word::Ten, Word::Eleven,
];

/// Numeral of the following hour, used by "to" phrases
#[rustfmt::skip]
pub const NEXT_HOUR_NUMERALS: [Word; 24] = [
    Word::One, Word::Two, Word::Three, Word::Four,
    Word::Five, Word::Six, Word::Seven, Word::Eight,
    Word::Nine, Word::Ten, Word::Eleven, Word::Twelve,
    Word::One, Word::Two, Word::Three, Word::Four,
    Word::Five, Word::Six, Word::Seven, Word::Eight,
    Word::Nine, Word::Ten, Word::Eleven, Word::Twelve,
];

/// Minute range with its words
///
/// Bounds are exclusive on both ends: `after < minute < before`.
#[derive(Debug, Clone, Copy)]
pub struct MinuteWindow {
    pub after: u8,
    pub before: u8,
    pub words: &'static [Word],
}

impl MinuteWindow {
    pub const fn contains(&self, minute: u8) -> bool {
        minute > self.after && minute < self.before
    }
}

const fn window(after: u8, before: u8, words: &'static [Word]) -> MinuteWindow {
    MinuteWindow {
        after,
        before,
        words,
    }
}

/// Minute windows in clock order; minutes 0-4 fall in none of them
pub const MINUTE_WINDOWS: [MinuteWindow; 11] = [
    window(4, 10, &[Word::FiveMinutes]),
    window(9, 15, &[Word::TenMinutes]),
    window(14, 20, &[Word::Quarter]),
    window(19, 25, &[Word::Twenty]),
    window(24, 30, &[Word::Twenty, Word::FiveMinutes]),
    window(29, 35, &[Word::Half]),
    window(34, 40, &[Word::Twenty, Word::FiveMinutes]),
    window(39, 45, &[Word::Twenty]),
    window(44, 50, &[Word::Quarter]),
    window(49, 55, &[Word::TenMinutes]),
    window(54, 60, &[Word::FiveMinutes]),
];

/// How the numeral relates to the minute words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourRelation {
    /// Minutes 0-4: the bare hour
    OClock,
    /// Minutes 5-34: "... past <hour>"
    Past,
    /// Minutes 35-59: "... to <next hour>"
    To,
}

impl HourRelation {
    pub const fn for_minute(minute: u8) -> Self {
        if minute < 5 {
            Self::OClock
        } else if minute < 35 {
            Self::Past
        } else {
            Self::To
        }
    }

    /// Numeral for `hour` under this relation. `hour` must be below 24.
    const fn numeral(self, hour: u8) -> Word {
        match self {
            Self::OClock | Self::Past => HOUR_NUMERALS[hour as usize],
            Self::To => NEXT_HOUR_NUMERALS[hour as usize],
        }
    }
}

/// Ordered words of one displayed time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<Word, MAX_PHRASE_WORDS>,
}

impl Phrase {
    fn push(&mut self, word: Word) {
        // MAX_PHRASE_WORDS covers the longest window plus connector and numeral
        let pushed = self.words.push(word);
        debug_assert!(pushed.is_ok());
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union of the word masks
    pub fn mask(&self) -> IlluminationMask {
        self.iter().collect()
    }

    /// Numeral word, always the last one
    pub fn numeral(&self) -> Option<Word> {
        self.words.last().copied().filter(|word| word.is_numeral())
    }
}

impl<'a> IntoIterator for &'a Phrase {
    type Item = &'a Word;
    type IntoIter = core::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Window matching `minute`, if any
pub fn minute_window(minute: u8) -> Option<&'static MinuteWindow> {
    MINUTE_WINDOWS.iter().find(|window| window.contains(minute))
}

/// Select the words spelling `hour:minute`
///
/// Order is minute words, then past/to, then the numeral.
pub fn select_words(hour: u8, minute: u8) -> Result<Phrase, InvalidTimeSample> {
    let sample = TimeSample::new(hour, minute)?;
    Ok(select_sample(sample))
}

fn select_sample(sample: TimeSample) -> Phrase {
    let mut phrase = Phrase::default();

    if let Some(window) = minute_window(sample.minute) {
        for &word in window.words {
            phrase.push(word);
        }
    }

    let relation = HourRelation::for_minute(sample.minute);
    match relation {
        HourRelation::OClock => {}
        HourRelation::Past => phrase.push(Word::Past),
        HourRelation::To => phrase.push(Word::To),
    }
    phrase.push(relation.numeral(sample.hour));

    phrase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_are_disjoint() {
        for minute in 0..60 {
            let hits = MINUTE_WINDOWS
                .iter()
                .filter(|window| window.contains(minute))
                .count();
            let expected = usize::from(minute >= 5);
            assert_eq!(hits, expected, "minute {minute}");
        }
    }

    #[test]
    fn test_hour_tables_fold_twelve_hours() {
        for hour in 0..12 {
            assert_eq!(HOUR_NUMERALS[hour], HOUR_NUMERALS[hour + 12]);
            assert_eq!(NEXT_HOUR_NUMERALS[hour], NEXT_HOUR_NUMERALS[hour + 12]);
            assert_eq!(NEXT_HOUR_NUMERALS[hour], HOUR_NUMERALS[(hour + 1) % 24]);
        }
    }
}
