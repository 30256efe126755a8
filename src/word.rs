//! Word vocabulary of the 8x8 grid
//!
//! Every word is a fixed set of cells. Cell `i` (row-major, top-left first)
//! is stored in bit `63 - i` of the word mask, so the hex literals below read
//! like the grid itself: the first byte is the top row.

const WORD_NAME_FIVE_MINUTES: &str = "five_minutes";
const WORD_NAME_TEN_MINUTES: &str = "ten_minutes";
const WORD_NAME_QUARTER: &str = "quarter";
const WORD_NAME_TWENTY: &str = "twenty";
const WORD_NAME_HALF: &str = "half";
const WORD_NAME_PAST: &str = "past";
const WORD_NAME_TO: &str = "to";
const WORD_NAME_ONE: &str = "one";
const WORD_NAME_TWO: &str = "two";
const WORD_NAME_THREE: &str = "three";
const WORD_NAME_FOUR: &str = "four";
const WORD_NAME_FIVE: &str = "five";
const WORD_NAME_SIX: &str = "six";
const WORD_NAME_SEVEN: &str = "seven";
const WORD_NAME_EIGHT: &str = "eight";
const WORD_NAME_NINE: &str = "nine";
const WORD_NAME_TEN: &str = "ten";
const WORD_NAME_ELEVEN: &str = "eleven";
const WORD_NAME_TWELVE: &str = "twelve";
const WORD_NAME_BRAND: &str = "brand";
const WORD_NAME_WIFI: &str = "wifi";
const WORD_NAME_HOME_ASSISTANT: &str = "home_assistant";

/// Number of words in the vocabulary
pub const WORD_COUNT: usize = 22;

/// Cell masks indexed by `Word as usize`
#[rustfmt::skip]
pub const WORD_MASKS: [u64; WORD_COUNT] = [
    0x0000_0F00_0000_0000, // five (minutes)
    0x1A00_0000_0000_0000, // ten (minutes)
    0x01FE_0000_0000_0000, // quarter
    0x7E00_0000_0000_0000, // twenty
    0x0000_F000_0000_0000, // half
    0x0000_0078_0000_0000, // past
    0x0000_000C_0000_0000, // to
    0x0000_0000_0000_0043, // one
    0x0000_0000_0000_0340, // two
    0x0000_0000_001F_0000, // three
    0x0000_0000_0000_00F0, // four
    0x0000_0000_0F00_0000, // five
    0x0000_0000_00E0_0000, // six
    0x0000_0000_0080_F000, // seven
    0x0000_0000_F800_0000, // eight
    0x0000_0000_0000_000F, // nine
    0x0000_0000_8001_8000, // ten
    0x0000_0000_0000_FC00, // eleven
    0x0000_0000_0000_6F00, // twelve
    0x1100_2000_0000_2004, // brand
    0x0400_0200_0300_0000, // wifi
    0x0000_3000_0000_0000, // home assistant
];

/// A renderable word of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Word {
    FiveMinutes = 0,
    TenMinutes,
    Quarter,
    Twenty,
    Half,
    Past,
    To,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Brand,
    Wifi,
    HomeAssistant,
}

/// Error returned when a word or status name is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParseError;

impl Word {
    /// Every word, in mask table order
    pub const ALL: [Word; WORD_COUNT] = [
        Self::FiveMinutes,
        Self::TenMinutes,
        Self::Quarter,
        Self::Twenty,
        Self::Half,
        Self::Past,
        Self::To,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Twelve,
        Self::Brand,
        Self::Wifi,
        Self::HomeAssistant,
    ];

    /// Hour numerals, one to twelve
    pub const NUMERALS: [Word; 12] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Twelve,
    ];

    /// Cells lit by this word
    pub const fn mask(self) -> u64 {
        WORD_MASKS[self as usize]
    }

    pub const fn is_numeral(self) -> bool {
        matches!(
            self,
            Self::One
                | Self::Two
                | Self::Three
                | Self::Four
                | Self::Five
                | Self::Six
                | Self::Seven
                | Self::Eight
                | Self::Nine
                | Self::Ten
                | Self::Eleven
                | Self::Twelve
        )
    }

    /// Minute words and the past/to connectors
    pub const fn is_qualifier(self) -> bool {
        matches!(
            self,
            Self::FiveMinutes
                | Self::TenMinutes
                | Self::Quarter
                | Self::Twenty
                | Self::Half
                | Self::Past
                | Self::To
        )
    }

    /// Word at position `value` of [`Word::ALL`]
    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => WORD_NAME_FIVE_MINUTES,
            Self::TenMinutes => WORD_NAME_TEN_MINUTES,
            Self::Quarter => WORD_NAME_QUARTER,
            Self::Twenty => WORD_NAME_TWENTY,
            Self::Half => WORD_NAME_HALF,
            Self::Past => WORD_NAME_PAST,
            Self::To => WORD_NAME_TO,
            Self::One => WORD_NAME_ONE,
            Self::Two => WORD_NAME_TWO,
            Self::Three => WORD_NAME_THREE,
            Self::Four => WORD_NAME_FOUR,
            Self::Five => WORD_NAME_FIVE,
            Self::Six => WORD_NAME_SIX,
            Self::Seven => WORD_NAME_SEVEN,
            Self::Eight => WORD_NAME_EIGHT,
            Self::Nine => WORD_NAME_NINE,
            Self::Ten => WORD_NAME_TEN,
            Self::Eleven => WORD_NAME_ELEVEN,
            Self::Twelve => WORD_NAME_TWELVE,
            Self::Brand => WORD_NAME_BRAND,
            Self::Wifi => WORD_NAME_WIFI,
            Self::HomeAssistant => WORD_NAME_HOME_ASSISTANT,
        }
    }

    /// Look a word up by its [`Word::as_str`] name
    pub fn parse_from_str(s: &str) -> Result<Self, WordParseError> {
        Self::ALL
            .iter()
            .copied()
            .find(|word| word.as_str() == s)
            .ok_or(WordParseError)
    }
}

/// Connectivity indicators requested by the network side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Wifi,
    HomeAssistant,
}

impl StatusKind {
    /// Word lit while the indicator is shown
    pub const fn word(self) -> Word {
        match self {
            Self::Wifi => Word::Wifi,
            Self::HomeAssistant => Word::HomeAssistant,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.word().as_str()
    }

    pub fn parse_from_str(s: &str) -> Result<Self, WordParseError> {
        match s {
            WORD_NAME_WIFI => Ok(Self::Wifi),
            WORD_NAME_HOME_ASSISTANT => Ok(Self::HomeAssistant),
            _ => Err(WordParseError),
        }
    }
}
