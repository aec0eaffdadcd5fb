// ============================================================================
// Numeral Converter
// Validated value object for numerals in either notation
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::symbols::{
    class_of, paired_subtractive, value_of, SymbolClass, MAX_VALUE, MIN_VALUE, SYMBOL_TABLE,
};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What construction determined about the input, holding what parsing
/// already computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Notation {
    /// A validated in-range base-10 integer
    Arabic(i32),
    /// A validated Elbonian string, trimmed, sign included
    Elbonian(String),
}

/// A validated numeral in either Arabic or Elbonian notation.
///
/// An instance only ever exists for input that passed full validation:
/// [`Converter::new`] performs every syntax, grammar and range check exactly
/// once, and the queries [`to_arabic`](Converter::to_arabic) and
/// [`to_elbonian`](Converter::to_elbonian) are pure and infallible. The
/// value is immutable after construction and safe to share across threads.
///
/// # Example
/// ```
/// use elbonian_numerals::numeral::Converter;
///
/// let numeral = Converter::new("2202").unwrap();
/// assert_eq!(numeral.to_elbonian(), "MMCCII");
///
/// let numeral = Converter::new("-MMCCII").unwrap();
/// assert_eq!(numeral.to_arabic(), -2202);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Converter {
    notation: Notation,
}

impl Converter {
    /// The numeral denoting zero.
    pub const ZERO: Self = Self {
        notation: Notation::Arabic(0),
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Validate a numeral string in either notation.
    ///
    /// Leading and trailing whitespace is ignored; whitespace anywhere else
    /// is rejected (`" 99 "` is fine, `"9 9"` is not). Input that parses as
    /// a base-10 integer is treated as Arabic and bounds-checked; everything
    /// else is validated against the Elbonian grammar and run-length rules.
    ///
    /// # Errors
    /// - `Malformed` for any syntax or grammar violation in either notation
    /// - `OutOfBounds` for an Arabic integer outside [-9999, 9999]
    pub fn new(input: &str) -> NumeralResult<Self> {
        let trimmed = input.trim();

        if trimmed.chars().any(char::is_whitespace) {
            return Err(NumeralError::Malformed(
                "whitespace inside the numeral".to_string(),
            ));
        }
        if trimmed == "-" {
            return Err(NumeralError::Malformed("lone minus sign".to_string()));
        }

        // All-digit strings that overflow i32 fall through to Elbonian
        // validation and fail on their first character.
        if let Ok(value) = trimmed.parse::<i32>() {
            if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                return Err(NumeralError::OutOfBounds(value));
            }
            tracing::debug!("accepted {:?} as Arabic {}", trimmed, value);
            return Ok(Self {
                notation: Notation::Arabic(value),
            });
        }

        validate_elbonian(trimmed)?;
        tracing::debug!("accepted {:?} as Elbonian", trimmed);
        Ok(Self {
            notation: Notation::Elbonian(trimmed.to_string()),
        })
    }

    /// Construct directly from an integer value, in Arabic notation.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the value is outside [-9999, 9999].
    #[inline]
    pub fn from_value(value: i32) -> NumeralResult<Self> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(NumeralError::OutOfBounds(value));
        }
        Ok(Self {
            notation: Notation::Arabic(value),
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Convert to an Arabic integer.
    ///
    /// Elbonian numerals are summed symbol by symbol, the sum negated for a
    /// leading `-`; Arabic numerals return their parsed value directly.
    pub fn to_arabic(&self) -> i32 {
        match &self.notation {
            Notation::Arabic(value) => *value,
            Notation::Elbonian(text) => {
                let (negative, body) = match text.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, text.as_str()),
                };
                let magnitude: i32 = body.chars().filter_map(value_of).sum();
                if negative {
                    -magnitude
                } else {
                    magnitude
                }
            },
        }
    }

    /// Convert to an Elbonian string.
    ///
    /// Arabic values are decomposed greedily, largest symbol value first,
    /// yielding the minimal form; zero yields exactly `"Z"`. Elbonian input
    /// is returned as stored.
    pub fn to_elbonian(&self) -> String {
        match &self.notation {
            Notation::Arabic(value) => elbonian_of(*value),
            Notation::Elbonian(text) => text.clone(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the stored numeral is in Arabic notation.
    #[inline]
    pub fn is_arabic(&self) -> bool {
        matches!(self.notation, Notation::Arabic(_))
    }

    /// Check if the stored numeral is in Elbonian notation.
    #[inline]
    pub fn is_elbonian(&self) -> bool {
        matches!(self.notation, Notation::Elbonian(_))
    }

    /// Check if the numeral denotes zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.to_arabic() == 0
    }

    /// Check if the numeral denotes a negative value.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.to_arabic() < 0
    }
}

// ============================================================================
// Elbonian Validation
// ============================================================================

/// Full Elbonian validation: alphabet, descending symbol order, run-length
/// caps and the three-in-a-row pairing exclusions, in one forward scan
/// tracking the previous symbol and one run counter per class.
fn validate_elbonian(text: &str) -> NumeralResult<()> {
    if text.is_empty() {
        return Err(NumeralError::Malformed("empty string".to_string()));
    }

    if text.contains('Z') {
        if text != "Z" {
            return Err(NumeralError::Malformed(
                "the zero symbol Z must stand alone".to_string(),
            ));
        }
        return Ok(());
    }

    let body = text.strip_prefix('-').unwrap_or(text);
    if body.is_empty() {
        return Err(NumeralError::Malformed("lone minus sign".to_string()));
    }

    let mut prev: Option<char> = None;
    let mut prev_value = i32::MAX;
    let mut additive_run = 0usize;
    let mut subtractive_run = 0usize;

    for symbol in body.chars() {
        let class = class_of(symbol).ok_or_else(|| {
            NumeralError::Malformed(format!("invalid character '{}'", symbol))
        })?;
        // Values are distinct, so non-increasing means either the same
        // symbol repeating or a strictly lower group: exactly N*M*D*C*L*X*V*I*.
        let value = value_of(symbol).unwrap_or(0);
        if value > prev_value {
            return Err(NumeralError::Malformed(format!(
                "symbol '{}' out of descending order",
                symbol
            )));
        }

        match class {
            SymbolClass::Subtractive => {
                subtractive_run = if prev == Some(symbol) {
                    subtractive_run + 1
                } else {
                    1
                };
                additive_run = 0;
                if subtractive_run > SymbolClass::Subtractive.max_run() {
                    return Err(NumeralError::Malformed(format!(
                        "more than {} consecutive '{}'",
                        SymbolClass::Subtractive.max_run(),
                        symbol
                    )));
                }
            },
            SymbolClass::Additive => {
                additive_run = if prev == Some(symbol) {
                    additive_run + 1
                } else {
                    1
                };
                subtractive_run = 0;
                if additive_run > SymbolClass::Additive.max_run() {
                    return Err(NumeralError::Malformed(format!(
                        "more than {} consecutive '{}'",
                        SymbolClass::Additive.max_run(),
                        symbol
                    )));
                }
                if additive_run == SymbolClass::Additive.max_run() {
                    if let Some(paired) = paired_subtractive(symbol) {
                        if body.contains(paired) {
                            return Err(NumeralError::Malformed(format!(
                                "three '{}' exclude any '{}'",
                                symbol, paired
                            )));
                        }
                    }
                }
            },
            SymbolClass::Zero => {
                return Err(NumeralError::Malformed(
                    "the zero symbol Z must stand alone".to_string(),
                ));
            },
        }

        prev = Some(symbol);
        prev_value = value;
    }

    Ok(())
}

// ============================================================================
// Greedy Decomposition
// ============================================================================

/// Greedy largest-value-first decomposition into the minimal Elbonian form.
fn elbonian_of(value: i32) -> String {
    if value == 0 {
        return "Z".to_string();
    }

    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }

    let mut remaining = value.abs();
    for &(symbol, symbol_value) in SYMBOL_TABLE.iter().filter(|&&(_, v)| v > 0) {
        while remaining >= symbol_value {
            out.push(symbol);
            remaining -= symbol_value;
        }
    }

    out
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Converter {
    /// The zero numeral.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.notation {
            Notation::Arabic(value) => write!(f, "{}", value),
            Notation::Elbonian(text) => f.write_str(text),
        }
    }
}

impl FromStr for Converter {
    type Err = NumeralError;

    /// Parse and validate a numeral in either notation.
    ///
    /// # Examples
    /// - "2202" -> Arabic 2202
    /// - "-MMCCII" -> Elbonian -2202
    /// - "Z" -> Elbonian zero
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
