use serde::{Deserialize, Serialize};

/// Which blank edges of an axis to drop.
///
/// The persisted settings format stores this as a 2-bit value: bit 0
/// enables leading removal, bit 1 enables trailing removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipBlanks {
    #[default]
    None,
    Leading,
    Trailing,
    Both,
}

impl SkipBlanks {
    /// Decode the 2-bit settings encoding; values above 3 are rejected
    #[must_use]
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(SkipBlanks::None),
            1 => Some(SkipBlanks::Leading),
            2 => Some(SkipBlanks::Trailing),
            3 => Some(SkipBlanks::Both),
            _ => None,
        }
    }

    /// Check if leading blanks are removed
    #[must_use]
    pub fn leading(self) -> bool {
        matches!(self, SkipBlanks::Leading | SkipBlanks::Both)
    }

    /// Check if trailing blanks are removed
    #[must_use]
    pub fn trailing(self) -> bool {
        matches!(self, SkipBlanks::Trailing | SkipBlanks::Both)
    }
}

/// Comparison operator for the inclusion predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    AtMost,
    Exactly,
    AtLeast,
}

/// A size predicate: an operator paired with an integer threshold.
///
/// Replaces the stored comparison functions of the settings layer with a
/// tagged value plus a pure evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub op: CompareOp,
    pub value: usize,
}

impl Comparison {
    /// `n <= value`
    #[must_use]
    pub fn at_most(value: usize) -> Self {
        Comparison {
            op: CompareOp::AtMost,
            value,
        }
    }

    /// `n == value`
    #[must_use]
    pub fn exactly(value: usize) -> Self {
        Comparison {
            op: CompareOp::Exactly,
            value,
        }
    }

    /// `n >= value`
    #[must_use]
    pub fn at_least(value: usize) -> Self {
        Comparison {
            op: CompareOp::AtLeast,
            value,
        }
    }

    /// Decode the settings encoding: 0 is at-most, 1 is exactly, anything
    /// else is at-least
    #[must_use]
    pub fn from_method(method: u8, value: usize) -> Self {
        match method {
            0 => Comparison::at_most(value),
            1 => Comparison::exactly(value),
            _ => Comparison::at_least(value),
        }
    }

    /// Evaluate the predicate against a size
    #[must_use]
    pub fn holds(&self, n: usize) -> bool {
        match self.op {
            CompareOp::AtMost => n <= self.value,
            CompareOp::Exactly => n == self.value,
            CompareOp::AtLeast => n >= self.value,
        }
    }
}

/// How output sheets are named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingMethod {
    /// `"{written + 1}."` from the running sheet count
    #[default]
    Sequential,
    /// `"{page + 1}. Table"` from the 1-based page ordinal
    Positional,
}

impl NamingMethod {
    /// Decode the settings encoding: 0 is sequential, anything else is
    /// positional
    #[must_use]
    pub fn from_method(method: u8) -> Self {
        if method == 0 {
            NamingMethod::Sequential
        } else {
            NamingMethod::Positional
        }
    }
}

/// Options controlling one extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Resize output columns to fit content after writing
    pub autosize_columns: bool,
    /// Blank-edge removal policy for rows
    pub row_skip: SkipBlanks,
    /// Blank-edge removal policy for columns
    pub column_skip: SkipBlanks,
    /// Inclusion predicate on the effective row count
    pub row_filter: Comparison,
    /// Inclusion predicate on the effective column count
    pub column_filter: Comparison,
    /// Sheet naming strategy
    pub naming: NamingMethod,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            autosize_columns: false,
            row_skip: SkipBlanks::None,
            column_skip: SkipBlanks::None,
            row_filter: Comparison::at_least(1),
            column_filter: Comparison::at_least(1),
            naming: NamingMethod::Sequential,
        }
    }
}
