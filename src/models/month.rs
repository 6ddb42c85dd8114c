use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Calendar month with the fixed Spanish labels used by the source CSV.
///
/// Ordering is calendar order (Enero < Febrero < ... < Diciembre), never
/// lexical. Derived `Ord` relies on declaration order, so the variants
/// must stay in calendar sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Enero,
        Month::Febrero,
        Month::Marzo,
        Month::Abril,
        Month::Mayo,
        Month::Junio,
        Month::Julio,
        Month::Agosto,
        Month::Septiembre,
        Month::Octubre,
        Month::Noviembre,
        Month::Diciembre,
    ];

    /// CSV label for this month
    pub fn label(&self) -> &'static str {
        match self {
            Month::Enero => "Enero",
            Month::Febrero => "Febrero",
            Month::Marzo => "Marzo",
            Month::Abril => "Abril",
            Month::Mayo => "Mayo",
            Month::Junio => "Junio",
            Month::Julio => "Julio",
            Month::Agosto => "Agosto",
            Month::Septiembre => "Septiembre",
            Month::Octubre => "Octubre",
            Month::Noviembre => "Noviembre",
            Month::Diciembre => "Diciembre",
        }
    }

    /// Zero-based position in the calendar sequence (Enero = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse an exact CSV label. Labels outside the fixed vocabulary are
    /// not coerced; the loader rejects the whole file on a miss.
    pub fn from_label(label: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.label() == label)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::from_label(s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown month label: '{}'", s)))
    }
}
