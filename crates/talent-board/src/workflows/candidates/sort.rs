use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Candidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

/// A record type that can be ordered by one of its named fields.
pub trait SortKey {
    type Field: Copy;

    /// Native ascending ordering of `self` against `other` on `field`.
    fn cmp_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Compares two records on `field`, reversing the result for descending order.
pub fn compare<T: SortKey>(a: &T, b: &T, field: T::Field, direction: SortDirection) -> Ordering {
    direction.apply(a.cmp_field(b, field))
}

/// Stable in-place sort; records with equal field values keep their relative order.
pub fn sort_by_field<T: SortKey>(items: &mut [T], field: T::Field, direction: SortDirection) {
    items.sort_by(|a, b| compare(a, b, field, direction));
}

/// Sortable candidate columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    #[default]
    Name,
    Position,
    Date,
    Status,
    Score,
}

impl SortField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Id,
            Self::Name,
            Self::Position,
            Self::Date,
            Self::Status,
            Self::Score,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Position => "position",
            Self::Date => "date",
            Self::Status => "status",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSortKey(trimmed.to_string()))
    }
}

impl SortKey for Candidate {
    type Field = SortField;

    fn cmp_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::Name => self.name.cmp(&other.name),
            SortField::Position => self.position.cmp(&other.position),
            SortField::Date => self.date.cmp(&other.date),
            // Status orders by its label text, so Pending < Rejected < Selected.
            SortField::Status => self.status.label().cmp(other.status.label()),
            SortField::Score => self.score.cmp(&other.score),
        }
    }
}

/// Column and direction currently applied to a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F = SortField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click semantics: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggle(self, field: F) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    /// Direction indicator for a column header, if that column is active.
    pub fn indicator(self, field: F) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Stable sort of borrowed candidates.
pub fn sort_candidates(candidates: &mut [&Candidate], state: SortState) {
    candidates.sort_by(|a, b| compare(*a, *b, state.field, state.direction));
}
