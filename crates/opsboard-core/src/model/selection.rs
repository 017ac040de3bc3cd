// ── Selection sentinels ──
//
// Typed forms of the backend's "all" and "none" encodings. The wire
// literals live here, next to the category id tables they belong to;
// only the codec should ever touch them.

/// Category-independent "nothing chosen yet" sentinel. Distinct from
/// "all": a widget with `NONE_SELECTED` has not been configured, one
/// with an all-filter deliberately watches everything.
pub const NONE_SELECTED: i32 = -1;

// ── FilterCategory ──────────────────────────────────────────────────

/// A category of selectable ids. Each category fixes the full id list
/// and the wire literal the backend uses for "every id in this
/// category". The two differ per category and must never be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    DeviceTypes,
    EventLevels,
    PhoneTypes,
    CallTypes,
    CallPeakTypes,
}

impl FilterCategory {
    /// Every known id in this category.
    pub fn all_ids(self) -> &'static [i32] {
        match self {
            Self::DeviceTypes => &[1, 2, 3, 4, 5, 6, 7],
            Self::EventLevels => &[1, 2, 3, 4, 5],
            Self::PhoneTypes => &[1, 2, 3, 4],
            Self::CallTypes => &[1, 2, 3, 4, 5],
            Self::CallPeakTypes => &[1, 2, 3],
        }
    }

    /// The wire literal the backend stores for "all ids".
    ///
    /// Most categories use the comma-join of their full id list. Event
    /// levels use the literal `"0"`, which is also a syntactically valid
    /// id -- callers must compare exactly, never by truthiness of a
    /// parsed number.
    pub fn all_wire(self) -> &'static str {
        match self {
            Self::DeviceTypes => "1,2,3,4,5,6,7",
            Self::EventLevels => "0",
            Self::PhoneTypes => "1,2,3,4",
            Self::CallTypes => "1,2,3,4,5",
            Self::CallPeakTypes => "1,2,3",
        }
    }
}

// ── IdFilter ────────────────────────────────────────────────────────

/// Multi-select filter over a category of ids.
///
/// `All` is the category-scoped "every known id" sentinel; which ids
/// that means comes from the field the filter sits in, via
/// [`FilterCategory`]. Order within `Ids` is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilter {
    All,
    Ids(Vec<i32>),
}

impl IdFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The concrete id list this filter evaluates to.
    pub fn effective_ids(&self, category: FilterCategory) -> Vec<i32> {
        match self {
            Self::All => category.all_ids().to_vec(),
            Self::Ids(ids) => ids.clone(),
        }
    }
}

// ── SingleSelect ────────────────────────────────────────────────────

/// Single selection with an explicit "not yet chosen" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSelect {
    NotChosen,
    Id(i32),
}

impl SingleSelect {
    pub fn id(self) -> Option<i32> {
        match self {
            Self::Id(id) => Some(id),
            Self::NotChosen => None,
        }
    }

    /// Numeric form, with [`NONE_SELECTED`] standing in for `NotChosen`.
    pub fn sentinel_value(self) -> i32 {
        match self {
            Self::Id(id) => id,
            Self::NotChosen => NONE_SELECTED,
        }
    }
}
