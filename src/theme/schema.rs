use std::{
    borrow::Cow,
    fmt,
    ops::Deref,
    sync::LazyLock,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::builtin;
use super::kinds::{InputType, Region};

/// A space-separated list of utility class tokens.
///
/// Token order is preserved for display but carries no semantic weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList(Cow<'static, str>);

impl ClassList {
    /// Wraps a static class string without allocating.
    pub const fn from_static(classes: &'static str) -> Self {
        Self(Cow::Borrowed(classes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The individual class tokens, in authored order.
    pub fn tokens(&self) -> SmallVec<[&str; 8]> {
        self.0.split_whitespace().collect()
    }

    /// Whether `token` appears as a whole token (not a substring match).
    pub fn contains_token(&self, token: &str) -> bool {
        self.0.split_whitespace().any(|t| t == token)
    }

    /// Returns a copy with the first occurrence of `from` replaced by `to`.
    ///
    /// Case-sensitive substring replacement; a plain clone when `from` is
    /// absent. Used to derive variants that differ in a single token, e.g.
    /// swapping a rounding class.
    pub fn replace_first(&self, from: &str, to: &str) -> ClassList {
        if self.0.contains(from) {
            Self(Cow::Owned(self.0.replacen(from, to, 1)))
        } else {
            self.clone()
        }
    }
}

impl From<&'static str> for ClassList {
    fn from(classes: &'static str) -> Self {
        Self(Cow::Borrowed(classes))
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self(Cow::Owned(classes))
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classes for the regions of one input type, keyed by [`Region`].
///
/// Preserves insertion order so serialized tables keep their authored
/// shape. Equality is structural and order-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassGroup(IndexMap<Region, ClassList>);

impl ClassGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used to author templates and targeted
    /// overrides.
    pub fn with(mut self, region: Region, classes: impl Into<ClassList>) -> Self {
        self.insert(region, classes);
        self
    }

    pub fn insert(&mut self, region: Region, classes: impl Into<ClassList>) {
        self.0.insert(region, classes.into());
    }

    pub fn get(&self, region: Region) -> Option<&ClassList> {
        self.0.get(&region)
    }

    pub fn contains(&self, region: Region) -> bool {
        self.0.contains_key(&region)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &ClassList)> {
        self.0.iter().map(|(region, classes)| (*region, classes))
    }
}

/// The class table: cross-cutting defaults plus per-input-type groups.
///
/// The defaults group corresponds to the `all` key of a serialized table
/// and applies to every input type unless the type's own group overrides
/// the same region. Built once, read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
    defaults: ClassGroup,
    entries: IndexMap<InputType, ClassGroup>,
}

impl ClassTable {
    /// The built-in table, constructed on first access.
    pub const DEFAULT: LazyLockClassTable = LazyLockClassTable::new(builtin::default_table);

    pub fn new(defaults: ClassGroup) -> Self {
        Self {
            defaults,
            entries: IndexMap::new(),
        }
    }

    /// Parses a table from its JSON wire shape: a flat object whose `all`
    /// key holds the defaults and whose remaining keys are input type
    /// names. Unknown keys and empty class strings are errors.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ClassTable, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The cross-cutting defaults (the `all` group).
    pub fn defaults(&self) -> &ClassGroup {
        &self.defaults
    }

    pub fn set_defaults(&mut self, defaults: ClassGroup) {
        self.defaults = defaults;
    }

    /// The group authored for `ty`, without defaults applied. `None` when
    /// the table has no entry for the type.
    pub fn classes_for(&self, ty: InputType) -> Option<&ClassGroup> {
        self.entries.get(&ty)
    }

    pub fn insert(&mut self, ty: InputType, group: ClassGroup) {
        self.entries.insert(ty, group);
    }

    /// Overrides a single region of an existing entry, creating the entry
    /// if absent.
    pub fn set_region(&mut self, ty: InputType, region: Region, classes: impl Into<ClassList>) {
        self.entries.entry(ty).or_default().insert(region, classes);
    }

    /// Classes for one region of one input type, the type's own group
    /// winning over the defaults on collision.
    pub fn resolve(&self, ty: InputType, region: Region) -> Option<&ClassList> {
        self.entries
            .get(&ty)
            .and_then(|group| group.get(region))
            .or_else(|| self.defaults.get(region))
    }

    /// The fully merged group for `ty`: defaults first, the type's own
    /// values overriding on collision.
    pub fn resolved(&self, ty: InputType) -> ClassGroup {
        let mut group = self.defaults.clone();
        if let Some(specific) = self.entries.get(&ty) {
            for (region, classes) in specific.iter() {
                group.insert(region, classes.clone());
            }
        }
        group
    }

    /// Whether every [`InputType`] has a non-empty entry.
    pub fn is_total(&self) -> bool {
        InputType::ALL
            .into_iter()
            .all(|ty| self.entries.get(&ty).is_some_and(|group| !group.is_empty()))
    }

    /// Number of per-type entries (the defaults group is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InputType, &ClassGroup)> {
        self.entries.iter().map(|(ty, group)| (*ty, group))
    }
}

/// Lazily constructed [`ClassTable`] usable in `const` position.
pub struct LazyLockClassTable(LazyLock<ClassTable>);

impl LazyLockClassTable {
    #[inline(always)]
    const fn new(f: fn() -> ClassTable) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockClassTable {
    type Target = ClassTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<ClassTable> for LazyLockClassTable {
    fn as_ref(&self) -> &ClassTable {
        &self.0
    }
}
