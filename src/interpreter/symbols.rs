use std::fmt;

use serde::Serialize;
use tracing::debug;

/// The declared type of a variable. The language has a single one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    #[default]
    Int,
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
        }
    }
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// The name of the variable.
    pub name: String,
    /// The type it was declared with.
    #[serde(rename = "type")]
    pub ty:   VarType,
    /// The line of its first declaration.
    pub line: usize,
}

/// A flat, single-scope registry of declared names.
///
/// Entries keep declaration order. A name is registered once; declaring it
/// again leaves the first entry untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers `name` as an `int` declared on `line`.
    ///
    /// Returns `true` if the name was added, `false` if it was already
    /// present, in which case the table is unchanged.
    ///
    /// # Example
    /// ```
    /// use scoobylang::interpreter::symbols::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// assert!(table.declare("x", 1));
    /// assert!(!table.declare("x", 4));
    /// assert_eq!(table.get("x").map(|s| s.line), Some(1));
    /// ```
    pub fn declare(&mut self, name: &str, line: usize) -> bool {
        if self.contains(name) {
            return false;
        }
        debug!(name, line, "declaring symbol");
        self.entries.push(Symbol { name: name.to_string(),
                                   ty: VarType::Int,
                                   line });
        true
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up the entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type IntoIter = std::slice::Iter<'a, Symbol>;
    type Item = &'a Symbol;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
