use serde::Serialize;

/// One variable and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// The name of the variable.
    pub name:  String,
    /// Its current value.
    pub value: i64,
}

/// Variable values, kept in the order each name was first written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Looks up the value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|b| b.name == name).map(|b| b.value)
    }

    /// Sets `name` to `value`. An existing name keeps its position.
    ///
    /// # Example
    /// ```
    /// use scoobylang::interpreter::evaluator::bindings::Bindings;
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.set("y", 1);
    /// bindings.set("x", 2);
    /// bindings.set("y", 3);
    ///
    /// let pairs: Vec<_> = bindings.iter().map(|b| (b.name.as_str(), b.value)).collect();
    /// assert_eq!(pairs, [("y", 3), ("x", 2)]);
    /// ```
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|b| b.name == name) {
            entry.value = value;
        } else {
            self.entries.push(Binding { name: name.to_string(),
                                        value });
        }
    }

    /// Iterates over the bindings in first-write order.
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
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

impl<'a> IntoIterator for &'a Bindings {
    type IntoIter = std::slice::Iter<'a, Binding>;
    type Item = &'a Binding;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
