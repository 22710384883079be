use thiserror::Error;

use crate::models::{default_schemes, Scheme};

/// Errors raised by store and editor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error("scheme {index} is a built-in and cannot be changed or deleted")]
    BuiltIn { index: usize },
    #[error("row {index} is out of range ({len} rows)")]
    OutOfRange { index: usize, len: usize },
    #[error("no scheme named '{name}'")]
    NotFound { name: String },
    #[error("no scheme is selected")]
    NoSelection,
    #[error("no delete is pending")]
    NoPendingDelete,
}

/// Ordered table of schemes. The first `default_count` rows are built-in
/// presets; the store refuses to mutate or delete them, so the invariant
/// holds no matter what the UI layer does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeStore {
    schemes: Vec<Scheme>,
    default_count: usize,
}

impl SchemeStore {
    /// A store holding only the built-in presets.
    pub fn with_defaults() -> Self {
        let schemes = default_schemes();
        let default_count = schemes.len();
        Self {
            schemes,
            default_count,
        }
    }

    /// A store seeded with the built-ins followed by `user_rows`.
    pub fn with_user_rows(user_rows: Vec<Scheme>) -> Self {
        let mut store = Self::with_defaults();
        store.schemes.extend(user_rows);
        store
    }

    pub fn row_count(&self) -> usize {
        self.schemes.len()
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Whether row `index` is a built-in preset.
    pub fn is_default(&self, index: usize) -> bool {
        index < self.default_count
    }

    pub fn get(&self, index: usize) -> Option<&Scheme> {
        self.schemes.get(index)
    }

    /// Mutable access, refused for built-in rows.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Scheme, SchemeError> {
        if index >= self.schemes.len() {
            return Err(SchemeError::OutOfRange {
                index,
                len: self.schemes.len(),
            });
        }
        if self.is_default(index) {
            return Err(SchemeError::BuiltIn { index });
        }
        Ok(&mut self.schemes[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    /// The user-defined rows past the built-in boundary.
    pub fn user_rows(&self) -> &[Scheme] {
        &self.schemes[self.default_count..]
    }

    /// Index of the first scheme with this name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.schemes.iter().position(|s| s.name == name)
    }

    /// Appends a row with every field at its default value.
    pub fn add_new(&mut self, name: impl Into<String>) -> usize {
        self.schemes.push(Scheme::new(name));
        self.schemes.len() - 1
    }

    /// Appends `scheme` as a user row.
    pub fn add(&mut self, scheme: Scheme) -> usize {
        self.schemes.push(scheme);
        self.schemes.len() - 1
    }

    /// Appends a verbatim copy of row `index`. Copying a built-in is
    /// allowed; the copy lands past the boundary and is editable.
    pub fn duplicate(&mut self, index: usize) -> Result<usize, SchemeError> {
        let scheme = self
            .schemes
            .get(index)
            .cloned()
            .ok_or(SchemeError::OutOfRange {
                index,
                len: self.schemes.len(),
            })?;
        self.schemes.push(scheme);
        Ok(self.schemes.len() - 1)
    }

    /// Removes row `index`, shifting subsequent rows. Built-in rows are
    /// rejected here rather than relying on disabled UI controls.
    pub fn remove(&mut self, index: usize) -> Result<Scheme, SchemeError> {
        if index >= self.schemes.len() {
            return Err(SchemeError::OutOfRange {
                index,
                len: self.schemes.len(),
            });
        }
        if self.is_default(index) {
            return Err(SchemeError::BuiltIn { index });
        }
        Ok(self.schemes.remove(index))
    }
}

impl Default for SchemeStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
