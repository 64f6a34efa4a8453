use crate::table::Value;

/// One row of a table: an ordered list of named cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    column_names: Vec<String>,
    values: Vec<Value>,
}

impl DataSet {
    #[must_use]
    pub const fn new() -> Self { Self { column_names: Vec::new(), values: Vec::new() } }

    /// Sets `column` to `value`, appending the column if the row does not have
    /// it yet. Column order is insertion order.
    pub fn put<C, V>(&mut self, column: C, value: V)
    where
        C: Into<String>,
        V: Into<Value>,
    {
        let column = column.into();
        let value = value.into();
        match self.column_names.iter().position(|name| *name == column) {
            Some(index) => self.values[index] = value,
            None => {
                self.column_names.push(column);
                self.values.push(value);
            }
        }
    }

    /// Builder form of [`put`](Self::put).
    #[must_use]
    pub fn with<C, V>(mut self, column: C, value: V) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        self.put(column, value);
        self
    }

    #[inline]
    #[must_use]
    pub fn column_names(&self) -> &[String] { &self.column_names }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Value] { &self.values }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.column_names.iter().position(|name| name == column).map(|index| &self.values[index])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl<C, V> FromIterator<(C, V)> for DataSet
where
    C: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut data_set = Self::new();
        for (column, value) in iter {
            data_set.put(column, value);
        }
        data_set
    }
}
