//! Symbolic tensor shapes.
//!
//! A [`Shape`] is an ordered list of dimensions where any entry may be unknown
//! until runtime. By convention the leading entry is the batch dimension.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<Option<usize>>);

impl Shape {
    pub fn new(dims: Vec<Option<usize>>) -> Self {
        Self(dims)
    }

    /// Prefixes a per-sample shape with a batch entry.
    pub fn with_batch(batch: Option<usize>, dims: &[usize]) -> Self {
        let mut all = Vec::with_capacity(dims.len() + 1);
        all.push(batch);
        all.extend(dims.iter().copied().map(Some));
        Self(all)
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn batch(&self) -> Option<usize> {
        self.0.first().copied().flatten()
    }

    /// Dimensions after the batch entry.
    pub fn sample_dims(&self) -> &[Option<usize>] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn is_fully_defined(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn to_concrete(&self) -> Option<Vec<usize>> {
        self.0.iter().copied().collect()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<usize>>> for Shape {
    fn from(dims: Vec<Option<usize>>) -> Self {
        Self(dims)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, dim) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match dim {
                Some(n) => write!(f, "{}", n)?,
                None => write!(f, "None")?,
            }
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
