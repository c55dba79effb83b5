//! Update composition - turns a sparse patch into an ordered mutation list.
//!
//! An [`UpdatePlan`] is what a repository needs to run a parameterized
//! `SET ... WHERE id = ...` of variable shape:
//!
//! - every user-supplied field becomes a [`Mutation::Set`] with the next
//!   positional ordinal, starting at 1, in the composer's fixed field order;
//! - a [`Mutation::TouchUpdatedAt`] always closes the list;
//! - the row identifier is the last positional parameter.
//!
//! Rendering the placeholders into a concrete SQL dialect is left to the
//! repository implementation.

use std::fmt;

use crate::error::EmptyUpdate;

pub mod author;
pub mod post;

pub use author::AuthorColumn;
pub use post::PostColumn;

/// Column refreshed by [`Mutation::TouchUpdatedAt`].
pub const UPDATED_AT: &str = "updated_at";

/// A patchable column of some table.
pub trait Column: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Column name as stored.
    fn name(&self) -> &'static str;
}

/// One entry of the mutation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<C> {
    /// Assign `value` to `column`, bound at positional parameter `ordinal`.
    Set {
        column: C,
        value: String,
        ordinal: usize,
    },
    /// Refresh the row's update timestamp.
    TouchUpdatedAt,
}

/// A positional parameter of the update statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Id(i64),
}

/// Ordered, parameterized update of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan<C> {
    id: i64,
    mutations: Vec<Mutation<C>>,
}

impl<C: Column> UpdatePlan<C> {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn mutations(&self) -> &[Mutation<C>] {
        &self.mutations
    }

    /// The user-supplied assignments as `(column, value, ordinal)`.
    pub fn assignments(&self) -> impl Iterator<Item = (C, &str, usize)> + '_ {
        self.mutations.iter().filter_map(|m| match m {
            Mutation::Set {
                column,
                value,
                ordinal,
            } => Some((*column, value.as_str(), *ordinal)),
            Mutation::TouchUpdatedAt => None,
        })
    }

    pub fn user_field_count(&self) -> usize {
        self.assignments().count()
    }

    /// Ordinal of the row identifier; always one past the last assignment.
    pub fn id_ordinal(&self) -> usize {
        self.user_field_count() + 1
    }

    pub fn value_of(&self, column: C) -> Option<&str> {
        self.assignments()
            .find(|(c, _, _)| *c == column)
            .map(|(_, value, _)| value)
    }

    /// All positional parameters in ordinal order, identifier last.
    pub fn params(&self) -> Vec<Param> {
        self.assignments()
            .map(|(_, value, _)| Param::Text(value.to_string()))
            .chain(std::iter::once(Param::Id(self.id)))
            .collect()
    }
}

/// Accumulates assignments while handing out consecutive ordinals.
pub(crate) struct PlanBuilder<C> {
    id: i64,
    mutations: Vec<Mutation<C>>,
    next_ordinal: usize,
}

impl<C: Column> PlanBuilder<C> {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            mutations: Vec::new(),
            next_ordinal: 1,
        }
    }

    /// Append `column = value` when the field is present.
    pub(crate) fn set(mut self, column: C, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.mutations.push(Mutation::Set {
                column,
                value: value.to_string(),
                ordinal: self.next_ordinal,
            });
            self.next_ordinal += 1;
        }
        self
    }

    pub(crate) fn finish(mut self) -> Result<UpdatePlan<C>, EmptyUpdate> {
        if self.mutations.is_empty() {
            return Err(EmptyUpdate);
        }
        self.mutations.push(Mutation::TouchUpdatedAt);
        Ok(UpdatePlan {
            id: self.id,
            mutations: self.mutations,
        })
    }
}
