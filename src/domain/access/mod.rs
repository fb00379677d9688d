//! Access module - the role/action authorization matrix.
//!
//! Every mutating operation consults this matrix before touching a
//! repository. The matrix gives immediate, offline-evaluable answers so
//! the UI never offers an affordance the user cannot legally use; the
//! store remains the authority of record.

mod matrix;

pub use matrix::{authorize, scope_for, Action, Scope};
