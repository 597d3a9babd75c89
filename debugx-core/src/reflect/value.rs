//! Field value rendering
//!
//! Each helper turns a field into a [`FieldRead`]: `Ok(Some(text))` for a
//! readable value, `Ok(None)` for an absent one and `Err` when the value
//! cannot be read without blocking or mutating the object.

use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::sync::{Mutex, RwLock, TryLockError};

use thiserror::Error;

/// Result of reading one declared field.
pub type FieldRead = Result<Option<String>, AccessError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("value is mutably borrowed")]
    Borrowed,

    #[error("lock is held by another owner")]
    Locked,

    #[error("lock is poisoned")]
    Poisoned,

    #[error("value is opaque to inspection")]
    Opaque,

    #[error("no declared field at index {index}")]
    NoSuchField { index: usize },
}

impl AccessError {
    pub fn no_such_field(index: usize) -> Self {
        AccessError::NoSuchField { index }
    }
}

impl<T> From<TryLockError<T>> for AccessError {
    fn from(err: TryLockError<T>) -> Self {
        match err {
            TryLockError::WouldBlock => AccessError::Locked,
            TryLockError::Poisoned(_) => AccessError::Poisoned,
        }
    }
}

/// Render through `Debug`
pub fn debug<T: Debug + ?Sized>(value: &T) -> FieldRead {
    Ok(Some(debug_string(value)))
}

/// Render through `Display` (string-like fields)
pub fn display<T: Display + ?Sized>(value: &T) -> FieldRead {
    Ok(Some(display_string(value)))
}

/// Renderer for the value inside a wrapper
pub fn debug_string<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

/// Renderer for a string-like value inside a wrapper
pub fn display_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// `None` is an absent value
pub fn optional<T>(value: &Option<T>, render: impl Fn(&T) -> String) -> FieldRead {
    Ok(value.as_ref().map(render))
}

pub fn ref_cell<T: ?Sized>(cell: &RefCell<T>, render: impl Fn(&T) -> String) -> FieldRead {
    let guard = cell.try_borrow().map_err(|_| AccessError::Borrowed)?;
    Ok(Some(render(&*guard)))
}

pub fn mutex<T: ?Sized>(lock: &Mutex<T>, render: impl Fn(&T) -> String) -> FieldRead {
    let guard = lock.try_lock()?;
    Ok(Some(render(&*guard)))
}

pub fn rw_lock<T: ?Sized>(lock: &RwLock<T>, render: impl Fn(&T) -> String) -> FieldRead {
    let guard = lock.try_read()?;
    Ok(Some(render(&*guard)))
}

/// Field whose value is never exposed
pub fn opaque() -> FieldRead {
    Err(AccessError::Opaque)
}
