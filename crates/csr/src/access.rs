//! Access capability markers for register and field handles.
//!
//! A handle is parameterized by one of the three marker types below. The
//! sealed [`Readable`] and [`Writable`] traits gate which methods exist on
//! the handle, so using a handle beyond its capability fails to compile.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ReadOnly {}
    impl Sealed for super::WriteOnly {}
    impl Sealed for super::ReadWrite {}
}

/// Marker trait for access modes that allow reading.
pub trait Readable: sealed::Sealed {}

/// Marker trait for access modes that allow writing.
pub trait Writable: sealed::Sealed {}

/// Access marker for handles that can only read their register.
pub enum ReadOnly {}

/// Access marker for handles that can only write their register.
pub enum WriteOnly {}

/// Access marker for handles with full access to their register.
pub enum ReadWrite {}

impl Readable for ReadOnly {}
impl Readable for ReadWrite {}

impl Writable for WriteOnly {}
impl Writable for ReadWrite {}
