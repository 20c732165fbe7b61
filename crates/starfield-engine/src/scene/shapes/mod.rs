pub(crate) mod points;
pub(crate) mod sprite;
pub(crate) mod triangle;
