pub(crate) mod document;
pub(crate) mod listeners;
pub(crate) mod page;
