pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod parallax;
pub(crate) mod size;
pub(crate) mod style;
