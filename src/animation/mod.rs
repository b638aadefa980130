pub(crate) mod channel;
pub(crate) mod ease;
pub(crate) mod sink;
pub(crate) mod tween;
