pub(crate) mod checkbox;
pub(crate) mod toast;
