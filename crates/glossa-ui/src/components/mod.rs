pub(crate) mod persona;
pub(crate) mod shell;
pub(crate) mod toast;
