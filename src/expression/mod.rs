pub(crate) mod fingerprint;
pub(crate) mod node;
pub(crate) mod operand;
pub(crate) mod operator;
pub(crate) mod serialize;
pub(crate) mod validate;
