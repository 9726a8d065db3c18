// Turkish language data: phonology tables and lenition exceptions

pub mod constants;
pub mod exceptions;
