pub mod clean;
pub mod docs;
pub mod publish;
pub mod validate;
