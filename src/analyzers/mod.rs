pub mod functions;
pub mod symbols;
pub mod type_resolver;
