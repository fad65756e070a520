mod assemble_schema;
mod factory_parsing_error;

pub use assemble_schema::assemble_schema;
pub use factory_parsing_error::FactoryParsingError;

#[cfg(test)]
mod tests;
