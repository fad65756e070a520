mod classified_config;
mod config_kind;
#[allow(clippy::module_inception)]
mod type_config;
mod type_predicates;

pub use classified_config::ClassifiedConfig;
pub use config_kind::ConfigKind;
pub use type_config::TypeConfig;
pub use type_predicates::declares_operations;
pub use type_predicates::implements_named_sdl;
pub use type_predicates::is_interface_config;
pub use type_predicates::is_scalar_config;
pub use type_predicates::is_type_config;
pub use type_predicates::is_union_config;
pub use type_predicates::represents_type;

#[cfg(test)]
mod tests;
