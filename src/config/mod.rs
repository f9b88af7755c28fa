mod core;
mod loader;
mod weights;

pub use core::ComplexLintConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use weights::StateSpaceWeights;
