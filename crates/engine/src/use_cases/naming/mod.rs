//! Element naming use cases.

use std::sync::Arc;

mod create_element;
mod generate_default_name;

pub use create_element::{CreateElement, ElementError};
pub use generate_default_name::{default_name_for, GenerateDefaultName};

/// Container for naming use cases.
pub struct NamingUseCases {
    pub generate_default_name: Arc<GenerateDefaultName>,
    pub create_element: Arc<CreateElement>,
}

impl NamingUseCases {
    pub fn new(
        generate_default_name: Arc<GenerateDefaultName>,
        create_element: Arc<CreateElement>,
    ) -> Self {
        Self {
            generate_default_name,
            create_element,
        }
    }
}
