//! Built-in widgets.
//!
//! Each widget is a [`Component`](crate::Component) with a static
//! descriptor. [`register_builtin`] validates all of them at once.

mod day_button;
mod enhanced_textarea;
mod flat_button_label;
mod text_field;

pub use day_button::{CalendarDate, DayButton, DayButtonProps, DayButtonState, DAY_BUTTON};
pub use enhanced_textarea::{EnhancedTextarea, EnhancedTextareaProps, ENHANCED_TEXTAREA};
pub use flat_button_label::{FlatButtonLabel, FlatButtonLabelProps, FLAT_BUTTON_LABEL};
pub use text_field::{TextField, TextFieldProps, TextFieldState, TextFieldStyles, TEXT_FIELD};

use crate::context::DescriptorRegistry;
use crate::error::RegistryError;

/// Registers every built-in widget's descriptor.
pub fn register_builtin(registry: &mut DescriptorRegistry) -> Result<(), RegistryError> {
    registry.register::<DayButton>()?;
    registry.register::<EnhancedTextarea>()?;
    registry.register::<FlatButtonLabel>()?;
    registry.register::<TextField>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptors_register() {
        let mut registry = DescriptorRegistry::new();
        register_builtin(&mut registry).unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.get::<TextField>().is_some());
        assert!(registry.get_by_name("EnhancedTextarea").is_some());
    }
}
