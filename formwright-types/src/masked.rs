use crate::Element;

/// The recoverable state behind a masked number/date control.
///
/// Fields with a `displayFormat` show a formatted text value at rest and
/// swap to their native control type with the raw value while focused.
/// Both representations live here so neither is lost across swaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskedValue {
    /// The raw value shown while editing.
    pub edit_value: String,

    /// The formatted value shown at rest.
    pub display_value: String,

    /// The control's native type (`number` or `date`) used while editing.
    pub edit_type: String,
}

impl Element {
    /// Swap a masked control to its native type and raw value.
    ///
    /// No-op for controls without masked state.
    pub fn focus_masked(&mut self) {
        if let Some(masked) = self.masked.clone() {
            self.set_attr("type", masked.edit_type);
            self.set_attr("value", masked.edit_value);
        }
    }

    /// Swap a masked control back to text type and display value.
    ///
    /// No-op for controls without masked state.
    pub fn blur_masked(&mut self) {
        if let Some(masked) = self.masked.clone() {
            self.set_attr("type", "text");
            self.set_attr("value", masked.display_value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_blur_round_trip_preserves_both_values() {
        let mut input = Element::new("input");
        input.set_attr("type", "text");
        input.set_attr("value", "1,234");
        input.masked = Some(MaskedValue {
            edit_value: "1234".into(),
            display_value: "1,234".into(),
            edit_type: "number".into(),
        });

        let at_rest = input.clone();

        input.focus_masked();
        assert_eq!(input.attr("type"), Some("number"));
        assert_eq!(input.attr("value"), Some("1234"));

        input.blur_masked();
        assert_eq!(input, at_rest);
        // The raw value stays recoverable regardless of swap state.
        assert_eq!(input.masked.as_ref().unwrap().edit_value, "1234");
    }
}
