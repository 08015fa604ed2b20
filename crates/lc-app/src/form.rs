//! State of the single converter screen.
//!
//! The form owns what the user has typed and selected plus the last result.
//! Nothing is shown until the first conversion is requested.

use lc_core::{ConversionRequest, ConversionResult, LengthUnit};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterForm {
    input: String,
    from: LengthUnit,
    to: LengthUnit,
    result: Option<ConversionResult>,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> LengthUnit {
        self.from
    }

    pub fn to_unit(&self) -> LengthUnit {
        self.to
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn select_from(&mut self, unit: LengthUnit) {
        self.from = unit;
    }

    pub fn select_to(&mut self, unit: LengthUnit) {
        self.to = unit;
    }

    pub fn swap_units(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
    }

    /// Back to the initial screen: empty input, metre to metre, no result.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.input.clone(), self.from, self.to)
    }

    /// Run the conversion for the current input and selections.
    ///
    /// Invalid input replaces any previous result with
    /// [`ConversionResult::InvalidInput`] so the user sees the message.
    pub fn submit(&mut self) -> &ConversionResult {
        let result = self.request().execute();
        debug!(input = %self.input, from = %self.from, to = %self.to, %result, "conversion");
        self.result.insert(result)
    }

    /// Line to render under the button, if any.
    pub fn display_line(&self) -> Option<String> {
        self.result.as_ref().map(|r| format!("Result: {r}"))
    }
}
