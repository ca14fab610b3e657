use crate::context::ValidationContext;
use crate::error::Result;
use crate::formats::FormatRegistry;

/// Validation hooks shared by every API model.
///
/// Both methods are fallible so that a model can start enforcing constraints without changing its
/// callers. The provided implementations accept everything, which is correct for models whose
/// fields are all unconstrained.
pub trait Validatable {
    /// Structural validation: uses only the model's own field values and the string formats in
    /// `formats`.
    fn validate(&self, _formats: Option<&FormatRegistry>) -> Result<()> {
        Ok(())
    }

    /// Validation that may depend on the caller's context, e.g. cross-references that have to be
    /// looked up elsewhere.
    fn context_validate(
        &self,
        _ctx: &ValidationContext,
        _formats: Option<&FormatRegistry>,
    ) -> Result<()> {
        Ok(())
    }
}
