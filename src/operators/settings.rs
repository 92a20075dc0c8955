use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for [`OperatorCheck`](crate::operators::OperatorCheck)

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckSettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///pivot tolerance passed to every operator call
    #[builder(default = "T::epsilon()")]
    pub tol_pivot: T,

    ///maximum 2-norm difference between reference and candidate outputs
    #[builder(default = "(1e-10).as_T()")]
    pub tol_diff: T,
}

impl<T> Default for CheckSettings<T>
where
    T: FloatT,
{
    fn default() -> CheckSettings<T> {
        CheckSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> CheckSettings<T>
where
    T: FloatT,
{
    /// check that all settings values are legal
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tolerance(self.tol_pivot, "tol_pivot")?;
        validate_tolerance(self.tol_diff, "tol_diff")?;
        Ok(())
    }
}

impl From<SettingsError> for CheckSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CheckSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> CheckSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that any tolerances specified are legal
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.tol_pivot {
            validate_tolerance(tol, "tol_pivot")?;
        }
        if let Some(tol) = self.tol_diff {
            validate_tolerance(tol, "tol_diff")?;
        }
        Ok(())
    }
}

// tolerances must be finite and nonnegative
fn validate_tolerance<T: FloatT>(tol: T, field: &'static str) -> Result<(), SettingsError> {
    if !(tol.is_finite() && tol >= T::zero()) {
        return Err(SettingsError::BadFieldValue(field));
    }
    Ok(())
}

#[test]
fn test_settings_default() {
    let settings = CheckSettings::<f64>::default();
    assert!(!settings.verbose);
    assert_eq!(settings.tol_pivot, f64::EPSILON);
    assert_eq!(settings.tol_diff, 1e-10);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    // valid builder settings
    let builder = CheckSettingsBuilder::<f64>::default()
        .verbose(true)
        .tol_diff(1e-8)
        .build();
    assert!(builder.is_ok());

    // negative and non-finite tolerances are rejected
    let builder = CheckSettingsBuilder::<f64>::default()
        .tol_pivot(-1.0)
        .build();
    assert!(builder.is_err());

    let builder = CheckSettingsBuilder::<f64>::default()
        .tol_diff(f64::NAN)
        .build();
    assert!(builder.is_err());

    // direct modification is caught by validate()
    let mut settings = CheckSettings::<f64>::default();
    settings.tol_diff = f64::INFINITY;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("tol_diff"))
    );
}
