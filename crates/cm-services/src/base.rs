//! Base service helpers

use cm_contracts::{Attributes, Contract};
use cm_core::{CoreError, CoreResult};

/// Run `contract` against `input`, turning failures into `CoreError::Validation`
pub fn validate_with<T, C>(contract: &C, input: &T) -> CoreResult<()>
where
    T: Attributes,
    C: Contract<T>,
{
    contract.validate(input).map_err(CoreError::Validation)
}
