//! Checking of vendor call results.

use crate::utils::config::{FailurePolicy, VENDOR_FAILURE_EXIT_CODE};
use crate::utils::error::VendorError;
use crate::vendor::VendorStatus;
use log::error;

/// Turn a vendor status into a `Result`, applying the failure policy.
///
/// A failing call is always logged with its name and status code. Under
/// `FailurePolicy::Abort` the process exits right after; under
/// `FailurePolicy::Propagate` the error is returned.
pub fn check_vendor_call(
    operation: &'static str,
    status: VendorStatus,
    policy: FailurePolicy,
) -> Result<(), VendorError> {
    if status.is_success() {
        return Ok(());
    }

    let err = VendorError { operation, status };
    error!("{}", err);

    match policy {
        FailurePolicy::Abort => std::process::exit(VENDOR_FAILURE_EXIT_CODE),
        FailurePolicy::Propagate => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes() {
        assert!(check_vendor_call("xptiActivityEnable", VendorStatus::Success, FailurePolicy::Abort).is_ok());
    }

    #[test]
    fn test_failure_propagates() {
        let err = check_vendor_call(
            "xptiStopTracing",
            VendorStatus::Other(4),
            FailurePolicy::Propagate,
        )
        .unwrap_err();

        assert_eq!(err.operation, "xptiStopTracing");
        assert_eq!(err.status, VendorStatus::Other(4));
    }

    #[test]
    fn test_invalid_data_is_a_failure_outside_the_drain() {
        assert!(check_vendor_call(
            "xptiActivityFlushAll",
            VendorStatus::InvalidData,
            FailurePolicy::Propagate
        )
        .is_err());
    }
}
