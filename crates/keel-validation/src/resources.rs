use keel_model::Resources;

use crate::error::{ValidationError, ValidationResult};

// Scalar resource quantities carry at most 3 fractional digits, so scaling by
// 1000 turns the total into an exact count of milli-units.
const MILLIS_PER_UNIT: i64 = 1000;

/// Validate that the total `gpus` quantity is a whole, non-negative number.
///
/// GPU devices are allocated whole, so the summed quantity must be a
/// non-negative integer. The check scales the scalar by 1000 and truncates,
/// which detects any fractional remainder at the precision the system uses
/// without arbitrary-precision arithmetic.
pub fn validate_gpus(resources: &Resources) -> ValidationResult {
    let gpus = resources.gpus().unwrap_or(0.0);

    let millis = (gpus * MILLIS_PER_UNIT as f64) as i64;
    if gpus < 0.0 || millis % MILLIS_PER_UNIT != 0 {
        return Err(ValidationError::new(
            "the 'gpus' resource must be an unsigned integer",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_model::{Resource, ResourceKind};

    #[test]
    fn missing_gpus_accepted() {
        assert!(validate_gpus(&Resources::new()).is_ok());

        let resources = Resources(vec![Resource::scalar("cpus", 2.5)]);
        assert!(validate_gpus(&resources).is_ok());
    }

    #[test]
    fn whole_gpu_counts_accepted() {
        for value in [0.0, 1.0, 3.0, 128.0] {
            let resources = Resources(vec![Resource::scalar("gpus", value)]);
            assert!(validate_gpus(&resources).is_ok(), "{value}");
        }
    }

    #[test]
    fn fractional_gpus_rejected() {
        for value in [2.5, 0.001, 0.999, 1.25] {
            let resources = Resources(vec![Resource::scalar("gpus", value)]);
            let error = validate_gpus(&resources).unwrap_err();
            assert!(error.message().contains("must be an unsigned integer"), "{value}");
        }
    }

    #[test]
    fn split_entries_are_summed_before_the_check() {
        // Two fractional entries adding up to a whole count are fine.
        let resources = Resources(vec![
            Resource::scalar("gpus", 1.5),
            Resource::scalar("gpus", 1.5),
        ]);
        assert!(validate_gpus(&resources).is_ok());

        let resources = Resources(vec![
            Resource::scalar("gpus", 0.5),
            Resource::scalar("gpus", 0.25),
        ]);
        assert!(validate_gpus(&resources).is_err());
    }

    #[test]
    fn negative_gpus_rejected() {
        let resources = Resources(vec![Resource::scalar("gpus", -1.0)]);
        assert!(validate_gpus(&resources).is_err());
    }

    #[test]
    fn non_scalar_gpus_entries_ignored() {
        let resources = Resources(vec![Resource {
            name: "gpus".to_string(),
            kind: ResourceKind::Ranges,
            value: 2.5,
        }]);

        assert!(validate_gpus(&resources).is_ok());
    }
}
