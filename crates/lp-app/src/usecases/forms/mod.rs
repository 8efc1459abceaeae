//! Form submission gating on native constraint validation.

use tracing::debug;

use lp_core::ports::SubmittedForm;
use lp_core::EventDisposition;

pub struct FormValidation {
    validated_class: String,
}

impl FormValidation {
    pub fn new(validated_class: impl Into<String>) -> Self {
        Self {
            validated_class: validated_class.into(),
        }
    }

    /// The form is marked validated whatever the outcome, so styling reacts
    /// on the next interaction.
    pub fn on_submit(&self, form: &dyn SubmittedForm) -> EventDisposition {
        let valid = form.check_validity();
        form.add_class(&self.validated_class);

        if valid {
            EventDisposition::Proceed
        } else {
            debug!("form submission blocked by constraint validation");
            EventDisposition::Cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeForm;

    #[test]
    fn invalid_form_is_cancelled_and_marked() {
        let form = FakeForm::new(false);
        let validation = FormValidation::new("was-validated");

        let disposition = validation.on_submit(&form);

        assert_eq!(disposition, EventDisposition::Cancel);
        assert!(disposition.prevents_default());
        assert!(disposition.stops_propagation());
        assert_eq!(form.classes(), vec!["was-validated".to_string()]);
    }

    #[test]
    fn valid_form_proceeds_and_is_marked() {
        let form = FakeForm::new(true);
        let validation = FormValidation::new("was-validated");

        assert_eq!(validation.on_submit(&form), EventDisposition::Proceed);
        assert_eq!(form.classes(), vec!["was-validated".to_string()]);
    }

    #[test]
    fn repeated_invalid_submissions_never_proceed() {
        let form = FakeForm::new(false);
        let validation = FormValidation::new("was-validated");

        for _ in 0..3 {
            assert_eq!(validation.on_submit(&form), EventDisposition::Cancel);
        }
        assert_eq!(form.classes().len(), 1);
    }
}
