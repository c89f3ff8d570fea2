use crate::lead::models::{Lead, LeadError, LeadResponse, SubmitOutcome};

pub const SUBMIT_LABEL: &str = "Отправить заявку";
pub const SUBMITTING_LABEL: &str = "Отправка...";

/// Field values and the in-flight flag of the lead form.
///
/// `submitting` only drives the disabled button; a second `begin_submit`
/// while a request is pending is not refused here.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LeadFormState {
    pub name: String,
    pub phone: String,
    pub submitting: bool,
}

impl LeadFormState {
    /// Validates the fields and, if they pass, marks the form busy and hands
    /// back the lead to send.
    pub fn begin_submit(&mut self) -> Result<Lead, LeadError> {
        let lead = Lead::new(&self.name, &self.phone);
        lead.validate()?;
        self.submitting = true;
        Ok(lead)
    }

    /// Settles a submission. The form is cleared and re-enabled on every path.
    pub fn finish_submit(&mut self, result: Result<LeadResponse, String>) -> SubmitOutcome {
        self.submitting = false;
        self.name.clear();
        self.phone.clear();

        match result {
            Ok(response) => response.into_outcome(),
            Err(message) => SubmitOutcome::Error { message },
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
