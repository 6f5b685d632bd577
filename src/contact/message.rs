use super::validate::ValidationError;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will respond within 24-48 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    ValidationError,
}

impl ResultKind {
    pub fn class(&self) -> &'static str {
        match self {
            ResultKind::Success => "form-message-success",
            ResultKind::ValidationError => "form-message-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub kind: ResultKind,
    pub message: String,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            kind: ResultKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl From<ValidationError> for SubmissionResult {
    fn from(err: ValidationError) -> Self {
        Self {
            kind: ResultKind::ValidationError,
            message: err.to_string(),
        }
    }
}

/// The single visible result. Each `show` hands out a token; an expiry only
/// clears the slot if it still holds the result that token was issued for.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<(u64, SubmissionResult)>,
    issued: u64,
}

impl MessageSlot {
    pub fn show(&mut self, result: SubmissionResult) -> u64 {
        self.issued += 1;
        self.current = Some((self.issued, result));
        self.issued
    }

    /// Returns true if the slot was cleared.
    pub fn expire(&mut self, token: u64) -> bool {
        match &self.current {
            Some((shown, _)) if *shown == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&SubmissionResult> {
        self.current.as_ref().map(|(_, result)| result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_one_result_at_a_time() {
        let mut slot = MessageSlot::default();
        slot.show(ValidationError::MissingFields.into());
        slot.show(SubmissionResult::success());
        assert_eq!(slot.current(), Some(&SubmissionResult::success()));
    }

    #[test]
    fn expiry_clears_its_own_result() {
        let mut slot = MessageSlot::default();
        let token = slot.show(SubmissionResult::success());
        assert!(slot.expire(token));
        assert_eq!(slot.current(), None);
        assert!(!slot.expire(token));
    }

    #[test]
    fn stale_expiry_leaves_newer_result() {
        let mut slot = MessageSlot::default();
        let first = slot.show(ValidationError::InvalidEmail.into());
        let second = slot.show(SubmissionResult::success());
        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|r| r.kind), Some(ResultKind::Success));
        assert!(slot.expire(second));
    }

    #[test]
    fn validation_errors_carry_their_message() {
        let result = SubmissionResult::from(ValidationError::InvalidEmail);
        assert_eq!(result.kind, ResultKind::ValidationError);
        assert_eq!(result.message, "Please enter a valid email address.");
        assert_eq!(result.kind.class(), "form-message-error");
    }
}
