//! Submission state shared by the form views

/// Outcome of the last submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FlowStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert!(FlowStatus::Submitting.is_submitting());
        assert_eq!(FlowStatus::Failed("nope".into()).error(), Some("nope"));
        assert_eq!(FlowStatus::Failed("nope".into()).success(), None);
        assert_eq!(FlowStatus::Succeeded("done".into()).success(), Some("done"));
        assert!(!FlowStatus::Idle.is_submitting());
    }
}
