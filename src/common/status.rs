use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// What a form shows the visitor about its latest submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub state: FormState,
    pub message: String,
}

impl FormStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            state: FormState::Loading,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            state: FormState::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            state: FormState::Error,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == FormState::Loading
    }
}
