// Focus management for the forms

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
    LoginButton,
    SignUpButton,
}

impl LoginFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::LoginButton,
            Self::LoginButton => Self::SignUpButton,
            Self::SignUpButton => Self::Username,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Username => Self::SignUpButton,
            Self::Password => Self::Username,
            Self::LoginButton => Self::Password,
            Self::SignUpButton => Self::LoginButton,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    #[default]
    Username,
    Password,
    ConfirmPassword,
    RegisterButton,
}

impl RegisterFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::ConfirmPassword,
            Self::ConfirmPassword => Self::RegisterButton,
            Self::RegisterButton => Self::Username,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Username => Self::RegisterButton,
            Self::Password => Self::Username,
            Self::ConfirmPassword => Self::Password,
            Self::RegisterButton => Self::ConfirmPassword,
        }
    }
}

/// Focus inside the create/edit article modal.
/// The edit form has no author field, so `Author` is skipped there.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleFocus {
    #[default]
    Title,
    Author,
    Content,
    SubmitButton,
    CancelButton,
}

impl ArticleFocus {
    pub fn next(&self, with_author: bool) -> Self {
        match self {
            Self::Title if with_author => Self::Author,
            Self::Title => Self::Content,
            Self::Author => Self::Content,
            Self::Content => Self::SubmitButton,
            Self::SubmitButton => Self::CancelButton,
            Self::CancelButton => Self::Title,
        }
    }

    pub fn previous(&self, with_author: bool) -> Self {
        match self {
            Self::Title => Self::CancelButton,
            Self::Author => Self::Title,
            Self::Content if with_author => Self::Author,
            Self::Content => Self::Title,
            Self::SubmitButton => Self::Content,
            Self::CancelButton => Self::SubmitButton,
        }
    }
}
